//! Validation errors for MAAS configuration documents.

use thiserror::Error;

fn format_sections(sections: &[&str]) -> String {
    sections.join(", ")
}

/// A configuration document parsed but does not describe a usable deployment.
///
/// Every variant names the offending field by its dotted document path,
/// e.g. `maas.region.bind.port`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required section(s): {}", format_sections(.0))]
    MissingSections(Vec<&'static str>),

    #[error("Section {0} must be a mapping")]
    NotAMapping(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid {field}: {value}. Must be between 1 and 65535")]
    PortOutOfRange { field: String, value: i64 },

    #[error("Invalid {field}: {value:?} is not a valid email address")]
    InvalidEmail { field: String, value: String },

    #[error("Invalid {field}: {value:?} is not a valid hostname")]
    InvalidHostname { field: String, value: String },

    #[error("Invalid {field}: {value:?}. Must be one of: {allowed}")]
    UnknownVariant {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("Invalid {field}: {value:?} is not an http(s) URL")]
    InvalidUrl { field: String, value: String },

    #[error("Invalid {field}: expected consumer_key:token_key:token_secret")]
    InvalidToken { field: String },
}

impl ValidationError {
    /// Dotted path of the field or section this error is about.
    pub fn field(&self) -> String {
        match self {
            Self::MissingSections(sections) => format_sections(sections),
            Self::NotAMapping(field) => field.clone(),
            Self::InvalidField { field, .. }
            | Self::PortOutOfRange { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidHostname { field, .. }
            | Self::UnknownVariant { field, .. }
            | Self::EmptyField { field }
            | Self::InvalidUrl { field, .. }
            | Self::InvalidToken { field } => field.clone(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
