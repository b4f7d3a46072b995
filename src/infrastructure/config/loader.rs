use std::io::{self, Read};
use std::path::{Path, PathBuf};

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::{debug, info};

use super::document::RawMaas;
use super::validator;
use crate::domain::errors::ValidationError;
use crate::domain::models::MaasConfig;

/// Prefix of environment variables layered over the document by
/// [`ConfigLoader::load_with_env`], e.g. `MAAS_REGION__BIND__PORT=8080`.
pub const ENV_PREFIX: &str = "MAAS_";

/// Document key every setting lives under.
pub const ROOT_KEY: &str = "maas";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file {} not found or unreadable: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed configuration document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    /// Short machine-readable name of the error category.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Parse(_) => "parse",
            Self::Validation(_) => "validation",
        }
    }
}

/// Configuration loader
///
/// Pipeline: read → parse YAML → (optionally) merge environment overrides
/// with figment → extract the raw document → validate.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<MaasConfig, ConfigError> {
        let path = path.as_ref();
        let text = Self::read(path)?;
        let config = Self::load_from_str(&text)?;
        info!(path = %path.display(), role = ?config.cluster.role, "loaded maas configuration");
        Ok(config)
    }

    /// Load the file at `path`, then apply `MAAS_*` environment overrides.
    ///
    /// Precedence (lowest to highest):
    /// 1. The document at `path`
    /// 2. Environment variables (`MAAS_` prefix, `__` separates nesting)
    pub fn load_with_env(path: impl AsRef<Path>) -> Result<MaasConfig, ConfigError> {
        let path = path.as_ref();
        let text = Self::read(path)?;
        let figment = Self::with_env_overrides(Self::figment(&text)?);
        let config = Self::extract(&figment)?;
        info!(
            path = %path.display(),
            role = ?config.cluster.role,
            env_prefix = ENV_PREFIX,
            "loaded maas configuration with environment overrides"
        );
        Ok(config)
    }

    /// Load a configuration from an in-memory document.
    pub fn load_from_str(text: &str) -> Result<MaasConfig, ConfigError> {
        Self::extract(&Self::figment(text)?)
    }

    /// Load a configuration from any reader, e.g. stdin.
    pub fn load_from_reader(mut reader: impl Read) -> Result<MaasConfig, ConfigError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| ConfigError::NotFound {
                path: PathBuf::from("<stream>"),
                source,
            })?;
        Self::load_from_str(&text)
    }

    fn read(path: &Path) -> Result<String, ConfigError> {
        debug!(path = %path.display(), "reading maas configuration");
        std::fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse `text` and return a figment holding the contents of `maas`.
    fn figment(text: &str) -> Result<Figment, ConfigError> {
        let root: Value = serde_yaml::from_str(text)?;
        let section = match root {
            Value::Null => Mapping::new(),
            Value::Mapping(mut root) => match root.remove(ROOT_KEY) {
                None | Some(Value::Null) => Mapping::new(),
                Some(Value::Mapping(section)) => section,
                Some(_) => return Err(ValidationError::NotAMapping(ROOT_KEY.to_string()).into()),
            },
            _ => return Err(ValidationError::NotAMapping("document root".to_string()).into()),
        };

        for key in ["cluster", "region"] {
            if let Some(value) = section.get(key) {
                if !value.is_mapping() && !value.is_null() {
                    return Err(ValidationError::NotAMapping(format!("{ROOT_KEY}.{key}")).into());
                }
            }
        }

        Ok(Figment::from(Serialized::defaults(string_keys_only(section))))
    }

    /// Layer `MAAS_*` variables over `figment`.
    ///
    /// Values stay raw strings so they are coerced by the same rules as
    /// document scalars; `007` remains `"007"`.
    fn with_env_overrides(figment: Figment) -> Figment {
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .iter()
            .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
            .filter(|(key, _)| !key.is_empty())
            .fold(figment, |figment, (key, value)| {
                debug!(key = %key, "applying environment override");
                figment.merge(Serialized::default(&key, value))
            })
    }

    fn extract(figment: &Figment) -> Result<MaasConfig, ConfigError> {
        let raw: RawMaas = figment.extract().map_err(field_error)?;
        let config = validator::validate(raw)?;
        debug!(
            bind = ?config.region.bind_address(),
            engine = ?config.region.database.as_ref().and_then(|db| db.engine),
            "validated maas configuration"
        );
        Ok(config)
    }
}

/// Drop entries whose key is not a string; no recognised field has one.
fn string_keys_only(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .filter(|(key, _)| key.is_string())
        .map(|(key, value)| (key, strip_non_string_keys(value)))
        .collect()
}

fn strip_non_string_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(string_keys_only(mapping)),
        Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(strip_non_string_keys).collect())
        }
        other => other,
    }
}

/// Map a figment extraction failure onto the field it concerns.
fn field_error(error: figment::Error) -> ValidationError {
    let field = std::iter::once(ROOT_KEY)
        .chain(error.path.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(".");
    ValidationError::InvalidField {
        field,
        reason: error.kind.to_string(),
    }
}
