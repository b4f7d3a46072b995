//! Command-line interface for `maas-config`.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::config::ConfigError;

/// Process exit status for a failed command.
///
/// Loader failures get a status per category so scripts can tell a missing
/// file from a broken one; anything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::NotFound { .. }) => 2,
        Some(ConfigError::Parse(_)) => 3,
        Some(ConfigError::Validation(_)) => 4,
        None => 1,
    }
}

/// Report `err` on stderr and terminate the process.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = %err, "command failed");

    if json_mode {
        let kind = err
            .downcast_ref::<ConfigError>()
            .map_or("other", ConfigError::kind);
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "kind": kind,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }

    std::process::exit(exit_code(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use anyhow::Context;

    #[test]
    fn test_exit_codes_follow_error_category() {
        let validation: anyhow::Result<()> =
            Err(ConfigError::Validation(ValidationError::MissingSections(vec!["maas.region"])))
                .context("Failed to load configuration from maas.yaml");
        assert_eq!(exit_code(&validation.unwrap_err()), 4);

        let not_found = ConfigError::NotFound {
            path: "maas.yaml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(exit_code(&anyhow::Error::new(not_found)), 2);

        assert_eq!(exit_code(&anyhow::anyhow!("something else")), 1);
    }
}
