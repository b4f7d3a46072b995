//! Implementation of the `maas-config init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::MaasConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite the file if it already exists
    #[arg(long, short)]
    pub force: bool,

    /// File to write
    #[arg(default_value = "maas.yaml")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let output_data = write_reference(&args)?;
    output(&output_data, json_mode);
    Ok(())
}

fn write_reference(args: &InitArgs) -> Result<InitOutput> {
    if args.path.exists() && !args.force {
        return Ok(InitOutput {
            success: false,
            message: format!(
                "{} already exists. Use --force to overwrite.",
                args.path.display()
            ),
            path: args.path.clone(),
        });
    }

    let document = MaasConfig::reference()
        .to_yaml()
        .context("Failed to render reference configuration")?;
    std::fs::write(&args.path, document)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;
    tracing::info!(path = %args.path.display(), "wrote reference configuration");

    Ok(InitOutput {
        success: true,
        message: format!("Wrote reference configuration to {}", args.path.display()),
        path: args.path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;

    #[test]
    fn test_init_writes_loadable_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maas.yaml");

        let result = write_reference(&InitArgs { force: false, path: path.clone() }).unwrap();
        assert!(result.success);
        assert_eq!(ConfigLoader::load(&path).unwrap(), MaasConfig::reference());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maas.yaml");
        std::fs::write(&path, "keep: me\n").unwrap();

        let result = write_reference(&InitArgs { force: false, path: path.clone() }).unwrap();
        assert!(!result.success);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep: me\n");

        let result = write_reference(&InitArgs { force: true, path: path.clone() }).unwrap();
        assert!(result.success);
        assert!(ConfigLoader::load(&path).is_ok());
    }
}
