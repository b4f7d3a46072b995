//! Implementation of the `maas-config check` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::MaasConfig;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file to validate
    pub path: PathBuf,

    /// Ignore MAAS_* environment overrides
    #[arg(long)]
    pub no_env: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub path: PathBuf,
    pub role: Option<String>,
    pub bind: Option<String>,
    pub database_engine: Option<String>,
    pub api_url: String,
}

impl CheckOutput {
    pub fn new(path: PathBuf, config: &MaasConfig) -> Self {
        Self {
            valid: true,
            path,
            role: config.cluster.role.map(|role| role.to_string()),
            bind: config.region.bind_address(),
            database_engine: config
                .region
                .database
                .as_ref()
                .and_then(|db| db.engine)
                .map(|engine| engine.to_string()),
            api_url: config.api_url().to_string(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let unset = || "-".to_string();
        [
            format!("{}: configuration is valid", self.path.display()),
            format!("  role:     {}", self.role.clone().unwrap_or_else(unset)),
            format!("  bind:     {}", self.bind.clone().unwrap_or_else(unset)),
            format!("  database: {}", self.database_engine.clone().unwrap_or_else(unset)),
            format!("  api url:  {}", self.api_url),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let config = super::load_config(&args.path, args.no_env)?;
    output(&CheckOutput::new(args.path, &config), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_summarizes_reference() {
        let summary = CheckOutput::new(PathBuf::from("maas.yaml"), &MaasConfig::reference());
        assert_eq!(summary.role.as_deref(), Some("master"));
        assert_eq!(summary.bind.as_deref(), Some("localhost:80"));
        assert_eq!(summary.database_engine.as_deref(), Some("postgresql"));

        let human = summary.to_human();
        assert!(human.starts_with("maas.yaml: configuration is valid"));
        assert!(summary.to_json()["valid"].as_bool().unwrap());
    }
}
