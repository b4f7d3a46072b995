//! Implementation of the `maas-config show` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::MaasConfig;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to display
    pub path: PathBuf,

    /// Ignore MAAS_* environment overrides
    #[arg(long)]
    pub no_env: bool,

    /// Print passwords and the API token secret in clear text
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    maas: MaasConfig,
    #[serde(skip)]
    yaml: String,
}

impl ShowOutput {
    pub fn new(config: &MaasConfig, reveal: bool) -> Result<Self> {
        let maas = if reveal { config.clone() } else { config.redacted() };
        let yaml = maas.to_yaml().context("Failed to render configuration")?;
        Ok(Self { maas, yaml })
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        self.yaml.trim_end().to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        self.maas.to_json()
    }
}

pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let config = super::load_config(&args.path, args.no_env)?;
    output(&ShowOutput::new(&config, args.reveal)?, json_mode);
    Ok(())
}
