//! CLI command implementations.

pub mod check;
pub mod init;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::models::MaasConfig;
use crate::infrastructure::config::ConfigLoader;

/// Load `path`, with or without `MAAS_*` environment overrides.
pub(crate) fn load_config(path: &Path, no_env: bool) -> Result<MaasConfig> {
    let result = if no_env {
        ConfigLoader::load(path)
    } else {
        ConfigLoader::load_with_env(path)
    };
    result.with_context(|| format!("Failed to load configuration from {}", path.display()))
}
