//! Configuration loading infrastructure
//!
//! Loading is layered the figment way:
//! - YAML document parsing (serde_yaml)
//! - Optional `MAAS_*` environment variable overrides
//! - Lenient raw document extraction
//! - Validation into the typed domain model

pub mod document;
pub mod loader;
pub mod validator;

pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX, ROOT_KEY};
