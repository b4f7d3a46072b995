//! maas-config - MAAS deployment configuration loader
//!
//! Reads the YAML document that describes a MAAS cluster/region deployment,
//! validates it and hands back an immutable [`MaasConfig`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the typed configuration model and validation errors
//! - **Infrastructure Layer** (`infrastructure`): YAML/figment loading and logging
//! - **CLI Layer** (`cli`): the `maas-config` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use maas_config::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load("/etc/maas/maas.yaml")?;
//!     println!("role: {:?}", config.cluster.role);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::ValidationError;
pub use domain::models::{
    AdminConfig, ApiToken, BindConfig, ClusterConfig, ClusterRegion, ClusterRole, DatabaseConfig,
    DatabaseEngine, EmailAddress, MaasConfig, RegionConfig, Secret,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
