//! Domain models for MAAS deployment configuration.

pub mod config;
pub mod values;

pub use config::{
    AdminConfig, BindConfig, ClusterConfig, ClusterRegion, ClusterRole, DatabaseConfig,
    DatabaseEngine, MaasConfig, RegionConfig, DEFAULT_API_URL,
};
pub use values::{ApiToken, EmailAddress, Secret, REDACTED};
