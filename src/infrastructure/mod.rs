//! Infrastructure layer module
//!
//! - Configuration loading (figment + serde_yaml)
//! - Logging infrastructure (tracing-subscriber)

pub mod config;
pub mod logging;
