//! Domain layer: the validated configuration model and its errors.

pub mod errors;
pub mod models;

pub use errors::{ValidationError, ValidationResult};
pub use models::*;
