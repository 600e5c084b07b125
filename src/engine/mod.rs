//! Validation engine: configuration, orchestration, and the result type.
//!
//! The engine is synchronous and side-effect-free. It reads the clock once,
//! at completion, to stamp the result; everything else is a pure function of
//! the package and the configuration.

mod config;
mod result;
mod validator;

pub use config::ValidatorConfig;
pub use result::ValidationResult;
pub use validator::{validate, validate_metadata_document, validate_with_defaults};
