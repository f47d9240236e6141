//! Error types for the triad load generator.
//!
//! This module contains specific error types used throughout the library,
//! avoiding generic error wrappers like `anyhow` or `Box<dyn Error>` for better
//! error handling and debugging.

mod triad_error;
mod validation_error;

pub use triad_error::TriadError;
pub use validation_error::{Sequence, ValidationError};

/// Result type alias for operations that may fail with triad errors.
pub type TriadResult<T> = std::result::Result<T, TriadError>;

/// Result type alias for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
