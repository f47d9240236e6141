//! Error types for configuration, kernel dispatch and process setup.

use thiserror::Error;

use super::ValidationError;
use crate::kernel::TriadKernel;

/// Errors that can occur while configuring or running the triad load generator.
#[derive(Error, Debug)]
pub enum TriadError {
    #[error("Sequence length mismatch: A has {a} elements, B has {b}, C has {c}")]
    LengthMismatch { a: usize, b: usize, c: usize },

    #[error("Kernel {kernel} is not supported on this target")]
    UnsupportedKernel { kernel: TriadKernel },

    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration validation error for field '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to install handler for signal {signal}: {source}")]
    SignalHandler {
        signal: i32,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to pin process to CPU {cpu}: {source}")]
    Affinity {
        cpu: usize,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
