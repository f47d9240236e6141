//! Error types for validation operations.

use std::fmt;

use thiserror::Error;

/// One of the three triad sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    A,
    B,
    C,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::A => write!(f, "A"),
            Sequence::B => write!(f, "B"),
            Sequence::C => write!(f, "C"),
        }
    }
}

/// Errors that can occur while checking the contents of the triad sequences.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Validation failed for {sequence}[{index}]: expected {expected}, got {actual}")]
    Mismatch {
        sequence: Sequence,
        index: usize,
        expected: f64,
        actual: f64,
    },
}
