//! Policy configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading a [`LockPolicy`](super::LockPolicy).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyError {
    /// Speed threshold is NaN or infinite
    #[error("Speed threshold must be finite, got {0}")]
    NonFiniteThreshold(f32),

    /// Policy document could not be parsed
    #[error("Failed to parse lock policy: {0}")]
    Parse(String),
}
