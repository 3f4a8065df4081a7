//! Error types and result alias for the crate.
//!
//! Expected, recoverable placement failures (out of bounds, overlap,
//! unknown placement id) are reported through `bool`/`Option` returns and
//! never through this type. [`enum@Error`] covers contract violations such
//! as catalog misses and invalid configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unknown item '{name}'")]
    UnknownItem { name: String },

    #[error("unknown optimization mode '{name}'")]
    UnknownMode { name: String },

    #[error("invalid footprint {width}x{height}: both dimensions must be >= 1")]
    InvalidFootprint { width: usize, height: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grid invariant violated: {0}")]
    InvariantViolation(String),
}
