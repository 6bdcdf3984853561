//! Store error types

use kennel_core::ColorError;
use thiserror::Error;

/// Errors raised by catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvariantViolation(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
