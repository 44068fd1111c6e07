//! Runtime error types

use payrisk_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Input rejected before any rule ran
    #[error("Validation error: {0}")]
    Validation(#[from] CoreError),

    /// Historical context lookup failed
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Estimator failed while scoring a single transfer
    #[error("Inference error: {0}")]
    Inference(String),
}

impl RuntimeError {
    /// Wrap a storage failure from a history provider
    pub fn data_access(err: impl std::fmt::Display) -> Self {
        RuntimeError::DataAccess(err.to_string())
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
