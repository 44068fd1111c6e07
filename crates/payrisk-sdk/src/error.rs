//! SDK error types

use payrisk_core::CoreError;
use payrisk_runtime::RuntimeError;
use thiserror::Error;

/// SDK error type
///
/// Validation and data-access failures get their own variants so callers can
/// tell a bad request from an unavailable history store.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input rejected before scoring
    #[error("Validation error: {0}")]
    Validation(CoreError),

    /// Historical context lookup failed
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(RuntimeError),
}

impl From<RuntimeError> for SdkError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Validation(e) => SdkError::Validation(e),
            RuntimeError::DataAccess(msg) => SdkError::DataAccess(msg),
            other => SdkError::RuntimeError(other),
        }
    }
}

impl SdkError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Validation(_))
    }

    pub fn is_data_access(&self) -> bool {
        matches!(self, SdkError::DataAccess(_))
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
