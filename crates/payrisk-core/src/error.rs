//! Error types for PayRisk Core

use thiserror::Error;

/// Core error type
///
/// Every variant describes input that was rejected before any scoring ran.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid amount: {0} (must be a positive, finite number)")]
    InvalidAmount(f64),

    #[error("Invalid hour of day: {0} (expected 0-23)")]
    InvalidHour(u8),

    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("Invalid historical context: {0}")]
    InvalidContext(String),

    #[error("Cannot send money to yourself")]
    SelfTransfer,
}

pub type Result<T> = std::result::Result<T, CoreError>;
