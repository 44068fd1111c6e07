//! PayRisk Core - Core types and definitions for the PayRisk scoring engine
//!
//! This crate provides the fundamental types shared across the PayRisk crates:
//! - Transaction features and transfer requests
//! - Historical context resolved for a sender/receiver pair
//! - Risk tiers
//! - Validation errors

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    is_night_hour, validate_identifier, HistoricalContext, NightIndicator, RiskTier,
    TransactionFeatures, TransferRequest,
};
