//! Domain types for transaction risk scoring

pub mod context;
pub mod identifier;
pub mod tier;
pub mod transaction;

pub use context::HistoricalContext;
pub use identifier::validate_identifier;
pub use tier::RiskTier;
pub use transaction::{is_night_hour, NightIndicator, TransactionFeatures, TransferRequest};
