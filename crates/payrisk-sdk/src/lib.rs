//! PayRisk SDK
//!
//! High-level API for assessing the fraud risk of peer-to-peer transfers.
//!
//! ```rust,ignore
//! use payrisk_sdk::{RiskEngineBuilder, TransferRequest, InMemoryHistory};
//!
//! let engine = RiskEngineBuilder::new()
//!     .with_model_path("models/fraud_model.json")
//!     .build();
//!
//! let history = InMemoryHistory::new();
//! let request = TransferRequest::new("alice@okbank", "bob@upi", 2500.0).with_night_flag(true);
//! let assessment = engine.precheck(&request, &history).await?;
//! if assessment.is_flagged() {
//!     println!("{}", assessment.message());
//! }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::RiskEngineBuilder;
pub use crate::config::EngineConfig;
pub use engine::RiskEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use payrisk_core::{
    HistoricalContext, NightIndicator, RiskTier, TransactionFeatures, TransferRequest,
};
pub use payrisk_runtime::{
    EstimatorOutcome, HistoryProvider, InMemoryHistory, MetricsSnapshot, ProbabilityEstimator,
    RiskAssessment, RuleHit, RuleId,
};
