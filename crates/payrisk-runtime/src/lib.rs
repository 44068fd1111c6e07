//! PayRisk Runtime - Scoring pipeline for peer-to-peer transfers
//!
//! This crate turns transaction features plus historical context into a
//! [`RiskAssessment`]: heuristic rules and an optional learned estimator
//! score independently, the scores are fused, tiered and explained.

pub mod assessment;
pub mod error;
pub mod estimator;
pub mod explain;
pub mod history;
pub mod observability;
pub mod rules;
pub mod score;
pub mod scorer;
pub mod tier;

// Re-export main types
pub use assessment::RiskAssessment;
pub use error::{Result, RuntimeError};
pub use estimator::{
    load_estimator, EstimatorAdapter, EstimatorInput, EstimatorOutcome, LogisticModel,
    ModelArtifact, ModelLoadError, ProbabilityEstimator,
};
pub use history::{resolve_history, HistoryProvider, InMemoryHistory, ResolvedHistory};
pub use observability::{MetricsSnapshot, RiskMetrics};
pub use rules::{RuleEngine, RuleHit, RuleId, RuleOutcome};
pub use scorer::RiskScorer;
