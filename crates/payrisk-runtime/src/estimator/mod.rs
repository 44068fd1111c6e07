//! Probability estimator support
//!
//! A pre-trained binary classifier maps `[amount, night]` to a fraud
//! probability. The engine only loads and queries it; training happens
//! elsewhere.
//!
//! - `logistic`: logistic-regression estimator
//! - `loader`: versioned artifact loading
//! - `adapter`: optional-estimator wrapper used by the scorer

mod adapter;
mod loader;
mod logistic;

pub use adapter::{EstimatorAdapter, EstimatorOutcome};
pub use loader::{load_estimator, ModelArtifact, ModelLoadError};
pub use logistic::LogisticModel;

use crate::error::Result;

/// Number of features an estimator receives
pub const FEATURE_COUNT: usize = 2;

/// Estimator input vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorInput {
    pub amount: f64,
    pub night: bool,
}

impl EstimatorInput {
    pub fn new(amount: f64, night: bool) -> Self {
        Self { amount, night }
    }

    /// Feature vector in training order: amount, night as 0/1
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [self.amount, if self.night { 1.0 } else { 0.0 }]
    }
}

/// A loaded, immutable fraud classifier
pub trait ProbabilityEstimator: Send + Sync {
    /// Artifact version, for logs
    fn version(&self) -> &str;

    /// Probability that the transfer is fraudulent, in [0, 1]
    fn predict_proba(&self, input: &EstimatorInput) -> Result<f64>;
}
