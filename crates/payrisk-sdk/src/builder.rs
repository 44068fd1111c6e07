//! Builder pattern for RiskEngine

use crate::config::EngineConfig;
use crate::engine::RiskEngine;
use payrisk_runtime::{EstimatorAdapter, ProbabilityEstimator};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for RiskEngine
///
/// # Example
///
/// ```rust,ignore
/// use payrisk_sdk::{EngineConfig, RiskEngineBuilder};
///
/// // From layered configuration files and environment
/// let engine = RiskEngineBuilder::new()
///     .with_config(EngineConfig::load()?)
///     .build();
///
/// // Explicit model artifact
/// let engine = RiskEngineBuilder::new()
///     .with_model_path("models/fraud_model.json")
///     .enable_metrics(true)
///     .build();
///
/// // Rules only (for testing)
/// let engine = RiskEngineBuilder::new().build();
/// ```
pub struct RiskEngineBuilder {
    config: EngineConfig,
    estimator: Option<Arc<dyn ProbabilityEstimator>>,
}

impl RiskEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            estimator: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the estimator from this artifact at build time
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_path = Some(path.into());
        self
    }

    /// Use an already-loaded estimator; takes precedence over `model_path`
    pub fn with_estimator(mut self, estimator: Arc<dyn ProbabilityEstimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.config.enable_metrics = enable;
        self
    }

    /// Build the engine
    ///
    /// The estimator is resolved exactly once here. A configured artifact
    /// that cannot be loaded leaves the engine in rule-only mode for its
    /// whole lifetime.
    pub fn build(self) -> RiskEngine {
        let estimator = match (self.estimator, &self.config.model_path) {
            (Some(estimator), _) => EstimatorAdapter::new(estimator),
            (None, Some(path)) => EstimatorAdapter::load_or_absent(path),
            (None, None) => {
                tracing::info!("No fraud probability model configured, using rule-only scoring");
                EstimatorAdapter::absent()
            }
        };

        RiskEngine::from_parts(self.config, estimator)
    }
}

impl Default for RiskEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
