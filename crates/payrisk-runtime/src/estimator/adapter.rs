//! Optional-estimator adapter

use super::{load_estimator, EstimatorInput, ProbabilityEstimator};
use crate::error::RuntimeError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// What the estimator contributed to one assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorOutcome {
    /// No model loaded for this process
    Absent,

    /// `floor(probability * 100)`
    Scored(u32),

    /// Model present but inference failed; contributes 0
    Failed,
}

impl EstimatorOutcome {
    /// Score to feed the combiner, `None` when no model is loaded
    pub fn contribution(&self) -> Option<u32> {
        match self {
            EstimatorOutcome::Absent => None,
            EstimatorOutcome::Scored(score) => Some(*score),
            EstimatorOutcome::Failed => Some(0),
        }
    }
}

/// Wraps the process-wide estimator, if one was loaded at startup
///
/// Cloning shares the same immutable model.
#[derive(Clone, Default)]
pub struct EstimatorAdapter {
    model: Option<Arc<dyn ProbabilityEstimator>>,
}

impl EstimatorAdapter {
    /// Rule-only scoring
    pub fn absent() -> Self {
        Self { model: None }
    }

    pub fn new(model: Arc<dyn ProbabilityEstimator>) -> Self {
        Self { model: Some(model) }
    }

    /// Load the artifact at `path`, or run without an estimator
    ///
    /// A missing or unusable artifact is logged here once and never retried.
    pub fn load_or_absent(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_estimator(path) {
            Ok(model) => Self::new(model),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Fraud probability model unavailable, falling back to rule-only scoring"
                );
                Self::absent()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn version(&self) -> Option<&str> {
        self.model.as_deref().map(|model| model.version())
    }

    /// Score one transfer; failures are logged, not propagated
    pub fn score(&self, input: &EstimatorInput) -> EstimatorOutcome {
        let Some(model) = &self.model else {
            return EstimatorOutcome::Absent;
        };

        match model
            .predict_proba(input)
            .and_then(probability_to_score)
        {
            Ok(score) => EstimatorOutcome::Scored(score),
            Err(e) => {
                tracing::warn!(
                    version = %model.version(),
                    error = %e,
                    "Fraud probability inference failed, using 0"
                );
                EstimatorOutcome::Failed
            }
        }
    }
}

impl fmt::Debug for EstimatorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimatorAdapter")
            .field("version", &self.version())
            .finish()
    }
}

fn probability_to_score(probability: f64) -> crate::error::Result<u32> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(RuntimeError::Inference(format!(
            "probability out of range: {}",
            probability
        )));
    }
    Ok((probability * 100.0).floor() as u32)
}
