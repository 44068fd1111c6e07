//! Logistic-regression estimator

use super::{EstimatorInput, ProbabilityEstimator, FEATURE_COUNT};
use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};

/// Binary logistic regression over the estimator feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub version: String,
    pub intercept: f64,

    /// One weight per feature, in `EstimatorInput::to_vector` order
    pub coefficients: Vec<f64>,
}

impl LogisticModel {
    pub fn new(version: impl Into<String>, intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            version: version.into(),
            intercept,
            coefficients,
        }
    }

    /// Check the artifact is usable with this engine's feature vector
    pub fn check_compatible(&self) -> std::result::Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err("weights must be finite".to_string());
        }
        Ok(())
    }
}

impl ProbabilityEstimator for LogisticModel {
    fn version(&self) -> &str {
        &self.version
    }

    fn predict_proba(&self, input: &EstimatorInput) -> Result<f64> {
        let features = input.to_vector();
        if self.coefficients.len() != features.len() {
            return Err(RuntimeError::Inference(format!(
                "model {} expects {} features, got {}",
                self.version,
                self.coefficients.len(),
                features.len()
            )));
        }

        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>();

        Ok(1.0 / (1.0 + (-z).exp()))
    }
}
