//! Estimator artifact loading
//!
//! Artifacts are JSON or YAML documents tagged with a `kind`:
//!
//! ```json
//! {
//!   "kind": "logistic_regression",
//!   "version": "2024-06-01",
//!   "intercept": -3.1,
//!   "coefficients": [0.00041, 1.27]
//! }
//! ```

use super::{LogisticModel, ProbabilityEstimator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

const SUPPORTED_KINDS: &[&str] = &["logistic_regression"];

/// Why an estimator artifact could not be loaded
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("model artifact not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt model artifact: {0}")]
    Corrupt(String),

    #[error("incompatible model artifact: {0}")]
    Incompatible(String),
}

/// A deserialized estimator artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticModel),
}

impl ModelArtifact {
    pub fn from_json_str(content: &str) -> Result<Self, ModelLoadError> {
        let document: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ModelLoadError::Corrupt(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ModelLoadError> {
        let document: serde_json::Value =
            serde_yaml::from_str(content).map_err(|e| ModelLoadError::Corrupt(e.to_string()))?;
        Self::from_document(document)
    }

    fn from_document(document: serde_json::Value) -> Result<Self, ModelLoadError> {
        match document.get("kind").and_then(|kind| kind.as_str()) {
            Some(kind) if SUPPORTED_KINDS.contains(&kind) => {}
            Some(kind) => {
                return Err(ModelLoadError::Incompatible(format!(
                    "unsupported model kind '{}'",
                    kind
                )))
            }
            None => {
                return Err(ModelLoadError::Incompatible(
                    "missing 'kind' field".to_string(),
                ))
            }
        }

        let artifact: ModelArtifact = serde_json::from_value(document)
            .map_err(|e| ModelLoadError::Corrupt(e.to_string()))?;
        artifact.check_compatible()?;
        Ok(artifact)
    }

    fn check_compatible(&self) -> Result<(), ModelLoadError> {
        match self {
            ModelArtifact::LogisticRegression(model) => model
                .check_compatible()
                .map_err(ModelLoadError::Incompatible),
        }
    }

    pub fn version(&self) -> &str {
        match self {
            ModelArtifact::LogisticRegression(model) => &model.version,
        }
    }

    pub fn into_estimator(self) -> Arc<dyn ProbabilityEstimator> {
        match self {
            ModelArtifact::LogisticRegression(model) => Arc::new(model),
        }
    }
}

/// Load an estimator artifact from disk
///
/// The format is chosen by extension: `.json`, `.yaml` or `.yml`.
pub fn load_estimator(path: impl AsRef<Path>) -> Result<Arc<dyn ProbabilityEstimator>, ModelLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let artifact = match extension.as_deref() {
        Some("json") => ModelArtifact::from_json_str(&content)?,
        Some("yaml") | Some("yml") => ModelArtifact::from_yaml_str(&content)?,
        other => {
            return Err(ModelLoadError::Incompatible(format!(
                "unsupported artifact extension: {}",
                other.unwrap_or("<none>")
            )))
        }
    };

    tracing::info!(
        path = %path.display(),
        version = %artifact.version(),
        "Loaded fraud probability model"
    );

    Ok(artifact.into_estimator())
}
