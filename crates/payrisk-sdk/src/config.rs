//! Configuration types for RiskEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file base name, resolved relative to the working directory
const DEFAULT_CONFIG_FILE: &str = "config/payrisk";

/// Prefix for environment overrides, e.g. `PAYRISK_MODEL_PATH`
const ENV_PREFIX: &str = "PAYRISK";

fn default_enable_metrics() -> bool {
    true
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Location of the pre-trained estimator artifact (JSON or YAML)
    ///
    /// When unset, or when the artifact cannot be loaded, the engine scores
    /// with rules only.
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Enable metrics collection
    #[serde(default = "default_enable_metrics")]
    pub enable_metrics: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            model_path: None,
            enable_metrics: default_enable_metrics(),
        }
    }

    /// Set estimator artifact path
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Load configuration from `.env`, `config/payrisk.*` and `PAYRISK_*`
    /// environment variables, falling back to defaults
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_layered(
            config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, with environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SdkError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load_layered(config::File::from(path), environment())
    }

    /// Environment values override the file layer
    fn load_layered<S>(file: S, env: config::Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(|e| SdkError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e)))?;

        tracing::debug!(?config, "Loaded engine configuration");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("Invalid YAML config: {}", e)))
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .with_model_path("models/fraud_model.json")
            .enable_metrics(false);

        assert_eq!(config.model_path, Some(PathBuf::from("models/fraud_model.json")));
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.model_path.is_none());
        assert!(config.enable_metrics);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = EngineConfig::from_yaml_str("model_path: /srv/models/fraud.yaml\n").unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("/srv/models/fraud.yaml")));
        assert!(config.enable_metrics);

        let config = EngineConfig::from_yaml_str("enable_metrics: false\n").unwrap();
        assert!(config.model_path.is_none());
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let err = EngineConfig::from_yaml_str("enable_metrics: [not, a, bool]").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "model_path: models/fraud_model.json").unwrap();
        writeln!(file, "enable_metrics: false").unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("models/fraud_model.json")));
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "model_path: a.json").unwrap();
        writeln!(file, "enable_metrics: true").unwrap();

        let mut vars = config::Map::new();
        vars.insert("PAYRISK_MODEL_PATH".to_string(), "/srv/b.json".to_string());
        vars.insert("PAYRISK_ENABLE_METRICS".to_string(), "false".to_string());
        let env = environment().source(Some(vars));

        let config = EngineConfig::load_layered(config::File::from(file.path()), env).unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("/srv/b.json")));
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_env_ignores_other_prefixes() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "model_path: a.json").unwrap();

        let mut vars = config::Map::new();
        vars.insert("OTHER_MODEL_PATH".to_string(), "/srv/b.json".to_string());
        let env = environment().source(Some(vars));

        let config = EngineConfig::load_layered(config::File::from(file.path()), env).unwrap();
        assert_eq!(config.model_path, Some(PathBuf::from("a.json")));
        assert!(config.enable_metrics);
    }

    #[test]
    fn test_load_without_config_file() {
        // no config/payrisk.* next to the crate manifest, so only defaults and env apply
        assert!(EngineConfig::load().is_ok());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = EngineConfig::load_from("/nonexistent/payrisk.yaml").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }
}
