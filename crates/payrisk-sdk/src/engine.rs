//! Core RiskEngine implementation

use crate::builder::RiskEngineBuilder;
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use chrono::Timelike;
use payrisk_core::{HistoricalContext, NightIndicator, TransactionFeatures, TransferRequest};
use payrisk_runtime::{
    resolve_history, EstimatorAdapter, HistoryProvider, MetricsSnapshot, RiskAssessment,
    RiskMetrics, RiskScorer, RuntimeError,
};
use std::sync::Arc;

/// Transfer risk-scoring engine
///
/// Holds the immutable estimator handle loaded at build time. Scoring calls
/// share nothing mutable apart from metrics counters, so one engine can be
/// shared across tasks behind an `Arc`.
#[derive(Debug)]
pub struct RiskEngine {
    scorer: RiskScorer,

    /// Metrics collector, `None` when disabled
    metrics: Option<Arc<RiskMetrics>>,

    config: EngineConfig,
}

impl RiskEngine {
    /// Create a new engine from configuration
    pub fn new(config: EngineConfig) -> Self {
        RiskEngineBuilder::new().with_config(config).build()
    }

    pub fn builder() -> RiskEngineBuilder {
        RiskEngineBuilder::new()
    }

    pub(crate) fn from_parts(config: EngineConfig, estimator: EstimatorAdapter) -> Self {
        let metrics = config.enable_metrics.then(|| Arc::new(RiskMetrics::new()));

        tracing::info!(
            estimator = estimator.version().unwrap_or("none"),
            metrics = config.enable_metrics,
            "Risk engine initialized"
        );

        Self {
            scorer: RiskScorer::new(estimator),
            metrics,
            config,
        }
    }

    /// Score a transfer whose history the caller already resolved
    pub fn assess_risk(
        &self,
        features: &TransactionFeatures,
        context: &HistoricalContext,
    ) -> Result<RiskAssessment> {
        match self.scorer.score(features, context) {
            Ok(assessment) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_assessment(&assessment);
                }
                Ok(assessment)
            }
            Err(e) => {
                if let (Some(metrics), RuntimeError::Validation(_)) = (&self.metrics, &e) {
                    metrics.record_validation_failure();
                }
                Err(e.into())
            }
        }
    }

    /// Resolve history through `provider`, then score the transfer
    ///
    /// Night-time comes from the request's explicit flag, else its hour, else
    /// the local wall-clock hour. A failed lookup aborts the call with
    /// [`SdkError::DataAccess`]; it is not retried.
    pub async fn precheck(
        &self,
        request: &TransferRequest,
        provider: &dyn HistoryProvider,
    ) -> Result<RiskAssessment> {
        self.precheck_at(request, provider, current_local_hour).await
    }

    /// `now_hour` is only read when the request carries neither flag nor hour
    async fn precheck_at(
        &self,
        request: &TransferRequest,
        provider: &dyn HistoryProvider,
        now_hour: impl FnOnce() -> u8,
    ) -> Result<RiskAssessment> {
        if let Err(e) = request.validate() {
            if let Some(metrics) = &self.metrics {
                metrics.record_validation_failure();
            }
            return Err(SdkError::Validation(e));
        }

        let history = match resolve_history(provider, &request.sender_id, &request.receiver_id).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    sender = %request.sender_id,
                    receiver = %request.receiver_id,
                    error = %e,
                    "Historical context lookup failed"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_context_failure();
                }
                return Err(e.into());
            }
        };

        let night = request
            .night_indicator()
            .unwrap_or_else(|| NightIndicator::Hour(now_hour()));
        let features = request.to_features(night, history.is_new_receiver);

        self.assess_risk(&features, &history.context)
    }

    pub fn has_estimator(&self) -> bool {
        self.scorer.estimator().is_available()
    }

    pub fn estimator_version(&self) -> Option<&str> {
        self.scorer.estimator().version()
    }

    /// Current metrics, `None` when metrics are disabled
    pub fn metrics(&self) -> Option<MetricsSnapshot> {
        self.metrics.as_ref().map(|metrics| metrics.snapshot())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn current_local_hour() -> u8 {
    chrono::Local::now().hour() as u8
}
