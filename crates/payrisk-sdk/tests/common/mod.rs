//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use payrisk_runtime::{EstimatorInput, HistoryProvider, ProbabilityEstimator, RuntimeError};
use payrisk_sdk::{HistoricalContext, InMemoryHistory, NightIndicator, TransactionFeatures};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SENDER: &str = "alice@okbank";
pub const RECEIVER: &str = "bob@upi";

/// Features for a transfer to [`RECEIVER`] with an explicit night flag
pub fn features(amount: f64, night: bool, is_new_receiver: bool) -> TransactionFeatures {
    TransactionFeatures::new(amount, NightIndicator::Flag(night), RECEIVER, is_new_receiver)
}

pub fn context(mean_amount: f64, report_count: u32) -> HistoricalContext {
    HistoricalContext::new(mean_amount, report_count)
}

/// History where [`SENDER`] has paid [`RECEIVER`] once for `amount`
pub async fn history_with_prior_transfer(amount: f64) -> InMemoryHistory {
    let history = InMemoryHistory::new();
    history.record_transfer(SENDER, RECEIVER, amount).await;
    history
}

/// Estimator that always returns the same probability
pub struct FixedEstimator(pub f64);

impl ProbabilityEstimator for FixedEstimator {
    fn version(&self) -> &str {
        "fixed"
    }

    fn predict_proba(&self, _input: &EstimatorInput) -> payrisk_runtime::Result<f64> {
        Ok(self.0)
    }
}

/// Estimator that fails every inference call
pub struct FailingEstimator;

impl ProbabilityEstimator for FailingEstimator {
    fn version(&self) -> &str {
        "failing"
    }

    fn predict_proba(&self, _input: &EstimatorInput) -> payrisk_runtime::Result<f64> {
        Err(RuntimeError::Inference("model session poisoned".to_string()))
    }
}

/// History provider whose report lookup always fails and counts attempts
#[derive(Default)]
pub struct FailingHistory {
    pub report_lookups: AtomicUsize,
}

impl FailingHistory {
    pub fn attempts(&self) -> usize {
        self.report_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryProvider for FailingHistory {
    async fn has_prior_transfer(&self, _sender_id: &str, _receiver_id: &str) -> payrisk_runtime::Result<bool> {
        Ok(true)
    }

    async fn mean_amount(&self, _sender_id: &str) -> payrisk_runtime::Result<f64> {
        Ok(100.0)
    }

    async fn report_count(&self, _receiver_id: &str) -> payrisk_runtime::Result<u32> {
        self.report_lookups.fetch_add(1, Ordering::SeqCst);
        Err(RuntimeError::data_access("fraud_reports query timed out"))
    }
}
