//! In-memory history provider
//!
//! Keeps transfers and reports in process memory. Suitable for tests, demos
//! and embedding callers that already hold the data; nothing is persisted.

use super::HistoryProvider;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct SenderHistory {
    /// receiver_id -> number of completed transfers
    receivers: HashMap<String, u32>,
    total_amount: f64,
    transfer_count: u32,
}

/// In-memory [`HistoryProvider`]
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    senders: RwLock<HashMap<String, SenderHistory>>,
    reports: RwLock<HashMap<String, u32>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed transfer
    pub async fn record_transfer(&self, sender_id: &str, receiver_id: &str, amount: f64) {
        let mut senders = self.senders.write().await;
        let history = senders.entry(sender_id.to_string()).or_default();

        *history.receivers.entry(receiver_id.to_string()).or_insert(0) += 1;
        history.total_amount += amount;
        history.transfer_count += 1;
    }

    /// File one community report against a receiver
    pub async fn add_report(&self, receiver_id: &str) {
        let mut reports = self.reports.write().await;
        *reports.entry(receiver_id.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl HistoryProvider for InMemoryHistory {
    async fn has_prior_transfer(&self, sender_id: &str, receiver_id: &str) -> Result<bool> {
        let senders = self.senders.read().await;
        Ok(senders
            .get(sender_id)
            .map(|history| history.receivers.contains_key(receiver_id))
            .unwrap_or(false))
    }

    async fn mean_amount(&self, sender_id: &str) -> Result<f64> {
        let senders = self.senders.read().await;
        Ok(match senders.get(sender_id) {
            Some(history) if history.transfer_count > 0 => {
                history.total_amount / history.transfer_count as f64
            }
            _ => 0.0,
        })
    }

    async fn report_count(&self, receiver_id: &str) -> Result<u32> {
        let reports = self.reports.read().await;
        Ok(reports.get(receiver_id).copied().unwrap_or(0))
    }
}
