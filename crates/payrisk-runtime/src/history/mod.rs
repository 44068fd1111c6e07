//! Historical context lookups
//!
//! A [`HistoryProvider`] answers read-only questions about past transfers and
//! community reports. Lookup failures are returned as
//! [`RuntimeError::DataAccess`] and abort the scoring call; nothing here
//! retries.

mod memory;

pub use memory::InMemoryHistory;

use crate::error::{Result, RuntimeError};
use async_trait::async_trait;
use payrisk_core::HistoricalContext;

/// Read-only access to transfer history and fraud reports
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Has the sender ever completed a transfer to this receiver
    async fn has_prior_transfer(&self, sender_id: &str, receiver_id: &str) -> Result<bool>;

    /// Sender's mean transfer amount, 0 if the sender has no history
    async fn mean_amount(&self, sender_id: &str) -> Result<f64>;

    /// Number of community reports filed against the receiver
    async fn report_count(&self, receiver_id: &str) -> Result<u32>;
}

/// History resolved for one sender/receiver pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHistory {
    pub is_new_receiver: bool,
    pub context: HistoricalContext,
}

/// Run the three lookups concurrently and assemble the context
pub async fn resolve_history(
    provider: &dyn HistoryProvider,
    sender_id: &str,
    receiver_id: &str,
) -> Result<ResolvedHistory> {
    let (has_prior, mean_amount, report_count) = tokio::try_join!(
        provider.has_prior_transfer(sender_id, receiver_id),
        provider.mean_amount(sender_id),
        provider.report_count(receiver_id),
    )?;

    if !mean_amount.is_finite() || mean_amount < 0.0 {
        return Err(RuntimeError::DataAccess(format!(
            "history provider returned invalid mean amount {} for sender {}",
            mean_amount, sender_id
        )));
    }

    Ok(ResolvedHistory {
        is_new_receiver: !has_prior,
        context: HistoricalContext::new(mean_amount, report_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    #[async_trait]
    impl HistoryProvider for Unreachable {
        async fn has_prior_transfer(&self, _sender_id: &str, _receiver_id: &str) -> Result<bool> {
            Ok(true)
        }

        async fn mean_amount(&self, _sender_id: &str) -> Result<f64> {
            Err(RuntimeError::data_access("transactions table unavailable"))
        }

        async fn report_count(&self, _receiver_id: &str) -> Result<u32> {
            Ok(0)
        }
    }

    struct NegativeMean;

    #[async_trait]
    impl HistoryProvider for NegativeMean {
        async fn has_prior_transfer(&self, _sender_id: &str, _receiver_id: &str) -> Result<bool> {
            Ok(false)
        }

        async fn mean_amount(&self, _sender_id: &str) -> Result<f64> {
            Ok(-12.0)
        }

        async fn report_count(&self, _receiver_id: &str) -> Result<u32> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let err = resolve_history(&Unreachable, "alice@upi", "bob@upi").await.unwrap_err();
        assert!(matches!(err, RuntimeError::DataAccess(msg) if msg.contains("unavailable")));
    }

    #[tokio::test]
    async fn test_invalid_provider_data_is_data_access() {
        let err = resolve_history(&NegativeMean, "alice@upi", "bob@upi").await.unwrap_err();
        assert!(matches!(err, RuntimeError::DataAccess(_)));
    }

    #[tokio::test]
    async fn test_resolve_from_memory() {
        let history = InMemoryHistory::new();
        history.record_transfer("alice@upi", "bob@upi", 100.0).await;
        history.record_transfer("alice@upi", "carol@upi", 300.0).await;
        history.add_report("mallory@upi").await;

        let known = resolve_history(&history, "alice@upi", "bob@upi").await.unwrap();
        assert!(!known.is_new_receiver);
        assert_eq!(known.context, HistoricalContext::new(200.0, 0));

        let fresh = resolve_history(&history, "alice@upi", "mallory@upi").await.unwrap();
        assert!(fresh.is_new_receiver);
        assert_eq!(fresh.context.report_count, 1);
    }
}
