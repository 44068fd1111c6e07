//! Historical context for a sender/receiver pair

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Read-only history resolved before a transfer is scored
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricalContext {
    /// Sender's mean transfer amount to date (0 when the sender has no history)
    pub mean_amount: f64,

    /// Community fraud reports filed against the receiver
    pub report_count: u32,
}

impl HistoricalContext {
    pub fn new(mean_amount: f64, report_count: u32) -> Self {
        Self {
            mean_amount,
            report_count,
        }
    }

    /// Whether the sender has any transfer history to compare against
    pub fn has_history(&self) -> bool {
        self.mean_amount > 0.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mean_amount.is_finite() || self.mean_amount < 0.0 {
            return Err(CoreError::InvalidContext(format!(
                "mean amount must be a non-negative finite number, got {}",
                self.mean_amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_has_no_history() {
        let context = HistoricalContext::default();
        assert_eq!(context.mean_amount, 0.0);
        assert_eq!(context.report_count, 0);
        assert!(!context.has_history());
        assert!(context.validate().is_ok());
    }

    #[test]
    fn test_invalid_mean_amount() {
        assert!(HistoricalContext::new(-1.0, 0).validate().is_err());
        assert!(HistoricalContext::new(f64::NAN, 0).validate().is_err());
        assert!(HistoricalContext::new(120.5, 3).validate().is_ok());
    }
}
