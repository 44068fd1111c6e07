//! Scoring metrics
//!
//! Lock-free counters so concurrent scoring calls never contend.

use crate::assessment::RiskAssessment;
use crate::estimator::EstimatorOutcome;
use payrisk_core::RiskTier;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for assessments and failures
#[derive(Debug, Default)]
pub struct RiskMetrics {
    assessments: AtomicU64,
    flagged: AtomicU64,
    tiers: [AtomicU64; 4],
    estimator_absent: AtomicU64,
    estimator_failures: AtomicU64,
    validation_failures: AtomicU64,
    context_failures: AtomicU64,
}

fn tier_index(tier: RiskTier) -> usize {
    match tier {
        RiskTier::Safe => 0,
        RiskTier::Medium => 1,
        RiskTier::High => 2,
        RiskTier::Pattern => 3,
    }
}

impl RiskMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_assessment(&self, assessment: &RiskAssessment) {
        self.assessments.fetch_add(1, Ordering::Relaxed);
        if assessment.is_flagged() {
            self.flagged.fetch_add(1, Ordering::Relaxed);
        }
        self.tiers[tier_index(assessment.tier())].fetch_add(1, Ordering::Relaxed);

        match assessment.estimator() {
            EstimatorOutcome::Absent => {
                self.estimator_absent.fetch_add(1, Ordering::Relaxed);
            }
            EstimatorOutcome::Failed => {
                self.estimator_failures.fetch_add(1, Ordering::Relaxed);
            }
            EstimatorOutcome::Scored(_) => {}
        }
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_context_failure(&self) {
        self.context_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let tiers = RiskTier::ALL
            .iter()
            .map(|tier| (*tier, self.tiers[tier_index(*tier)].load(Ordering::Relaxed)))
            .collect();

        MetricsSnapshot {
            assessments: self.assessments.load(Ordering::Relaxed),
            flagged: self.flagged.load(Ordering::Relaxed),
            tiers,
            estimator_absent: self.estimator_absent.load(Ordering::Relaxed),
            estimator_failures: self.estimator_failures.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            context_failures: self.context_failures.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.assessments,
            &self.flagged,
            &self.estimator_absent,
            &self.estimator_failures,
            &self.validation_failures,
            &self.context_failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        for counter in &self.tiers {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time copy of [`RiskMetrics`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub assessments: u64,
    pub flagged: u64,
    pub tiers: BTreeMap<RiskTier, u64>,
    pub estimator_absent: u64,
    pub estimator_failures: u64,
    pub validation_failures: u64,
    pub context_failures: u64,
}

impl MetricsSnapshot {
    pub fn tier_count(&self, tier: RiskTier) -> u64 {
        self.tiers.get(&tier).copied().unwrap_or(0)
    }
}
