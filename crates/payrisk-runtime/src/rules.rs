//! Heuristic rule engine
//!
//! Five independent rules each add points and at most one reason. Rules are
//! never short-circuited; the total is the sum of every triggered rule and
//! may exceed 100 (the combiner clamps it).

use payrisk_core::{HistoricalContext, TransactionFeatures};
use serde::Serialize;

/// One point per this many units of amount
const AMOUNT_POINT_UNIT: f64 = 100.0;
const AMOUNT_POINTS_CAP: u32 = 75;
const HIGH_AMOUNT_POINTS: u32 = 50;

const NIGHT_POINTS: u32 = 20;

const HEAVILY_REPORTED_THRESHOLD: u32 = 5;
const HEAVILY_REPORTED_POINTS: u32 = 35;
const REPORTED_POINTS: u32 = 15;

const NEW_RECEIVER_POINTS: u32 = 15;

const DEVIATION_RATIO: f64 = 3.0;
const DEVIATION_POINTS: u32 = 20;

/// Identifies the rule that produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    AmountScaling,
    NightTime,
    ReportedReceiver,
    NewReceiver,
    AmountDeviation,
}

/// Contribution of a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: RuleId,
    pub points: u32,

    /// Human-readable reason; amount scaling below the high-amount mark adds
    /// points silently
    pub reason: Option<String>,
}

impl RuleHit {
    fn new(rule: RuleId, points: u32, reason: impl Into<String>) -> Self {
        Self {
            rule,
            points,
            reason: Some(reason.into()),
        }
    }

    fn silent(rule: RuleId, points: u32) -> Self {
        Self {
            rule,
            points,
            reason: None,
        }
    }
}

/// Result of evaluating every rule against one transfer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Unclamped sum of rule points
    pub points: u32,

    /// Hits in rule evaluation order
    pub hits: Vec<RuleHit>,
}

impl RuleOutcome {
    fn push(&mut self, hit: RuleHit) {
        self.points += hit.points;
        self.hits.push(hit);
    }

    /// Reasons in rule evaluation order
    pub fn reasons(&self) -> Vec<String> {
        self.hits.iter().filter_map(|hit| hit.reason.clone()).collect()
    }

    pub fn triggered(&self, rule: RuleId) -> bool {
        self.hits.iter().any(|hit| hit.rule == rule)
    }
}

/// Deterministic rule evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all rules. Inputs are expected to be validated already.
    pub fn evaluate(
        &self,
        features: &TransactionFeatures,
        context: &HistoricalContext,
    ) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();

        let amount_points = amount_points(features.amount);
        if amount_points >= HIGH_AMOUNT_POINTS {
            outcome.push(RuleHit::new(
                RuleId::AmountScaling,
                amount_points,
                "High transaction amount",
            ));
        } else if amount_points > 0 {
            outcome.push(RuleHit::silent(RuleId::AmountScaling, amount_points));
        }

        if features.is_night() {
            outcome.push(RuleHit::new(
                RuleId::NightTime,
                NIGHT_POINTS,
                "Late-night transaction",
            ));
        }

        match context.report_count {
            0 => {}
            n if n >= HEAVILY_REPORTED_THRESHOLD => outcome.push(RuleHit::new(
                RuleId::ReportedReceiver,
                HEAVILY_REPORTED_POINTS,
                "Reported UPI ID",
            )),
            n => outcome.push(RuleHit::new(
                RuleId::ReportedReceiver,
                REPORTED_POINTS,
                format!("UPI ID has {} report(s)", n),
            )),
        }

        if features.is_new_receiver {
            outcome.push(RuleHit::new(
                RuleId::NewReceiver,
                NEW_RECEIVER_POINTS,
                "New receiver",
            ));
        }

        // First-time senders have no average to deviate from
        if context.has_history() && features.amount / context.mean_amount > DEVIATION_RATIO {
            outcome.push(RuleHit::new(
                RuleId::AmountDeviation,
                DEVIATION_POINTS,
                "Unusual amount compared to your average spending",
            ));
        }

        outcome
    }
}

/// `min(floor(amount / 100), 75)`
fn amount_points(amount: f64) -> u32 {
    let points = (amount / AMOUNT_POINT_UNIT).floor();
    if points >= AMOUNT_POINTS_CAP as f64 {
        AMOUNT_POINTS_CAP
    } else if points > 0.0 {
        points as u32
    } else {
        0
    }
}
