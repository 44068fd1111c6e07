//! Risk assessment result

use crate::estimator::EstimatorOutcome;
use crate::explain::advisory_message;
use crate::rules::{RuleHit, RuleOutcome};
use crate::score::combine;
use crate::tier::{classify, is_flagged};
use payrisk_core::RiskTier;
use serde::Serialize;

/// Outcome of scoring one transfer
///
/// Tier, flagged and message are derived from the score when the assessment
/// is built and cannot be set separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    #[serde(rename = "risk_score")]
    score: u8,

    #[serde(rename = "risk_level")]
    tier: RiskTier,

    #[serde(rename = "is_flagged")]
    flagged: bool,

    reasons: Vec<String>,

    #[serde(rename = "warning_message")]
    message: String,

    #[serde(skip)]
    night: bool,

    #[serde(skip)]
    rule_points: u32,

    #[serde(skip)]
    hits: Vec<RuleHit>,

    #[serde(skip)]
    estimator: EstimatorOutcome,
}

impl RiskAssessment {
    pub(crate) fn from_scores(rules: RuleOutcome, estimator: EstimatorOutcome, night: bool) -> Self {
        let score = combine(rules.points, estimator.contribution());
        let tier = classify(score, night);
        let flagged = is_flagged(score);
        let reasons = rules.reasons();
        let message = advisory_message(score, tier, flagged, &reasons);

        Self {
            score,
            tier,
            flagged,
            reasons,
            message,
            night,
            rule_points: rules.points,
            hits: rules.hits,
            estimator,
        }
    }

    /// Final score in [0, 100]
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn tier(&self) -> RiskTier {
        self.tier
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_night(&self) -> bool {
        self.night
    }

    /// Unclamped rule points
    pub fn rule_points(&self) -> u32 {
        self.rule_points
    }

    /// Per-rule breakdown, in evaluation order
    pub fn rule_hits(&self) -> &[RuleHit] {
        &self.hits
    }

    pub fn estimator(&self) -> EstimatorOutcome {
        self.estimator
    }
}
