//! Scoring pipeline: validate, run rules and estimator, fuse

use crate::assessment::RiskAssessment;
use crate::error::Result;
use crate::estimator::{EstimatorAdapter, EstimatorInput};
use crate::rules::RuleEngine;
use payrisk_core::{HistoricalContext, TransactionFeatures};

/// Stateless scorer over an immutable estimator handle
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    rules: RuleEngine,
    estimator: EstimatorAdapter,
}

impl RiskScorer {
    pub fn new(estimator: EstimatorAdapter) -> Self {
        Self {
            rules: RuleEngine::new(),
            estimator,
        }
    }

    pub fn estimator(&self) -> &EstimatorAdapter {
        &self.estimator
    }

    /// Score one transfer against already-resolved history
    pub fn score(
        &self,
        features: &TransactionFeatures,
        context: &HistoricalContext,
    ) -> Result<RiskAssessment> {
        features.validate()?;
        context.validate()?;

        let night = features.is_night();
        let rules = self.rules.evaluate(features, context);
        let estimator = self
            .estimator
            .score(&EstimatorInput::new(features.amount, night));

        let assessment = RiskAssessment::from_scores(rules, estimator, night);

        tracing::debug!(
            receiver = %features.receiver_id,
            score = assessment.score(),
            tier = %assessment.tier(),
            flagged = assessment.is_flagged(),
            rule_points = assessment.rule_points(),
            estimator = ?assessment.estimator(),
            "Transfer scored"
        );

        Ok(assessment)
    }
}
