//! Runtime scoring tests
//!
//! Exercises the scorer end to end with the documented reference scenarios
//! and sweeps the input space for the score/tier invariants.

use payrisk_core::{HistoricalContext, NightIndicator, RiskTier, TransactionFeatures};
use payrisk_runtime::{
    EstimatorAdapter, EstimatorOutcome, RiskScorer, RuleEngine, RuleId,
};
use std::io::Write;

fn features(amount: f64, night: bool, is_new_receiver: bool) -> TransactionFeatures {
    TransactionFeatures::new(amount, NightIndicator::Flag(night), "merchant@upi", is_new_receiver)
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_scenario_small_known_transfer() {
    let assessment = RiskScorer::default()
        .score(&features(250.0, false, false), &HistoricalContext::new(200.0, 0))
        .unwrap();

    assert_eq!(assessment.rule_points(), 2);
    assert_eq!(assessment.score(), 2);
    assert_eq!(assessment.tier(), RiskTier::Safe);
    assert!(!assessment.is_flagged());
    assert!(assessment.reasons().is_empty());
    assert_eq!(assessment.message(), "Transaction Approved. Status: SAFE");
}

#[test]
fn test_scenario_large_night_transfer_to_new_receiver() {
    let assessment = RiskScorer::default()
        .score(&features(8000.0, true, true), &HistoricalContext::new(500.0, 0))
        .unwrap();

    assert_eq!(assessment.rule_points(), 130);
    assert_eq!(assessment.score(), 100);
    assert_eq!(assessment.tier(), RiskTier::Pattern);
    assert!(assessment.is_flagged());
    assert_eq!(
        assessment.reasons(),
        [
            "High transaction amount",
            "Late-night transaction",
            "New receiver",
            "Unusual amount compared to your average spending",
        ]
    );
    assert_eq!(
        assessment.message(),
        "⚠️ Risk Score: 100/100. Reasons: High transaction amount, Late-night transaction, \
         New receiver, Unusual amount compared to your average spending"
    );
}

#[test]
fn test_scenario_heavily_reported_receiver() {
    let assessment = RiskScorer::default()
        .score(&features(1000.0, false, false), &HistoricalContext::new(0.0, 6))
        .unwrap();

    assert_eq!(assessment.score(), 45);
    assert_eq!(assessment.tier(), RiskTier::Medium);
    assert!(!assessment.is_flagged());
    assert_eq!(assessment.reasons(), ["Reported UPI ID"]);
}

#[test]
fn test_scenario_high_amount_below_flag_line() {
    let assessment = RiskScorer::default()
        .score(&features(5000.0, false, false), &HistoricalContext::new(5000.0, 2))
        .unwrap();

    assert_eq!(assessment.score(), 65);
    assert_eq!(assessment.tier(), RiskTier::Medium);
    assert!(!assessment.is_flagged());
    assert_eq!(
        assessment.reasons(),
        ["High transaction amount", "UPI ID has 2 report(s)"]
    );
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_score_bounded_and_flag_consistent() {
    let scorer = RiskScorer::default();
    let amounts = [0.01, 99.0, 100.0, 3499.0, 3500.0, 6999.0, 7000.0, 50_000.0, 1.0e9];
    let means = [0.0, 1.0, 500.0, 1.0e6];

    for amount in amounts {
        for mean in means {
            for reports in [0, 1, 4, 5, 100] {
                for night in [false, true] {
                    for is_new in [false, true] {
                        let a = scorer
                            .score(&features(amount, night, is_new), &HistoricalContext::new(mean, reports))
                            .unwrap();
                        assert!(a.score() <= 100);
                        assert_eq!(a.is_flagged(), a.score() >= 70);
                        if a.tier() == RiskTier::Pattern {
                            assert!(night && a.score() >= 85);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_rules_are_deterministic() {
    let engine = RuleEngine::new();
    let f = features(4321.0, true, true);
    let c = HistoricalContext::new(900.0, 3);
    let first = engine.evaluate(&f, &c);
    for _ in 0..10 {
        assert_eq!(engine.evaluate(&f, &c), first);
    }
}

#[test]
fn test_deviation_never_fires_without_history() {
    let engine = RuleEngine::new();
    for amount in [1.0, 500.0, 1.0e7] {
        let outcome = engine.evaluate(&features(amount, false, false), &HistoricalContext::new(0.0, 0));
        assert!(!outcome.triggered(RuleId::AmountDeviation));
    }
}

// =============================================================================
// Estimator artifacts
// =============================================================================

#[test]
fn test_scoring_with_loaded_model() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{"kind": "logistic_regression", "version": "night-heavy", "intercept": 10.0, "coefficients": [0.0, 0.0]}"#,
    )
    .unwrap();

    let scorer = RiskScorer::new(EstimatorAdapter::load_or_absent(file.path()));
    assert_eq!(scorer.estimator().version(), Some("night-heavy"));

    // sigmoid(10) ~= 0.99995 -> 99
    let assessment = scorer
        .score(&features(250.0, false, false), &HistoricalContext::new(200.0, 0))
        .unwrap();
    assert_eq!(assessment.estimator(), EstimatorOutcome::Scored(99));
    assert_eq!(assessment.score(), 99);
    assert_eq!(assessment.tier(), RiskTier::High);
    assert!(assessment.reasons().is_empty());
    assert_eq!(assessment.message(), "⚠️ Risk Score: 99/100. ");
}

#[test]
fn test_corrupt_model_degrades_to_rules() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(b"\x00\x01 definitely not a model").unwrap();

    let scorer = RiskScorer::new(EstimatorAdapter::load_or_absent(file.path()));
    assert!(!scorer.estimator().is_available());

    let assessment = scorer
        .score(&features(1000.0, false, false), &HistoricalContext::new(0.0, 6))
        .unwrap();
    assert_eq!(assessment.estimator(), EstimatorOutcome::Absent);
    assert_eq!(assessment.score(), 45);
}
