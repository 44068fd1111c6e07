//! Model-assisted scoring demo
//!
//! Loads configuration from `config/payrisk.yaml` (and `PAYRISK_*`
//! environment variables), which points at the demo estimator artifact,
//! then compares rule-only and model-assisted scores.

use payrisk_sdk::{
    EngineConfig, HistoricalContext, NightIndicator, RiskEngine, RiskEngineBuilder,
    TransactionFeatures,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    payrisk_demos::init_tracing()?;

    println!("=== Model Scoring Demo ===\n");

    let config = EngineConfig::load()?;
    let with_model = RiskEngine::new(config);
    let rules_only = RiskEngineBuilder::new().build();

    match with_model.estimator_version() {
        Some(version) => println!("Estimator loaded: {}\n", version),
        None => println!("Estimator unavailable, both engines score with rules only\n"),
    }

    let context = HistoricalContext::new(900.0, 0);
    let cases = [
        ("small daytime", 250.0, NightIndicator::Hour(14)),
        ("medium evening", 3000.0, NightIndicator::Hour(20)),
        ("large night", 6000.0, NightIndicator::Flag(true)),
    ];

    for (label, amount, night) in cases {
        let features = TransactionFeatures::new(amount, night, "friend@upi", false);
        let rules = rules_only.assess_risk(&features, &context)?;
        let model = with_model.assess_risk(&features, &context)?;

        println!("--- {} ({}) ---", label, amount);
        println!("Rules only:  {} {}", rules.score(), rules.tier());
        println!(
            "With model:  {} {} (estimator: {:?})",
            model.score(),
            model.tier(),
            model.estimator()
        );
        println!("Message: {}\n", model.message());
    }

    Ok(())
}
