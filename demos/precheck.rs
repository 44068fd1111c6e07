//! Transfer precheck demo
//!
//! This demo shows:
//! - Rule-only scoring with in-memory history
//! - How each risk tier is reached
//! - Handling a rejected request

use payrisk_sdk::{InMemoryHistory, RiskAssessment, RiskEngineBuilder, TransferRequest};

fn print_assessment(assessment: &RiskAssessment) {
    println!("Score: {}", assessment.score());
    println!("Tier: {}", assessment.tier());
    println!("Flagged: {}", assessment.is_flagged());
    println!("Reasons: {:?}", assessment.reasons());
    println!("Message: {}\n", assessment.message());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    payrisk_demos::init_tracing()?;

    println!("=== Transfer Precheck Demo ===\n");

    let engine = RiskEngineBuilder::new().enable_metrics(true).build();

    let history = InMemoryHistory::new();
    history.record_transfer("alice@okbank", "grocer@upi", 180.0).await;
    history.record_transfer("alice@okbank", "grocer@upi", 220.0).await;
    history.record_transfer("alice@okbank", "landlord@upi", 500.0).await;
    for _ in 0..6 {
        history.add_report("prize.desk@upi").await;
    }
    history.add_report("landlord@upi").await;
    history.add_report("landlord@upi").await;

    println!("--- Case 1: Groceries, daytime ---");
    let request = TransferRequest::new("alice@okbank", "grocer@upi", 250.0).with_hour(11);
    print_assessment(&engine.precheck(&request, &history).await?);

    println!("--- Case 2: Reported receiver ---");
    let request = TransferRequest::new("alice@okbank", "prize.desk@upi", 1000.0).with_night_flag(false);
    print_assessment(&engine.precheck(&request, &history).await?);

    println!("--- Case 3: Rent, larger than usual ---");
    let request = TransferRequest::new("alice@okbank", "landlord@upi", 5000.0).with_hour(18);
    print_assessment(&engine.precheck(&request, &history).await?);

    println!("--- Case 4: Large late-night transfer to a stranger ---");
    let request = TransferRequest::new("alice@okbank", "stranger@upi", 8000.0).with_hour(2);
    print_assessment(&engine.precheck(&request, &history).await?);

    println!("--- Case 5: Sending to yourself ---");
    let request = TransferRequest::new("alice@okbank", "alice@okbank", 10.0);
    match engine.precheck(&request, &history).await {
        Ok(assessment) => print_assessment(&assessment),
        Err(e) => println!("Rejected: {}\n", e),
    }

    if let Some(metrics) = engine.metrics() {
        println!("=== Metrics ===");
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    }

    Ok(())
}
