//! Advisory message rendering

use payrisk_core::RiskTier;

pub fn advisory_message(score: u8, tier: RiskTier, flagged: bool, reasons: &[String]) -> String {
    if flagged {
        let mut message = format!("⚠️ Risk Score: {}/100. ", score);
        if !reasons.is_empty() {
            message.push_str("Reasons: ");
            message.push_str(&reasons.join(", "));
        }
        message
    } else {
        format!("Transaction Approved. Status: {}", tier)
    }
}
