//! Tier classification

use payrisk_core::RiskTier;

pub const PATTERN_THRESHOLD: u8 = 85;
pub const HIGH_THRESHOLD: u8 = 70;
pub const MEDIUM_THRESHOLD: u8 = 35;

/// Scores at or above this are flagged for review
pub const FLAG_THRESHOLD: u8 = 70;

/// Map a final score and night flag to a tier; first match wins
pub fn classify(score: u8, night: bool) -> RiskTier {
    if score >= PATTERN_THRESHOLD && night {
        RiskTier::Pattern
    } else if score >= HIGH_THRESHOLD {
        RiskTier::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Safe
    }
}

pub fn is_flagged(score: u8) -> bool {
    score >= FLAG_THRESHOLD
}
