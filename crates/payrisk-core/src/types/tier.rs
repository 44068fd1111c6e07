//! Risk tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk tier, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Safe,
    Medium,
    High,
    /// High score combined with a late-night transfer
    Pattern,
}

impl RiskTier {
    /// All tiers in ascending order of severity
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Safe,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Pattern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "SAFE",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Pattern => "PATTERN",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
