use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse severity band derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const MODERATE_FLOOR: f64 = 0.4;
    pub const HIGH_FLOOR: f64 = 0.6;
    pub const CRITICAL_FLOOR: f64 = 0.8;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::CRITICAL_FLOOR {
            Self::Critical
        } else if score >= Self::HIGH_FLOOR {
            Self::High
        } else if score >= Self::MODERATE_FLOOR {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}
