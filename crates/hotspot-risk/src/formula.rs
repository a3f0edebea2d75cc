use serde::{Deserialize, Serialize};

use crate::factors::{self, RiskContext};
use crate::snapshot::ClusterSnapshot;

/// Factor weights. They sum to 1.0 so a fresh, fully trusted, saturated
/// cluster of certain sightings scores 1.0.
pub const W_SIZE: f64 = 0.40;
pub const W_CONFIDENCE: f64 = 0.30;
pub const W_VERIFICATION: f64 = 0.30;

/// Four-factor risk formula.
///
/// ```text
/// risk = recency
///   × (0.4 × size + 0.3 × meanConfidence + 0.3 × verifiedFraction)
/// ```
///
/// A cluster with no contributing members scores 0.0.
/// Result is clamped to [0.0, 1.0].
pub fn compute(snapshot: &ClusterSnapshot, ctx: &RiskContext) -> f64 {
    compute_breakdown(snapshot, ctx).score
}

/// Each factor individually, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub member_count: usize,
    pub size: f64,
    pub mean_confidence: f64,
    pub verified_fraction: f64,
    pub recency: f64,
    pub score: f64,
}

/// Compute the risk score with a full breakdown of each factor.
pub fn compute_breakdown(snapshot: &ClusterSnapshot, ctx: &RiskContext) -> RiskBreakdown {
    let member_count = snapshot.contributing().count();
    let size = factors::size::calculate(member_count);
    let mean_confidence = factors::confidence::calculate(snapshot);
    let verified_fraction = factors::verification::calculate(snapshot);
    let recency = factors::recency::calculate(snapshot, ctx);

    let score = if member_count == 0 {
        0.0
    } else {
        let blended =
            W_SIZE * size + W_CONFIDENCE * mean_confidence + W_VERIFICATION * verified_fraction;
        let raw = recency * blended;
        if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    RiskBreakdown {
        member_count,
        size,
        mean_confidence,
        verified_fraction,
        recency,
        score,
    }
}
