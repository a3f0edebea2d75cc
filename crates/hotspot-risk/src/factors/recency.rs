use super::RiskContext;
use crate::snapshot::ClusterSnapshot;

/// Recency factor: `0.5^(age / halfLife)` where age is measured from the
/// newest contributing member and the half-life is half the decay horizon.
///
/// Range: 0.0 – 1.0. Future-dated members count as age zero.
pub fn calculate(snapshot: &ClusterSnapshot, ctx: &RiskContext) -> f64 {
    let Some(newest) = snapshot.contributing().map(|m| m.observed_at).max() else {
        return 0.0;
    };
    let half_life_secs = ctx.half_life().num_seconds().max(1) as f64;
    let age_secs = (ctx.now - newest).num_seconds().max(0) as f64;
    0.5f64.powf(age_secs / half_life_secs)
}
