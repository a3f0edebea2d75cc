use crate::snapshot::ClusterSnapshot;

/// Mean classifier confidence over contributing members. 0.0 when none.
pub fn calculate(snapshot: &ClusterSnapshot) -> f64 {
    let (sum, count) = snapshot
        .contributing()
        .fold((0.0, 0usize), |(s, c), m| (s + m.confidence, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
