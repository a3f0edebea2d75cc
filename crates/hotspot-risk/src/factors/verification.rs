use hotspot_core::models::VerificationStatus;

use crate::snapshot::ClusterSnapshot;

/// Verified fraction: confirmed members / all members.
///
/// A cluster no admin has looked at yet (every member unverified) is
/// treated as fully trusted and scores 1.0.
pub fn calculate(snapshot: &ClusterSnapshot) -> f64 {
    let total = snapshot.total();
    let mut decided = 0usize;
    let mut confirmed = 0usize;
    for m in &snapshot.members {
        match m.status {
            VerificationStatus::Unverified => {}
            VerificationStatus::Confirmed => {
                decided += 1;
                confirmed += 1;
            }
            VerificationStatus::Rejected => decided += 1,
        }
    }
    if decided == 0 || total == 0 {
        return 1.0;
    }
    confirmed as f64 / total as f64
}
