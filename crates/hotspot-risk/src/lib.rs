//! # hotspot-risk
//!
//! Pure cluster risk scoring.
//! Factors: size, mean confidence, verified fraction, recency.
//! Rejected members never contribute to size or confidence.

pub mod factors;
pub mod formula;
pub mod scorer;
pub mod snapshot;

pub use factors::RiskContext;
pub use formula::RiskBreakdown;
pub use scorer::RiskScorer;
pub use snapshot::{ClusterSnapshot, MemberSnapshot};
