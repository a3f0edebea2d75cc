pub mod alert;
pub mod cluster;
pub mod risk_level;
pub mod sighting;
pub mod stats;
pub mod summary;
pub mod verification;

pub use alert::{Alert, AlertIntent, AlertState, AlertStatus};
pub use cluster::Cluster;
pub use risk_level::RiskLevel;
pub use sighting::{Sighting, SightingPayload, VerificationStatus};
pub use stats::{EngineStats, SpreadTrend, TrendDirection};
pub use summary::ClusterSummary;
pub use verification::{VerificationDecision, VerificationEvent, VerificationRequest};
