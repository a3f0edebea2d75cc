//! # hotspot-core
//!
//! Foundation crate for the hotspot cluster & alert engine.
//! Defines all ids, models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod geo;
pub mod ids;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{HotspotError, HotspotResult};
pub use geo::GeoPoint;
pub use ids::{AlertId, ClusterId, SightingId, VerificationId};
pub use models::{
    Alert, AlertIntent, AlertState, AlertStatus, Cluster, ClusterSummary, Sighting,
    SightingPayload, VerificationDecision, VerificationEvent, VerificationStatus,
};
