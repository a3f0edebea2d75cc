//! # hotspot-engine
//!
//! Top-level facade. Wires the normalizer into the species-sharded cluster
//! manager (which drives risk scoring and alert dispatch) and runs the
//! periodic decay pass on a tokio task.

pub mod engine;
pub mod receipt;
pub mod scheduler;

pub use engine::HotspotEngine;
pub use receipt::SightingReceipt;
pub use scheduler::{DecayScheduler, DecaySchedulerHandle};
