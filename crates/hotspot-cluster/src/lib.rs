//! # hotspot-cluster
//!
//! Incremental single-pass cluster assignment with periodic decay,
//! sharded by species.
//!
//! - [`ClusterManager`]: partition registry and the public mutation/query surface
//! - [`Clustering`]: one species' clusters, sightings and spatial index
//! - decay, admin split and verification feedback run inside a partition's write lock

pub mod centroid;
pub mod clustering;
pub mod decay;
pub mod feedback;
pub mod manager;
pub mod partition;
pub mod queries;
pub mod split;

pub use centroid::CentroidAccumulator;
pub use clustering::{AssignContext, Assignment, Clustering};
pub use decay::{DecayOutcome, DecayReport, PartitionDecay};
pub use manager::ClusterManager;
pub use partition::{Partition, PartitionSettings, PartitionState};
