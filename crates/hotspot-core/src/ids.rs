//! Typed identifiers.
//!
//! Sightings, alerts and verification events are keyed by random UUIDs.
//! Clusters are keyed by an engine-wide sequence so that "smallest id"
//! is a stable, creation-ordered tie-break during merges.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a normalized sighting.
    SightingId
);
uuid_id!(
    /// Identifier of an emitted alert.
    AlertId
);
uuid_id!(
    /// Identifier of an append-only verification audit record.
    VerificationId
);

/// Identifier of a cluster. Allocated from a [`ClusterIdSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(u64);

impl ClusterId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster-{}", self.0)
    }
}

/// Monotonic cluster id allocator, shared by every species partition.
#[derive(Debug)]
pub struct ClusterIdSequence {
    next: AtomicU64,
}

impl ClusterIdSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next id. Ids are never reused.
    pub fn next_id(&self) -> ClusterId {
        ClusterId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ClusterIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
