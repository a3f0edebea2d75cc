//! Spans around engine operations. Events logged inside a span carry its
//! fields, so a cluster event can be traced back to the submission or admin
//! action that caused it.

/// Span for one submission, from normalization to cluster assignment.
#[macro_export]
macro_rules! ingest_span {
    ($species:expr) => {
        tracing::info_span!("hotspot.ingest", species = %$species)
    };
}

/// Span for an admin verification decision.
#[macro_export]
macro_rules! verification_span {
    ($sighting_id:expr, $decision:expr) => {
        tracing::info_span!("hotspot.verification", sighting_id = %$sighting_id, decision = ?$decision)
    };
}

/// Span for an admin split.
#[macro_export]
macro_rules! split_span {
    ($cluster_id:expr, $extracted:expr) => {
        tracing::info_span!("hotspot.split", cluster_id = %$cluster_id, extracted = $extracted)
    };
}

/// Span for one decay pass across all partitions.
#[macro_export]
macro_rules! decay_span {
    ($partitions:expr) => {
        tracing::info_span!("hotspot.decay", partitions = $partitions)
    };
}

pub mod names {
    pub const INGEST: &str = "hotspot.ingest";
    pub const VERIFICATION: &str = "hotspot.verification";
    pub const SPLIT: &str = "hotspot.split";
    pub const DECAY: &str = "hotspot.decay";
}
