//! # hotspot-observability
//!
//! Structured logging for the hotspot engine: subscriber setup, spans around
//! engine operations, and one helper per named event so field names stay
//! consistent across crates.

pub mod tracing_setup;

pub use tracing_setup::{events, spans};
pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV};
