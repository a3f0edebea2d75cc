//! # hotspot-ingest
//!
//! Event normalizer. Validates raw submissions from the upload pipeline and
//! turns them into unverified [`Sighting`]s. A rejected payload never
//! reaches clustering.
//!
//! [`Sighting`]: hotspot_core::models::Sighting

pub mod normalizer;
pub mod rules;
pub mod species;

pub use normalizer::Normalizer;
