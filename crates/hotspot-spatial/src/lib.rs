//! # hotspot-spatial
//!
//! Per-species spatial index over active sightings.
//! A uniform lat/lon grid whose cell edge equals the clustering radius, so a
//! radius query touches only the cells around the query point.

pub mod grid;
pub mod index;

pub use grid::{CellKey, Grid};
pub use index::SpatialIndex;
