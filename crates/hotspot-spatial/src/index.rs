use std::collections::{HashMap, HashSet};

use hotspot_core::ids::SightingId;
use hotspot_core::models::Sighting;
use hotspot_core::GeoPoint;

use crate::grid::{CellKey, Grid};

/// Mutable fixed-radius neighbor index for one species partition.
///
/// Not internally synchronized: the owning partition's lock serializes
/// writers and lets readers share a snapshot.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    grid: Grid,
    cells: HashMap<CellKey, HashSet<SightingId>>,
    entries: HashMap<SightingId, (GeoPoint, CellKey)>,
}

impl SpatialIndex {
    pub fn new(radius_m: f64) -> Self {
        Self {
            grid: Grid::new(radius_m),
            cells: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// The only radius this index answers queries for.
    pub fn radius_m(&self) -> f64 {
        self.grid.radius_m()
    }

    /// Index a sighting at its location. Re-inserting moves the entry.
    pub fn insert(&mut self, sighting: &Sighting) {
        self.insert_point(sighting.id, sighting.location);
    }

    pub fn insert_point(&mut self, id: SightingId, location: GeoPoint) {
        self.remove(&id);
        let cell = self.grid.cell_of(&location);
        self.cells.entry(cell).or_default().insert(id);
        self.entries.insert(id, (location, cell));
    }

    /// Remove a sighting. Returns false when it was not indexed.
    pub fn remove(&mut self, id: &SightingId) -> bool {
        let Some((_, cell)) = self.entries.remove(id) else {
            return false;
        };
        if let Some(bucket) = self.cells.get_mut(&cell) {
            bucket.remove(id);
            if bucket.is_empty() {
                self.cells.remove(&cell);
            }
        }
        true
    }

    /// Ids of every indexed sighting within the configured radius of `center`
    /// (inclusive). Unordered snapshot taken at call time.
    pub fn query(&self, center: &GeoPoint) -> Vec<SightingId> {
        let radius = self.grid.radius_m();
        let mut hits = Vec::new();
        for cell in self.grid.covering_cells(center) {
            let Some(bucket) = self.cells.get(&cell) else {
                continue;
            };
            for id in bucket {
                if let Some((location, _)) = self.entries.get(id) {
                    if center.is_within(location, radius) {
                        hits.push(*id);
                    }
                }
            }
        }
        hits
    }

    pub fn location(&self, id: &SightingId) -> Option<GeoPoint> {
        self.entries.get(id).map(|(p, _)| *p)
    }

    pub fn contains(&self, id: &SightingId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occupied grid cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
