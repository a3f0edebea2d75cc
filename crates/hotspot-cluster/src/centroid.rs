//! Running spherical mean of member coordinates.

use hotspot_core::GeoPoint;

/// Sum of member unit vectors. The centroid is the sum projected back onto
/// the sphere, so it stays well-defined across the antimeridian.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CentroidAccumulator {
    sum: [f64; 3],
    count: usize,
}

impl CentroidAccumulator {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Self {
        let mut acc = Self::default();
        for p in points {
            acc.add(p);
        }
        acc
    }

    pub fn add(&mut self, point: &GeoPoint) {
        let v = point.to_unit_vector();
        for (s, c) in self.sum.iter_mut().zip(v) {
            *s += c;
        }
        self.count += 1;
    }

    /// Fold another accumulator in, as when two clusters merge.
    pub fn absorb(&mut self, other: &CentroidAccumulator) {
        for (s, c) in self.sum.iter_mut().zip(other.sum) {
            *s += c;
        }
        self.count += other.count;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` when empty or when the members cancel out exactly.
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.count == 0 {
            return None;
        }
        GeoPoint::from_vector(self.sum)
    }
}
