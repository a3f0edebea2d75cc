use serde::{Deserialize, Serialize};

use crate::constants::{DISTANCE_EPSILON_M, EARTH_RADIUS_M, MAX_LATITUDE, MAX_LONGITUDE};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lon)
    }

    /// Haversine distance to another point in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Inclusive radius test: a point exactly on the boundary is within.
    pub fn is_within(&self, other: &GeoPoint, radius_m: f64) -> bool {
        self.distance_to(other) <= radius_m + DISTANCE_EPSILON_M
    }

    /// Unit vector on the sphere (x, y, z).
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// Project a (not necessarily unit) vector back onto the sphere.
    /// Returns `None` for a zero-length vector.
    pub fn from_vector(v: [f64; 3]) -> Option<GeoPoint> {
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if !norm.is_finite() || norm <= f64::EPSILON {
            return None;
        }
        let (x, y, z) = (v[0] / norm, v[1] / norm, v[2] / norm);
        let lat = z.clamp(-1.0, 1.0).asin().to_degrees();
        let lon = y.atan2(x).to_degrees();
        Some(GeoPoint::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let p = GeoPoint::new(45.0, -122.0);
        assert!(p.distance_to(&p).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111km() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = a.distance_to(&b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_across_antimeridian_is_short() {
        let a = GeoPoint::new(0.0, 179.9995);
        let b = GeoPoint::new(0.0, -179.9995);
        assert!(a.distance_to(&b) < 120.0);
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
    }

    #[test]
    fn unit_vector_round_trip() {
        let p = GeoPoint::new(12.5, -70.25);
        let q = GeoPoint::from_vector(p.to_unit_vector()).unwrap();
        assert!(p.distance_to(&q) < 1e-6);
    }
}
