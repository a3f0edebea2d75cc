//! Grid geometry: cell addressing and the set of cells a radius query must scan.

use hotspot_core::constants::{EARTH_RADIUS_M, MAX_LATITUDE, MAX_LONGITUDE};
use hotspot_core::GeoPoint;

/// Widens scan bounds so points on the inclusive boundary are never missed.
const SPAN_MARGIN: f64 = 1.0 + 1e-6;

/// Address of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: i64,
    pub col: i64,
}

/// Uniform grid sized to the query radius. Rows are exactly one angular
/// radius tall; columns divide the full circle evenly, so they are at least
/// that wide and the ring closes at the antimeridian without a partial cell.
#[derive(Debug, Clone)]
pub struct Grid {
    radius_m: f64,
    /// Angular radius in radians.
    angular_radius: f64,
    cell_deg: f64,
    cell_deg_lon: f64,
    rows: i64,
    columns: i64,
}

impl Grid {
    /// `radius_m` must be positive and finite (enforced by config validation).
    pub fn new(radius_m: f64) -> Self {
        let angular_radius = radius_m / EARTH_RADIUS_M;
        let cell_deg = angular_radius.to_degrees();
        let rows = ((2.0 * MAX_LATITUDE) / cell_deg).floor() as i64 + 1;
        let columns = ((2.0 * MAX_LONGITUDE) / cell_deg).floor().max(1.0) as i64;
        let cell_deg_lon = (2.0 * MAX_LONGITUDE) / columns as f64;
        Self {
            radius_m,
            angular_radius,
            cell_deg,
            cell_deg_lon,
            rows,
            columns,
        }
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn cell_deg(&self) -> f64 {
        self.cell_deg
    }

    pub fn columns(&self) -> i64 {
        self.columns
    }

    fn row_of(&self, lat: f64) -> i64 {
        (((lat + MAX_LATITUDE) / self.cell_deg).floor() as i64).clamp(0, self.rows - 1)
    }

    fn col_of(&self, lon: f64) -> i64 {
        (((lon + MAX_LONGITUDE) / self.cell_deg_lon).floor() as i64).rem_euclid(self.columns)
    }

    pub fn cell_of(&self, point: &GeoPoint) -> CellKey {
        CellKey {
            row: self.row_of(point.lat),
            col: self.col_of(point.lon),
        }
    }

    /// Every cell that may hold a point within the radius of `center`.
    ///
    /// Rows cover the latitude band of the spherical cap; columns cover the
    /// cap's longitude extent at its widest latitude, wrapping across the
    /// antimeridian. Near the poles the whole ring is scanned.
    pub fn covering_cells(&self, center: &GeoPoint) -> Vec<CellKey> {
        let lat_span = self.cell_deg * SPAN_MARGIN;
        let lat_lo = (center.lat - lat_span).max(-MAX_LATITUDE);
        let lat_hi = (center.lat + lat_span).min(MAX_LATITUDE);
        let row_lo = self.row_of(lat_lo);
        let row_hi = self.row_of(lat_hi);

        let widest = lat_lo.abs().max(lat_hi.abs()).to_radians();
        let sin_r = (self.angular_radius * SPAN_MARGIN).sin();
        let cos_lat = widest.cos();

        let touches_pole = lat_hi >= MAX_LATITUDE || lat_lo <= -MAX_LATITUDE;
        let column_range: Vec<i64> = if touches_pole || cos_lat <= sin_r {
            (0..self.columns).collect()
        } else {
            let lon_span = (sin_r / cos_lat).asin().to_degrees();
            let start = ((center.lon - lon_span + MAX_LONGITUDE) / self.cell_deg_lon).floor() as i64;
            let end = ((center.lon + lon_span + MAX_LONGITUDE) / self.cell_deg_lon).floor() as i64;
            if end - start + 1 >= self.columns {
                (0..self.columns).collect()
            } else {
                let mut cols: Vec<i64> = (start..=end).map(|c| c.rem_euclid(self.columns)).collect();
                cols.sort_unstable();
                cols.dedup();
                cols
            }
        };

        let mut cells = Vec::with_capacity(((row_hi - row_lo + 1) as usize) * column_range.len());
        for row in row_lo..=row_hi {
            for &col in &column_range {
                cells.push(CellKey { row, col });
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_point_scans_a_small_block() {
        let grid = Grid::new(100.0);
        let cells = grid.covering_cells(&GeoPoint::new(45.0, 10.0));
        // 2-3 rows × a handful of columns (wider than tall at 45°).
        assert!(cells.len() >= 4 && cells.len() <= 16, "got {}", cells.len());
        assert!(cells.contains(&grid.cell_of(&GeoPoint::new(45.0, 10.0))));
    }

    #[test]
    fn antimeridian_wraps_columns() {
        let grid = Grid::new(500.0);
        let east = GeoPoint::new(0.0, 179.999);
        let west = GeoPoint::new(0.0, -179.999);
        let cells = grid.covering_cells(&east);
        assert!(cells.contains(&grid.cell_of(&west)));
    }

    #[test]
    fn antimeridian_neighbors_found_from_either_side() {
        let grid = Grid::new(250.0);
        let east = GeoPoint::new(0.0, 179.9982);
        let west = GeoPoint::new(0.0, -179.9999);
        assert!(east.distance_to(&west) < 250.0);
        assert!(grid.covering_cells(&east).contains(&grid.cell_of(&west)));
        assert!(grid.covering_cells(&west).contains(&grid.cell_of(&east)));
    }

    #[test]
    fn columns_tile_the_full_circle() {
        let grid = Grid::new(250.0);
        assert!(grid.cell_deg_lon >= grid.cell_deg);
        assert!((grid.cell_deg_lon * grid.columns as f64 - 360.0).abs() < 1e-9);
        assert_eq!(
            grid.cell_of(&GeoPoint::new(0.0, 180.0)),
            grid.cell_of(&GeoPoint::new(0.0, -180.0))
        );
    }

    #[test]
    fn polar_query_scans_whole_ring() {
        let grid = Grid::new(1_000.0);
        let cells = grid.covering_cells(&GeoPoint::new(89.999, 0.0));
        let cols: std::collections::HashSet<i64> = cells.iter().map(|c| c.col).collect();
        assert_eq!(cols.len() as i64, grid.columns);
    }
}
