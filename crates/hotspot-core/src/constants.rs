// Fixed constants that are not configurable.

/// Mean Earth radius in meters, used by the haversine distance.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Absolute tolerance for inclusive radius comparisons, in meters.
pub const DISTANCE_EPSILON_M: f64 = 1e-6;

/// Latitude bounds in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Longitude bounds in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Window used by the spread-trend comparison (current vs. previous week).
pub const SPREAD_TREND_WINDOW_DAYS: i64 = 7;

/// Label the upstream classifier emits when it cannot name a species.
pub const UNKNOWN_SPECIES_LABEL: &str = "Unknown Species";
