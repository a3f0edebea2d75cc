//! Individual validation rules. Each is a pure check over one field.

use chrono::{DateTime, Duration, Utc};
use hotspot_core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use hotspot_core::errors::ValidationError;
use hotspot_core::GeoPoint;

/// Both coordinates present, finite, and inside the WGS84 ranges.
pub fn coordinate(lat: Option<f64>, lon: Option<f64>) -> Result<GeoPoint, ValidationError> {
    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, _) => return Err(invalid_coordinate("latitude is missing")),
        (_, None) => return Err(invalid_coordinate("longitude is missing")),
    };
    if !lat.is_finite() || !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(invalid_coordinate(format!(
            "latitude {lat} outside [-{MAX_LATITUDE}, {MAX_LATITUDE}]"
        )));
    }
    if !lon.is_finite() || !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(invalid_coordinate(format!(
            "longitude {lon} outside [-{MAX_LONGITUDE}, {MAX_LONGITUDE}]"
        )));
    }
    Ok(GeoPoint::new(lat, lon))
}

/// Confidence within [0, 1] and at or above `floor`.
pub fn confidence(value: f64, floor: f64) -> Result<f64, ValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidConfidence { value });
    }
    if value < floor {
        return Err(ValidationError::BelowConfidenceFloor { value, floor });
    }
    Ok(value)
}

/// Observation time no older than `retention` and no further ahead than
/// `skew`, both measured from `now`. Boundaries are inclusive.
pub fn timestamp(
    observed_at: DateTime<Utc>,
    now: DateTime<Utc>,
    retention: Duration,
    skew: Duration,
) -> Result<DateTime<Utc>, ValidationError> {
    let age = now - observed_at;
    if age > retention {
        return Err(ValidationError::StaleTimestamp {
            age_secs: age.num_seconds(),
            horizon_secs: retention.num_seconds(),
        });
    }
    let ahead = observed_at - now;
    if ahead > skew {
        return Err(ValidationError::FutureTimestamp {
            ahead_secs: ahead.num_seconds(),
            tolerance_secs: skew.num_seconds(),
        });
    }
    Ok(observed_at)
}

fn invalid_coordinate(reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidCoordinate {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_bounds_are_inclusive() {
        assert!(coordinate(Some(90.0), Some(180.0)).is_ok());
        assert!(coordinate(Some(-90.0), Some(-180.0)).is_ok());
        assert!(coordinate(Some(90.0001), Some(0.0)).is_err());
        assert!(coordinate(Some(0.0), Some(-180.0001)).is_err());
    }

    #[test]
    fn missing_or_nan_coordinates_rejected() {
        assert!(matches!(
            coordinate(None, Some(1.0)),
            Err(ValidationError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            coordinate(Some(1.0), None),
            Err(ValidationError::InvalidCoordinate { .. })
        ));
        assert!(coordinate(Some(f64::NAN), Some(1.0)).is_err());
        assert!(coordinate(Some(1.0), Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn confidence_range_checked_before_floor() {
        assert_eq!(
            confidence(1.2, 0.7),
            Err(ValidationError::InvalidConfidence { value: 1.2 })
        );
        assert!(matches!(
            confidence(f64::NAN, 0.7),
            Err(ValidationError::InvalidConfidence { .. })
        ));
        assert_eq!(
            confidence(0.5, 0.7),
            Err(ValidationError::BelowConfidenceFloor {
                value: 0.5,
                floor: 0.7
            })
        );
        assert_eq!(confidence(0.7, 0.7), Ok(0.7));
    }

    #[test]
    fn timestamp_window_edges() {
        let now = Utc::now();
        let retention = Duration::days(7);
        let skew = Duration::minutes(5);
        assert!(timestamp(now - retention, now, retention, skew).is_ok());
        assert!(timestamp(now + skew, now, retention, skew).is_ok());
        assert!(matches!(
            timestamp(now - retention - Duration::seconds(1), now, retention, skew),
            Err(ValidationError::StaleTimestamp { .. })
        ));
        assert!(matches!(
            timestamp(now + skew + Duration::seconds(1), now, retention, skew),
            Err(ValidationError::FutureTimestamp { .. })
        ));
    }
}
