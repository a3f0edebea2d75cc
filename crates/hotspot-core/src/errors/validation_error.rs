/// Rejections raised at the normalizer boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid coordinate: {reason}")]
    InvalidCoordinate { reason: String },

    #[error("invalid confidence {value}: must be within [0, 1]")]
    InvalidConfidence { value: f64 },

    #[error("stale timestamp: observed {age_secs}s ago, retention horizon is {horizon_secs}s")]
    StaleTimestamp { age_secs: i64, horizon_secs: i64 },

    #[error("timestamp {ahead_secs}s in the future exceeds clock skew tolerance of {tolerance_secs}s")]
    FutureTimestamp { ahead_secs: i64, tolerance_secs: i64 },

    #[error("confidence {value:.3} below floor {floor:.3}")]
    BelowConfidenceFloor { value: f64, floor: f64 },

    #[error("invalid species label: {reason}")]
    InvalidSpecies { reason: String },
}
