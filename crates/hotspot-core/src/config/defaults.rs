// Single source of truth for all default values.

// --- Clustering ---
pub const DEFAULT_CLUSTERING_RADIUS_METERS: f64 = 250.0;

// --- Decay ---
pub const DEFAULT_DECAY_HORIZON_SECS: u64 = 7 * 24 * 3600; // 7 days
pub const DEFAULT_DECAY_PASS_INTERVAL_SECS: u64 = 3600; // 1 hour

// --- Alerting ---
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.8;
pub const DEFAULT_DE_ESCALATION_THRESHOLD: f64 = 0.6;

// --- Ingest ---
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.70;
pub const DEFAULT_MAX_CLOCK_SKEW_SECS: u64 = 300; // 5 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
