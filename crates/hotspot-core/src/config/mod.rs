pub mod alerting_config;
pub mod clustering_config;
pub mod decay_config;
pub mod defaults;
pub mod ingest_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alerting_config::AlertingConfig;
pub use clustering_config::ClusteringConfig;
pub use decay_config::DecayConfig;
pub use ingest_config::IngestConfig;

use crate::errors::ConfigError;

/// Top-level engine configuration, loaded once at startup.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HOTSPOT_*`)
/// 2. TOML file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub clustering: ClusteringConfig,
    pub decay: DecayConfig,
    pub alerting: AlertingConfig,
    pub ingest: IngestConfig,
}

impl EngineConfig {
    /// Load from a TOML file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `HOTSPOT_*` environment variables. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<f64>("HOTSPOT_CLUSTERING_RADIUS_METERS") {
            self.clustering.radius_meters = v;
        }
        if let Some(v) = env_parse::<u64>("HOTSPOT_DECAY_HORIZON_SECS") {
            self.decay.horizon_secs = v;
        }
        if let Some(v) = env_parse::<u64>("HOTSPOT_DECAY_PASS_INTERVAL_SECS") {
            self.decay.pass_interval_secs = v;
        }
        if let Some(v) = env_parse::<f64>("HOTSPOT_HIGH_RISK_THRESHOLD") {
            self.alerting.high_risk_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("HOTSPOT_DE_ESCALATION_THRESHOLD") {
            self.alerting.de_escalation_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("HOTSPOT_CONFIDENCE_FLOOR") {
            self.ingest.confidence_floor = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.clustering.radius_meters;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid("clustering.radius_meters", "must be a positive number"));
        }
        if self.decay.horizon_secs == 0 {
            return Err(invalid("decay.horizon_secs", "must be greater than 0"));
        }
        if self.decay.pass_interval_secs == 0 {
            return Err(invalid("decay.pass_interval_secs", "must be greater than 0"));
        }
        if self.ingest.retention_horizon_secs == Some(0) {
            return Err(invalid("ingest.retention_horizon_secs", "must be greater than 0"));
        }

        let high = self.alerting.high_risk_threshold;
        let low = self.alerting.de_escalation_threshold;
        if !(0.0..=1.0).contains(&high) {
            return Err(invalid("alerting.high_risk_threshold", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&low) {
            return Err(invalid(
                "alerting.de_escalation_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        if low >= high {
            return Err(invalid(
                "alerting.de_escalation_threshold",
                "must be strictly less than alerting.high_risk_threshold",
            ));
        }
        if !(0.0..=1.0).contains(&self.ingest.confidence_floor) {
            return Err(invalid("ingest.confidence_floor", "must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
