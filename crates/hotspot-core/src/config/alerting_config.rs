use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Alert dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingConfig {
    /// Escalate `none → active` when a score reaches this value.
    pub high_risk_threshold: f64,
    /// De-escalate `active → none` when a score falls below this value.
    /// Must be strictly less than `high_risk_threshold`.
    pub de_escalation_threshold: f64,
    /// Recommended response text per species, attached to alert intents.
    pub species_guidance: HashMap<String, String>,
}

impl AlertingConfig {
    pub fn guidance_for(&self, species: &str) -> Option<&str> {
        self.species_guidance.get(species).map(String::as_str)
    }
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            high_risk_threshold: defaults::DEFAULT_HIGH_RISK_THRESHOLD,
            de_escalation_threshold: defaults::DEFAULT_DE_ESCALATION_THRESHOLD,
            species_guidance: HashMap::new(),
        }
    }
}
