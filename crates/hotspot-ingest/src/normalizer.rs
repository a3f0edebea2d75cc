//! Normalizer: raw payload in, unverified sighting out.
//!
//! Rules run in a fixed order (coordinates, confidence, timestamp, species)
//! and the first failure is reported. Identical payloads are not
//! deduplicated; each accepted submission gets a fresh id.

use chrono::{DateTime, Duration, Utc};
use hotspot_core::config::EngineConfig;
use hotspot_core::errors::ValidationError;
use hotspot_core::ids::SightingId;
use hotspot_core::models::{Sighting, SightingPayload, VerificationStatus};
use hotspot_observability::events;

use crate::{rules, species};

#[derive(Debug, Clone)]
pub struct Normalizer {
    confidence_floor: f64,
    retention: Duration,
    max_skew: Duration,
}

impl Normalizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            confidence_floor: config.ingest.confidence_floor,
            retention: config.ingest.retention_horizon(config.decay.horizon_secs),
            max_skew: config.ingest.max_clock_skew(),
        }
    }

    pub fn confidence_floor(&self) -> f64 {
        self.confidence_floor
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Validate `payload` against `now`. Rejections are logged and returned.
    pub fn normalize(
        &self,
        payload: &SightingPayload,
        now: DateTime<Utc>,
    ) -> Result<Sighting, ValidationError> {
        self.check(payload, now).inspect_err(|e| {
            events::sighting_rejected(payload.species_label.trim(), e);
        })
    }

    fn check(&self, payload: &SightingPayload, now: DateTime<Utc>) -> Result<Sighting, ValidationError> {
        let location = rules::coordinate(payload.lat, payload.lon)?;
        let confidence = rules::confidence(payload.confidence, self.confidence_floor)?;
        let observed_at = rules::timestamp(payload.timestamp, now, self.retention, self.max_skew)?;
        let species = species::canonical_label(&payload.species_label)?;
        let image_ref = payload
            .image_ref
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Sighting {
            id: SightingId::new(),
            species,
            confidence,
            location,
            observed_at,
            image_ref,
            status: VerificationStatus::Unverified,
            cluster_id: None,
        })
    }
}
