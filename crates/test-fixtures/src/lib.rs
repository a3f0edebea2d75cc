//! Test fixture loader and shared helpers for hotspot golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files under
//! `test-fixtures/golden/`, geodesic offset helpers for placing sightings a
//! known distance apart, and a notifier that records every intent.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use hotspot_core::constants::EARTH_RADIUS_M;
use hotspot_core::models::{AlertIntent, SightingPayload};
use hotspot_core::traits::{AlertNotifier, NotifierUnavailable};
use hotspot_core::GeoPoint;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use hotspot_core::traits::ManualClock;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Point `north_m` meters north and `east_m` meters east of `origin`.
///
/// Exact along a meridian (`east_m == 0`); a local tangent-plane
/// approximation otherwise, good to well under a millimeter at the
/// distances the tests use. Longitude wraps into [-180, 180].
pub fn offset_point(origin: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    let dlat = (north_m / EARTH_RADIUS_M).to_degrees();
    let dlon = (east_m / (EARTH_RADIUS_M * origin.lat.to_radians().cos())).to_degrees();
    let mut lon = origin.lon + dlon;
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon < -180.0 {
        lon += 360.0;
    }
    GeoPoint::new(origin.lat + dlat, lon)
}

/// Build a payload at `point`.
pub fn payload_at(
    point: GeoPoint,
    species: &str,
    confidence: f64,
    timestamp: DateTime<Utc>,
) -> SightingPayload {
    SightingPayload {
        lat: Some(point.lat),
        lon: Some(point.lon),
        timestamp,
        species_label: species.to_string(),
        confidence,
        image_ref: None,
    }
}

/// Notifier that records every intent it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    intents: Mutex<Vec<AlertIntent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> Vec<AlertIntent> {
        self.intents.lock().unwrap().clone()
    }

    /// Intents that announce a new or re-sent alert.
    pub fn alerts(&self) -> Vec<AlertIntent> {
        self.intents().into_iter().filter(|i| !i.is_retraction()).collect()
    }

    /// Retraction notices for delivered alerts.
    pub fn retractions(&self) -> Vec<AlertIntent> {
        self.intents().into_iter().filter(|i| i.is_retraction()).collect()
    }

    pub fn clear(&self) {
        self.intents.lock().unwrap().clear();
    }
}

impl AlertNotifier for RecordingNotifier {
    fn notify(&self, intent: AlertIntent) -> Result<(), NotifierUnavailable> {
        self.intents.lock().unwrap().push(intent);
        Ok(())
    }
}

/// Notifier whose backend is down: every hand-off fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableNotifier;

impl AlertNotifier for UnavailableNotifier {
    fn notify(&self, _intent: AlertIntent) -> Result<(), NotifierUnavailable> {
        Err(NotifierUnavailable {
            reason: "backend offline".to_string(),
        })
    }
}

/// One sighting placement inside a golden scenario, relative to its origin.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSighting {
    pub north_m: f64,
    pub east_m: f64,
    pub seconds_after_start: i64,
    pub confidence: f64,
}

/// Golden end-to-end ingestion scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    pub species: String,
    pub origin: GeoPoint,
    pub radius_meters: f64,
    pub high_risk_threshold: f64,
    pub de_escalation_threshold: f64,
    pub sightings: Vec<ScenarioSighting>,
    /// Indices into `sightings` rejected after ingestion.
    pub reject: Vec<usize>,
    pub expected_clusters: usize,
    pub expected_alerts: usize,
}

/// Golden dispatcher score sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreSequence {
    pub description: String,
    pub high_risk_threshold: f64,
    pub de_escalation_threshold: f64,
    pub scores: Vec<f64>,
    pub expected_new_alerts: usize,
    pub expected_final_state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/scenarios/zebra_mussel_end_to_end.json",
            "golden/scenarios/bridged_clusters.json",
            "golden/alerting/hysteresis_jitter.json",
            "golden/alerting/de_escalation_and_recross.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_scenarios_parse() {
        let s: GoldenScenario = load_fixture("golden/scenarios/zebra_mussel_end_to_end.json");
        assert_eq!(s.sightings.len(), 5);
        let seq: ScoreSequence = load_fixture("golden/alerting/hysteresis_jitter.json");
        assert_eq!(seq.scores, vec![0.75, 0.85, 0.7, 0.85]);
    }

    #[test]
    fn offset_along_meridian_is_exact() {
        let origin = GeoPoint::new(40.0, -75.0);
        let p = offset_point(origin, 250.0, 0.0);
        assert!((origin.distance_to(&p) - 250.0).abs() < 1e-6);
    }
}
