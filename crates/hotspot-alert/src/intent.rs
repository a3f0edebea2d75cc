//! Builds outbound intents from alert records.

use chrono::{DateTime, Utc};
use hotspot_core::models::{Alert, AlertIntent, AlertStatus, RiskLevel};

/// Intent announcing `alert` (new or re-sent).
pub fn announcement(alert: &Alert, guidance: Option<&str>) -> AlertIntent {
    AlertIntent {
        alert_id: alert.id,
        cluster_id: alert.cluster_id,
        species_label: alert.species.clone(),
        centroid: alert.centroid,
        risk_score: alert.risk_score,
        risk_level: RiskLevel::from_score(alert.risk_score),
        member_count: alert.member_count,
        timestamp: alert.emitted_at,
        status: alert.status,
        recommended_action: guidance.map(str::to_string),
    }
}

/// Retraction notice for a delivered `alert`, stamped at `at` with the score
/// that caused the retraction.
pub fn retraction_notice(alert: &Alert, current_score: f64, at: DateTime<Utc>) -> AlertIntent {
    AlertIntent {
        alert_id: alert.id,
        cluster_id: alert.cluster_id,
        species_label: alert.species.clone(),
        centroid: alert.centroid,
        risk_score: current_score,
        risk_level: RiskLevel::from_score(current_score),
        member_count: alert.member_count,
        timestamp: at,
        status: AlertStatus::Retracted,
        recommended_action: None,
    }
}
