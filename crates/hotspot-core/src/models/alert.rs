use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::risk_level::RiskLevel;
use crate::geo::GeoPoint;
use crate::ids::{AlertId, ClusterId};

/// Per-cluster alert state tracked by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    #[default]
    None,
    Active,
    Acknowledged,
}

/// Delivery status of an alert record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Pending,
    Sent,
    Retracted,
}

/// An alert record. Owned by the dispatcher; immutable once `Sent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub cluster_id: ClusterId,
    pub species: String,
    pub centroid: GeoPoint,
    pub member_count: usize,
    /// Risk score at emission time.
    pub risk_score: f64,
    pub emitted_at: DateTime<Utc>,
    pub status: AlertStatus,
}

/// Outbound intent handed to the notification collaborator.
///
/// A `status` of `Retracted` is a retraction notice for a previously
/// delivered alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertIntent {
    pub alert_id: AlertId,
    pub cluster_id: ClusterId,
    pub species_label: String,
    pub centroid: GeoPoint,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub member_count: usize,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
    pub recommended_action: Option<String>,
}

impl AlertIntent {
    pub fn is_retraction(&self) -> bool {
        self.status == AlertStatus::Retracted
    }
}
