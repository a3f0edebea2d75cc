use serde::{Deserialize, Serialize};

use super::alert::AlertState;
use super::cluster::Cluster;
use super::risk_level::RiskLevel;
use crate::geo::GeoPoint;
use crate::ids::ClusterId;

/// Read-only cluster view for the map-visualization feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: ClusterId,
    pub species: String,
    pub centroid: GeoPoint,
    pub member_count: usize,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub alert_state: AlertState,
}

impl From<&Cluster> for ClusterSummary {
    fn from(cluster: &Cluster) -> Self {
        Self {
            id: cluster.id,
            species: cluster.species.clone(),
            centroid: cluster.centroid,
            member_count: cluster.member_count(),
            risk_score: cluster.risk_score,
            risk_level: RiskLevel::from_score(cluster.risk_score),
            alert_state: cluster.alert_state,
        }
    }
}
