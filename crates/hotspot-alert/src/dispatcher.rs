//! AlertDispatcher: hysteresis state machine over cluster risk scores.
//!
//! One dispatcher lives inside each species partition, so every call runs
//! under the same partition lock as the cluster mutation that triggered it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use hotspot_core::config::AlertingConfig;
use hotspot_core::errors::StateError;
use hotspot_core::ids::{AlertId, ClusterId};
use hotspot_core::models::{Alert, AlertState, AlertStatus, Cluster};
use hotspot_core::traits::AlertNotifier;
use hotspot_observability::events;

use crate::intent;
use crate::track::AlertTrack;

pub struct AlertDispatcher {
    config: Arc<AlertingConfig>,
    notifier: Arc<dyn AlertNotifier>,
    tracks: HashMap<ClusterId, AlertTrack>,
    alerts: HashMap<AlertId, Alert>,
}

impl AlertDispatcher {
    pub fn new(config: Arc<AlertingConfig>, notifier: Arc<dyn AlertNotifier>) -> Self {
        Self {
            config,
            notifier,
            tracks: HashMap::new(),
            alerts: HashMap::new(),
        }
    }

    pub fn high_threshold(&self) -> f64 {
        self.config.high_risk_threshold
    }

    pub fn low_threshold(&self) -> f64 {
        self.config.de_escalation_threshold
    }

    pub fn state_of(&self, cluster_id: &ClusterId) -> AlertState {
        self.tracks
            .get(cluster_id)
            .map(|t| t.state)
            .unwrap_or_default()
    }

    pub fn track(&self, cluster_id: &ClusterId) -> Option<&AlertTrack> {
        self.tracks.get(cluster_id)
    }

    /// Apply a freshly computed `cluster.risk_score` and return the
    /// resulting alert state.
    ///
    /// - `none` and `score ≥ high`: emit one pending alert, go `active`.
    /// - `active` and `score < low`: retract the alert, go `none`.
    /// - `acknowledged` and `score < low`: go `none` without retraction,
    ///   re-arming the next upward crossing.
    ///
    /// Anything inside the hysteresis band leaves the state untouched.
    pub fn on_score_update(&mut self, cluster: &Cluster, at: DateTime<Utc>) -> AlertState {
        let score = cluster.risk_score;
        let track = self.tracks.get(&cluster.id).copied().unwrap_or_default();

        let next = match track.state {
            AlertState::None if score >= self.high_threshold() => {
                let alert_id = self.emit(cluster, at);
                AlertTrack {
                    state: AlertState::Active,
                    current_alert: Some(alert_id),
                }
            }
            AlertState::Active if score < self.low_threshold() => {
                if let Some(alert_id) = track.current_alert {
                    self.retract(alert_id, score, at);
                }
                AlertTrack::default()
            }
            AlertState::Acknowledged if score < self.low_threshold() => AlertTrack::default(),
            _ => track,
        };

        self.store(cluster.id, next);
        next.state
    }

    /// Admin review: `active → acknowledged`.
    pub fn acknowledge(&mut self, cluster_id: ClusterId) -> Result<(), StateError> {
        match self.tracks.get_mut(&cluster_id) {
            Some(track) if track.state == AlertState::Active => {
                track.state = AlertState::Acknowledged;
                events::alert_acknowledged(&cluster_id);
                Ok(())
            }
            _ => Err(StateError::AlertNotActive(cluster_id)),
        }
    }

    /// Notifier acknowledgment: `pending → sent`. Confirming a sent alert
    /// again is a no-op; a retracted alert can no longer be confirmed.
    pub fn confirm_delivery(&mut self, alert_id: AlertId) -> Result<(), StateError> {
        let alert = self
            .alerts
            .get_mut(&alert_id)
            .ok_or(StateError::AlertNotFound(alert_id))?;
        match alert.status {
            AlertStatus::Pending => {
                alert.status = AlertStatus::Sent;
                events::alert_delivered(&alert_id);
                Ok(())
            }
            AlertStatus::Sent => Ok(()),
            AlertStatus::Retracted => Err(StateError::AlertNotPending(alert_id)),
        }
    }

    /// Hand a pending alert to the notifier again. Returns whether the
    /// notifier accepted it.
    pub fn resend(&self, alert_id: AlertId) -> Result<bool, StateError> {
        let alert = self
            .alerts
            .get(&alert_id)
            .ok_or(StateError::AlertNotFound(alert_id))?;
        if alert.status != AlertStatus::Pending {
            return Err(StateError::AlertNotPending(alert_id));
        }
        Ok(self.hand_off(alert))
    }

    /// Reconcile tracks after `absorbed` clusters were merged into `survivor`.
    ///
    /// The survivor keeps its own open track. Otherwise it inherits the
    /// highest-ranking absorbed track (ties go to the smallest cluster id).
    /// Every other absorbed track is closed.
    pub fn on_merge(&mut self, survivor: &Cluster, absorbed: &[Cluster], at: DateTime<Utc>) {
        let mut orphans: Vec<(&Cluster, AlertTrack)> = absorbed
            .iter()
            .filter_map(|c| self.tracks.remove(&c.id).map(|t| (c, t)))
            .collect();
        orphans.sort_by(|(a, ta), (b, tb)| tb.rank().cmp(&ta.rank()).then(a.id.cmp(&b.id)));

        let mut orphans = orphans.into_iter();
        if self.state_of(&survivor.id) == AlertState::None {
            if let Some((_, inherited)) = orphans.next() {
                self.store(survivor.id, inherited);
            }
        }

        for (cluster, track) in orphans {
            self.close(track, cluster.risk_score, at);
        }
    }

    /// Move the track of a dissolved cluster onto one of its replacements.
    pub fn transfer(&mut self, from: ClusterId, to: ClusterId) {
        if let Some(track) = self.tracks.remove(&from) {
            self.store(to, track);
        }
    }

    /// Close the track of a cluster leaving the active set.
    pub fn on_cluster_removed(&mut self, cluster: &Cluster, at: DateTime<Utc>) {
        if let Some(track) = self.tracks.remove(&cluster.id) {
            self.close(track, cluster.risk_score, at);
        }
    }

    pub fn alert(&self, alert_id: &AlertId) -> Option<&Alert> {
        self.alerts.get(alert_id)
    }

    /// All alert records, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        let mut all: Vec<Alert> = self.alerts.values().cloned().collect();
        all.sort_by(|a, b| b.emitted_at.cmp(&a.emitted_at).then(a.id.cmp(&b.id)));
        all
    }

    /// Clusters currently in the `active` state.
    pub fn active_alert_count(&self) -> usize {
        self.tracks
            .values()
            .filter(|t| t.state == AlertState::Active)
            .count()
    }

    /// Alerts still awaiting delivery confirmation.
    pub fn pending_alert_count(&self) -> usize {
        self.alerts
            .values()
            .filter(|a| a.status == AlertStatus::Pending)
            .count()
    }

    /// Open tracks are filed under `cluster_id`, and their current alert
    /// record follows so later notices name the cluster that owns it.
    fn store(&mut self, cluster_id: ClusterId, track: AlertTrack) {
        if track.is_open() {
            if let Some(alert) = track.current_alert.as_ref().and_then(|id| self.alerts.get_mut(id)) {
                alert.cluster_id = cluster_id;
            }
            self.tracks.insert(cluster_id, track);
        } else {
            self.tracks.remove(&cluster_id);
        }
    }

    fn emit(&mut self, cluster: &Cluster, at: DateTime<Utc>) -> AlertId {
        let alert = Alert {
            id: AlertId::new(),
            cluster_id: cluster.id,
            species: cluster.species.clone(),
            centroid: cluster.centroid,
            member_count: cluster.member_count(),
            risk_score: cluster.risk_score,
            emitted_at: at,
            status: AlertStatus::Pending,
        };
        events::alert_emitted(&alert.id, &alert.cluster_id, alert.risk_score);
        self.hand_off(&alert);
        let id = alert.id;
        self.alerts.insert(id, alert);
        id
    }

    fn hand_off(&self, alert: &Alert) -> bool {
        let guidance = self.config.guidance_for(&alert.species);
        match self.notifier.notify(intent::announcement(alert, guidance)) {
            Ok(()) => true,
            Err(e) => {
                events::notifier_unavailable(&alert.id, &e.reason);
                false
            }
        }
    }

    /// Pending alerts are marked retracted and never reach the notifier;
    /// sent alerts stay sent and a retraction notice is forwarded.
    fn retract(&mut self, alert_id: AlertId, score: f64, at: DateTime<Utc>) {
        let Some(alert) = self.alerts.get_mut(&alert_id) else {
            return;
        };
        match alert.status {
            AlertStatus::Pending => {
                alert.status = AlertStatus::Retracted;
                events::alert_retracted(&alert_id, &alert.cluster_id, false);
            }
            AlertStatus::Sent => {
                events::alert_retracted(&alert_id, &alert.cluster_id, true);
                let notice = intent::retraction_notice(alert, score, at);
                if let Err(e) = self.notifier.notify(notice) {
                    events::notifier_unavailable(&alert_id, &e.reason);
                }
            }
            AlertStatus::Retracted => {}
        }
    }

    fn close(&mut self, track: AlertTrack, score: f64, at: DateTime<Utc>) {
        if let Some(alert_id) = track.current_alert {
            self.retract(alert_id, score, at);
        }
    }
}

impl std::fmt::Debug for AlertDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertDispatcher")
            .field("tracks", &self.tracks)
            .field("alerts", &self.alerts.len())
            .finish()
    }
}
