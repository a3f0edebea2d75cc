//! HotspotEngine: the single entry point for submissions, admin actions and
//! read-side feeds.
//!
//! Every operation reads "now" from the injected [`Clock`] once and passes it
//! down, so a call observes one consistent instant.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hotspot_alert::ChannelNotifier;
use hotspot_cluster::{ClusterManager, DecayReport};
use hotspot_core::config::EngineConfig;
use hotspot_core::errors::HotspotResult;
use hotspot_core::ids::{AlertId, ClusterId, SightingId};
use hotspot_core::models::{
    Alert, AlertIntent, ClusterSummary, EngineStats, Sighting, SightingPayload, SpreadTrend,
    VerificationEvent, VerificationRequest,
};
use hotspot_core::traits::{AlertNotifier, Clock, SystemClock};
use hotspot_ingest::species::canonical_label;
use hotspot_ingest::Normalizer;
use hotspot_observability::{decay_span, ingest_span, split_span, verification_span};
use tokio::sync::mpsc;

use crate::receipt::SightingReceipt;

pub struct HotspotEngine {
    config: EngineConfig,
    normalizer: Normalizer,
    clusters: ClusterManager,
    clock: Arc<dyn Clock>,
}

impl HotspotEngine {
    /// Build an engine from a validated configuration.
    pub fn new(
        config: EngineConfig,
        notifier: Arc<dyn AlertNotifier>,
        clock: Arc<dyn Clock>,
    ) -> HotspotResult<Self> {
        config.validate()?;
        tracing::info!(
            radius_m = config.clustering.radius_meters,
            horizon_secs = config.decay.horizon_secs,
            high = config.alerting.high_risk_threshold,
            low = config.alerting.de_escalation_threshold,
            "hotspot engine initialized"
        );
        Ok(Self {
            normalizer: Normalizer::new(&config),
            clusters: ClusterManager::new(&config, notifier),
            config,
            clock,
        })
    }

    pub fn with_system_clock(
        config: EngineConfig,
        notifier: Arc<dyn AlertNotifier>,
    ) -> HotspotResult<Self> {
        Self::new(config, notifier, Arc::new(SystemClock))
    }

    /// Engine whose alert intents are delivered on an in-process channel.
    pub fn with_channel(
        config: EngineConfig,
        clock: Arc<dyn Clock>,
    ) -> HotspotResult<(Self, mpsc::UnboundedReceiver<AlertIntent>)> {
        let (notifier, rx) = ChannelNotifier::channel();
        let engine = Self::new(config, Arc::new(notifier), clock)?;
        Ok((engine, rx))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ── Ingestion ──

    /// Normalize a raw submission and place it into a cluster.
    pub fn submit(&self, payload: &SightingPayload) -> HotspotResult<SightingReceipt> {
        let _span = ingest_span!(payload.species_label).entered();
        let now = self.now();
        let sighting = self.normalizer.normalize(payload, now)?;
        let sighting_id = sighting.id;
        let species = sighting.species.clone();
        let assignment = self.clusters.ingest(sighting, now)?;
        Ok(SightingReceipt {
            sighting_id,
            species,
            cluster_id: assignment.cluster_id,
            cluster_created: assignment.created,
            merged: assignment.absorbed.iter().map(|c| c.id).collect(),
        })
    }

    // ── Admin actions ──

    pub fn verify(&self, request: &VerificationRequest) -> HotspotResult<VerificationEvent> {
        let _span = verification_span!(request.sighting_id, request.decision).entered();
        self.clusters.verify(request, self.now())
    }

    pub fn acknowledge(&self, cluster_id: ClusterId) -> HotspotResult<()> {
        self.clusters.acknowledge(cluster_id)
    }

    pub fn split_cluster(
        &self,
        cluster_id: ClusterId,
        extracted: &[SightingId],
    ) -> HotspotResult<Vec<ClusterId>> {
        let _span = split_span!(cluster_id, extracted.len()).entered();
        self.clusters.split_cluster(cluster_id, extracted, self.now())
    }

    // ── Notifier callbacks ──

    pub fn confirm_delivery(&self, alert_id: AlertId) -> HotspotResult<()> {
        self.clusters.confirm_delivery(alert_id)
    }

    pub fn resend(&self, alert_id: AlertId) -> HotspotResult<bool> {
        self.clusters.resend(alert_id)
    }

    // ── Decay ──

    pub fn run_decay_pass(&self) -> DecayReport {
        let _span = decay_span!(self.clusters.species().len()).entered();
        self.clusters.run_decay_pass(self.now())
    }

    pub fn decay_interval(&self) -> std::time::Duration {
        self.config.decay.pass_interval()
    }

    // ── Feeds ──

    /// Active clusters, highest risk first. The species label is matched
    /// after the same canonicalization submissions go through.
    pub fn list_active_clusters(&self, species: Option<&str>) -> HotspotResult<Vec<ClusterSummary>> {
        match species {
            None => self.clusters.list_active_clusters(None),
            Some(label) => match canonical_label(label) {
                Ok(label) => self.clusters.list_active_clusters(Some(label.as_str())),
                Err(_) => Ok(Vec::new()),
            },
        }
    }

    pub fn list_alerts(&self) -> HotspotResult<Vec<Alert>> {
        self.clusters.list_alerts()
    }

    pub fn stats(&self) -> HotspotResult<EngineStats> {
        self.clusters.stats()
    }

    pub fn spread_trend(&self, species: Option<&str>) -> HotspotResult<SpreadTrend> {
        let now = self.now();
        match species {
            None => self.clusters.spread_trend(None, now),
            Some(label) => match canonical_label(label) {
                Ok(label) => self.clusters.spread_trend(Some(label.as_str()), now),
                Err(_) => Ok(SpreadTrend::from_counts(0, 0)),
            },
        }
    }

    pub fn pending_review(&self) -> HotspotResult<Vec<Sighting>> {
        self.clusters.pending_review()
    }

    pub fn sighting(&self, id: &SightingId) -> HotspotResult<Option<Sighting>> {
        self.clusters.sighting(id)
    }

    pub fn cluster(&self, id: ClusterId) -> HotspotResult<Option<ClusterSummary>> {
        self.clusters.cluster(id)
    }

    pub fn verification_log(&self) -> HotspotResult<Vec<VerificationEvent>> {
        self.clusters.verification_log()
    }

    pub fn species(&self) -> Vec<String> {
        self.clusters.species()
    }
}

impl std::fmt::Debug for HotspotEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotspotEngine")
            .field("config", &self.config)
            .field("species", &self.clusters.species())
            .finish_non_exhaustive()
    }
}
