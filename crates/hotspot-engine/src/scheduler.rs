//! Periodic decay pass on a tokio task.
//!
//! Ticks that fall behind are skipped rather than bunched up. The pass itself
//! is CPU-bound rayon work, so it runs on the blocking pool. Partitions still
//! busy from a previous pass are skipped by the partition guard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hotspot_cluster::DecayReport;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::HotspotEngine;

pub struct DecayScheduler;

impl DecayScheduler {
    /// Spawn the decay loop on the current tokio runtime. The first pass
    /// runs one `interval` after spawning.
    pub fn spawn(engine: Arc<HotspotEngine>, interval: Duration) -> DecaySchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (report_tx, report_rx) = watch::channel(None);
        let passes = Arc::new(AtomicU64::new(0));
        let counter = passes.clone();

        tracing::info!(interval_ms = interval.as_millis() as u64, "starting decay scheduler");

        let task = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            timer.tick().await;

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        let engine = engine.clone();
                        match tokio::task::spawn_blocking(move || engine.run_decay_pass()).await {
                            Ok(report) => {
                                if !report.failed.is_empty() {
                                    tracing::error!(failed = ?report.failed, "decay pass failed for some partitions");
                                }
                                counter.fetch_add(1, Ordering::Relaxed);
                                let _ = report_tx.send(Some(report));
                            }
                            Err(e) => tracing::error!(error = %e, "decay pass task panicked"),
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::info!("decay scheduler stopped");
        });

        DecaySchedulerHandle {
            shutdown: shutdown_tx,
            reports: report_rx,
            passes,
            task,
        }
    }
}

/// Owner of a running decay loop. Dropping it also stops the loop.
#[derive(Debug)]
pub struct DecaySchedulerHandle {
    shutdown: watch::Sender<bool>,
    reports: watch::Receiver<Option<DecayReport>>,
    passes: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl DecaySchedulerHandle {
    /// Number of completed passes.
    pub fn passes(&self) -> u64 {
        self.passes.load(Ordering::Relaxed)
    }

    pub fn latest_report(&self) -> Option<DecayReport> {
        self.reports.borrow().clone()
    }

    /// Receiver notified after every completed pass.
    pub fn subscribe(&self) -> watch::Receiver<Option<DecayReport>> {
        self.reports.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal the loop to stop and wait for it. A pass already in flight
    /// completes first.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "decay scheduler task failed");
        }
    }
}
