use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use hotspot_core::config::EngineConfig;
use hotspot_core::traits::{Clock, NullNotifier};
use hotspot_core::GeoPoint;
use hotspot_engine::{DecayScheduler, HotspotEngine};
use test_fixtures::{payload_at, ManualClock};

fn engine() -> (Arc<ManualClock>, Arc<HotspotEngine>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let engine = HotspotEngine::new(EngineConfig::default(), Arc::new(NullNotifier), clock.clone()).unwrap();
    (clock, Arc::new(engine))
}

#[tokio::test]
async fn scheduler_runs_passes_until_shutdown() {
    let (clock, engine) = engine();
    engine
        .submit(&payload_at(GeoPoint::new(51.5, -0.12), "Signal crayfish", 0.9, clock.now()))
        .unwrap();
    clock.advance(Duration::days(8));

    let handle = DecayScheduler::spawn(engine.clone(), StdDuration::from_millis(10));
    let mut reports = handle.subscribe();
    let report = tokio::time::timeout(StdDuration::from_secs(5), reports.wait_for(|r| r.is_some()))
        .await
        .expect("no decay pass within timeout")
        .unwrap()
        .clone()
        .unwrap();

    assert_eq!(report.clusters_destroyed(), 1);
    assert_eq!(report.members_dropped(), 1);
    assert!(handle.passes() >= 1);
    assert!(engine.list_active_clusters(None).unwrap().is_empty());

    tokio::time::timeout(StdDuration::from_secs(5), handle.shutdown())
        .await
        .expect("scheduler did not stop");
}

#[tokio::test]
async fn shutdown_before_first_tick_runs_no_pass() {
    let (_, engine) = engine();
    let handle = DecayScheduler::spawn(engine, StdDuration::from_secs(3600));
    assert_eq!(handle.passes(), 0);
    assert!(handle.latest_report().is_none());
    tokio::time::timeout(StdDuration::from_secs(5), handle.shutdown())
        .await
        .expect("scheduler did not stop");
}

#[tokio::test]
async fn empty_engine_passes_report_nothing() {
    let (_, engine) = engine();
    let handle = DecayScheduler::spawn(engine, StdDuration::from_millis(5));
    let mut reports = handle.subscribe();
    tokio::time::timeout(StdDuration::from_secs(5), reports.wait_for(|r| r.is_some()))
        .await
        .expect("no decay pass within timeout")
        .unwrap();
    let report = handle.latest_report().unwrap();
    assert!(report.partitions.is_empty());
    assert!(report.skipped.is_empty());
    handle.shutdown().await;
}
