use chrono::{Duration, TimeZone, Utc};
use hotspot_core::models::VerificationStatus;
use hotspot_risk::{ClusterSnapshot, MemberSnapshot, RiskScorer};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = VerificationStatus> {
    prop_oneof![
        Just(VerificationStatus::Unverified),
        Just(VerificationStatus::Confirmed),
        Just(VerificationStatus::Rejected),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = ClusterSnapshot> {
    prop::collection::vec((0.0f64..=1.0, arb_status(), 0i64..(14 * 86_400)), 0..40).prop_map(
        |raw| {
            let base = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
            ClusterSnapshot {
                members: raw
                    .into_iter()
                    .map(|(confidence, status, age)| MemberSnapshot {
                        confidence,
                        status,
                        observed_at: base - Duration::seconds(age),
                    })
                    .collect(),
            }
        },
    )
}

// ── Bounded 0.0 ≤ risk ≤ 1.0 ────────────────────────────────────────────

proptest! {
    #[test]
    fn risk_is_bounded(snapshot in arb_snapshot(), horizon_days in 1i64..30) {
        let scorer = RiskScorer::new(Duration::days(horizon_days));
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let score = scorer.score(&snapshot, now);
        prop_assert!((0.0..=1.0).contains(&score), "score {}", score);
    }
}

// ── Never increases with the passage of time alone ─────────────────────

proptest! {
    #[test]
    fn risk_non_increasing_over_time(snapshot in arb_snapshot()) {
        let scorer = RiskScorer::new(Duration::days(7));
        let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut prev = scorer.score(&snapshot, start);
        for hours in [1, 6, 24, 72, 168, 336] {
            let s = scorer.score(&snapshot, start + Duration::hours(hours));
            prop_assert!(s <= prev + f64::EPSILON, "not monotonic at +{}h: {} > {}", hours, s, prev);
            prev = s;
        }
    }
}

// ── Deterministic and independent of member order ──────────────────────

proptest! {
    #[test]
    fn risk_ignores_member_order(snapshot in arb_snapshot()) {
        let scorer = RiskScorer::new(Duration::days(7));
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut reversed = snapshot.clone();
        reversed.members.reverse();
        let a = scorer.score(&snapshot, now);
        let b = scorer.score(&reversed, now);
        prop_assert!((a - b).abs() < 1e-12);
        prop_assert_eq!(a, scorer.score(&snapshot, now));
    }
}

// ── Rejected members never count toward size ───────────────────────────

proptest! {
    #[test]
    fn rejected_members_excluded_from_member_count(snapshot in arb_snapshot()) {
        let scorer = RiskScorer::new(Duration::days(7));
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let expected = snapshot
            .members
            .iter()
            .filter(|m| m.status != VerificationStatus::Rejected)
            .count();
        prop_assert_eq!(scorer.breakdown(&snapshot, now).member_count, expected);
    }
}
