//! Statistics Tests.
//!
//! Ensures `CacheStats` counts hits, misses, evictions, and skipped lines and
//! derives rates correctly, including before any access.

use cachesim_core::cache::set::Line;
use cachesim_core::cache::{AccessEvent, AccessOutcome};
use cachesim_core::stats::CacheStats;

fn event(outcome: AccessOutcome, evicted: Option<u64>) -> AccessEvent {
    AccessEvent {
        outcome,
        recency: 1,
        evicted: evicted.map(|tag| Line { tag, recency: 0 }),
    }
}

#[test]
fn empty_stats_have_zero_rates() {
    let stats = CacheStats::default();
    assert_eq!(stats.accesses, 0);
    assert!(stats.hit_rate().abs() < f64::EPSILON);
    assert!(stats.miss_rate().abs() < f64::EPSILON);
}

#[test]
fn record_counts_outcomes_and_evictions() {
    let mut stats = CacheStats::default();
    stats.record(&event(AccessOutcome::Miss, None));
    stats.record(&event(AccessOutcome::Hit, None));
    stats.record(&event(AccessOutcome::Miss, Some(3)));
    stats.record(&event(AccessOutcome::Hit, None));
    stats.record_skip();

    assert_eq!(stats.accesses, 4);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.skipped, 1);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    assert!((stats.miss_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn summary_lists_every_counter() {
    let mut stats = CacheStats::default();
    stats.record(&event(AccessOutcome::Miss, None));
    stats.record(&event(AccessOutcome::Hit, None));
    stats.record(&event(AccessOutcome::Hit, None));
    stats.record(&event(AccessOutcome::Hit, None));

    let summary = stats.to_string();
    assert!(summary.contains("CACHE SIMULATION STATISTICS"));
    assert!(summary.contains("accesses                 4"));
    assert!(summary.contains("hits                     3 (75.00%)"));
    assert!(summary.contains("misses                   1 (25.00%)"));
    assert!(summary.contains("evictions                0"));
    assert!(summary.contains("skipped_lines            0"));
}

#[test]
fn stats_serialize_to_json() {
    let mut stats = CacheStats::default();
    stats.record(&event(AccessOutcome::Miss, Some(1)));
    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["misses"], 1);
    assert_eq!(value["evictions"], 1);
}
