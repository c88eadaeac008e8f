//! Simulator Tests.
//!
//! End-to-end runs of address traces through `Simulator`: the worked examples,
//! blank-line handling, and both parse-error policies.

use cachesim_core::common::Address;
use cachesim_core::common::error::{ParseError, SimError};
use cachesim_core::config::{CacheConfig, ReplacementPolicy};
use cachesim_core::sim::{AccessRecord, ParseErrorPolicy, Simulator};
use pretty_assertions::assert_eq;

use crate::common::harness::{direct_mapped_config, init_tracing, outcomes, replay};

use cachesim_core::cache::AccessOutcome::{Hit, Miss};

#[test]
fn direct_mapped_example() {
    let records = replay(&direct_mapped_config(), &["x00", "x04", "x08", "x0C", "x00"]);

    let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
    let tags: Vec<u64> = records.iter().map(|r| r.tag).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 0]);
    assert_eq!(tags, vec![0, 0, 0, 0, 0]);
    assert_eq!(outcomes(&records), "MMMMH");
}

#[test]
fn single_set_eviction_example() {
    init_tracing();
    let config = CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Lru);
    let mut sim = Simulator::new(&config).unwrap();

    let records = sim.run(["x1", "x2", "x3"], ParseErrorPolicy::Abort).unwrap();
    assert_eq!(outcomes(&records), "MMM");

    let mut resident: Vec<u64> = sim.cache().set(0).tags().collect();
    resident.sort_unstable();
    assert_eq!(resident, vec![2, 3]);
}

#[test]
fn record_carries_all_fields() {
    let records = replay(&direct_mapped_config(), &["xB6"]);
    assert_eq!(
        records,
        vec![AccessRecord {
            address: Address(0xB6),
            index: 1,
            tag: 0xB,
            offset: 2,
            outcome: Miss,
        }]
    );
}

#[test]
fn offsets_within_a_block_share_a_line() {
    let records = replay(&direct_mapped_config(), &["x10", "x11", "x12", "x13", "x14"]);
    assert_eq!(outcomes(&records), "MHHHM");
}

#[test]
fn step_skips_blank_lines() {
    let mut sim = Simulator::new(&direct_mapped_config()).unwrap();
    assert_eq!(sim.step("   \n"), Ok(None));
    assert_eq!(sim.cache().clock(), 0);

    let record = sim.step(" x04 \r\n").unwrap().unwrap();
    assert_eq!(record.outcome, Miss);
    assert_eq!(sim.step("x04").unwrap().map(|r| r.outcome), Some(Hit));
}

#[test]
fn run_ignores_blank_lines() {
    let records = replay(&direct_mapped_config(), &["x00", "", "   ", "x00"]);
    assert_eq!(outcomes(&records), "MH");
}

#[test]
fn step_parse_error_leaves_cache_untouched() {
    let mut sim = Simulator::new(&direct_mapped_config()).unwrap();
    assert!(matches!(
        sim.step("xNOPE"),
        Err(ParseError::InvalidDigit { .. })
    ));
    assert_eq!(sim.cache().clock(), 0);
    assert_eq!(sim.stats().accesses, 0);
}

#[test]
fn abort_reports_one_based_line_number() {
    init_tracing();
    let mut sim = Simulator::new(&direct_mapped_config()).unwrap();
    let err = sim
        .run(["x00", "x04", "bogus!", "x08"], ParseErrorPolicy::Abort)
        .unwrap_err();

    match err {
        SimError::Parse { line, source } => {
            assert_eq!(line, 3);
            assert!(matches!(source, ParseError::InvalidDigit { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Accesses before the bad line were applied.
    assert_eq!(sim.cache().clock(), 2);
}

#[test]
fn abort_error_message_names_line() {
    let mut sim = Simulator::new(&direct_mapped_config()).unwrap();
    let err = sim.run(["x"], ParseErrorPolicy::Abort).unwrap_err();
    assert_eq!(err.to_string(), "trace line 1: empty address");
}

#[test]
fn skip_continues_past_bad_lines() {
    init_tracing();
    let mut sim = Simulator::new(&direct_mapped_config()).unwrap();
    let records = sim
        .run(
            ["x00", "zz", "x00", "x1FFFFFFFFFFFFFFFF", "x04"],
            ParseErrorPolicy::Skip,
        )
        .unwrap();

    assert_eq!(outcomes(&records), "MHM");
    assert_eq!(sim.stats().skipped, 2);
    assert_eq!(sim.stats().accesses, 3);
}

#[test]
fn default_policy_is_abort() {
    assert_eq!(ParseErrorPolicy::default(), ParseErrorPolicy::Abort);
}

#[test]
fn stats_track_the_run() {
    let mut sim = Simulator::new(&CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Lru)).unwrap();
    let _ = sim
        .run(["x1", "x2", "x1", "x3", "x1"], ParseErrorPolicy::Abort)
        .unwrap();

    let stats = sim.stats();
    assert_eq!(stats.accesses, 5);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.evictions, 1);
}

#[test]
fn invalid_config_is_rejected() {
    let config = CacheConfig::new(8, 4, 4, 0, ReplacementPolicy::Lru);
    assert!(Simulator::new(&config).is_err());
}

#[test]
fn policies_diverge_on_same_trace() {
    let trace = ["x1", "x2", "x3", "x1", "x2", "x3"];
    let lru = replay(&CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Lru), &trace);
    let mru = replay(&CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Mru), &trace);
    let lookahead = replay(
        &CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Lookahead),
        &trace,
    );

    assert_eq!(outcomes(&lru), "MMMMMM");
    assert_eq!(outcomes(&mru), "MMMHMH");
    assert_eq!(outcomes(&lookahead), outcomes(&lru));
}
