//! Cache Replacement Policy Tests.
//!
//! Verifies the victim selection logic for LRU, MRU, and Lookahead. Each policy
//! implements `ReplacementPolicy::victim(&[Line]) -> Option<usize>` over the
//! recency stamps stored in a set, so the tests exercise them on hand-built
//! line slices with no cache around them.

use cachesim_core::cache::policies::{
    self, LookaheadPolicy, LruPolicy, MruPolicy, ReplacementPolicy,
};
use cachesim_core::cache::set::Line;
use cachesim_core::config::ReplacementPolicy as PolicyType;

/// Builds lines from `(tag, recency)` pairs, in iteration order.
fn lines(pairs: &[(u64, u64)]) -> Vec<Line> {
    pairs
        .iter()
        .map(|&(tag, recency)| Line { tag, recency })
        .collect()
}

// ══════════════════════════════════════════════════════════
// 1. LRU Policy
// ══════════════════════════════════════════════════════════

/// The smallest stamp loses, wherever it sits in the set.
#[test]
fn lru_evicts_smallest_recency() {
    let set = lines(&[(0xA, 7), (0xB, 3), (0xC, 9), (0xD, 5)]);
    assert_eq!(LruPolicy.victim(&set), Some(1));
}

/// Re-touching the oldest line moves the victim to the next oldest.
#[test]
fn lru_follows_restamp() {
    let mut set = lines(&[(0xA, 1), (0xB, 2), (0xC, 3)]);
    assert_eq!(LruPolicy.victim(&set), Some(0));

    set[0].recency = 4;
    assert_eq!(LruPolicy.victim(&set), Some(1));

    set[1].recency = 5;
    assert_eq!(LruPolicy.victim(&set), Some(2));
}

/// Equal stamps cannot arise from the cache, but resolve to the first line.
#[test]
fn lru_tie_resolves_to_first() {
    let set = lines(&[(0xA, 4), (0xB, 2), (0xC, 2)]);
    assert_eq!(LruPolicy.victim(&set), Some(1));
}

#[test]
fn lru_single_way() {
    assert_eq!(LruPolicy.victim(&lines(&[(0xA, 42)])), Some(0));
}

#[test]
fn lru_empty_set_has_no_victim() {
    assert_eq!(LruPolicy.victim(&[]), None);
}

// ══════════════════════════════════════════════════════════
// 2. MRU Policy
// ══════════════════════════════════════════════════════════

/// The largest stamp loses.
#[test]
fn mru_evicts_largest_recency() {
    let set = lines(&[(0xA, 7), (0xB, 3), (0xC, 9), (0xD, 5)]);
    assert_eq!(MruPolicy.victim(&set), Some(2));
}

/// Equal stamps resolve to the first line, as for LRU.
#[test]
fn mru_tie_resolves_to_first() {
    let set = lines(&[(0xA, 2), (0xB, 8), (0xC, 8)]);
    assert_eq!(MruPolicy.victim(&set), Some(1));
}

#[test]
fn mru_empty_set_has_no_victim() {
    assert_eq!(MruPolicy.victim(&[]), None);
}

/// LRU and MRU pick opposite ends of the same set.
#[test]
fn lru_and_mru_disagree() {
    let set = lines(&[(0xA, 10), (0xB, 20), (0xC, 30), (0xD, 40)]);
    assert_eq!(LruPolicy.victim(&set), Some(0));
    assert_eq!(MruPolicy.victim(&set), Some(3));
}

// ══════════════════════════════════════════════════════════
// 3. Lookahead Policy
// ══════════════════════════════════════════════════════════

/// Lookahead consults no future references and matches LRU.
#[test]
fn lookahead_matches_lru() {
    let cases = [
        lines(&[(0xA, 7), (0xB, 3), (0xC, 9)]),
        lines(&[(0xA, 1), (0xB, 2)]),
        lines(&[(0xA, 5), (0xB, 5), (0xC, 1), (0xD, 1)]),
        lines(&[]),
    ];
    let lookahead = LookaheadPolicy::default();
    for set in &cases {
        assert_eq!(lookahead.victim(set), LruPolicy.victim(set));
    }
}

// ══════════════════════════════════════════════════════════
// 4. Construction from configuration
// ══════════════════════════════════════════════════════════

#[test]
fn build_dispatches_on_config() {
    let set = lines(&[(0xA, 1), (0xB, 3), (0xC, 2)]);
    assert_eq!(policies::build(PolicyType::Lru).victim(&set), Some(0));
    assert_eq!(policies::build(PolicyType::Mru).victim(&set), Some(1));
    assert_eq!(policies::build(PolicyType::Lookahead).victim(&set), Some(0));
}
