//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the line whose recency stamp is smallest, i.e. the line that
//! has gone the longest without being touched. Because every access receives a
//! unique stamp from the cache's global counter, the minimum is unique in practice;
//! should two stamps ever tie, the earlier line in iteration order is chosen.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()`: O(W) where W is the number of ways
//! - **Space Complexity:** O(1); the stamps live in the set itself
//! - **Best Case:** Workloads with good temporal locality
//! - **Worst Case:** Cyclic scans larger than the set (every access misses)

use super::ReplacementPolicy;
use crate::cache::set::Line;

/// LRU policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Returns the position of the line with the minimum recency.
    fn victim(&self, lines: &[Line]) -> Option<usize> {
        lines
            .iter()
            .enumerate()
            .min_by_key(|(_, line)| line.recency)
            .map(|(way, _)| way)
    }
}
