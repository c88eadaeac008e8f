//! Most Recently Used (MRU) Replacement Policy.
//!
//! This policy evicts the line that was touched most recently. While
//! counter-intuitive for standard workloads, MRU is optimal for cyclic access
//! patterns (loops) where the working set is larger than the cache: the line just
//! used is the one needed furthest in the future.

use std::cmp::Reverse;

use super::ReplacementPolicy;
use crate::cache::set::Line;

/// MRU policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MruPolicy;

impl ReplacementPolicy for MruPolicy {
    /// Returns the position of the line with the maximum recency.
    ///
    /// Ties resolve to the earlier line, matching [`LruPolicy`](super::LruPolicy).
    fn victim(&self, lines: &[Line]) -> Option<usize> {
        lines
            .iter()
            .enumerate()
            .min_by_key(|(_, line)| Reverse(line.recency))
            .map(|(way, _)| way)
    }
}
