//! Lookahead Replacement Policy.
//!
//! Lookahead is offered as a named policy but does not look ahead: no future trace
//! entries are available to it, and victim selection falls back to LRU. Results for
//! `LOOKAHEAD` are therefore identical to `LRU` on every trace.
//!
//! A genuine future-reference policy (Belady's MIN) would need the remaining trace at
//! construction time, which changes the cache's interface; it is not attempted here.

use super::{LruPolicy, ReplacementPolicy};
use crate::cache::set::Line;

/// Lookahead policy (LRU victim selection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookaheadPolicy {
    fallback: LruPolicy,
}

impl ReplacementPolicy for LookaheadPolicy {
    fn victim(&self, lines: &[Line]) -> Option<usize> {
        self.fallback.victim(lines)
    }
}
