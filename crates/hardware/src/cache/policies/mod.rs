//! Cache Replacement Policies.
//!
//! Implements the algorithms for selecting victim lines in a full set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Mru`: Most Recently Used.
//! - `Lookahead`: currently identical to `Lru`.
//!
//! Every policy decides from the recency stamps already stored in the set, so the
//! policies themselves are stateless and one instance serves every set.

/// Lookahead replacement policy.
pub mod lookahead;

/// Least Recently Used replacement policy.
pub mod lru;

/// Most Recently Used replacement policy.
pub mod mru;

use std::fmt;

pub use lookahead::LookaheadPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;

use super::set::Line;
use crate::config::ReplacementPolicy as PolicyType;

/// Trait for cache replacement policies.
///
/// Defines the interface for selecting the victim line of a full set.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Selects a victim among a set's resident lines.
    ///
    /// # Arguments
    ///
    /// * `lines` - The resident lines of the set, in iteration order.
    ///
    /// # Returns
    ///
    /// The position of the line to evict, or `None` if `lines` is empty.
    fn victim(&self, lines: &[Line]) -> Option<usize>;
}

/// Resolves a configured policy into its implementation.
pub fn build(policy: PolicyType) -> Box<dyn ReplacementPolicy> {
    match policy {
        PolicyType::Lru => Box::new(LruPolicy),
        PolicyType::Mru => Box::new(MruPolicy),
        PolicyType::Lookahead => Box::new(LookaheadPolicy::default()),
    }
}
