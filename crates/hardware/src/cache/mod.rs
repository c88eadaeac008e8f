//! Set-Associative Cache.
//!
//! This module implements the hit/miss model of a single set-associative cache. The
//! cache owns one [`CacheSet`] per index value, a global recency counter, and the
//! replacement policy chosen at construction. There is no timing, no write policy,
//! and no dirtiness: an access either finds its tag resident or installs it.

/// Cache replacement policy implementations (LRU, MRU, Lookahead).
pub mod policies;

/// Set and line storage.
pub mod set;

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use self::policies::ReplacementPolicy;
use self::set::{CacheSet, Line};
use crate::common::constants::{HIT_SYMBOL, MISS_SYMBOL};
use crate::common::error::ConfigError;
use crate::config::{CacheConfig, Geometry, ReplacementPolicy as PolicyType};

/// Classification of one access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessOutcome {
    /// The tag was resident in the set before the access.
    #[serde(rename = "H")]
    Hit,
    /// The tag was absent and has now been installed.
    #[serde(rename = "M")]
    Miss,
}

impl AccessOutcome {
    /// Returns `true` for [`AccessOutcome::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Single-letter rendering (`H` or `M`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hit => HIT_SYMBOL,
            Self::Miss => MISS_SYMBOL,
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Everything one access did to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessEvent {
    /// Hit or miss.
    pub outcome: AccessOutcome,
    /// Recency stamp given to the accessed line (the post-increment counter value).
    pub recency: u64,
    /// Line removed to make room, if the set was full on a miss.
    pub evicted: Option<Line>,
}

/// A set-associative cache with a configurable replacement policy.
///
/// # Examples
///
/// ```
/// use cachesim_core::cache::{AccessOutcome, SetAssociativeCache};
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy};
///
/// // One set of two ways.
/// let config = CacheConfig::new(8, 1, 2, 2, ReplacementPolicy::Lru);
/// let mut cache = SetAssociativeCache::new(&config).unwrap();
///
/// assert_eq!(cache.access(1, 0), AccessOutcome::Miss);
/// assert_eq!(cache.access(2, 0), AccessOutcome::Miss);
/// assert_eq!(cache.access(3, 0), AccessOutcome::Miss); // evicts tag 1
/// assert_eq!(cache.set(0).tags().collect::<Vec<_>>(), vec![3, 2]);
/// ```
#[derive(Debug)]
pub struct SetAssociativeCache {
    geometry: Geometry,
    kind: PolicyType,
    policy: Box<dyn ReplacementPolicy>,
    sets: Vec<CacheSet>,
    clock: u64,
}

impl SetAssociativeCache {
    /// Creates an empty cache with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry and replacement policy.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`Geometry::new`] if the geometry is
    /// inconsistent; no partial cache is constructed.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;
        Ok(Self::with_geometry(geometry, config.policy))
    }

    /// Creates an empty cache from an already validated geometry.
    pub fn with_geometry(geometry: Geometry, policy: PolicyType) -> Self {
        let ways = geometry.associativity() as usize;
        let sets = (0..geometry.set_count()).map(|_| CacheSet::new(ways)).collect();

        debug!(%geometry, %policy, "cache constructed");

        Self {
            geometry,
            kind: policy,
            policy: policies::build(policy),
            sets,
            clock: 0,
        }
    }

    /// Accesses `tag` in set `index`, installing it on a miss.
    ///
    /// # Panics
    ///
    /// Panics if `index >= set_count`; the decoder never produces such an index.
    pub fn access(&mut self, tag: u64, index: usize) -> AccessOutcome {
        self.access_event(tag, index).outcome
    }

    /// Accesses `tag` in set `index` and reports the recency stamp and any eviction.
    ///
    /// The global counter advances exactly once; the touched or installed line is
    /// stamped with the new value. On a miss into a full set, the active policy picks
    /// the victim, whose slot the new line takes.
    ///
    /// # Panics
    ///
    /// Panics if `index >= set_count`.
    pub fn access_event(&mut self, tag: u64, index: usize) -> AccessEvent {
        let set_count = self.sets.len();
        assert!(
            index < set_count,
            "set index {index} out of range for a cache with {set_count} sets"
        );

        self.clock += 1;
        let recency = self.clock;
        let set = &mut self.sets[index];

        if let Some(way) = set.position(tag) {
            set.touch(way, recency);
            trace!(tag, index, recency, "hit");
            return AccessEvent {
                outcome: AccessOutcome::Hit,
                recency,
                evicted: None,
            };
        }

        let line = Line { tag, recency };
        let evicted = if set.is_full() {
            // A full set has at least one line when associativity >= 1.
            let way = self.policy.victim(set.lines()).unwrap_or_default();
            let victim = set.replace(way, line);
            debug!(
                index,
                victim_tag = victim.tag,
                victim_recency = victim.recency,
                policy = %self.kind,
                "evict"
            );
            Some(victim)
        } else {
            set.insert(line);
            None
        };
        trace!(tag, index, recency, "miss");

        AccessEvent {
            outcome: AccessOutcome::Miss,
            recency,
            evicted,
        }
    }

    /// Returns `true` if `tag` is resident in set `index`, without touching recency.
    ///
    /// # Panics
    ///
    /// Panics if `index >= set_count`.
    pub fn contains(&self, tag: u64, index: usize) -> bool {
        self.sets[index].contains(tag)
    }

    /// The validated geometry.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The active replacement policy.
    pub const fn policy(&self) -> PolicyType {
        self.kind
    }

    /// Number of accesses performed so far (the last recency stamp handed out).
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// The set selected by `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= set_count`.
    pub fn set(&self, index: usize) -> &CacheSet {
        &self.sets[index]
    }

    /// All sets, ordered by index.
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }

    /// Total number of resident lines across all sets.
    pub fn occupancy(&self) -> usize {
        self.sets.iter().map(CacheSet::len).sum()
    }
}
