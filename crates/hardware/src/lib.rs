//! Set-associative cache simulator library.
//!
//! This crate models the hit/miss behavior of a single set-associative cache driven by
//! a trace of memory addresses:
//! 1. **Decoder:** Splits addresses into tag, index, and offset for a validated geometry.
//! 2. **Cache:** Per-set storage, a global recency counter, and LRU/MRU/Lookahead eviction.
//! 3. **Simulation:** Trace loading, the trace driver, statistics, and result rendering.
//!
//! There is no timing model, no write policy, and no memory hierarchy below the cache.
//!
//! ```
//! use cachesim_core::config::{CacheConfig, ReplacementPolicy};
//! use cachesim_core::sim::{ParseErrorPolicy, Simulator};
//!
//! let config = CacheConfig::new(8, 4, 4, 1, ReplacementPolicy::Lru);
//! let mut sim = Simulator::new(&config).unwrap();
//! let records = sim
//!     .run(["x00", "x04", "x08", "x0C", "x00"], ParseErrorPolicy::Abort)
//!     .unwrap();
//!
//! let outcomes: String = records.iter().map(|r| r.outcome.symbol()).collect();
//! assert_eq!(outcomes, "MMMMH");
//! ```

/// Cache storage and replacement policies.
pub mod cache;
/// Common types and constants (addresses, errors, output markers).
pub mod common;
/// Cache configuration (defaults, geometry validation, policy names).
pub mod config;
/// Address parsing and tag/index/offset decomposition.
pub mod decoder;
/// Trace driver, trace loading, and result rendering.
pub mod sim;
/// Hit/miss statistics collection and reporting.
pub mod stats;

/// Main cache type; construct with `SetAssociativeCache::new`.
pub use crate::cache::SetAssociativeCache;
/// Raw configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Trace driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
