//! Simulation statistics collection and reporting.
//!
//! This module tracks hit/miss metrics for a trace run. It provides:
//! 1. **Counters:** Accesses, hits, misses, evictions, and skipped trace lines.
//! 2. **Derived metrics:** Hit and miss rates.
//! 3. **Reporting:** A fixed-width summary via `Display`.

use std::fmt;

use serde::Serialize;

use crate::cache::{AccessEvent, AccessOutcome};

/// Aggregate statistics for one simulator instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Accesses performed (hits + misses).
    pub accesses: u64,
    /// Accesses whose tag was resident.
    pub hits: u64,
    /// Accesses whose tag had to be installed.
    pub misses: u64,
    /// Misses that displaced a resident line.
    pub evictions: u64,
    /// Trace lines dropped because they could not be parsed.
    pub skipped: u64,
}

impl CacheStats {
    /// Folds one access into the counters.
    ///
    /// # Arguments
    ///
    /// * `event` - The access as reported by the cache; an eviction is counted when present.
    pub const fn record(&mut self, event: &AccessEvent) {
        self.accesses += 1;
        match event.outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
        }
        if event.evicted.is_some() {
            self.evictions += 1;
        }
    }

    /// Counts a skipped trace line.
    pub const fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Fraction of accesses that hit, or `0.0` before any access.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, or `0.0` before any access.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }

}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "accesses                 {}", self.accesses)?;
        writeln!(
            f,
            "hits                     {} ({:.2}%)",
            self.hits,
            self.hit_rate() * 100.0
        )?;
        writeln!(
            f,
            "misses                   {} ({:.2}%)",
            self.misses,
            self.miss_rate() * 100.0
        )?;
        writeln!(f, "evictions                {}", self.evictions)?;
        writeln!(f, "skipped_lines            {}", self.skipped)?;
        write!(f, "----------------------------------------------------------")
    }
}
