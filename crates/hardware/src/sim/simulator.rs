//! Simulator: owns the cache and its statistics side-by-side.
//!
//! Each trace line is trimmed, decoded against the cache geometry, and applied to
//! the cache in input order. What happens to a malformed line is the caller's
//! choice, expressed as a [`ParseErrorPolicy`].

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::cache::{AccessOutcome, SetAssociativeCache};
use crate::common::addr::{Address, Hex};
use crate::common::error::{ConfigError, ParseError, SimError};
use crate::config::{CacheConfig, Geometry};
use crate::decoder;
use crate::stats::CacheStats;

/// What to do with a trace line that is not a valid address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseErrorPolicy {
    /// Stop the run and report the line.
    #[default]
    Abort,
    /// Log a warning, count the line as skipped, and continue.
    Skip,
}

/// Classification of one trace entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    /// Address as parsed from the trace.
    #[serde(skip)]
    pub address: Address,
    /// Set index.
    #[serde(serialize_with = "serialize_hex_index")]
    pub index: usize,
    /// Block tag.
    #[serde(serialize_with = "serialize_hex")]
    pub tag: u64,
    /// Byte offset within the block.
    #[serde(skip)]
    pub offset: u64,
    /// Hit or miss.
    pub outcome: AccessOutcome,
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            Hex(self.index as u64),
            Hex(self.tag),
            self.outcome
        )
    }
}

fn serialize_hex<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&Hex(*value))
}

fn serialize_hex_index<S: Serializer>(value: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&Hex(*value as u64))
}

/// Top-level simulator: address decoding + cache + statistics.
#[derive(Debug)]
pub struct Simulator {
    cache: SetAssociativeCache,
    stats: CacheStats,
}

impl Simulator {
    /// Creates a simulator with an empty cache.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is inconsistent.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            cache: SetAssociativeCache::new(config)?,
            stats: CacheStats::default(),
        })
    }

    /// Applies a single trace line.
    ///
    /// Returns `Ok(None)` for a blank line, which leaves the cache untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for malformed address text; the cache is untouched.
    pub fn step(&mut self, line: &str) -> Result<Option<AccessRecord>, ParseError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let address = decoder::parse_address(line)?;
        Ok(Some(self.access(address)))
    }

    /// Applies an already parsed address.
    pub fn access(&mut self, address: Address) -> AccessRecord {
        let decoded = decoder::split(self.cache.geometry(), address);
        let event = self.cache.access_event(decoded.tag, decoded.index);
        self.stats.record(&event);
        AccessRecord {
            address,
            index: decoded.index,
            tag: decoded.tag,
            offset: decoded.offset,
            outcome: event.outcome,
        }
    }

    /// Runs every line of a trace in order and returns one record per address.
    ///
    /// # Arguments
    ///
    /// * `lines` - Trace lines, in access order.
    /// * `on_error` - What to do with a line that is not a valid address.
    ///
    /// # Returns
    ///
    /// One [`AccessRecord`] per non-blank, well-formed line. Blank lines produce no
    /// record; skipped lines are counted in [`CacheStats::skipped`].
    ///
    /// # Errors
    ///
    /// With [`ParseErrorPolicy::Abort`], returns [`SimError::Parse`] carrying the
    /// 1-based line number of the first malformed line. Accesses before that line
    /// have already been applied to the cache.
    pub fn run<I, S>(
        &mut self,
        lines: I,
        on_error: ParseErrorPolicy,
    ) -> Result<Vec<AccessRecord>, SimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        for (n, line) in lines.into_iter().enumerate() {
            let line_no = n + 1;
            match self.step(line.as_ref()) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(source) => match on_error {
                    ParseErrorPolicy::Abort => {
                        return Err(SimError::Parse {
                            line: line_no,
                            source,
                        });
                    }
                    ParseErrorPolicy::Skip => {
                        warn!(line = line_no, error = %source, "skipping malformed trace line");
                        self.stats.record_skip();
                    }
                },
            }
        }
        Ok(records)
    }

    /// The cache being simulated.
    pub const fn cache(&self) -> &SetAssociativeCache {
        &self.cache
    }

    /// The cache geometry.
    pub const fn geometry(&self) -> &Geometry {
        self.cache.geometry()
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
