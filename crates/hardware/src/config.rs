//! Configuration system for the cache simulator.
//!
//! This module defines the structures used to parameterize a simulated cache. It provides:
//! 1. **Defaults:** Baseline geometry used when a field is not supplied.
//! 2. **Structures:** `CacheConfig` (raw, deserializable) and `Geometry` (validated, derived widths).
//! 3. **Enums:** The closed set of replacement policies.
//!
//! Configuration is supplied as JSON (`CacheConfig::from_json`, `CacheConfig::load`) or
//! assembled field by field by the CLI. Validation happens once, in `Geometry::new`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// Applied to any field missing from a JSON document.
mod defaults {
    /// Address width in bits (4 GiB address space).
    pub const ADDRESS_BITS: u32 = 32;

    /// Block (line) size in bytes.
    pub const BLOCK_SIZE: u64 = 16;

    /// Total number of blocks in the cache.
    pub const BLOCK_COUNT: u64 = 64;

    /// Ways per set (2-way set-associative).
    pub const ASSOCIATIVITY: u64 = 2;
}

/// Cache replacement policy algorithms.
///
/// Specifies the rule used to select which resident line to evict when a
/// new tag must be installed in a full set. Parsed once, at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the line with the smallest recency stamp.
    #[default]
    Lru,
    /// Most Recently Used replacement policy.
    ///
    /// Evicts the line with the largest recency stamp.
    Mru,
    /// Lookahead replacement policy.
    ///
    /// Named for future-reference replacement but currently selects the same
    /// victim as `Lru`; no future trace entries are consulted.
    Lookahead,
}

impl ReplacementPolicy {
    /// All policies, in declaration order.
    pub const ALL: [Self; 3] = [Self::Lru, Self::Mru, Self::Lookahead];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Mru => "MRU",
            Self::Lookahead => "LOOKAHEAD",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Parses a policy name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownPolicy {
                name: name.to_owned(),
            })
    }
}

impl TryFrom<String> for ReplacementPolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Raw cache configuration as supplied by the user.
///
/// Nothing here is validated; call [`CacheConfig::geometry`] (or construct a cache,
/// which does so) to check the fields are mutually consistent.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy};
///
/// let json = r#"{
///     "address_bits": 16,
///     "block_size": 8,
///     "block_count": 32,
///     "associativity": 4,
///     "policy": "MRU"
/// }"#;
///
/// let config = CacheConfig::from_json(json).unwrap();
/// assert_eq!(config.policy, ReplacementPolicy::Mru);
///
/// let geometry = config.geometry().unwrap();
/// assert_eq!(geometry.set_count(), 8);
/// assert_eq!(geometry.tag_bits(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Width of an address in bits.
    #[serde(default = "CacheConfig::default_address_bits")]
    pub address_bits: u32,

    /// Block size in bytes (power of two).
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u64,

    /// Total number of blocks (power of two).
    #[serde(default = "CacheConfig::default_block_count")]
    pub block_count: u64,

    /// Number of ways per set; must divide `block_count`.
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u64,

    /// Replacement policy applied within a full set.
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    fn default_address_bits() -> u32 {
        defaults::ADDRESS_BITS
    }

    fn default_block_size() -> u64 {
        defaults::BLOCK_SIZE
    }

    fn default_block_count() -> u64 {
        defaults::BLOCK_COUNT
    }

    fn default_associativity() -> u64 {
        defaults::ASSOCIATIVITY
    }

    /// Creates a configuration from explicit values.
    pub const fn new(
        address_bits: u32,
        block_size: u64,
        block_count: u64,
        associativity: u64,
        policy: ReplacementPolicy,
    ) -> Self {
        Self {
            address_bits,
            block_size,
            block_count,
            associativity,
            policy,
        }
    }

    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields take their defaults; an unknown policy name is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or a field has the
    /// wrong type or value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and deserializes a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if its contents are rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Validates the geometry fields.
    ///
    /// # Errors
    ///
    /// See [`Geometry::new`].
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(
            self.address_bits,
            self.block_size,
            self.block_count,
            self.associativity,
        )
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            address_bits: defaults::ADDRESS_BITS,
            block_size: defaults::BLOCK_SIZE,
            block_count: defaults::BLOCK_COUNT,
            associativity: defaults::ASSOCIATIVITY,
            policy: ReplacementPolicy::default(),
        }
    }
}

/// Validated cache geometry with the derived address field widths.
///
/// Immutable once constructed. The address is split, from the low end, into
/// `offset_bits`, `index_bits`, and `tag_bits`, which sum to `address_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    address_bits: u32,
    block_size: u64,
    block_count: u64,
    associativity: u64,
    set_count: u64,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
}

impl Geometry {
    /// Validates the parameters and derives the field widths.
    ///
    /// # Arguments
    ///
    /// * `address_bits` - Width of an address, `1..=64`.
    /// * `block_size` - Bytes per block (power of two).
    /// * `block_count` - Total blocks in the cache (power of two).
    /// * `associativity` - Ways per set; must divide `block_count`.
    ///
    /// # Returns
    ///
    /// The geometry with `set_count`, `offset_bits`, `index_bits`, and `tag_bits` derived.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the address width is outside `1..=64`, the block
    /// size or count is not a power of two, the associativity is zero or does not
    /// divide the block count, the set count is not a power of two, or the index and
    /// offset fields leave a negative tag width.
    pub fn new(
        address_bits: u32,
        block_size: u64,
        block_count: u64,
        associativity: u64,
    ) -> Result<Self, ConfigError> {
        if address_bits == 0 || address_bits > u64::BITS {
            return Err(ConfigError::AddressBits { address_bits });
        }
        if !block_size.is_power_of_two() {
            return Err(ConfigError::BlockSizeNotPowerOfTwo { block_size });
        }
        if !block_count.is_power_of_two() {
            return Err(ConfigError::BlockCountNotPowerOfTwo { block_count });
        }
        if associativity == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        if block_count % associativity != 0 {
            return Err(ConfigError::AssociativityDoesNotDivide {
                associativity,
                block_count,
            });
        }
        let set_count = block_count / associativity;
        if !set_count.is_power_of_two() {
            return Err(ConfigError::SetCountNotPowerOfTwo { set_count });
        }

        let offset_bits = block_size.trailing_zeros();
        let index_bits = set_count.trailing_zeros();
        let Some(tag_bits) = address_bits.checked_sub(offset_bits + index_bits) else {
            return Err(ConfigError::NegativeTagWidth {
                address_bits,
                index_bits,
                offset_bits,
            });
        };

        Ok(Self {
            address_bits,
            block_size,
            block_count,
            associativity,
            set_count,
            offset_bits,
            index_bits,
            tag_bits,
        })
    }

    /// Width of an address in bits.
    pub const fn address_bits(&self) -> u32 {
        self.address_bits
    }

    /// Block size in bytes.
    pub const fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Total number of blocks.
    pub const fn block_count(&self) -> u64 {
        self.block_count
    }

    /// Ways per set.
    pub const fn associativity(&self) -> u64 {
        self.associativity
    }

    /// Number of sets (`block_count / associativity`).
    pub const fn set_count(&self) -> u64 {
        self.set_count
    }

    /// `log2(block_size)`.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// `log2(set_count)`.
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// `address_bits - index_bits - offset_bits`.
    pub const fn tag_bits(&self) -> u32 {
        self.tag_bits
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-bit addresses, {} x {}B blocks, {}-way, {} sets (tag {} / index {} / offset {})",
            self.address_bits,
            self.block_count,
            self.block_size,
            self.associativity,
            self.set_count,
            self.tag_bits,
            self.index_bits,
            self.offset_bits
        )
    }
}
