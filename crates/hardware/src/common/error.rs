//! Error definitions for the cache simulator.
//!
//! This module defines every recoverable failure the simulator reports. It provides:
//! 1. **Configuration Errors:** Inconsistent cache geometry or an unknown replacement policy.
//! 2. **Parse Errors:** Malformed hexadecimal address text on a single trace line.
//! 3. **Driver Errors:** Failures raised while running a whole trace (I/O, parse abort).
//!
//! Passing an out-of-range set index to the cache is a caller defect and is not
//! represented here; it panics.

use std::io;
use std::path::PathBuf;

/// Fatal configuration error raised before any cache state exists.
///
/// Every variant carries the offending values so the message is actionable
/// without consulting the configuration source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Address width outside the supported `1..=64` range.
    #[error("address width of {address_bits} bits is outside the supported range 1..=64")]
    AddressBits {
        /// Requested address width.
        address_bits: u32,
    },

    /// Block size is zero or not a power of two.
    #[error("block size {block_size} is not a power of two")]
    BlockSizeNotPowerOfTwo {
        /// Requested block size in bytes.
        block_size: u64,
    },

    /// Block count is zero or not a power of two.
    #[error("block count {block_count} is not a power of two")]
    BlockCountNotPowerOfTwo {
        /// Requested number of blocks.
        block_count: u64,
    },

    /// Associativity of zero ways.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,

    /// Associativity does not evenly divide the block count.
    #[error("associativity {associativity} does not divide block count {block_count}")]
    AssociativityDoesNotDivide {
        /// Requested associativity.
        associativity: u64,
        /// Requested number of blocks.
        block_count: u64,
    },

    /// The derived set count cannot be addressed by a whole number of index bits.
    #[error("set count {set_count} is not a power of two")]
    SetCountNotPowerOfTwo {
        /// Derived `block_count / associativity`.
        set_count: u64,
    },

    /// Index and offset fields together are wider than the address.
    #[error(
        "index ({index_bits} bits) and offset ({offset_bits} bits) do not fit in a {address_bits}-bit address"
    )]
    NegativeTagWidth {
        /// Requested address width.
        address_bits: u32,
        /// Derived index width.
        index_bits: u32,
        /// Derived offset width.
        offset_bits: u32,
    },

    /// Replacement policy name is not one of `LRU`, `MRU`, `LOOKAHEAD`.
    #[error("unknown replacement policy `{name}` (expected LRU, MRU or LOOKAHEAD)")]
    UnknownPolicy {
        /// The name as supplied.
        name: String,
    },

    /// A JSON configuration document could not be deserialized.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Malformed address text on a single trace line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing left to parse once whitespace and the marker were stripped.
    #[error("empty address")]
    Empty,

    /// A character outside `[0-9a-fA-F]` after the marker.
    #[error("`{text}` is not a hexadecimal address")]
    InvalidDigit {
        /// The trimmed input text.
        text: String,
    },

    /// More significant digits than fit in 64 bits.
    #[error("`{text}` does not fit in 64 bits")]
    Overflow {
        /// The trimmed input text.
        text: String,
    },
}

/// Failure while reading a trace source.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The trace file or stream could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure while driving a full simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A trace line was malformed and the run was configured to abort.
    #[error("trace line {line}: {source}")]
    Parse {
        /// 1-based line number within the trace.
        line: usize,
        /// The parse failure.
        #[source]
        source: ParseError,
    },

    /// The trace could not be read.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Results could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}
