//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides building blocks shared by the decoder, the cache, and the
//! trace driver. It includes:
//! 1. **Address Types:** A strong address type and overflow-free bit helpers.
//! 2. **Constants:** Output markers and table layout.
//! 3. **Error Handling:** Configuration, parse, trace, and driver error types.

/// Address type and hex rendering.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{Address, Hex};
pub use error::{ConfigError, ParseError, SimError, TraceError};
