//! Trace-driven simulation.
//!
//! Provides the driver that feeds a trace through the decoder and the cache,
//! together with trace loading and result rendering.

/// Result rendering (table and JSON).
pub mod report;

/// Simulator: decoder + cache + statistics.
pub mod simulator;

/// Trace file and stream loading.
pub mod trace;

pub use simulator::{AccessRecord, ParseErrorPolicy, Simulator};
