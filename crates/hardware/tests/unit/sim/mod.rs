//! Trace driver unit tests.


/// End-to-end runs, parse-error handling, and statistics.
pub mod simulator;
