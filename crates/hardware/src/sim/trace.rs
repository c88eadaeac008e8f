//! Trace Loading.
//!
//! This module reads address traces line by line. It performs:
//! 1. **File loading:** Reads a whole trace file into memory.
//! 2. **Stream reading:** Collects lines from any buffered reader (stdin, sockets, buffers).
//!
//! Lines are returned verbatim; trimming, blank-line skipping, and parsing belong to
//! the [`Simulator`](super::Simulator).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::error::TraceError;

/// Reads every line from `reader`.
///
/// # Errors
///
/// Returns [`TraceError::Io`] on the first read failure, including invalid UTF-8.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<String>, TraceError> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Loads a trace file from disk.
///
/// # Arguments
///
/// * `path` - Trace file, one address per line.
///
/// # Returns
///
/// Every line of the file, verbatim and in order.
///
/// # Errors
///
/// Returns [`TraceError::Io`] if the file cannot be opened or read.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<String>, TraceError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lines = read_trace(BufReader::new(file))?;
    debug!(path = %path.display(), lines = lines.len(), "trace loaded");
    Ok(lines)
}
