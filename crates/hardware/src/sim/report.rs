//! Result Rendering.
//!
//! Writes per-access records either as the tab-separated table
//! (`Index\tTag\tHit/Miss`, one `x<INDEX>\tx<TAG>\t<H|M>` row per access) or as a
//! JSON array of `{"index", "tag", "outcome"}` objects.

use std::io::{self, Write};

use super::simulator::AccessRecord;
use crate::common::constants::TABLE_HEADER;

/// Writes the tab-separated result table, header first.
///
/// # Errors
///
/// Propagates any failure of `writer`.
pub fn write_table<W: Write>(mut writer: W, records: &[AccessRecord]) -> io::Result<()> {
    writeln!(writer, "{TABLE_HEADER}")?;
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()
}

/// Writes the records as a pretty-printed JSON array.
///
/// # Errors
///
/// Propagates any failure of `writer`.
pub fn write_json<W: Write>(mut writer: W, records: &[AccessRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()
}
