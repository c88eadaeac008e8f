//! Global simulator constants.

/// Marker character written in front of hex fields in rendered results.
///
/// Trace input accepts any single non-hex marker (or `0x`); output always uses this one.
pub const ADDRESS_MARKER: char = 'x';

/// Header row of the tab-separated result table.
pub const TABLE_HEADER: &str = "Index\tTag\tHit/Miss";

/// Rendering of a hit in result records.
pub const HIT_SYMBOL: &str = "H";

/// Rendering of a miss in result records.
pub const MISS_SYMBOL: &str = "M";
