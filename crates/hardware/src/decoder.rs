//! Address Decoder.
//!
//! This module translates trace addresses into the three fields a set-associative
//! cache uses: the block `offset` (low bits), the set `index` (middle bits), and the
//! `tag` (remaining high bits). Everything here is a pure function of the
//! [`Geometry`] and the input; there is no state.
//!
//! Address bits at or above `address_bits` are dropped by the field masks rather
//! than rejected, so `reassemble(split(a)) == a & low_mask(address_bits)`.

use crate::common::addr::{Address, low_mask, shl, shr};
use crate::common::error::ParseError;
use crate::config::Geometry;

/// Radix of trace addresses.
const ADDRESS_RADIX: u32 = 16;

/// An address split into cache fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    /// High-order bits identifying the block within its set.
    pub tag: u64,
    /// Set selected by the address; always `< set_count`.
    pub index: usize,
    /// Byte within the block; always `< block_size`.
    pub offset: u64,
}

impl DecodedAddress {
    /// Rebuilds the address from its fields.
    ///
    /// The result is masked to `address_bits`, so it equals the original address
    /// whenever that address fit in the configured width.
    pub const fn reassemble(&self, geometry: &Geometry) -> Address {
        let offset_bits = geometry.offset_bits();
        let index_shift = offset_bits;
        let tag_shift = offset_bits + geometry.index_bits();
        let raw = shl(self.tag, tag_shift) | shl(self.index as u64, index_shift) | self.offset;
        Address(raw).truncate(geometry.address_bits())
    }
}

/// Splits a numeric address into `(tag, index, offset)`.
///
/// # Arguments
///
/// * `geometry` - Validated geometry supplying the field widths.
/// * `address` - Raw address; bits at or above `address_bits` are ignored.
///
/// # Returns
///
/// The decoded fields, with `offset < block_size` and `index < set_count`.
pub const fn split(geometry: &Geometry, address: Address) -> DecodedAddress {
    let addr = address.val();
    let offset_bits = geometry.offset_bits();
    let index_bits = geometry.index_bits();

    let offset = addr & low_mask(offset_bits);
    let index = shr(addr, offset_bits) & low_mask(index_bits);
    let tag = shr(addr, offset_bits + index_bits) & low_mask(geometry.tag_bits());

    DecodedAddress {
        tag,
        index: index as usize,
        offset,
    }
}

/// Parses hexadecimal address text.
///
/// Surrounding whitespace is ignored. A leading `0x`/`0X`, or else a single leading
/// marker character that is not a hex digit (`x1A2B`, `#1A2B`), is stripped before
/// the digits are read.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] if no digits remain, [`ParseError::InvalidDigit`] if
/// any remaining character is not a hex digit, and [`ParseError::Overflow`] if the
/// value does not fit in 64 bits.
///
/// # Examples
///
/// ```
/// use cachesim_core::common::Address;
/// use cachesim_core::decoder::parse_address;
///
/// assert_eq!(parse_address("x1A2B"), Ok(Address(0x1a2b)));
/// assert_eq!(parse_address("  0xff \n"), Ok(Address(0xff)));
/// assert!(parse_address("xZZ").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address, ParseError> {
    let trimmed = text.trim();
    let digits = strip_marker(trimmed);

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidDigit {
            text: trimmed.to_owned(),
        });
    }

    // Only overflow is left once every digit is known to be hex.
    u64::from_str_radix(digits, ADDRESS_RADIX)
        .map(Address)
        .map_err(|_| ParseError::Overflow {
            text: trimmed.to_owned(),
        })
}

/// Parses and splits one trace entry.
///
/// # Errors
///
/// See [`parse_address`].
pub fn decode(geometry: &Geometry, text: &str) -> Result<DecodedAddress, ParseError> {
    parse_address(text).map(|address| split(geometry, address))
}

fn strip_marker(text: &str) -> &str {
    if let Some(rest) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return rest;
    }
    match text.chars().next() {
        Some(c) if !c.is_ascii_hexdigit() && !c.is_whitespace() => &text[c.len_utf8()..],
        _ => text,
    }
}
