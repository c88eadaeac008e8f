//! Address and hex-field helpers.
//!
//! This module defines the strong address type used by the decoder and the
//! hex rendering shared by trace input and result output. It provides:
//! 1. **Type Safety:** `Address` keeps raw trace values apart from tags and indices.
//! 2. **Bit Masks:** Overflow-free low-bit masks for field widths up to 64 bits.
//! 3. **Rendering:** `Hex` formats any field with the trace marker convention (`x1A2B`).

use std::fmt;

use super::constants::ADDRESS_MARKER;

/// A memory address taken from a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u64);

impl Address {
    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the address with every bit at or above `bits` cleared.
    #[inline]
    pub const fn truncate(self, bits: u32) -> Self {
        Self(self.0 & low_mask(bits))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Hex(self.0).fmt(f)
    }
}

/// Returns a mask of the low `bits` bits.
///
/// `bits >= 64` yields `u64::MAX` instead of overflowing the shift.
#[inline]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Shifts right by `shift`, yielding zero once every bit has been shifted out.
#[inline]
pub const fn shr(value: u64, shift: u32) -> u64 {
    if shift >= u64::BITS { 0 } else { value >> shift }
}

/// Shifts left by `shift`, yielding zero once every bit has been shifted out.
#[inline]
pub const fn shl(value: u64, shift: u32) -> u64 {
    if shift >= u64::BITS { 0 } else { value << shift }
}

/// Display adapter rendering a field as upper-case hex behind the trace marker.
///
/// ```
/// use cachesim_core::common::addr::Hex;
///
/// assert_eq!(Hex(0x1a2b).to_string(), "x1A2B");
/// assert_eq!(Hex(0).to_string(), "x0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex(pub u64);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ADDRESS_MARKER}{:X}", self.0)
    }
}
