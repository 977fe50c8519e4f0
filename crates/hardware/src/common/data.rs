//! Memory Access Types.
//!
//! This module defines the classification of memory accesses:
//! 1. **Access Kind:** Fetch, read, or write; carried by faults for reporting.
//! 2. **Access Size:** The four architectural widths (8/16/32/64 bits) and the
//!    masking and sign-extension rules tied to each width.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    Fetch,

    /// Data read access (loads and the read half of an AMO).
    Read,

    /// Data write access (stores and the write half of an AMO).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Width of a single bus access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessSize {
    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,

    /// 64-bit double-word access.
    Double,
}

impl AccessSize {
    /// All access sizes, narrowest first.
    pub const ALL: [Self; 4] = [Self::Byte, Self::Half, Self::Word, Self::Double];

    /// Returns the access width in bits (8, 16, 32 or 64).
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }

    /// Returns the access width in bytes.
    #[inline]
    pub const fn bytes(self) -> u64 {
        (self.bits() / 8) as u64
    }

    /// Returns a mask covering the low `bits()` bits of a 64-bit value.
    #[inline]
    pub const fn mask(self) -> u64 {
        match self {
            Self::Double => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// Sign-extends the low `bits()` bits of `val` to 64 bits.
    #[inline]
    pub const fn sign_extend(self, val: u64) -> u64 {
        match self {
            Self::Byte => val as i8 as i64 as u64,
            Self::Half => val as i16 as i64 as u64,
            Self::Word => val as i32 as i64 as u64,
            Self::Double => val,
        }
    }

    /// Zero-extends the low `bits()` bits of `val` to 64 bits.
    #[inline]
    pub const fn zero_extend(self, val: u64) -> u64 {
        val & self.mask()
    }
}
