//! Register File.
//!
//! `RegisterFile` is the interface the executor uses for integer register
//! access. It wraps the architectural [`Gpr`] storage and carries the
//! per-cycle `x0` normalization.

use std::fmt;

use crate::core::arch::gpr::Gpr;

/// Integer register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the register. `x0` reads as zero at the
    /// start of every cycle; within a cycle it holds whatever was written.
    #[inline]
    pub const fn read(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are accepted and discarded by the next
    /// [`hardwire_zero`](Self::hardwire_zero).
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, val);
    }

    /// Resets `x0` to zero.
    #[inline]
    pub const fn hardwire_zero(&mut self) {
        self.gpr.hardwire_zero();
    }

    /// Formats the register table: two registers per line, by ABI name.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.gpr, f)
    }
}
