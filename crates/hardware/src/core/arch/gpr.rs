//! RISC-V General-Purpose Register File.
//!
//! Maintains the 32 integer registers (`x0`-`x31`). Register `x0` is not
//! write-protected here: writes land in storage and are discarded by
//! [`Gpr::hardwire_zero`], which the CPU calls at the start of every decode
//! cycle.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::isa::abi;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads a register. Indices are masked to 5 bits.
    #[inline]
    pub const fn read(&self, idx: usize) -> u64 {
        self.regs[idx & (NUM_GPRS - 1)]
    }

    /// Writes a register. Indices are masked to 5 bits.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx & (NUM_GPRS - 1)] = val;
    }

    /// Forces `x0` back to zero.
    #[inline]
    pub const fn hardwire_zero(&mut self) {
        self.regs[abi::REG_ZERO] = 0;
    }
}

impl fmt::Display for Gpr {
    /// Two registers per line, ABI name and index, hexadecimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "x{:<2} {:>4} = {:#018x}    x{:<2} {:>4} = {:#018x}",
                i,
                abi::name(i),
                self.regs[i],
                i + 1,
                abi::name(i + 1),
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
