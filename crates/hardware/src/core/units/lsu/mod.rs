//! Load/Store Unit (LSU).
//!
//! Address generation and value extension for loads, stores and AMOs.
//! - [`atomic`]: Read-modify-write ALU for the RISC-V A extension.

/// Atomic memory operation ALU (RISC-V A extension).
pub mod atomic;

use crate::common::data::AccessSize;
use crate::isa::instruction::AmoOp;

/// Load/Store Unit.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Effective address `base + offset`, wrapping at 64 bits.
    #[inline]
    pub const fn effective_address(base: u64, offset: i64) -> u64 {
        base.wrapping_add(offset as u64)
    }

    /// Extends a raw loaded value to 64 bits.
    ///
    /// # Arguments
    ///
    /// * `size`   - Access width; bits above it in `raw` are ignored.
    /// * `signed` - Sign-extend (`lb`, `lh`, `lw`, `ld`) or zero-extend (`lbu`, `lhu`, `lwu`).
    /// * `raw`    - Value returned by the bus.
    #[inline]
    pub const fn extend(size: AccessSize, signed: bool, raw: u64) -> u64 {
        if signed {
            size.sign_extend(raw)
        } else {
            size.zero_extend(raw)
        }
    }

    /// Performs an atomic ALU operation. See [`atomic::atomic_alu`].
    #[inline]
    pub const fn atomic_alu(op: AmoOp, mem_val: u64, reg_val: u64, size: AccessSize) -> u64 {
        atomic::atomic_alu(op, mem_val, reg_val, size)
    }
}
