//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches and validates control-transfer targets.
//! The run loop advances the PC before execution, so every target here is
//! computed relative to the instruction's own address, `pc - 4`.

use crate::common::constants::{INSTRUCTION_SIZE, TARGET_ALIGN_MASK};
use crate::common::error::Fault;
use crate::isa::instruction::BranchCond;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition.
    ///
    /// `Lt`/`Ge` compare as signed 64-bit integers, `Ltu`/`Geu` as unsigned.
    #[inline]
    pub const fn taken(cond: BranchCond, a: u64, b: u64) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i64) < (b as i64),
            BranchCond::Ge => (a as i64) >= (b as i64),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }

    /// Computes a PC-relative target for `jal` and taken branches.
    ///
    /// # Arguments
    ///
    /// * `pc`     - The program counter, already advanced past the instruction.
    /// * `offset` - The sign-extended byte offset from the instruction's address.
    ///
    /// # Returns
    ///
    /// `pc + offset - 4`, or [`Fault::MisalignedTarget`] if that is not a multiple of 4.
    #[inline]
    pub const fn relative_target(pc: u64, offset: i64) -> Result<u64, Fault> {
        Self::check_target(
            pc.wrapping_add(offset as u64)
                .wrapping_sub(INSTRUCTION_SIZE),
        )
    }

    /// Computes a `jalr` target: `(base + offset)` with bit 0 cleared.
    #[inline]
    pub const fn indirect_target(base: u64, offset: i64) -> Result<u64, Fault> {
        Self::check_target(base.wrapping_add(offset as u64) & !1)
    }

    /// Rejects targets that are not word aligned.
    #[inline]
    pub const fn check_target(target: u64) -> Result<u64, Fault> {
        if target & TARGET_ALIGN_MASK == 0 {
            Ok(target)
        } else {
            Err(Fault::MisalignedTarget(target))
        }
    }
}
