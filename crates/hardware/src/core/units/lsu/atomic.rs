//! Atomic memory operation ALU.
//!
//! Given the value read from memory and the `rs2` operand, computes the value
//! an AMO writes back. The register destination always receives the old
//! memory value, sign-extended for `.w`; that part is the executor's job.

use crate::common::data::AccessSize;
use crate::isa::instruction::AmoOp;

/// Combines the memory value with the register operand.
///
/// # Arguments
///
/// * `op`      - The atomic operation.
/// * `mem_val` - The value read from memory.
/// * `reg_val` - The value of `rs2`.
/// * `size`    - `Word` or `Double`.
///
/// # Returns
///
/// The value to store, already truncated to `size`.
pub const fn atomic_alu(op: AmoOp, mem_val: u64, reg_val: u64, size: AccessSize) -> u64 {
    let result = match op {
        AmoOp::Add => mem_val.wrapping_add(reg_val),
        AmoOp::Xor => mem_val ^ reg_val,
        AmoOp::And => mem_val & reg_val,
        AmoOp::Or => mem_val | reg_val,
    };
    size.zero_extend(result)
}
