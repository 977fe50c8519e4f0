//! ALU shift operations.
//!
//! Native shifts use the low 6 bits of the shift amount; word shifts use
//! the low 5 bits and sign-extend the 32-bit result.

use super::sign_extend_word;
use crate::isa::instruction::AluOp;

/// Shift amount mask for native 64-bit shifts.
const SHAMT_MASK: u64 = 0x3F;

/// Shift amount mask for word shifts.
const SHAMT_MASK_W: u64 = 0x1F;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`   - A shift variant; other variants yield `0`.
/// * `a`    - The value to be shifted.
/// * `b`    - The shift amount; only the low 6 (or 5) bits are used.
/// * `word` - Perform the 32-bit variant.
pub const fn execute(op: AluOp, a: u64, b: u64, word: bool) -> u64 {
    if word {
        let sh = (b & SHAMT_MASK_W) as u32;
        let a = a as u32;
        let result = match op {
            AluOp::Sll => a << sh,
            AluOp::Srl => a >> sh,
            AluOp::Sra => ((a as i32) >> sh) as u32,
            _ => 0,
        };
        return sign_extend_word(result);
    }
    let sh = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i64) >> sh) as u64,
        _ => 0,
    }
}
