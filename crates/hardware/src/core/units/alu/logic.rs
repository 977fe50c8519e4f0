//! ALU logical and comparison operations.
//!
//! Bitwise OR, AND, XOR and set-less-than. Comparisons yield 0 or 1.

use super::sign_extend_word;
use crate::isa::instruction::AluOp;

/// Executes a logical or comparison operation.
///
/// RV64 has no word forms of these operations; `word` is still honored so
/// the unit is total, comparing the low 32 bits and sign-extending bitwise
/// results from bit 31.
pub const fn execute(op: AluOp, a: u64, b: u64, word: bool) -> u64 {
    if word {
        let (a, b) = (a as u32, b as u32);
        let result = match op {
            AluOp::Or => a | b,
            AluOp::And => a & b,
            AluOp::Xor => a ^ b,
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sltu => (a < b) as u32,
            _ => 0,
        };
        return sign_extend_word(result);
    }
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i64) < (b as i64)) as u64,
        AluOp::Sltu => (a < b) as u64,
        _ => 0,
    }
}
