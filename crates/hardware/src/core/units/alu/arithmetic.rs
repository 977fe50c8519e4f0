//! ALU arithmetic operations.
//!
//! Addition, subtraction and the M-extension multiply/divide family.
//!
//! Division never traps. Following the RISC-V M extension:
//! - Division by zero yields an all-ones quotient and returns the dividend as the remainder.
//! - Signed overflow (`MIN / -1`) yields `MIN` with a zero remainder.
//!
//! The word forms apply the same rules to the low 32 bits of each operand.

use super::sign_extend_word;
use crate::isa::instruction::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`   - An arithmetic variant; other variants yield `0`.
/// * `a`    - First operand.
/// * `b`    - Second operand.
/// * `word` - Perform the 32-bit variant and sign-extend its result.
pub const fn execute(op: AluOp, a: u64, b: u64, word: bool) -> u64 {
    if word {
        sign_extend_word(execute_word(op, a as u32, b as u32))
    } else {
        execute_dword(op, a, b)
    }
}

/// 64-bit arithmetic.
const fn execute_dword(op: AluOp, a: u64, b: u64) -> u64 {
    let (sa, sb) = (a as i64, b as i64);
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Mulh => ((sa as i128 * sb as i128) >> 64) as u64,
        AluOp::Mulhsu => ((sa as i128 * b as i128) >> 64) as u64,
        AluOp::Mulhu => ((a as u128 * b as u128) >> 64) as u64,
        AluOp::Div if b == 0 => u64::MAX,
        AluOp::Div => sa.wrapping_div(sb) as u64,
        AluOp::Divu if b == 0 => u64::MAX,
        AluOp::Divu => a / b,
        AluOp::Rem if b == 0 => a,
        AluOp::Rem => sa.wrapping_rem(sb) as u64,
        AluOp::Remu if b == 0 => a,
        AluOp::Remu => a % b,
        _ => 0,
    }
}

/// 32-bit arithmetic on the low words of the operands.
const fn execute_word(op: AluOp, a: u32, b: u32) -> u32 {
    let (sa, sb) = (a as i32, b as i32);
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Mulh => ((sa as i64 * sb as i64) >> 32) as u32,
        AluOp::Mulhsu => ((sa as i64 * b as i64) >> 32) as u32,
        AluOp::Mulhu => ((a as u64 * b as u64) >> 32) as u32,
        AluOp::Div if b == 0 => u32::MAX,
        AluOp::Div => sa.wrapping_div(sb) as u32,
        AluOp::Divu if b == 0 => u32::MAX,
        AluOp::Divu => a / b,
        AluOp::Rem if b == 0 => a,
        AluOp::Rem => sa.wrapping_rem(sb) as u32,
        AluOp::Remu if b == 0 => a,
        AluOp::Remu => a % b,
        _ => 0,
    }
}
