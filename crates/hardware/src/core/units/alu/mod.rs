//! Arithmetic Logic Unit (ALU).
//!
//! The integer datapath shared by `OP`, `OP-IMM`, their 32-bit word forms
//! and the RV64M multiply/divide instructions.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra
//!
//! Word forms compute in 32-bit two's complement and sign-extend the 32-bit
//! result to 64 bits.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::AluOp;

/// Sign-extends a 32-bit word result to 64 bits.
#[inline(always)]
pub const fn sign_extend_word(val: u32) -> u64 {
    val as i32 as i64 as u64
}

/// Integer Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform.
    /// * `a`    - First operand (`rs1`).
    /// * `b`    - Second operand (`rs2`, the sign-extended immediate, or the shift amount).
    /// * `word` - Perform the 32-bit `*w` variant.
    ///
    /// # Returns
    ///
    /// The 64-bit result. For word operations the result is sign-extended
    /// from bit 31.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvemu_core::core::units::alu::Alu;
    /// use rvemu_core::isa::instruction::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8, false), 50);
    /// // addw wraps at 32 bits and sign-extends.
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1, true), 0xFFFF_FFFF_8000_0000);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i64 as u64, 10, false), 1);
    /// ```
    pub const fn execute(op: AluOp, a: u64, b: u64, word: bool) -> u64 {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Rem
            | AluOp::Remu => arithmetic::execute(op, a, b, word),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b, word)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, word),
        }
    }
}
