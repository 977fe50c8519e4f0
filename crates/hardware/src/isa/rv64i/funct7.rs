//! RISC-V Base Integer (I) Function Codes (funct7 / funct6).
//!
//! `funct7` (bits 31-25) separates R-type operations that share a `funct3`.
//! Native 64-bit immediate shifts carry a 6-bit shift amount, so only the
//! upper six bits (`funct6`, bits 31-26) select the operation there.

/// Default operation (ADD, SRL, SLLW, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SUBW, SRAW, SRAIW).
pub const ALT: u32 = 0b0100000;

/// `funct6` of SLLI and SRLI.
pub const SHIFT_LOGICAL: u32 = 0b000000;

/// `funct6` of SRAI.
pub const SHIFT_ARITH: u32 = 0b010000;
