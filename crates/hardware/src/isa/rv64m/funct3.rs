//! RISC-V M-Extension Function Codes (funct3).
//!
//! Identifies the multiply or divide operation when `funct7 == M_EXTENSION`.
//! Under `OP_REG_32` only MUL, DIV, DIVU, REM and REMU exist (as the `w` forms).

/// Multiply, lower 64 bits (MULW: lower 32 bits, sign-extended).
pub const MUL: u32 = 0b000;
/// Multiply High (signed x signed).
pub const MULH: u32 = 0b001;
/// Multiply High Signed/Unsigned.
pub const MULHSU: u32 = 0b010;
/// Multiply High Unsigned.
pub const MULHU: u32 = 0b011;
/// Divide (signed).
pub const DIV: u32 = 0b100;
/// Divide Unsigned.
pub const DIVU: u32 = 0b101;
/// Remainder (signed).
pub const REM: u32 = 0b110;
/// Remainder Unsigned.
pub const REMU: u32 = 0b111;
