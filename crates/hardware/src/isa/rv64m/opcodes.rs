//! RISC-V Multiply/Divide Extension (M) selector.
//!
//! The M extension reuses the `OP_REG` and `OP_REG_32` major opcodes and is
//! told apart from base integer arithmetic by `funct7 == 1`.

/// M-Extension selector in the funct7 field.
pub const M_EXTENSION: u32 = 0b0000001;
