//! RISC-V Multiply/Divide Extension (M).
//!
//! # Structure
//!
//! - `opcodes`: The `funct7` selector shared with `OP_REG`/`OP_REG_32`.
//! - `funct3`: Function codes identifying specific M-ops (MUL, DIV, etc.).

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Multiply/divide extension selector.
pub mod opcodes;
