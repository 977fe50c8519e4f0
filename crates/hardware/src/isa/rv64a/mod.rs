//! RISC-V Atomic Extension (A).
//!
//! Constants for Atomic Memory Operations. The `aq`/`rl` ordering bits
//! (bits 26-25) are accepted and ignored on a single hart.

/// Function code 3 definitions (operation width).
pub mod funct3;

/// Function code 5 definitions (operation kind).
pub mod funct5;

/// Atomic extension major opcode.
pub mod opcodes;
