//! RISC-V Atomic Extension (A) Opcodes.

/// Atomic Memory Operation major opcode.
/// Shared by LR, SC and every AMO.
pub const OP_AMO: u32 = 0b0101111;
