//! # ISA Unit Tests
//!
//! Instruction decoding and disassembly.

/// Immediate and field properties over arbitrary words.
pub mod decode_properties;

/// Dispatcher coverage: one case per routed `(opcode, funct3, funct7)`.
pub mod dispatch;
