//! Instruction Set Architecture (ISA) Definitions.
//!
//! Field extraction, immediate reconstruction, the opcode dispatcher and the
//! disassembler, plus encoding constants organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit).
//! * `rv64m`: Integer Multiplication and Division.
//! * `rv64a`: Atomic Memory Operations (add/xor/and/or executed, the rest recognized).
//! * `privileged`: System instructions, Zicsr function codes and cause codes.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Immediate decoders and the opcode/funct dispatcher.
pub mod decode;

/// Instruction disassembler for trace logging and diagnostics.
pub mod disasm;

/// Field extraction and the decoded `Instruction` model.
pub mod instruction;

/// Privileged architecture definitions (system opcodes, cause codes).
pub mod privileged;

/// Atomic memory operations extension.
pub mod rv64a;

/// Base integer instruction set.
pub mod rv64i;

/// Integer multiply/divide extension.
pub mod rv64m;
