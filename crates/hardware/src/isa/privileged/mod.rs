//! Privileged Architecture Definitions.
//!
//! # Modules
//!
//! - `cause`: Exception cause codes used to label faults and traps.
//! - `opcodes`: System instruction encodings (ECALL, EBREAK, xRET, CSR ops).

/// Exception cause code definitions.
pub mod cause;

/// System instruction opcodes and CSR function codes.
pub mod opcodes;
