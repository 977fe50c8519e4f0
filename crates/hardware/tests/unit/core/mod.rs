//! # Core Tests
//!
//! Instruction semantics exercised through full fetch-decode-execute cycles.

/// Integer arithmetic, logic, shifts and word forms.
pub mod alu;






/// Register file and `x0` behavior.
pub mod registers;
