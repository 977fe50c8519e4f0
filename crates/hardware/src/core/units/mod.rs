//! Execution units.
//!
//! The stateless functional units the executor composes: the integer ALU,
//! the branch resolution unit, and the load/store unit.

/// Arithmetic Logic Unit for integer and multiply/divide operations.
pub mod alu;

/// Branch Resolution Unit: conditions and target validation.
pub mod bru;

/// Load/Store Unit: address generation, extension, and AMO arithmetic.
pub mod lsu;
