//! Core processor implementation.
//!
//! This module contains the hart: its architectural state, the
//! fetch-decode-execute loop, and the stateless execution units it drives.

/// Architecture-specific components (CSRs, register files, trap causes).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
