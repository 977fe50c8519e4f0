//! RISC-V architectural state.
//!
//! This module contains the architecturally visible storage of the hart:
//! 1. **CSRs:** The dense control and status register bank.
//! 2. **GPRs:** The integer register file.
//! 3. **Traps:** Causes reported for `ecall` and `ebreak`.

/// Control and Status Register (CSR) definitions and storage.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Trap cause definitions.
pub mod trap;
