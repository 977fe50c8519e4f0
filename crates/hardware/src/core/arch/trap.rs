//! Trap causes.
//!
//! This core has no trap model: `ecall` and `ebreak` do not redirect control
//! or touch any CSR. They are still reported to the run loop through
//! [`Step::Trap`](crate::core::cpu::Step::Trap) so a caller can tell an
//! environment call apart from an ordinary instruction.

use std::fmt;

use crate::isa::privileged::cause::exception;

/// Synchronous trap requested by the executing program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapCause {
    /// `ecall` was executed.
    EnvironmentCall,
    /// `ebreak` was executed.
    Breakpoint,
}

impl TrapCause {
    /// Machine-mode exception code that a full trap model would write to `mcause`.
    pub const fn code(self) -> u64 {
        match self {
            Self::EnvironmentCall => exception::ENVIRONMENT_CALL_FROM_M_MODE,
            Self::Breakpoint => exception::BREAKPOINT,
        }
    }
}

impl fmt::Display for TrapCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentCall => write!(f, "environment call"),
            Self::Breakpoint => write!(f, "breakpoint"),
        }
    }
}
