//! Global Constants.
//!
//! Instruction-level and architectural constants shared by the decoder,
//! the executor, and the run loop.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Required alignment of every control-transfer target.
///
/// No compressed extension is modeled, so targets must be word aligned.
pub const TARGET_ALIGN_MASK: u64 = 0x3;

/// Number of general-purpose integer registers.
pub const NUM_GPRS: usize = 32;

/// Number of addressable CSRs (12-bit CSR index).
pub const NUM_CSRS: usize = 4096;

/// Instruction word that halts the run loop.
///
/// The all-zero word is a reserved illegal encoding in RISC-V; binaries
/// padded with zeroes stop here instead of faulting.
pub const HALT_INSTRUCTION: u32 = 0;

/// Program counter value that halts the run loop.
pub const HALT_PC: u64 = 0;
