//! Fault definitions.
//!
//! A `Fault` ends the current run. This core has no trap model, so there is no
//! recovery path: the executor validates addresses and targets before it
//! commits any register, CSR, PC or memory write, and a faulting instruction
//! leaves the CPU state exactly as it was before the instruction began.
//!
//! Faults fall into three kinds:
//! 1. **Decode faults:** unrecognized encodings and recognized-but-unimplemented ones.
//! 2. **Address faults:** bus accesses not fully inside a mapped device.
//! 3. **Alignment faults:** control-transfer targets that are not word aligned.

use thiserror::Error;

use super::data::{AccessSize, AccessType};
use crate::isa::privileged::cause::exception;

/// Terminal execution fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The `(opcode, funct3, funct7)` combination does not name an instruction.
    ///
    /// The associated value is the raw instruction word.
    #[error("illegal instruction {0:#010x}")]
    IllegalInstruction(u32),

    /// The instruction is recognized but this core does not execute it.
    #[error("unimplemented instruction `{mnemonic}` ({raw:#010x})")]
    Unimplemented {
        /// Raw instruction word.
        raw: u32,
        /// Mnemonic of the recognized instruction.
        mnemonic: &'static str,
    },

    /// A load, store or fetch touched bytes outside every mapped device.
    #[error("address fault: {bits}-bit {access} at {addr:#x}", bits = .size.bits())]
    AddressFault {
        /// First byte of the access.
        addr: u64,
        /// Width of the access.
        size: AccessSize,
        /// Kind of access.
        access: AccessType,
    },

    /// A jump or taken branch computed a target that is not a multiple of 4.
    ///
    /// The associated value is the rejected target address.
    #[error("misaligned control-transfer target {0:#x}")]
    MisalignedTarget(u64),
}

impl Fault {
    /// Returns `true` for both kinds of decode fault.
    pub const fn is_decode_fault(&self) -> bool {
        matches!(self, Self::IllegalInstruction(_) | Self::Unimplemented { .. })
    }

    /// Returns `true` for bus address faults.
    pub const fn is_address_fault(&self) -> bool {
        matches!(self, Self::AddressFault { .. })
    }

    /// Returns `true` for control-transfer alignment faults.
    pub const fn is_alignment_fault(&self) -> bool {
        matches!(self, Self::MisalignedTarget(_))
    }

    /// Exception code a privileged implementation would report for this fault.
    pub const fn exception_code(&self) -> u64 {
        match self {
            Self::IllegalInstruction(_) | Self::Unimplemented { .. } => {
                exception::ILLEGAL_INSTRUCTION
            }
            Self::AddressFault { access, .. } => match access {
                AccessType::Fetch => exception::INSTRUCTION_ACCESS_FAULT,
                AccessType::Read => exception::LOAD_ACCESS_FAULT,
                AccessType::Write => exception::STORE_ACCESS_FAULT,
            },
            Self::MisalignedTarget(_) => exception::INSTRUCTION_ADDRESS_MISALIGNED,
        }
    }
}
