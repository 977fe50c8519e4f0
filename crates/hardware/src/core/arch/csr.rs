//! Control and Status Register (CSR) bank.
//!
//! This module provides:
//! 1. **Address Definitions:** Constants for the standard machine-mode and counter CSRs.
//! 2. **Register Storage:** `Csrs`, a dense 4096-entry bank indexed by the 12-bit CSR field.
//! 3. **Naming:** ABI names for the disassembler.
//!
//! No CSR has side effects in this core; every entry is plain 64-bit storage.

use crate::common::constants::NUM_CSRS;

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u16 = 0x001;
/// Floating-point rounding mode CSR address.
pub const FRM: u16 = 0x002;
/// Floating-point control and status CSR address.
pub const FCSR: u16 = 0x003;

/// Supervisor status register CSR address.
pub const SSTATUS: u16 = 0x100;
/// Supervisor trap vector base address CSR address.
pub const STVEC: u16 = 0x105;
/// Supervisor scratch register CSR address.
pub const SSCRATCH: u16 = 0x140;
/// Supervisor exception program counter CSR address.
pub const SEPC: u16 = 0x141;
/// Supervisor cause register CSR address.
pub const SCAUSE: u16 = 0x142;
/// Supervisor address translation and protection CSR address.
pub const SATP: u16 = 0x180;

/// Machine status register CSR address.
pub const MSTATUS: u16 = 0x300;
/// Machine ISA register CSR address.
pub const MISA: u16 = 0x301;
/// Machine interrupt enable register CSR address.
pub const MIE: u16 = 0x304;
/// Machine trap vector base address register CSR address.
pub const MTVEC: u16 = 0x305;
/// Machine scratch register CSR address.
pub const MSCRATCH: u16 = 0x340;
/// Machine exception program counter CSR address.
pub const MEPC: u16 = 0x341;
/// Machine cause register CSR address.
pub const MCAUSE: u16 = 0x342;
/// Machine trap value register CSR address.
pub const MTVAL: u16 = 0x343;
/// Machine interrupt pending register CSR address.
pub const MIP: u16 = 0x344;

/// Cycle counter (user read-only shadow) CSR address.
pub const CYCLE: u16 = 0xC00;
/// Timer (user read-only shadow) CSR address.
pub const TIME: u16 = 0xC01;
/// Instructions-retired counter (user read-only shadow) CSR address.
pub const INSTRET: u16 = 0xC02;

/// Machine hardware thread ID CSR address.
pub const MHARTID: u16 = 0xF14;

/// Mask selecting the 12-bit CSR index.
pub const CSR_ADDR_MASK: u16 = 0xFFF;

/// Returns the canonical name of a well-known CSR, if any.
pub const fn name(addr: u16) -> Option<&'static str> {
    Some(match addr {
        FFLAGS => "fflags",
        FRM => "frm",
        FCSR => "fcsr",
        SSTATUS => "sstatus",
        STVEC => "stvec",
        SSCRATCH => "sscratch",
        SEPC => "sepc",
        SCAUSE => "scause",
        SATP => "satp",
        MSTATUS => "mstatus",
        MISA => "misa",
        MIE => "mie",
        MTVEC => "mtvec",
        MSCRATCH => "mscratch",
        MEPC => "mepc",
        MCAUSE => "mcause",
        MTVAL => "mtval",
        MIP => "mip",
        CYCLE => "cycle",
        TIME => "time",
        INSTRET => "instret",
        MHARTID => "mhartid",
        _ => return None,
    })
}

/// Dense CSR bank.
///
/// Index 0..4096 maps one-to-one onto the 12-bit CSR address space. Accesses
/// go through `get`/`get_mut`, so an out-of-range index reports `None`
/// instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Csrs {
    regs: Box<[u64]>,
}

impl Default for Csrs {
    fn default() -> Self {
        Self::new()
    }
}

impl Csrs {
    /// Creates a bank with every CSR set to zero.
    pub fn new() -> Self {
        Self {
            regs: vec![0; NUM_CSRS].into_boxed_slice(),
        }
    }

    /// Reads a CSR, or `None` if `addr` is outside the bank.
    #[inline]
    pub fn read(&self, addr: u16) -> Option<u64> {
        self.regs.get(usize::from(addr)).copied()
    }

    /// Writes a CSR. Returns `false` if `addr` is outside the bank.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u64) -> bool {
        match self.regs.get_mut(usize::from(addr)) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Number of entries in the bank.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Always `false`; the bank is never empty.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }
}
