//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Integer registers, program counter and the CSR bank.
//! 2. **System Integration:** The bus and the RAM device behind it.
//! 3. **Observability:** Per-run statistics and the instruction trace switch.

/// Control and Status Register access.
pub mod csr;

/// Fetch-decode-execute loop.
pub mod execution;

/// Per-instruction handlers.
mod execute;

/// Memory access helpers and image loading.
pub mod memory;

use tracing::debug;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::csr::Csrs;
use crate::core::arch::trap::TrapCause;
use crate::isa::abi;
use crate::soc::{Bus, Memory};
use crate::stats::SimStats;

/// Outcome of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The instruction retired; keep running.
    Continue,
    /// The run is over: the all-zero word was reached or PC was driven to 0.
    Halt,
    /// `ecall` or `ebreak` retired. Architectural state is unchanged apart
    /// from the PC advance.
    Trap(TrapCause),
}

/// Main CPU structure containing all processor state.
///
/// A `Cpu` is a single hart that exclusively owns its registers, CSRs and
/// bus. Every operation takes `&mut self` and runs to completion.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u64,
    /// Control and Status Registers.
    pub csrs: Csrs,
    /// System bus and devices.
    pub bus: Bus,
    /// Execution statistics.
    pub stats: SimStats,
    /// Log every retired instruction at `trace` level.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with RAM mapped as described by `config`.
    ///
    /// All registers are zero except `sp`, which points one past the end of
    /// RAM. The PC starts at the RAM base.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration; only `memory` and
    ///   `general.trace_instructions` are consulted.
    pub fn new(config: &Config) -> Self {
        let mem = config.memory;
        let mut bus = Bus::new();
        bus.add_device(Box::new(Memory::new(mem.ram_base, mem.ram_size)));

        let mut regs = RegisterFile::new();
        regs.write(abi::REG_SP, mem.ram_end());

        debug!(
            ram_base = format_args!("{:#x}", mem.ram_base),
            ram_size = mem.ram_size,
            "cpu reset"
        );

        Self {
            regs,
            pc: mem.ram_base,
            csrs: Csrs::new(),
            bus,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
