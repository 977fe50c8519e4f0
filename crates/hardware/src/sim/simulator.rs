//! Simulator: drives a `Cpu` through whole runs.
//!
//! The simulator owns the CPU and an optional instruction budget. `run`
//! ticks until the program halts, a fault ends it, or the budget runs out.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::constants::HALT_PC;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::trap::TrapCause;
use crate::core::cpu::Step;
use crate::isa::abi;
use crate::sim::loader::{self, ImageKind, LoadError};

/// Why a run stopped without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The program executed the halt word or jumped to address 0.
    Halted,
    /// The instruction budget was used up first.
    BudgetExhausted,
}

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the run stopped.
    pub reason: StopReason,
    /// Instructions retired by this run, including `ecall`/`ebreak` and a
    /// final jump to 0, but not the halt word.
    pub instructions: u64,
    /// `ecall`/`ebreak` traps reported during this run.
    pub traps: u64,
    /// PC at the point the run stopped.
    pub pc: u64,
}

/// Top-level simulator: CPU state plus run limits.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, CSRs, bus, stats).
    pub cpu: Cpu,
    /// Maximum instructions per `run`; `None` is unlimited.
    pub max_instructions: Option<u64>,
}

impl Simulator {
    /// Creates a new simulator from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_instructions: config.general.max_instructions,
        }
    }

    /// Loads a program already in memory. See [`loader::load_program`].
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<ImageKind, LoadError> {
        loader::load_program(&mut self.cpu, bytes)
    }

    /// Reads a program file and loads it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<ImageKind, LoadError> {
        let bytes = loader::load_binary(path)?;
        self.load_program(&bytes)
    }

    /// Runs until halt, fault, or budget exhaustion.
    ///
    /// `ecall` and `ebreak` are logged with the syscall number (`a7`) and
    /// first argument (`a0`) and execution continues.
    ///
    /// # Returns
    ///
    /// A `RunSummary` on halt or budget exhaustion; the terminal `Fault`
    /// otherwise, with the PC left at the faulting instruction.
    pub fn run(&mut self) -> Result<RunSummary, Fault> {
        let mut instructions = 0;
        let mut traps = 0;
        debug!(pc = format_args!("{:#x}", self.cpu.pc), "run start");

        let reason = loop {
            if self.max_instructions.is_some_and(|max| instructions >= max) {
                warn!(instructions, "instruction budget exhausted");
                break StopReason::BudgetExhausted;
            }

            let step = self.cpu.tick()?;
            match step {
                Step::Continue => instructions += 1,
                Step::Halt => {
                    // A jump to 0 retired before halting; the halt word did not.
                    if self.cpu.pc == HALT_PC {
                        instructions += 1;
                    }
                    break StopReason::Halted;
                }
                Step::Trap(cause) => {
                    instructions += 1;
                    traps += 1;
                    self.log_trap(cause);
                }
            }
        };

        let summary = RunSummary {
            reason,
            instructions,
            traps,
            pc: self.cpu.pc,
        };
        info!(
            ?reason,
            instructions,
            pc = format_args!("{:#x}", summary.pc),
            "run finished"
        );
        Ok(summary)
    }

    fn log_trap(&self, cause: TrapCause) {
        match cause {
            TrapCause::EnvironmentCall => debug!(
                a7 = self.cpu.regs.read(abi::REG_A7),
                a0 = self.cpu.regs.read(abi::REG_A0),
                "ecall"
            ),
            TrapCause::Breakpoint => debug!("ebreak"),
        }
    }
}
