//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the word at the PC and advances the PC past it.
//! 2. **Dispatch:** Checks the halt sentinel and decodes the word.
//! 3. **Execute:** Runs the instruction handler, which commits only after validating.
//!    `x0` is forced back to zero on both sides of the handler.
//! 4. **Observability:** Traces retired instructions and counts them in the statistics.

use tracing::{debug, trace, warn};

use super::{Cpu, Step};
use crate::common::constants::{HALT_INSTRUCTION, HALT_PC, INSTRUCTION_SIZE};
use crate::common::error::Fault;
use crate::isa::decode::decode;

impl Cpu {
    /// Executes one already-fetched instruction.
    ///
    /// The PC must already point past `inst`; control-transfer targets are
    /// computed relative to `pc - 4`.
    ///
    /// # Arguments
    ///
    /// * `inst` - The raw 32-bit instruction word.
    ///
    /// # Returns
    ///
    /// * `Step::Halt` for the all-zero word, or when the instruction drives the PC to 0.
    /// * `Step::Trap` for `ecall` and `ebreak`.
    /// * `Step::Continue` otherwise.
    ///
    /// A `Fault` means the instruction changed nothing; the PC is still the
    /// advanced value.
    pub fn step(&mut self, inst: u32) -> Result<Step, Fault> {
        self.regs.hardwire_zero();

        if inst == HALT_INSTRUCTION {
            debug!(
                pc = format_args!("{:#x}", self.pc.wrapping_sub(INSTRUCTION_SIZE)),
                "halt instruction"
            );
            return Ok(Step::Halt);
        }

        let decoded = decode(inst)?;
        if self.trace {
            trace!(
                pc = format_args!("{:#010x}", self.pc.wrapping_sub(INSTRUCTION_SIZE)),
                raw = format_args!("{inst:08x}"),
                "{decoded}"
            );
        }

        let step = self.execute(decoded)?;
        self.regs.hardwire_zero();
        self.stats.record(&decoded);

        if self.pc == HALT_PC {
            debug!("pc driven to zero");
            return Ok(Step::Halt);
        }
        if let Step::Trap(cause) = step {
            self.stats.traps += 1;
            warn!(
                pc = format_args!("{:#x}", self.pc.wrapping_sub(INSTRUCTION_SIZE)),
                %cause,
                code = cause.code(),
                "trap reported"
            );
        }
        Ok(step)
    }

    /// Runs one full cycle: fetch, advance the PC by 4, then [`step`](Self::step).
    ///
    /// On a fault the PC is restored to the address of the faulting
    /// instruction, so the whole architectural state is as it was before the
    /// call.
    pub fn tick(&mut self) -> Result<Step, Fault> {
        let pc = self.pc;
        let inst = self.fetch().inspect_err(|fault| {
            warn!(pc = format_args!("{pc:#x}"), %fault, "fetch fault");
        })?;

        self.pc = pc.wrapping_add(INSTRUCTION_SIZE);
        let result = self.step(inst);
        if let Err(fault) = &result {
            self.pc = pc;
            warn!(
                pc = format_args!("{pc:#x}"),
                raw = format_args!("{inst:08x}"),
                %fault,
                cause = fault.exception_code(),
                "execution fault"
            );
        }
        result
    }
}
