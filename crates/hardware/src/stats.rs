//! Execution statistics collection and reporting.
//!
//! This module tracks what the emulator retired during a run. It provides:
//! 1. **Throughput:** Retired instruction count and host-side MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, mul/div, load, store, branch, jump, system, AMO).
//! 3. **Control flow:** Taken branches and `ecall`/`ebreak` traps.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::{AluOp, Instruction};

const BANNER: &str = "==========================================================";
const RULE: &str = "----------------------------------------------------------";

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of integer ALU instructions retired (including `lui`/`auipc`).
    pub inst_alu: u64,
    /// Count of multiply/divide instructions retired.
    pub inst_muldiv: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of `jal`/`jalr` instructions retired.
    pub inst_jump: u64,
    /// Count of system (CSR, fence, `ecall`, `ebreak`) instructions retired.
    pub inst_system: u64,
    /// Count of atomic memory operations retired.
    pub inst_amo: u64,

    /// Number of conditional branches that were taken.
    pub branches_taken: u64,
    /// Number of `ecall`/`ebreak` traps reported.
    pub traps: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            inst_amo: 0,
            branches_taken: 0,
            traps: 0,
        }
    }
}

/// Returns `true` for the RV64M operations.
const fn is_muldiv(op: AluOp) -> bool {
    matches!(
        op,
        AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Rem
            | AluOp::Remu
    )
}

impl SimStats {
    /// Counts one retired instruction in its category.
    pub const fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Lui { .. } | Instruction::Auipc { .. } | Instruction::OpImm { .. } => {
                self.inst_alu += 1;
            }
            Instruction::Op { op, .. } => {
                if is_muldiv(*op) {
                    self.inst_muldiv += 1;
                } else {
                    self.inst_alu += 1;
                }
            }
            Instruction::Jal { .. } | Instruction::Jalr { .. } => self.inst_jump += 1,
            Instruction::Branch { .. } => self.inst_branch += 1,
            Instruction::Load { .. } => self.inst_load += 1,
            Instruction::Store { .. } => self.inst_store += 1,
            Instruction::Amo { .. } => self.inst_amo += 1,
            Instruction::Csr { .. }
            | Instruction::Fence
            | Instruction::FenceI
            | Instruction::Ecall
            | Instruction::Ebreak => self.inst_system += 1,
        }
    }

    /// Renders the statistics report.
    ///
    /// Percentages are relative to the retired count; an empty run reports
    /// zeros rather than dividing by zero.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };

        let mut out = String::new();
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "RISC-V EMULATOR STATISTICS");
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "sim_mips                 {mips:.2}");
        let _ = writeln!(out, "{RULE}");

        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.muldiv", self.inst_muldiv),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.system", self.inst_system),
            ("op.amo", self.inst_amo),
        ] {
            let pct = (count as f64 / instr) * 100.0;
            let _ = writeln!(out, "  {name:<22} {count} ({pct:.2}%)");
        }
        let _ = writeln!(out, "{RULE}");

        let taken_pct = if self.inst_branch > 0 {
            (self.branches_taken as f64 / self.inst_branch as f64) * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(
            out,
            "  branch.taken           {} ({taken_pct:.2}%)",
            self.branches_taken
        );
        let _ = writeln!(out, "  traps                  {}", self.traps);
        let _ = writeln!(out, "{BANNER}");
        out
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}
