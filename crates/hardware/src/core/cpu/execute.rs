//! Instruction Handlers.
//!
//! One handler per `Instruction` variant. Each handler reads its operands,
//! computes every value that can fail (targets, addresses, memory reads),
//! and only then writes `rd`, the PC, a CSR or memory. A handler that
//! returns `Err` has changed nothing.

use super::{Cpu, Step};
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::data::AccessSize;
use crate::common::error::Fault;
use crate::core::arch::trap::TrapCause;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::{AmoOp, CsrOp, CsrOperand, Instruction};

impl Cpu {
    /// Executes a decoded instruction with the PC already advanced past it.
    pub(super) fn execute(&mut self, inst: Instruction) -> Result<Step, Fault> {
        match inst {
            Instruction::Lui { rd, imm } => self.regs.write(rd, imm as u64),
            Instruction::Auipc { rd, imm } => {
                let base = self.pc.wrapping_sub(INSTRUCTION_SIZE);
                self.regs.write(rd, base.wrapping_add(imm as u64));
            }
            Instruction::Jal { rd, offset } => {
                let target = Bru::relative_target(self.pc, offset)?;
                self.regs.write(rd, self.pc);
                self.pc = target;
            }
            Instruction::Jalr { rd, rs1, offset } => {
                let target = Bru::indirect_target(self.regs.read(rs1), offset)?;
                self.regs.write(rd, self.pc);
                self.pc = target;
            }
            Instruction::Branch {
                cond,
                rs1,
                rs2,
                offset,
            } => {
                if Bru::taken(cond, self.regs.read(rs1), self.regs.read(rs2)) {
                    self.pc = Bru::relative_target(self.pc, offset)?;
                    self.stats.branches_taken += 1;
                }
            }
            Instruction::Load {
                size,
                signed,
                rd,
                rs1,
                offset,
            } => {
                let addr = Lsu::effective_address(self.regs.read(rs1), offset);
                let raw = self.bus.load(addr, size)?;
                self.regs.write(rd, Lsu::extend(size, signed, raw));
            }
            Instruction::Store {
                size,
                rs1,
                rs2,
                offset,
            } => {
                let addr = Lsu::effective_address(self.regs.read(rs1), offset);
                self.bus.store(addr, size, self.regs.read(rs2))?;
            }
            Instruction::OpImm {
                op,
                word,
                rd,
                rs1,
                imm,
            } => {
                let val = Alu::execute(op, self.regs.read(rs1), imm as u64, word);
                self.regs.write(rd, val);
            }
            Instruction::Op {
                op,
                word,
                rd,
                rs1,
                rs2,
            } => {
                let val = Alu::execute(op, self.regs.read(rs1), self.regs.read(rs2), word);
                self.regs.write(rd, val);
            }
            Instruction::Csr { op, rd, csr, src } => self.exec_csr(op, rd, csr, src),
            Instruction::Amo {
                op,
                size,
                rd,
                rs1,
                rs2,
            } => self.exec_amo(op, size, rd, rs1, rs2)?,
            Instruction::Fence | Instruction::FenceI => {}
            Instruction::Ecall => return Ok(Step::Trap(TrapCause::EnvironmentCall)),
            Instruction::Ebreak => return Ok(Step::Trap(TrapCause::Breakpoint)),
        }
        Ok(Step::Continue)
    }

    /// Zicsr read-modify-write.
    ///
    /// The operand and the old CSR value are both read before `rd` is
    /// written, so `rd == rs1` sees the pre-instruction register.
    fn exec_csr(&mut self, op: CsrOp, rd: usize, csr: u16, src: CsrOperand) {
        let old = self.csr_read(csr);
        let operand = match src {
            CsrOperand::Reg(rs1) => self.regs.read(rs1),
            CsrOperand::Imm(zimm) => zimm,
        };

        let new = match op {
            CsrOp::ReadWrite => Some(operand),
            CsrOp::ReadSet => (!src.is_zero_field()).then_some(old | operand),
            CsrOp::ReadClear => (!src.is_zero_field()).then_some(old & !operand),
        };
        if let Some(val) = new {
            self.csr_write(csr, val);
        }
        self.regs.write(rd, old);
    }

    /// Atomic read-modify-write at the address in `rs1`.
    ///
    /// The read validates the address; if it faults neither memory nor `rd`
    /// is touched.
    fn exec_amo(
        &mut self,
        op: AmoOp,
        size: AccessSize,
        rd: usize,
        rs1: usize,
        rs2: usize,
    ) -> Result<(), Fault> {
        let addr = self.regs.read(rs1);
        let old = self.bus.load(addr, size)?;
        let new = Lsu::atomic_alu(op, old, self.regs.read(rs2), size);
        self.bus.store(addr, size, new)?;
        self.regs.write(rd, size.sign_extend(old));
        Ok(())
    }
}
