//! Instruction Disassembler.
//!
//! Renders decoded instructions in assembler syntax with ABI register names,
//! for trace logging, the CLI, and test diagnostics. Raw words go through
//! [`decode`] first; the text is the `Display` of the resulting [`Instruction`].
//!
//! # Usage
//!
//! ```
//! use rvemu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! ```

use std::fmt;

use crate::common::data::AccessSize;
use crate::common::error::Fault;
use crate::core::arch::csr;
use crate::isa::abi::name as xreg;
use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, CsrOp, CsrOperand, Instruction};

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a line like `"add a0, a1, a2"`. Recognized but unimplemented
/// encodings render as their mnemonic with an `(unimplemented)` marker;
/// anything else renders as `"unknown (0x........)"`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    match decode(inst) {
        Ok(decoded) => decoded.to_string(),
        Err(Fault::Unimplemented { mnemonic, .. }) => format!("{mnemonic} (unimplemented)"),
        Err(_) => format!("unknown ({inst:#010x})"),
    }
}

/// Formats a CSR address by name when it has one.
fn csr_name(addr: u16) -> String {
    csr::name(addr).map_or_else(|| format!("{addr:#05x}"), str::to_string)
}

/// Width letter used by load, store and AMO mnemonics.
const fn width_suffix(size: AccessSize) -> &'static str {
    match size {
        AccessSize::Byte => "b",
        AccessSize::Half => "h",
        AccessSize::Word => "w",
        AccessSize::Double => "d",
    }
}

/// Mnemonic of a register-immediate ALU operation.
const fn imm_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "addi",
        AluOp::Slt => "slti",
        AluOp::Sltu => "sltiu",
        AluOp::Xor => "xori",
        AluOp::Or => "ori",
        AluOp::And => "andi",
        AluOp::Sll => "slli",
        AluOp::Srl => "srli",
        AluOp::Sra => "srai",
        // No immediate form exists for the remaining operations.
        _ => "i??",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Lui { rd, imm } => write!(f, "lui {}, {:#x}", xreg(rd), (imm >> 12) & 0xF_FFFF),
            Self::Auipc { rd, imm } => {
                write!(f, "auipc {}, {:#x}", xreg(rd), (imm >> 12) & 0xF_FFFF)
            }
            Self::Jal { rd, offset } => write!(f, "jal {}, {offset}", xreg(rd)),
            Self::Jalr { rd, rs1, offset } => {
                write!(f, "jalr {}, {offset}({})", xreg(rd), xreg(rs1))
            }
            Self::Branch {
                cond,
                rs1,
                rs2,
                offset,
            } => write!(
                f,
                "{} {}, {}, {offset}",
                cond.mnemonic(),
                xreg(rs1),
                xreg(rs2)
            ),
            Self::Load {
                size,
                signed,
                rd,
                rs1,
                offset,
            } => {
                let width = width_suffix(size);
                let unsigned = if signed { "" } else { "u" };
                write!(f, "l{width}{unsigned} {}, {offset}({})", xreg(rd), xreg(rs1))
            }
            Self::Store {
                size,
                rs1,
                rs2,
                offset,
            } => {
                let width = width_suffix(size);
                write!(f, "s{width} {}, {offset}({})", xreg(rs2), xreg(rs1))
            }
            Self::OpImm {
                op,
                word,
                rd,
                rs1,
                imm,
            } => {
                let suffix = if word { "w" } else { "" };
                write!(
                    f,
                    "{}{suffix} {}, {}, {imm}",
                    imm_mnemonic(op),
                    xreg(rd),
                    xreg(rs1)
                )
            }
            Self::Op {
                op,
                word,
                rd,
                rs1,
                rs2,
            } => {
                let suffix = if word { "w" } else { "" };
                write!(
                    f,
                    "{}{suffix} {}, {}, {}",
                    op.mnemonic(),
                    xreg(rd),
                    xreg(rs1),
                    xreg(rs2)
                )
            }
            Self::Csr { op, rd, csr, src } => {
                let base = match op {
                    CsrOp::ReadWrite => "csrrw",
                    CsrOp::ReadSet => "csrrs",
                    CsrOp::ReadClear => "csrrc",
                };
                match src {
                    CsrOperand::Reg(rs1) => {
                        write!(f, "{base} {}, {}, {}", xreg(rd), csr_name(csr), xreg(rs1))
                    }
                    CsrOperand::Imm(zimm) => {
                        write!(f, "{base}i {}, {}, {zimm}", xreg(rd), csr_name(csr))
                    }
                }
            }
            Self::Amo {
                op,
                size,
                rd,
                rs1,
                rs2,
            } => {
                let suffix = width_suffix(size);
                write!(
                    f,
                    "{}.{suffix} {}, {}, ({})",
                    op.mnemonic(),
                    xreg(rd),
                    xreg(rs2),
                    xreg(rs1)
                )
            }
            Self::Fence => write!(f, "fence"),
            Self::FenceI => write!(f, "fence.i"),
            Self::Ecall => write!(f, "ecall"),
            Self::Ebreak => write!(f, "ebreak"),
        }
    }
}
