//! RISC-V Instruction Decoder.
//!
//! This module turns a raw 32-bit word into an [`Instruction`]. It performs:
//! 1. **Immediate Reconstruction:** Sign-extended I/S/B/U/J immediates, each total over all inputs.
//! 2. **Dispatch:** A match on `opcode`, then `funct3`, then `funct7` (or `funct6`/`funct5`)
//!    where needed. Every valid combination maps to exactly one variant.
//! 3. **Rejection:** Unroutable combinations become [`Fault::IllegalInstruction`]; recognized
//!    encodings this core does not execute become [`Fault::Unimplemented`].
//!
//! Decoding is pure: nothing here touches CPU state.

use crate::common::data::AccessSize;
use crate::common::error::Fault;
use crate::isa::instruction::{
    AluOp, AmoOp, BranchCond, CsrOp, CsrOperand, Instruction, InstructionBits,
};
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv64a::{funct3 as a_f3, funct5 as a_f5, opcodes as a_op};
use crate::isa::rv64i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-Type immediate (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;
/// Bit mask for the S-Type immediate low field (imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;
/// Bit shift for the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;
/// Bit mask for the S-Type immediate high field (imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;
/// Position of imm[11:5] in the reconstructed S-Type immediate.
const S_IMM_HIGH_POS: u32 = 5;
/// Width of the S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;
/// Width of the B-Type immediate (13 bits, bit 0 always zero).
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-Type immediate (bits 12-31), already in position.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_MASK: u32 = 0x000F_F000;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;
/// Width of the J-Type immediate (21 bits, bit 0 always zero).
const J_IMM_BITS: u32 = 21;

/// Decodes the I-Type immediate (`signext(w[31:20])`).
///
/// Used by loads, `jalr`, and register-immediate arithmetic.
#[inline]
pub const fn imm_i(inst: u32) -> i64 {
    ((inst as i32) >> I_IMM_SHIFT) as i64
}

/// Decodes the S-Type immediate (`signext(w[31:25] : w[11:7])`).
#[inline]
pub const fn imm_s(inst: u32) -> i64 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_HIGH_POS) | low, S_IMM_BITS)
}

/// Decodes the B-Type immediate (`signext(w[31] : w[7] : w[30:25] : w[11:8] : 0)`).
///
/// The result is a byte offset; bit 0 is always zero.
#[inline]
pub const fn imm_b(inst: u32) -> i64 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = inst >> B_IMM_12_SHIFT;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the U-Type immediate (`signext(w[31:12] << 12)`).
#[inline]
pub const fn imm_u(inst: u32) -> i64 {
    ((inst & U_IMM_MASK) as i32) as i64
}

/// Decodes the J-Type immediate (`signext(w[31] : w[19:12] : w[20] : w[30:21] : 0)`).
///
/// The result is a byte offset; bit 0 is always zero.
#[inline]
pub const fn imm_j(inst: u32) -> i64 {
    let bits_19_12 = inst & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = inst >> J_IMM_20_SHIFT;

    let combined = (bit_20 << 20) | bits_19_12 | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` bits of `val` to a 64-bit signed integer.
#[inline]
const fn sign_extend(val: u32, bits: u32) -> i64 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift >> shift) as i64
}

/// Decodes a RISC-V instruction word.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded [`Instruction`], or a decode fault:
/// [`Fault::IllegalInstruction`] when no instruction has this encoding, and
/// [`Fault::Unimplemented`] for recognized encodings outside the executed set
/// (`lr`, `sc`, `amoswap`, `amomin[u]`, `amomax[u]`, `mret`, `sret`, `wfi`,
/// `sfence.vma`).
pub fn decode(inst: u32) -> Result<Instruction, Fault> {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();

    match inst.opcode() {
        i_op::OP_LUI => Ok(Instruction::Lui {
            rd,
            imm: imm_u(inst),
        }),
        i_op::OP_AUIPC => Ok(Instruction::Auipc {
            rd,
            imm: imm_u(inst),
        }),
        i_op::OP_JAL => Ok(Instruction::Jal {
            rd,
            offset: imm_j(inst),
        }),
        i_op::OP_JALR if inst.funct3() == 0 => Ok(Instruction::Jalr {
            rd,
            rs1,
            offset: imm_i(inst),
        }),
        i_op::OP_BRANCH => decode_branch(inst),
        i_op::OP_LOAD => decode_load(inst),
        i_op::OP_STORE => decode_store(inst),
        i_op::OP_IMM => decode_op_imm(inst),
        i_op::OP_IMM_32 => decode_op_imm_32(inst),
        i_op::OP_REG => decode_op(inst, false).map(|op| Instruction::Op {
            op,
            word: false,
            rd,
            rs1,
            rs2,
        }),
        i_op::OP_REG_32 => decode_op(inst, true).map(|op| Instruction::Op {
            op,
            word: true,
            rd,
            rs1,
            rs2,
        }),
        i_op::OP_MISC_MEM => match inst.funct3() {
            i_f3::FENCE => Ok(Instruction::Fence),
            i_f3::FENCE_I => Ok(Instruction::FenceI),
            _ => Err(Fault::IllegalInstruction(inst)),
        },
        sys_op::OP_SYSTEM => decode_system(inst),
        a_op::OP_AMO => decode_amo(inst),
        _ => Err(Fault::IllegalInstruction(inst)),
    }
}

/// Decodes `OP_BRANCH`; `funct3` 2 and 3 are unassigned.
fn decode_branch(inst: u32) -> Result<Instruction, Fault> {
    let cond = match inst.funct3() {
        i_f3::BEQ => BranchCond::Eq,
        i_f3::BNE => BranchCond::Ne,
        i_f3::BLT => BranchCond::Lt,
        i_f3::BGE => BranchCond::Ge,
        i_f3::BLTU => BranchCond::Ltu,
        i_f3::BGEU => BranchCond::Geu,
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::Branch {
        cond,
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        offset: imm_b(inst),
    })
}

/// Decodes `OP_LOAD`; `funct3 == 7` is unassigned.
fn decode_load(inst: u32) -> Result<Instruction, Fault> {
    let (size, signed) = match inst.funct3() {
        i_f3::LB => (AccessSize::Byte, true),
        i_f3::LH => (AccessSize::Half, true),
        i_f3::LW => (AccessSize::Word, true),
        i_f3::LD => (AccessSize::Double, true),
        i_f3::LBU => (AccessSize::Byte, false),
        i_f3::LHU => (AccessSize::Half, false),
        i_f3::LWU => (AccessSize::Word, false),
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::Load {
        size,
        signed,
        rd: inst.rd(),
        rs1: inst.rs1(),
        offset: imm_i(inst),
    })
}

/// Decodes `OP_STORE`; only `funct3` 0-3 are assigned.
fn decode_store(inst: u32) -> Result<Instruction, Fault> {
    let size = match inst.funct3() {
        i_f3::SB => AccessSize::Byte,
        i_f3::SH => AccessSize::Half,
        i_f3::SW => AccessSize::Word,
        i_f3::SD => AccessSize::Double,
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::Store {
        size,
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        offset: imm_s(inst),
    })
}

/// Decodes `OP_IMM`.
///
/// Native shifts carry a 6-bit shift amount, so only `funct6` (bits 31-26)
/// selects between the logical and arithmetic forms.
fn decode_op_imm(inst: u32) -> Result<Instruction, Fault> {
    let funct6 = inst >> 26;
    let (op, imm) = match inst.funct3() {
        i_f3::ADD_SUB => (AluOp::Add, imm_i(inst)),
        i_f3::SLT => (AluOp::Slt, imm_i(inst)),
        i_f3::SLTU => (AluOp::Sltu, imm_i(inst)),
        i_f3::XOR => (AluOp::Xor, imm_i(inst)),
        i_f3::OR => (AluOp::Or, imm_i(inst)),
        i_f3::AND => (AluOp::And, imm_i(inst)),
        i_f3::SLL if funct6 == i_f7::SHIFT_LOGICAL => (AluOp::Sll, i64::from(inst.shamt())),
        i_f3::SRL_SRA if funct6 == i_f7::SHIFT_LOGICAL => (AluOp::Srl, i64::from(inst.shamt())),
        i_f3::SRL_SRA if funct6 == i_f7::SHIFT_ARITH => (AluOp::Sra, i64::from(inst.shamt())),
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::OpImm {
        op,
        word: false,
        rd: inst.rd(),
        rs1: inst.rs1(),
        imm,
    })
}

/// Decodes `OP_IMM_32` (`addiw`, `slliw`, `srliw`, `sraiw`).
fn decode_op_imm_32(inst: u32) -> Result<Instruction, Fault> {
    let (op, imm) = match (inst.funct3(), inst.funct7()) {
        (i_f3::ADD_SUB, _) => (AluOp::Add, imm_i(inst)),
        (i_f3::SLL, i_f7::DEFAULT) => (AluOp::Sll, i64::from(inst.shamt_w())),
        (i_f3::SRL_SRA, i_f7::DEFAULT) => (AluOp::Srl, i64::from(inst.shamt_w())),
        (i_f3::SRL_SRA, i_f7::ALT) => (AluOp::Sra, i64::from(inst.shamt_w())),
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::OpImm {
        op,
        word: true,
        rd: inst.rd(),
        rs1: inst.rs1(),
        imm,
    })
}

/// Resolves the ALU operation of `OP_REG` (`word == false`) or `OP_REG_32`.
fn decode_op(inst: u32, word: bool) -> Result<AluOp, Fault> {
    let op = match (inst.funct7(), inst.funct3()) {
        (i_f7::DEFAULT, i_f3::ADD_SUB) => AluOp::Add,
        (i_f7::ALT, i_f3::ADD_SUB) => AluOp::Sub,
        (i_f7::DEFAULT, i_f3::SLL) => AluOp::Sll,
        (i_f7::DEFAULT, i_f3::SRL_SRA) => AluOp::Srl,
        (i_f7::ALT, i_f3::SRL_SRA) => AluOp::Sra,

        (i_f7::DEFAULT, i_f3::SLT) if !word => AluOp::Slt,
        (i_f7::DEFAULT, i_f3::SLTU) if !word => AluOp::Sltu,
        (i_f7::DEFAULT, i_f3::XOR) if !word => AluOp::Xor,
        (i_f7::DEFAULT, i_f3::OR) if !word => AluOp::Or,
        (i_f7::DEFAULT, i_f3::AND) if !word => AluOp::And,

        (m_op::M_EXTENSION, m_f3::MUL) => AluOp::Mul,
        (m_op::M_EXTENSION, m_f3::MULH) if !word => AluOp::Mulh,
        (m_op::M_EXTENSION, m_f3::MULHSU) if !word => AluOp::Mulhsu,
        (m_op::M_EXTENSION, m_f3::MULHU) if !word => AluOp::Mulhu,
        (m_op::M_EXTENSION, m_f3::DIV) => AluOp::Div,
        (m_op::M_EXTENSION, m_f3::DIVU) => AluOp::Divu,
        (m_op::M_EXTENSION, m_f3::REM) => AluOp::Rem,
        (m_op::M_EXTENSION, m_f3::REMU) => AluOp::Remu,

        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(op)
}

/// Decodes `OP_SYSTEM`: the fixed-encoding instructions under `funct3 == 0`
/// and the six Zicsr forms.
fn decode_system(inst: u32) -> Result<Instruction, Fault> {
    let rd = inst.rd();
    let csr = inst.csr();
    let reg = CsrOperand::Reg(inst.rs1());
    let zimm = CsrOperand::Imm(inst.rs1() as u64);

    let (op, src) = match inst.funct3() {
        sys_op::PRIV => return decode_priv(inst),
        sys_op::CSRRW => (CsrOp::ReadWrite, reg),
        sys_op::CSRRS => (CsrOp::ReadSet, reg),
        sys_op::CSRRC => (CsrOp::ReadClear, reg),
        sys_op::CSRRWI => (CsrOp::ReadWrite, zimm),
        sys_op::CSRRSI => (CsrOp::ReadSet, zimm),
        sys_op::CSRRCI => (CsrOp::ReadClear, zimm),
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Ok(Instruction::Csr { op, rd, csr, src })
}

/// Decodes the `funct3 == 0` system instructions by exact encoding.
fn decode_priv(inst: u32) -> Result<Instruction, Fault> {
    let mnemonic = match inst {
        sys_op::ECALL => return Ok(Instruction::Ecall),
        sys_op::EBREAK => return Ok(Instruction::Ebreak),
        sys_op::MRET => "mret",
        sys_op::SRET => "sret",
        sys_op::WFI => "wfi",
        _ if inst & sys_op::SFENCE_VMA_MASK == sys_op::SFENCE_VMA => "sfence.vma",
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    Err(Fault::Unimplemented {
        raw: inst,
        mnemonic,
    })
}

/// Decodes `OP_AMO`.
///
/// `funct3` selects the width; `funct5` the operation. The `aq`/`rl` bits are
/// ignored.
fn decode_amo(inst: u32) -> Result<Instruction, Fault> {
    let size = match inst.funct3() {
        a_f3::WIDTH_32 => AccessSize::Word,
        a_f3::WIDTH_64 => AccessSize::Double,
        _ => return Err(Fault::IllegalInstruction(inst)),
    };
    let is_word = size == AccessSize::Word;
    let pick = |w: &'static str, d: &'static str| if is_word { w } else { d };

    let op = match inst.funct5() {
        a_f5::AMOADD => AmoOp::Add,
        a_f5::AMOXOR => AmoOp::Xor,
        a_f5::AMOAND => AmoOp::And,
        a_f5::AMOOR => AmoOp::Or,
        funct5 => {
            let mnemonic = match funct5 {
                a_f5::LR if inst.rs2() == 0 => pick("lr.w", "lr.d"),
                a_f5::SC => pick("sc.w", "sc.d"),
                a_f5::AMOSWAP => pick("amoswap.w", "amoswap.d"),
                a_f5::AMOMIN => pick("amomin.w", "amomin.d"),
                a_f5::AMOMAX => pick("amomax.w", "amomax.d"),
                a_f5::AMOMINU => pick("amominu.w", "amominu.d"),
                a_f5::AMOMAXU => pick("amomaxu.w", "amomaxu.d"),
                _ => return Err(Fault::IllegalInstruction(inst)),
            };
            return Err(Fault::Unimplemented {
                raw: inst,
                mnemonic,
            });
        }
    };
    Ok(Instruction::Amo {
        op,
        size,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
    })
}
