//! Instruction fields and the decoded instruction model.
//!
//! This module provides:
//! 1. **Field Extraction:** The `InstructionBits` trait pulling fixed-position fields out of a raw word.
//! 2. **Operation Kinds:** Small enums naming the ALU, branch, CSR and atomic operation of an instruction.
//! 3. **Decoded Form:** The closed `Instruction` enum produced by [`decode`](crate::isa::decode::decode).

use crate::common::data::AccessSize;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;
/// Bit mask for the 6-bit shift amount of native 64-bit shifts (bits 20-25).
pub const SHAMT_MASK: u32 = 0x3F;
/// Bit mask for the 5-bit shift amount of word shifts (bits 20-24).
pub const SHAMT_W_MASK: u32 = 0x1F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is a pure shift-and-mask and is total over all `u32` inputs.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    ///
    /// For CSR immediate forms this is the 5-bit unsigned literal.
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the funct5 field of atomic instructions (bits 27-31).
    fn funct5(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u16;

    /// Extracts the 6-bit shift amount of `slli`/`srli`/`srai` (bits 20-25).
    fn shamt(&self) -> u32;

    /// Extracts the 5-bit shift amount of `slliw`/`srliw`/`sraiw` (bits 20-24).
    fn shamt_w(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        self >> 27
    }

    #[inline(always)]
    fn csr(&self) -> u16 {
        ((self >> 20) & CSR_MASK) as u16
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & SHAMT_MASK
    }

    #[inline(always)]
    fn shamt_w(&self) -> u32 {
        (self >> 20) & SHAMT_W_MASK
    }
}

/// Integer ALU operation (RV64I and RV64M).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Multiply, low bits.
    Mul,
    /// Multiply high, signed x signed.
    Mulh,
    /// Multiply high, signed x unsigned.
    Mulhsu,
    /// Multiply high, unsigned x unsigned.
    Mulhu,
    /// Divide (signed).
    Div,
    /// Divide (unsigned).
    Divu,
    /// Remainder (signed).
    Rem,
    /// Remainder (unsigned).
    Remu,
}

impl AluOp {
    /// Base mnemonic of the register-register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
        }
    }
}

/// Conditional branch comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than (signed).
    Lt,
    /// Greater or equal (signed).
    Ge,
    /// Less than (unsigned).
    Ltu,
    /// Greater or equal (unsigned).
    Geu,
}

impl BranchCond {
    /// Branch mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "beq",
            Self::Ne => "bne",
            Self::Lt => "blt",
            Self::Ge => "bge",
            Self::Ltu => "bltu",
            Self::Geu => "bgeu",
        }
    }
}

/// CSR read-modify-write operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrOp {
    /// Atomic read/write (`csrrw`, `csrrwi`).
    ReadWrite,
    /// Atomic read and set bits (`csrrs`, `csrrsi`).
    ReadSet,
    /// Atomic read and clear bits (`csrrc`, `csrrci`).
    ReadClear,
}

/// Source operand of a CSR instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrOperand {
    /// Register form: the value of `rs1`.
    Reg(usize),
    /// Immediate form: the 5-bit `rs1` field as an unsigned literal.
    Imm(u64),
}

impl CsrOperand {
    /// Returns `true` when the operand field is zero (register `x0` or literal `0`).
    ///
    /// `csrrs`/`csrrc` and their immediate forms skip the CSR write in that case.
    pub const fn is_zero_field(self) -> bool {
        matches!(self, Self::Reg(0) | Self::Imm(0))
    }
}

/// Atomic memory operation executed by this core.
///
/// Only the read-modify-write forms with a plain ALU combine step are
/// implemented; the rest of the A extension decodes to
/// [`Fault::Unimplemented`](crate::common::Fault::Unimplemented).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmoOp {
    /// Atomic add.
    Add,
    /// Atomic XOR.
    Xor,
    /// Atomic AND.
    And,
    /// Atomic OR.
    Or,
}

impl AmoOp {
    /// Mnemonic without the width suffix.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "amoadd",
            Self::Xor => "amoxor",
            Self::And => "amoand",
            Self::Or => "amoor",
        }
    }
}

/// A decoded instruction.
///
/// Each variant carries exactly the operands its handler needs. Immediates
/// are already sign-extended to 64 bits; shift amounts are stored in `imm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Load upper immediate.
    Lui {
        /// Destination register.
        rd: usize,
        /// U-type immediate (low 12 bits zero).
        imm: i64,
    },
    /// Add upper immediate to PC.
    Auipc {
        /// Destination register.
        rd: usize,
        /// U-type immediate (low 12 bits zero).
        imm: i64,
    },
    /// Jump and link.
    Jal {
        /// Link register.
        rd: usize,
        /// J-type byte offset from the instruction's own address.
        offset: i64,
    },
    /// Jump and link register.
    Jalr {
        /// Link register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// I-type byte offset.
        offset: i64,
    },
    /// Conditional branch.
    Branch {
        /// Comparison.
        cond: BranchCond,
        /// First operand.
        rs1: usize,
        /// Second operand.
        rs2: usize,
        /// B-type byte offset from the instruction's own address.
        offset: i64,
    },
    /// Memory load.
    Load {
        /// Access width.
        size: AccessSize,
        /// Sign-extend (`true`) or zero-extend the loaded value.
        signed: bool,
        /// Destination register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// I-type byte offset.
        offset: i64,
    },
    /// Memory store.
    Store {
        /// Access width.
        size: AccessSize,
        /// Base register.
        rs1: usize,
        /// Source register; its low `size` bits are stored.
        rs2: usize,
        /// S-type byte offset.
        offset: i64,
    },
    /// Register-immediate ALU operation (`OP-IMM` / `OP-IMM-32`).
    OpImm {
        /// Operation.
        op: AluOp,
        /// Word form (`addiw`, `slliw`, ...): operate on 32 bits and sign-extend.
        word: bool,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// I-type immediate, or the shift amount for shifts.
        imm: i64,
    },
    /// Register-register ALU operation (`OP` / `OP-32`).
    Op {
        /// Operation.
        op: AluOp,
        /// Word form (`addw`, `mulw`, ...): operate on 32 bits and sign-extend.
        word: bool,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },
    /// Zicsr read-modify-write.
    Csr {
        /// Operation.
        op: CsrOp,
        /// Destination register; receives the old CSR value.
        rd: usize,
        /// 12-bit CSR address.
        csr: u16,
        /// Register or immediate source.
        src: CsrOperand,
    },
    /// Atomic memory operation.
    Amo {
        /// Combine step.
        op: AmoOp,
        /// `Word` for `.w`, `Double` for `.d`.
        size: AccessSize,
        /// Destination register; receives the old memory value.
        rd: usize,
        /// Address register.
        rs1: usize,
        /// Operand register.
        rs2: usize,
    },
    /// Memory ordering fence (no-op on a single hart).
    Fence,
    /// Instruction fetch fence (no-op without an instruction cache).
    FenceI,
    /// Environment call.
    Ecall,
    /// Breakpoint.
    Ebreak,
}
