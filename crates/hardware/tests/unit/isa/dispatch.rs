//! Dispatcher coverage.
//!
//! One case per routed encoding, plus the illegal and recognized-but-unimplemented
//! corners of the opcode space.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvemu_core::common::data::AccessSize;
use rvemu_core::core::arch::csr::MSCRATCH;
use rvemu_core::isa::decode::decode;
use rvemu_core::isa::instruction::{
    AluOp, AmoOp, BranchCond, CsrOp, CsrOperand, Instruction,
};
use rvemu_core::isa::privileged::opcodes::{MRET, WFI};
use rvemu_core::isa::rv64a::funct5::{AMOADD, AMOMAXU, AMOOR, AMOSWAP, LR, SC};
use rvemu_core::Fault;

use crate::common::builder::instruction::{i_type, inst, r_type};

const W: u32 = 0b010;
const D: u32 = 0b011;

#[rstest]
#[case(inst().add(10, 11, 12).build(), Instruction::Op { op: AluOp::Add, word: false, rd: 10, rs1: 11, rs2: 12 })]
#[case(inst().sub(1, 2, 3).build(), Instruction::Op { op: AluOp::Sub, word: false, rd: 1, rs1: 2, rs2: 3 })]
#[case(inst().sltu(5, 6, 7).build(), Instruction::Op { op: AluOp::Sltu, word: false, rd: 5, rs1: 6, rs2: 7 })]
#[case(inst().sra(5, 6, 7).build(), Instruction::Op { op: AluOp::Sra, word: false, rd: 5, rs1: 6, rs2: 7 })]
#[case(inst().addw(10, 10, 11).build(), Instruction::Op { op: AluOp::Add, word: true, rd: 10, rs1: 10, rs2: 11 })]
#[case(inst().subw(10, 10, 11).build(), Instruction::Op { op: AluOp::Sub, word: true, rd: 10, rs1: 10, rs2: 11 })]
#[case(inst().sraw(10, 10, 11).build(), Instruction::Op { op: AluOp::Sra, word: true, rd: 10, rs1: 10, rs2: 11 })]
#[case(inst().mulh(3, 4, 5).build(), Instruction::Op { op: AluOp::Mulh, word: false, rd: 3, rs1: 4, rs2: 5 })]
#[case(inst().remw(3, 4, 5).build(), Instruction::Op { op: AluOp::Rem, word: true, rd: 3, rs1: 4, rs2: 5 })]
#[case(inst().addi(10, 0, -1).build(), Instruction::OpImm { op: AluOp::Add, word: false, rd: 10, rs1: 0, imm: -1 })]
#[case(inst().sltiu(10, 11, 1).build(), Instruction::OpImm { op: AluOp::Sltu, word: false, rd: 10, rs1: 11, imm: 1 })]
#[case(inst().slli(10, 10, 40).build(), Instruction::OpImm { op: AluOp::Sll, word: false, rd: 10, rs1: 10, imm: 40 })]
#[case(inst().srai(10, 10, 63).build(), Instruction::OpImm { op: AluOp::Sra, word: false, rd: 10, rs1: 10, imm: 63 })]
#[case(inst().addiw(10, 10, 7).build(), Instruction::OpImm { op: AluOp::Add, word: true, rd: 10, rs1: 10, imm: 7 })]
#[case(inst().slliw(10, 10, 31).build(), Instruction::OpImm { op: AluOp::Sll, word: true, rd: 10, rs1: 10, imm: 31 })]
#[case(inst().lui(10, 0x12345).build(), Instruction::Lui { rd: 10, imm: 0x1234_5000 })]
#[case(inst().auipc(10, 1).build(), Instruction::Auipc { rd: 10, imm: 0x1000 })]
#[case(inst().lb(10, 2, -1).build(), Instruction::Load { size: AccessSize::Byte, signed: true, rd: 10, rs1: 2, offset: -1 })]
#[case(inst().lwu(10, 2, 4).build(), Instruction::Load { size: AccessSize::Word, signed: false, rd: 10, rs1: 2, offset: 4 })]
#[case(inst().ld(10, 2, 8).build(), Instruction::Load { size: AccessSize::Double, signed: true, rd: 10, rs1: 2, offset: 8 })]
#[case(inst().sh(2, 11, -2).build(), Instruction::Store { size: AccessSize::Half, rs1: 2, rs2: 11, offset: -2 })]
#[case(inst().sd(2, 11, 16).build(), Instruction::Store { size: AccessSize::Double, rs1: 2, rs2: 11, offset: 16 })]
#[case(inst().beq(0, 0, 8).build(), Instruction::Branch { cond: BranchCond::Eq, rs1: 0, rs2: 0, offset: 8 })]
#[case(inst().bltu(5, 6, -16).build(), Instruction::Branch { cond: BranchCond::Ltu, rs1: 5, rs2: 6, offset: -16 })]
#[case(inst().jal(1, 16).build(), Instruction::Jal { rd: 1, offset: 16 })]
#[case(inst().jalr(0, 1, 0).build(), Instruction::Jalr { rd: 0, rs1: 1, offset: 0 })]
#[case(inst().csrrw(10, MSCRATCH, 11).build(), Instruction::Csr { op: CsrOp::ReadWrite, rd: 10, csr: MSCRATCH, src: CsrOperand::Reg(11) })]
#[case(inst().csrrci(10, MSCRATCH, 31).build(), Instruction::Csr { op: CsrOp::ReadClear, rd: 10, csr: MSCRATCH, src: CsrOperand::Imm(31) })]
#[case(inst().amo(AMOADD, W, 10, 11, 12).build(), Instruction::Amo { op: AmoOp::Add, size: AccessSize::Word, rd: 10, rs1: 11, rs2: 12 })]
#[case(inst().amo(AMOOR, D, 10, 11, 12).build(), Instruction::Amo { op: AmoOp::Or, size: AccessSize::Double, rd: 10, rs1: 11, rs2: 12 })]
#[case(inst().fence().build(), Instruction::Fence)]
#[case(inst().ecall().build(), Instruction::Ecall)]
#[case(inst().ebreak().build(), Instruction::Ebreak)]
fn routes_to_variant(#[case] word: u32, #[case] expected: Instruction) {
    assert_eq!(decode(word), Ok(expected));
}

#[rstest]
#[case::all_zero(0x0000_0000)]
#[case::all_ones(0xFFFF_FFFF)]
#[case::unknown_opcode(0x0000_000B)]
#[case::branch_funct3_2(0x0000_2063)]
#[case::load_funct3_7(0x0000_7003)]
#[case::store_funct3_4(0x0000_4023)]
#[case::sub_with_bad_funct7(r_type(0b0110011, 1, 0, 2, 3, 0b0000010))]
#[case::sltw_does_not_exist(r_type(0b0111011, 1, 0b010, 2, 3, 0))]
#[case::mulhw_does_not_exist(r_type(0b0111011, 1, 0b001, 2, 3, 1))]
#[case::slliw_shamt_32(0x0205_151B)]
#[case::jalr_funct3_1(i_type(0b1100111, 1, 1, 2, 0))]
#[case::system_funct3_4(i_type(0b1110011, 1, 0b100, 2, 0))]
#[case::amo_byte_width(inst().amo(AMOADD, 0b000, 1, 2, 3).build())]
#[case::lr_with_rs2(inst().amo(LR, W, 1, 2, 3).build())]
fn rejects_illegal(#[case] word: u32) {
    assert_eq!(decode(word), Err(Fault::IllegalInstruction(word)));
}

#[rstest]
#[case(inst().amo(AMOSWAP, W, 5, 0, 8).build(), "amoswap.w")]
#[case(inst().amo(AMOSWAP, D, 5, 0, 8).build(), "amoswap.d")]
#[case(inst().amo(LR, W, 5, 6, 0).build(), "lr.w")]
#[case(inst().amo(SC, D, 5, 6, 7).build(), "sc.d")]
#[case(inst().amo(AMOMAXU, W, 5, 6, 7).build(), "amomaxu.w")]
#[case(MRET, "mret")]
#[case(WFI, "wfi")]
fn recognized_but_unimplemented(#[case] word: u32, #[case] mnemonic: &'static str) {
    let err = decode(word).unwrap_err();
    assert!(err.is_decode_fault());
    assert_eq!(err, Fault::Unimplemented { raw: word, mnemonic });
}

#[test]
fn amoswap_w_is_a_decode_fault() {
    let err = decode(0x0820_22AF).unwrap_err();
    assert!(err.is_decode_fault());
    assert!(!err.is_address_fault());
}
