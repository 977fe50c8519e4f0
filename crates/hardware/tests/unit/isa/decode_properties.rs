//! Immediate Decoding Properties.
//!
//! Every immediate decoder is total over `u32`, sign-correct, and inverse to
//! the corresponding encoder: re-encoding a decoded immediate with the word's
//! other fields reproduces the original bits.

use proptest::prelude::*;
use rvemu_core::isa::decode::{decode, imm_b, imm_i, imm_j, imm_s, imm_u};
use rvemu_core::isa::instruction::{AluOp, Instruction, InstructionBits};
use rvemu_core::isa::rv64i::opcodes::{OP_BRANCH, OP_IMM, OP_JAL, OP_LUI, OP_STORE};

use crate::common::builder::instruction::{b_type, i_type, j_type, s_type, u_type};

proptest! {
    #[test]
    fn immediates_stay_in_range(word in any::<u32>()) {
        let i = imm_i(word);
        prop_assert!((-2048..=2047).contains(&i));

        let s = imm_s(word);
        prop_assert!((-2048..=2047).contains(&s));

        let b = imm_b(word);
        prop_assert!((-4096..=4094).contains(&b));
        prop_assert_eq!(b & 1, 0);

        let j = imm_j(word);
        prop_assert!((-(1 << 20)..(1 << 20)).contains(&j));
        prop_assert_eq!(j & 1, 0);

        let u = imm_u(word);
        prop_assert_eq!(u & 0xFFF, 0);
    }

    #[test]
    fn sign_follows_bit_31(word in any::<u32>()) {
        let negative = word >> 31 == 1;
        prop_assert_eq!(imm_i(word) < 0, negative);
        prop_assert_eq!(imm_s(word) < 0, negative);
        prop_assert_eq!(imm_b(word) < 0, negative);
        prop_assert_eq!(imm_j(word) < 0, negative);
        prop_assert_eq!(imm_u(word) < 0, negative);
    }

    #[test]
    fn i_type_reencodes(word in any::<u32>()) {
        let rebuilt = i_type(
            word.opcode(),
            word.rd() as u32,
            word.funct3(),
            word.rs1() as u32,
            imm_i(word) as i32,
        );
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn s_type_reencodes(word in any::<u32>()) {
        let rebuilt = s_type(
            word.opcode(),
            word.funct3(),
            word.rs1() as u32,
            word.rs2() as u32,
            imm_s(word) as i32,
        );
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn b_type_reencodes(word in any::<u32>()) {
        let rebuilt = b_type(
            word.opcode(),
            word.funct3(),
            word.rs1() as u32,
            word.rs2() as u32,
            imm_b(word) as i32,
        );
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn u_type_reencodes(word in any::<u32>()) {
        let rebuilt = u_type(word.opcode(), word.rd() as u32, (imm_u(word) >> 12) as u32);
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn j_type_reencodes(word in any::<u32>()) {
        let rebuilt = j_type(word.opcode(), word.rd() as u32, imm_j(word) as i32);
        prop_assert_eq!(rebuilt, word);
    }

    #[test]
    fn encoders_round_trip_through_decode(
        rd in 0u32..32,
        rs1 in 0u32..32,
        rs2 in 0u32..32,
        imm12 in -2048i32..2048,
        half in -2048i32..2048,
        upper in 0u32..(1 << 20),
    ) {
        let addi = decode(i_type(OP_IMM, rd, 0, rs1, imm12)).unwrap();
        prop_assert_eq!(addi, Instruction::OpImm {
            op: AluOp::Add,
            word: false,
            rd: rd as usize,
            rs1: rs1 as usize,
            imm: i64::from(imm12),
        });

        let sd = decode(s_type(OP_STORE, 0b011, rs1, rs2, imm12)).unwrap();
        prop_assert!(matches!(sd, Instruction::Store { offset, .. } if offset == i64::from(imm12)), "unexpected decode for sd: {:?}", sd);

        let beq = decode(b_type(OP_BRANCH, 0, rs1, rs2, half * 2)).unwrap();
        prop_assert!(matches!(beq, Instruction::Branch { offset, .. } if offset == i64::from(half * 2)), "unexpected decode for beq: {:?}", beq);

        let jal = decode(j_type(OP_JAL, rd, half * 512)).unwrap();
        prop_assert!(matches!(jal, Instruction::Jal { offset, .. } if offset == i64::from(half * 512)), "unexpected decode for jal: {:?}", jal);

        let lui = decode(u_type(OP_LUI, rd, upper)).unwrap();
        let expected = i64::from((upper << 12) as i32);
        prop_assert!(matches!(lui, Instruction::Lui { imm, .. } if imm == expected), "unexpected decode for lui: {:?}", lui);
    }

    #[test]
    fn decode_is_total(word in any::<u32>()) {
        // Must return, never panic.
        let _ = decode(word);
    }
}

#[test]
fn boundary_immediates() {
    // addi x0, x0, -1
    assert_eq!(imm_i(0xFFF0_0013), -1);
    // bne zero, zero, -4: B and S layouts differ in bits 7 and 8-11.
    assert_eq!(imm_b(0xFE00_1EE3), -4);
    assert_eq!(imm_s(0xFE00_1EE3), -3);
    // jal zero, -8
    assert_eq!(imm_j(0xFF9F_F06F), -8);
    // lui a0, 0x80000
    assert_eq!(imm_u(0x8000_0537), -0x8000_0000);
}
