//! Integer arithmetic, logic and shifts through full cycles.

use rstest::rstest;

use crate::common::TestContext;
use crate::common::builder::instruction::inst;

const A0: usize = 10;
const A1: usize = 11;
const A2: usize = 12;

fn run_rr(word: u32, a: u64, b: u64) -> u64 {
    let mut tc = TestContext::new();
    tc.set_reg(A1, a);
    tc.set_reg(A2, b);
    tc.exec(word);
    tc.get_reg(A0)
}

fn run_ri(word: u32, a: u64) -> u64 {
    let mut tc = TestContext::new();
    tc.set_reg(A1, a);
    tc.exec(word);
    tc.get_reg(A0)
}

#[test]
fn addw_wraps_and_sign_extends() {
    let addw = inst().addw(10, 11, 12).build();
    assert_eq!(run_rr(addw, 0x7FFF_FFFF, 1), 0xFFFF_FFFF_8000_0000);
    // Upper halves of the operands are ignored.
    assert_eq!(run_rr(addw, 0xDEAD_0000_0000_0001, 0xBEEF_0000_0000_0001), 2);
}

#[rstest]
#[case::add_wraps(inst().add(10, 11, 12).build(), u64::MAX, 2, 1)]
#[case::sub(inst().sub(10, 11, 12).build(), 5, 7, (-2_i64) as u64)]
#[case::slt_signed(inst().slt(10, 11, 12).build(), (-1_i64) as u64, 0, 1)]
#[case::sltu_unsigned(inst().sltu(10, 11, 12).build(), (-1_i64) as u64, 0, 0)]
#[case::sll_uses_low_six_bits(inst().sll(10, 11, 12).build(), 1, 64 + 3, 8)]
#[case::sra_keeps_sign(inst().sra(10, 11, 12).build(), 0x8000_0000_0000_0000, 63, u64::MAX)]
#[case::subw_sign_extends(inst().subw(10, 11, 12).build(), 0, 1, u64::MAX)]
#[case::sraw_uses_low_five_bits(inst().sraw(10, 11, 12).build(), 0x8000_0000, 32 + 4, 0xFFFF_FFFF_F800_0000)]
fn register_register(#[case] word: u32, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    assert_eq!(run_rr(word, a, b), expected);
}

#[rstest]
#[case::addi_negative(inst().addi(10, 11, -1).build(), 0, u64::MAX)]
#[case::xori_not(inst().xori(10, 11, -1).build(), 0x0F, !0x0F_u64)]
#[case::sltiu_seqz(inst().sltiu(10, 11, 1).build(), 0, 1)]
#[case::slli_by_40(inst().slli(10, 11, 40).build(), 1, 1 << 40)]
#[case::srai_by_63(inst().srai(10, 11, 63).build(), 0x8000_0000_0000_0000, u64::MAX)]
#[case::addiw_sign_extends(inst().addiw(10, 11, 1).build(), 0x7FFF_FFFF, 0xFFFF_FFFF_8000_0000)]
#[case::slliw_truncates(inst().slliw(10, 11, 31).build(), 1, 0xFFFF_FFFF_8000_0000)]
fn register_immediate(#[case] word: u32, #[case] a: u64, #[case] expected: u64) {
    assert_eq!(run_ri(word, a), expected);
}

#[test]
fn lui_and_auipc() {
    let mut tc = TestContext::new();
    tc.exec(inst().lui(10, 0x80000).build());
    assert_eq!(tc.get_reg(A0), 0xFFFF_FFFF_8000_0000);

    // auipc from 0x8000_0004
    tc.exec(inst().auipc(11, 0x1).build());
    assert_eq!(tc.get_reg(A1), 0x8000_1004);
}
