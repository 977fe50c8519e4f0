//! Whole-program runs.

use rstest::rstest;
use rvemu_core::common::data::AccessSize;
use rvemu_core::config::{Config, GeneralConfig};
use rvemu_core::core::arch::trap::TrapCause;
use rvemu_core::isa::rv64a::funct5::AMOSWAP;
use rvemu_core::sim::StopReason;
use rvemu_core::{Fault, Step};

use crate::common::builder::instruction::inst;
use crate::common::{RAM_BASE, TestContext};

const A0: u32 = 10;
const A1: u32 = 11;

/// Sums 10 + 9 + ... + 1 into `a0`, makes one `ecall`, then jumps to 0.
fn sum_program() -> Vec<u32> {
    vec![
        inst().addi(A0, 0, 0).build(),
        inst().addi(A1, 0, 10).build(),
        inst().add(A0, A0, A1).build(),
        inst().addi(A1, A1, -1).build(),
        inst().bne(A1, 0, -8).build(),
        inst().ecall().build(),
        inst().jalr(0, 0, 0).build(),
    ]
}

#[test]
fn loop_runs_to_halt() {
    let mut tc = TestContext::new().load_program(&sum_program());
    let summary = tc.run().unwrap();

    assert_eq!(summary.reason, StopReason::Halted);
    // Two setup instructions, ten loop trips of three, the ecall and the jump to 0.
    assert_eq!(summary.instructions, 34);
    assert_eq!(summary.traps, 1);
    assert_eq!(summary.pc, 0);
    assert_eq!(tc.get_reg(A0 as usize), 55);

    let stats = &tc.cpu().stats;
    assert_eq!(stats.instructions_retired, summary.instructions);
    assert_eq!(stats.inst_branch, 10);
    assert_eq!(stats.branches_taken, 9);
    assert_eq!(stats.traps, 1);
}

#[test]
fn zero_word_halts_without_retiring() {
    let mut tc = TestContext::new().load_program(&[inst().addi(A0, 0, 3).build()]);
    let summary = tc.run().unwrap();

    assert_eq!(summary.reason, StopReason::Halted);
    assert_eq!(summary.instructions, 1);
    assert_eq!(tc.cpu().stats.instructions_retired, 1);
}

#[test]
fn ecall_reports_a_trap_and_continues() {
    let mut tc = TestContext::new().load_program(&[inst().ecall().build()]);
    let step = tc.step_n(1).unwrap();
    assert_eq!(step, Step::Trap(TrapCause::EnvironmentCall));
    assert_eq!(TrapCause::EnvironmentCall.code(), 11);
    assert_eq!(tc.pc(), RAM_BASE + 4);
}

#[test]
fn ebreak_reports_a_breakpoint() {
    let mut tc = TestContext::new().load_program(&[inst().ebreak().build()]);
    let step = tc.step_n(1).unwrap();
    assert_eq!(step, Step::Trap(TrapCause::Breakpoint));
    assert_eq!(TrapCause::Breakpoint.code(), 3);
}

#[test]
fn ret_to_zero_counts_as_retired() {
    let mut tc = TestContext::new().load_program(&[inst().jalr(0, 1, 0).build()]);
    let summary = tc.run().unwrap();
    assert_eq!(summary.reason, StopReason::Halted);
    assert_eq!(summary.instructions, 1);
    assert_eq!(tc.cpu().stats.instructions_retired, 1);
}

#[rstest]
#[case::illegal(&[0xFFFF_FFFF], 2)]
#[case::unimplemented(&[inst().amo(AMOSWAP, 0b010, 5, 0, 8).build()], 2)]
#[case::load(&[inst().lw(A0, 0, 0).build()], 5)]
#[case::store(&[inst().sw(0, A0, 0).build()], 7)]
#[case::misaligned_target(&[inst().jal(0, 6).build()], 0)]
fn faults_carry_exception_codes(#[case] program: &[u32], #[case] code: u64) {
    let mut tc = TestContext::new().load_program(program);
    let err = tc.run().unwrap_err();
    assert_eq!(err.exception_code(), code);
}

#[test]
fn fetch_fault_carries_access_fault_code() {
    let mut tc = TestContext::new();
    tc.cpu_mut().pc = 0x1000;
    assert_eq!(tc.run().unwrap_err().exception_code(), 1);
}

#[test]
fn fault_stops_at_the_faulting_instruction() {
    let mut tc = TestContext::new().load_program(&[
        inst().lui(A1, 0x1).build(),
        inst().lw(A0, A1, 0).build(),
    ]);
    let err = tc.run().unwrap_err();

    assert!(err.is_address_fault());
    assert!(matches!(err, Fault::AddressFault { addr: 0x1000, size: AccessSize::Word, .. }));
    assert_eq!(tc.pc(), RAM_BASE + 4);
}

#[test]
fn budget_cuts_an_infinite_loop() {
    let config = Config {
        general: GeneralConfig {
            max_instructions: Some(100),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let mut tc = TestContext::with_config(&config);
    tc = tc.load_program(&[inst().jal(0, 0).build()]);

    let summary = tc.run().unwrap();
    assert_eq!(summary.reason, StopReason::BudgetExhausted);
    assert_eq!(summary.instructions, 100);
    assert_eq!(summary.pc, RAM_BASE);
}

#[test]
fn budget_of_zero_runs_nothing() {
    let mut tc = TestContext::new().load_program(&sum_program());
    tc.sim.max_instructions = Some(0);
    let summary = tc.run().unwrap();
    assert_eq!(summary.reason, StopReason::BudgetExhausted);
    assert_eq!(summary.instructions, 0);
    assert_eq!(tc.pc(), RAM_BASE);
}
