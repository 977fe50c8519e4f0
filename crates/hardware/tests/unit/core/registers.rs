//! Register file and `x0` behavior.

use proptest::prelude::*;
use rvemu_core::isa::abi::{REG_A0, REG_SP, REG_ZERO};

use crate::common::{InstructionBuilder, RAM_BASE, TestContext};

proptest! {
    #[test]
    fn x0_reads_zero_after_a_cycle(val in any::<u64>(), rs in 1u32..32) {
        let mut tc = TestContext::new();
        tc.set_reg(REG_ZERO, val);
        tc.set_reg(rs as usize, 7);
        // add a0, x0, rs
        let add = InstructionBuilder::new().add(REG_A0 as u32, 0, rs).build();
        tc.exec(add);
        prop_assert_eq!(tc.get_reg(REG_ZERO), 0);
        prop_assert_eq!(tc.get_reg(REG_A0), 7);
    }
}

#[test]
fn reset_stack_pointer_is_end_of_ram() {
    let tc = TestContext::new();
    assert_eq!(tc.get_reg(REG_SP), RAM_BASE + 0x10_0000);
    assert_eq!(tc.pc(), RAM_BASE);
    for reg in (0..32).filter(|&r| r != REG_SP) {
        assert_eq!(tc.get_reg(reg), 0, "x{reg}");
    }
}

#[test]
fn dump_names_every_register() {
    let mut tc = TestContext::new();
    tc.set_reg(REG_A0, 0x2A);
    let dump = tc.cpu().regs.dump();
    for name in ["zero", "ra", "sp", "gp", "tp", "s0", "a0", "a7", "s11", "t6"] {
        assert!(dump.contains(name), "missing {name}");
    }
    assert!(dump.contains("0x000000000000002a"));
}
