use rvemu_core::common::data::AccessSize;
use rvemu_core::config::Config;
use rvemu_core::core::Cpu;
use rvemu_core::sim::{RunSummary, Simulator};
use rvemu_core::{Fault, Step};
use tracing_subscriber::EnvFilter;

/// RAM base of the default configuration; programs are loaded here.
pub const RAM_BASE: u64 = 0x8000_0000;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions at the RAM base and set the PC there.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        let bytes: Vec<u8> = instructions
            .iter()
            .flat_map(|inst| inst.to_le_bytes())
            .collect();
        self.sim.cpu.load_image(&bytes).unwrap();
        self.sim.cpu.pc = RAM_BASE;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u64) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u64 {
        self.sim.cpu.pc
    }

    pub fn write_mem(&mut self, addr: u64, size: AccessSize, val: u64) {
        self.sim.cpu.bus.store(addr, size, val).unwrap();
    }

    pub fn read_mem(&mut self, addr: u64, size: AccessSize) -> u64 {
        self.sim.cpu.bus.load(addr, size).unwrap()
    }

    /// Place `inst` at the current PC and run one full cycle.
    pub fn try_exec(&mut self, inst: u32) -> Result<Step, Fault> {
        let pc = self.sim.cpu.pc;
        self.write_mem(pc, AccessSize::Word, u64::from(inst));
        self.sim.cpu.tick()
    }

    /// Like `try_exec`, but the cycle must not fault.
    pub fn exec(&mut self, inst: u32) {
        if let Err(fault) = self.try_exec(inst) {
            panic!("unexpected fault: {fault}");
        }
    }

    /// Tick up to `n` times, stopping early at the first non-`Continue` outcome.
    pub fn step_n(&mut self, n: usize) -> Result<Step, Fault> {
        let mut last = Step::Continue;
        for _ in 0..n {
            last = self.sim.cpu.tick()?;
            if last != Step::Continue {
                break;
            }
        }
        Ok(last)
    }

    /// Run to completion through the simulator.
    pub fn run(&mut self) -> Result<RunSummary, Fault> {
        self.sim.run()
    }
}
