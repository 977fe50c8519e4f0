//! RISC-V RV64 instruction-set emulator library.
//!
//! This crate implements a functional (non-timing) RV64 emulator for a single hart:
//! 1. **Core:** Register file, CSR bank, and the fetch-decode-execute loop.
//! 2. **ISA:** Field and immediate decoding, the opcode/funct dispatcher, and a disassembler
//!    for RV64I, RV64M, the A-extension subset, and Zicsr.
//! 3. **SoC:** A bus with a device seam and a bounds-checked DRAM store.
//! 4. **Simulation:** Program loading (raw images and ELF) and a run driver.

/// Common types (faults, access sizes, register file, constants).
pub mod common;
/// Emulator configuration (memory map, trace and run limits).
pub mod config;
/// CPU core (architectural state, execution, ALU/branch/load-store units).
pub mod core;
/// Instruction set (fields, immediates, dispatcher, disassembler, encodings).
pub mod isa;
/// Program loader and run driver.
pub mod sim;
/// System-on-chip (bus, device trait, memory store).
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; owns registers, CSRs, and the bus.
pub use crate::core::Cpu;
/// Outcome of a single executed instruction.
pub use crate::core::cpu::Step;
/// Terminal execution fault.
pub use crate::common::Fault;
/// Run driver around a `Cpu`.
pub use crate::sim::Simulator;
