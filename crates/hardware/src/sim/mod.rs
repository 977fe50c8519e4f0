//! Simulation utilities and program loading.
//!
//! Provides the program loader and the `Simulator` run driver that steps a
//! `Cpu` until it halts, faults, or exhausts its instruction budget.

/// Program loading (raw images and ELF) and hex dumps.
pub mod loader;

/// Run driver.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StopReason};
