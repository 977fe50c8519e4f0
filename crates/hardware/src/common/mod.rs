//! Common utilities and types used throughout the emulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Instruction size, register counts, and the halt sentinel.
//! 2. **Memory Access:** Access kinds (fetch/read/write) and access sizes (8/16/32/64 bits).
//! 3. **Error Handling:** The terminal `Fault` type surfaced by the bus and the executor.
//! 4. **Register Management:** The general-purpose register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access kind and size definitions.
pub mod data;

/// Fault types surfaced by decode, bus, and control-transfer errors.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessSize, AccessType};
pub use error::Fault;
pub use reg::RegisterFile;
