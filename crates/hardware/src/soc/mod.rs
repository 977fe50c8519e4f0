//! System-on-Chip (SoC) Components.
//!
//! The memory side of the emulator: the bus that routes CPU accesses, the
//! `Device` seam, and the RAM device behind it.

/// System bus interconnect and routing.
pub mod interconnect;

/// Main memory device.
pub mod memory;

/// Device trait definition.
pub mod traits;

pub use interconnect::Bus;
pub use memory::Memory;
pub use traits::Device;
