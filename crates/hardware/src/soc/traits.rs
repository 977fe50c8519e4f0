//! Device trait for memory-mapped components.
//!
//! This module defines the `Device` trait implemented by every bus-attached component. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Sized little-endian reads and writes at device-relative offsets.
//! 3. **Downcasting:** An optional cast to `Memory` for loader access to RAM.
//!
//! Accesses that do not fit inside the device report `None` instead of
//! panicking; the bus turns that into an address fault.

use std::fmt;

use crate::common::data::AccessSize;
use crate::soc::memory::Memory;

/// Trait for devices attached to the system bus.
pub trait Device: fmt::Debug {
    /// Returns a short name for this device (e.g., `"DRAM"`).
    fn name(&self) -> &str;

    /// Returns `(base_address, size_in_bytes)` for this device's region.
    fn address_range(&self) -> (u64, u64);

    /// Reads `size` bytes (little-endian) at the given device-relative offset.
    ///
    /// Returns `None` if any byte of the access lies outside the device.
    fn read(&mut self, offset: u64, size: AccessSize) -> Option<u64>;

    /// Writes the low `size` bytes of `val` (little-endian) at the given offset.
    ///
    /// Returns `None`, leaving the device unchanged, if any byte of the
    /// access lies outside the device.
    fn write(&mut self, offset: u64, size: AccessSize, val: u64) -> Option<()>;

    /// Writes a contiguous byte slice at the given offset (default: byte-by-byte).
    ///
    /// The default is not atomic: bytes before the first failing one stay written.
    fn write_bytes(&mut self, offset: u64, data: &[u8]) -> Option<()> {
        for (i, byte) in data.iter().enumerate() {
            self.write(offset.checked_add(i as u64)?, AccessSize::Byte, u64::from(*byte))?;
        }
        Some(())
    }

    /// Returns a shared reference as `Memory` if this device is RAM; otherwise `None`.
    fn as_memory(&self) -> Option<&Memory> {
        None
    }
}
