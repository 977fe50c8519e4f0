//! System interconnect (bus).
//!
//! This module implements the bus that routes CPU accesses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range and kept sorted by base.
//! 2. **Access routing:** Sized loads, stores and fetches, with a last-device hint for the common case.
//! 3. **Fault reporting:** Accesses not fully inside one device become `Fault::AddressFault`.
//! 4. **Image loading:** Bulk copies of program bytes into a device.

use crate::common::data::{AccessSize, AccessType};
use crate::common::error::Fault;
use crate::soc::memory::Memory;
use crate::soc::traits::Device;

/// System bus connecting the CPU and its devices; routes accesses by physical address.
#[derive(Debug, Default)]
pub struct Bus {
    /// Registered devices, sorted by base address.
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl Bus {
    /// Creates an empty bus; add devices with `add_device`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device on the bus; devices are sorted by base address for lookup.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
    }

    /// Returns the first RAM device, if any.
    pub fn ram(&self) -> Option<&Memory> {
        self.devices.iter().find_map(|d| d.as_memory())
    }

    /// Loads `size` bytes at `addr` for a data read.
    ///
    /// # Returns
    ///
    /// The zero-extended little-endian value, or `Fault::AddressFault` if
    /// `[addr, addr + size)` is not inside a single device.
    pub fn load(&mut self, addr: u64, size: AccessSize) -> Result<u64, Fault> {
        self.read(addr, size, AccessType::Read)
    }

    /// Fetches the 32-bit instruction word at `addr`.
    pub fn fetch(&mut self, addr: u64) -> Result<u32, Fault> {
        self.read(addr, AccessSize::Word, AccessType::Fetch)
            .map(|word| word as u32)
    }

    /// Stores the low `size` bytes of `val` at `addr`.
    ///
    /// Nothing is written when the access faults.
    pub fn store(&mut self, addr: u64, size: AccessSize, val: u64) -> Result<(), Fault> {
        self.find_device(addr, size.bytes())
            .and_then(|(idx, offset)| {
                self.devices[idx].write(offset, size, size.zero_extend(val))
            })
            .ok_or_else(|| Fault::AddressFault {
                addr,
                size,
                access: AccessType::Write,
            })
    }

    /// Copies a binary blob into the device that maps `addr`.
    ///
    /// The whole blob must fit inside a single device; otherwise nothing is
    /// written and the fault names the first byte of the blob.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u64) -> Result<(), Fault> {
        self.find_device(addr, data.len() as u64)
            .and_then(|(idx, offset)| self.devices[idx].write_bytes(offset, data))
            .ok_or_else(|| Fault::AddressFault {
                addr,
                size: AccessSize::Byte,
                access: AccessType::Write,
            })
    }

    /// Returns `true` if `[addr, addr + len)` is claimed by a single device.
    pub fn is_mapped(&mut self, addr: u64, len: u64) -> bool {
        self.find_device(addr, len).is_some()
    }

    fn read(&mut self, addr: u64, size: AccessSize, access: AccessType) -> Result<u64, Fault> {
        self.find_device(addr, size.bytes())
            .and_then(|(idx, offset)| self.devices[idx].read(offset, size))
            .ok_or_else(|| Fault::AddressFault { addr, size, access })
    }

    /// Finds the device whose region contains all of `[addr, addr + len)`.
    ///
    /// Returns the device index and the device-relative offset of `addr`.
    fn find_device(&mut self, addr: u64, len: u64) -> Option<(usize, u64)> {
        let fits = |dev: &dyn Device| {
            let (start, size) = dev.address_range();
            let offset = addr.checked_sub(start)?;
            (offset.checked_add(len)? <= size).then_some(offset)
        };

        if let Some(offset) = self
            .devices
            .get(self.last_device_idx)
            .and_then(|dev| fits(dev.as_ref()))
        {
            return Some((self.last_device_idx, offset));
        }

        let (idx, offset) = self
            .devices
            .iter()
            .enumerate()
            .find_map(|(i, dev)| fits(dev.as_ref()).map(|offset| (i, offset)))?;
        self.last_device_idx = idx;
        Some((idx, offset))
    }
}
