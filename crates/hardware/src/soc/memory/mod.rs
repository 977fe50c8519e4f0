//! Physical System Memory (DRAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** `DramBuffer`, the bounds-checked byte storage.
//! 2. **Memory:** The `Device` implementation that maps the buffer at a physical base address.

/// DRAM buffer implementation for raw byte storage.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::data::AccessSize;
use crate::soc::traits::Device;

/// System Memory: a fixed-size RAM window `[base, base + size)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// The underlying byte storage.
    buffer: DramBuffer,
    /// The base physical address where this memory is mapped.
    base_addr: u64,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes mapped at `base_addr`.
    pub fn new(base_addr: u64, size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
            base_addr,
        }
    }

    /// Returns the base physical address.
    pub const fn base(&self) -> u64 {
        self.base_addr
    }

    /// Returns the capacity in bytes.
    pub fn size(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Returns `true` if `[addr, addr + len)` lies entirely inside this memory.
    pub fn contains(&self, addr: u64, len: u64) -> bool {
        addr.checked_sub(self.base_addr)
            .and_then(|offset| offset.checked_add(len))
            .is_some_and(|end| end <= self.size())
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "DRAM"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.size())
    }

    fn read(&mut self, offset: u64, size: AccessSize) -> Option<u64> {
        self.buffer.read_le(offset, size.bytes() as usize)
    }

    fn write(&mut self, offset: u64, size: AccessSize, val: u64) -> Option<()> {
        self.buffer.write_le(offset, size.bytes() as usize, val)
    }

    fn write_bytes(&mut self, offset: u64, data: &[u8]) -> Option<()> {
        self.buffer.write_slice(offset, data)
    }

    fn as_memory(&self) -> Option<&Memory> {
        Some(self)
    }
}
