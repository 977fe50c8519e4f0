//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the bus. It performs the following:
//! 1. **Instruction Fetch:** Reads the 32-bit word at the PC.
//! 2. **Image Loading:** Copies a raw program image to the start of RAM.

use tracing::debug;

use super::Cpu;
use crate::common::error::Fault;
use crate::sim::loader::LoadError;

impl Cpu {
    /// Fetches the instruction word at the current PC.
    ///
    /// The PC is not modified.
    ///
    /// # Returns
    ///
    /// The little-endian 32-bit word, or `Fault::AddressFault` if the four
    /// bytes at `pc` are not all mapped.
    pub fn fetch(&mut self) -> Result<u32, Fault> {
        self.bus.fetch(self.pc)
    }

    /// Copies a raw image to the base of RAM.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The program image.
    ///
    /// # Returns
    ///
    /// `LoadError::ImageTooLarge` if the image exceeds RAM capacity, in which
    /// case nothing is written; `LoadError::NoMemory` if the bus has no RAM.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let (base, capacity) = self
            .bus
            .ram()
            .map(|ram| (ram.base(), ram.size()))
            .ok_or(LoadError::NoMemory)?;

        if bytes.len() as u64 > capacity {
            return Err(LoadError::ImageTooLarge {
                len: bytes.len(),
                capacity,
            });
        }

        self.bus
            .load_binary_at(bytes, base)
            .map_err(|_| LoadError::ImageTooLarge {
                len: bytes.len(),
                capacity,
            })?;
        debug!(
            len = bytes.len(),
            base = format_args!("{base:#x}"),
            "raw image loaded"
        );
        Ok(())
    }
}
