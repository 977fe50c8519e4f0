//! CSR Access Logic.
//!
//! Reads and writes of the CSR bank on behalf of the Zicsr instructions.
//! Every address is masked to 12 bits first, so all 4096 encodable CSRs
//! are backed by storage and none has side effects.

use super::Cpu;
use crate::core::arch::csr::CSR_ADDR_MASK;

impl Cpu {
    /// Reads a value from a Control and Status Register (CSR).
    ///
    /// # Arguments
    ///
    /// * `addr` - The CSR address; bits above the low 12 are ignored.
    ///
    /// # Returns
    ///
    /// The current 64-bit value of the specified CSR.
    pub fn csr_read(&self, addr: u16) -> u64 {
        self.csrs.read(addr & CSR_ADDR_MASK).unwrap_or_default()
    }

    /// Writes a value to a Control and Status Register (CSR).
    ///
    /// # Arguments
    ///
    /// * `addr` - The CSR address; bits above the low 12 are ignored.
    /// * `val` - The 64-bit value to store.
    pub fn csr_write(&mut self, addr: u16, val: u64) {
        let _ = self.csrs.write(addr & CSR_ADDR_MASK, val);
    }
}
