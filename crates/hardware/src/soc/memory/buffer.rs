//! DRAM Buffer Implementation.
//!
//! Backing storage for system RAM: a zero-initialized heap allocation with
//! bounds-checked, little-endian multi-byte access. Every accessor returns
//! `None` rather than panicking when the range leaves the buffer.

/// Fixed-capacity byte buffer backing a RAM device.
#[derive(Clone, PartialEq, Eq)]
pub struct DramBuffer {
    bytes: Box<[u8]>,
}

impl DramBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-sized buffer.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `len` bytes starting at `offset`, if they are all in bounds.
    pub fn read_slice(&self, offset: u64, len: usize) -> Option<&[u8]> {
        let start = usize::try_from(offset).ok()?;
        self.bytes.get(start..start.checked_add(len)?)
    }

    /// Copies `data` into the buffer at `offset`; nothing is written if it does not fit.
    pub fn write_slice(&mut self, offset: u64, data: &[u8]) -> Option<()> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(data.len())?;
        self.bytes.get_mut(start..end)?.copy_from_slice(data);
        Some(())
    }

    /// Reads `len` bytes at `offset`, least significant byte first.
    pub fn read_le(&self, offset: u64, len: usize) -> Option<u64> {
        let bytes = self.read_slice(offset, len)?;
        Some(
            bytes
                .iter()
                .rev()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
        )
    }

    /// Writes the low `len` bytes of `val` at `offset`, least significant byte first.
    pub fn write_le(&mut self, offset: u64, len: usize, val: u64) -> Option<()> {
        let start = usize::try_from(offset).ok()?;
        let dest = self.bytes.get_mut(start..start.checked_add(len)?)?;
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = (val >> (8 * i)) as u8;
        }
        Some(())
    }
}

impl std::fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DramBuffer")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
