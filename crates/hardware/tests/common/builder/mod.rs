//! Builders for raw test inputs.

/// Minimal ELF64 image writer.
pub mod elf;
