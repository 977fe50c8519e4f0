//! Minimal ELF64 little-endian executable writer.
//!
//! Produces a file header, one program header per segment and the segment
//! bytes back to back. No section headers are emitted.

/// `EM_RISCV`.
pub const EM_RISCV: u16 = 243;
/// `EM_X86_64`.
pub const EM_X86_64: u16 = 62;

const EHDR_SIZE: u64 = 64;
const PHDR_SIZE: u64 = 56;
const PT_LOAD: u32 = 1;

/// One `PT_LOAD` segment.
pub struct Segment<'a> {
    pub addr: u64,
    pub data: &'a [u8],
    pub mem_size: u64,
}

/// Builds an executable for `machine` with the given entry point and segments.
pub fn elf64(machine: u16, entry: u64, segments: &[Segment<'_>]) -> Vec<u8> {
    let mut out = Vec::new();

    // e_ident
    out.extend_from_slice(b"\x7fELF");
    out.extend_from_slice(&[2, 1, 1, 0]);
    out.extend_from_slice(&[0; 8]);
    out.extend_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    out.extend_from_slice(&machine.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&entry.to_le_bytes());
    out.extend_from_slice(&EHDR_SIZE.to_le_bytes()); // e_phoff
    out.extend_from_slice(&0u64.to_le_bytes()); // e_shoff
    out.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    out.extend_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
    out.extend_from_slice(&(PHDR_SIZE as u16).to_le_bytes());
    out.extend_from_slice(&(segments.len() as u16).to_le_bytes());
    out.extend_from_slice(&64u16.to_le_bytes()); // e_shentsize
    out.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
    out.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx
    assert_eq!(out.len() as u64, EHDR_SIZE);

    let mut offset = EHDR_SIZE + PHDR_SIZE * segments.len() as u64;
    for seg in segments {
        out.extend_from_slice(&PT_LOAD.to_le_bytes());
        out.extend_from_slice(&7u32.to_le_bytes()); // RWX
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&seg.addr.to_le_bytes()); // p_vaddr
        out.extend_from_slice(&seg.addr.to_le_bytes()); // p_paddr
        out.extend_from_slice(&(seg.data.len() as u64).to_le_bytes());
        out.extend_from_slice(&seg.mem_size.to_le_bytes());
        out.extend_from_slice(&4u64.to_le_bytes());
        offset += seg.data.len() as u64;
    }

    for seg in segments {
        out.extend_from_slice(seg.data);
    }
    out
}
