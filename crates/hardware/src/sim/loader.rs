//! Program Loader.
//!
//! This module gets guest programs into RAM and sets the initial PC. It performs:
//! 1. **Binary loading:** Reads a program file from disk into a byte buffer.
//! 2. **Format detection:** ELF files are recognized by their magic; anything else is a raw image.
//! 3. **Placement:** ELF `PT_LOAD` segments go to their physical addresses and the PC is
//!    set to the entry point; raw images are copied to the RAM base.
//! 4. **Inspection:** A hex dump of the loaded bytes for the CLI.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use object::read::elf::ElfFile64;
use object::{Architecture, Endianness, Object, ObjectSegment};
use thiserror::Error;
use tracing::debug;

use crate::core::Cpu;

/// Leading bytes of every ELF file.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Bytes shown per hex dump line.
const HEX_DUMP_WIDTH: usize = 16;

/// Errors produced while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The bus has no RAM device to load into.
    #[error("no RAM is mapped")]
    NoMemory,

    /// A raw image is larger than RAM.
    #[error("image of {len} bytes does not fit in {capacity} bytes of RAM")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
        /// RAM capacity in bytes.
        capacity: u64,
    },

    /// The file starts with the ELF magic but could not be parsed.
    #[error("malformed ELF: {0}")]
    MalformedElf(String),

    /// The ELF targets a different machine.
    #[error("ELF is for {0:?}, expected RISC-V 64")]
    WrongArchitecture(Architecture),

    /// A loadable segment does not lie entirely inside RAM.
    #[error("segment [{addr:#x}, +{size:#x}) is outside RAM")]
    SegmentOutOfRange {
        /// Segment physical address.
        addr: u64,
        /// Segment size in memory.
        size: u64,
    },
}

/// Format of a loaded program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Flat binary copied to the RAM base.
    Raw,
    /// ELF executable; the PC holds its entry point.
    Elf {
        /// Entry point address.
        entry: u64,
    },
}

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file, or `LoadError::Io` naming the path.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns `true` if `bytes` starts with the ELF magic.
pub fn is_elf(bytes: &[u8]) -> bool {
    bytes.starts_with(ELF_MAGIC)
}

/// Loads a program into the CPU's RAM and points the PC at its first instruction.
///
/// # Arguments
///
/// * `cpu` - The CPU to load into.
/// * `bytes` - A raw image or an ELF executable.
///
/// # Returns
///
/// The detected format. On error nothing has been written to RAM.
pub fn load_program(cpu: &mut Cpu, bytes: &[u8]) -> Result<ImageKind, LoadError> {
    if is_elf(bytes) {
        let entry = load_elf(cpu, bytes)?;
        return Ok(ImageKind::Elf { entry });
    }

    cpu.load_image(bytes)?;
    if let Some(base) = cpu.bus.ram().map(|ram| ram.base()) {
        cpu.pc = base;
    }
    Ok(ImageKind::Raw)
}

/// Places every `PT_LOAD` segment at its address and sets the PC to the entry point.
///
/// All segments are checked against the memory map before any is copied.
/// Bytes between a segment's file size and memory size are zeroed.
fn load_elf(cpu: &mut Cpu, bytes: &[u8]) -> Result<u64, LoadError> {
    let elf = ElfFile64::<Endianness>::parse(bytes)
        .map_err(|e| LoadError::MalformedElf(e.to_string()))?;
    if elf.architecture() != Architecture::Riscv64 {
        return Err(LoadError::WrongArchitecture(elf.architecture()));
    }

    let mut segments = Vec::new();
    for segment in elf.segments() {
        let addr = segment.address();
        let size = segment.size();
        let data = segment
            .data()
            .map_err(|e| LoadError::MalformedElf(e.to_string()))?;
        let size = size.max(data.len() as u64);
        if size == 0 {
            continue;
        }
        if !cpu.bus.is_mapped(addr, size) {
            return Err(LoadError::SegmentOutOfRange { addr, size });
        }
        segments.push((addr, size, data));
    }

    for (addr, size, data) in segments {
        let out_of_range = |_| LoadError::SegmentOutOfRange { addr, size };
        cpu.bus.load_binary_at(data, addr).map_err(out_of_range)?;

        let bss = (size - data.len() as u64) as usize;
        if bss > 0 {
            cpu.bus
                .load_binary_at(&vec![0; bss], addr + data.len() as u64)
                .map_err(out_of_range)?;
        }
        debug!(
            addr = format_args!("{addr:#x}"),
            filesz = data.len(),
            memsz = size,
            "segment loaded"
        );
    }

    let entry = elf.entry();
    cpu.pc = entry;
    debug!(entry = format_args!("{entry:#x}"), "elf loaded");
    Ok(entry)
}

/// Formats `bytes` as a hex dump.
///
/// Each line holds 16 bytes: an 8-digit hex offset, a colon, then the bytes
/// in groups of two.
///
/// ```
/// use rvemu_core::sim::loader::hex_dump;
/// assert_eq!(hex_dump(&[0x13, 0x05, 0xA0]), "00000000: 1305 a0\n");
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(HEX_DUMP_WIDTH).enumerate() {
        let _ = write!(out, "{:08x}:", line * HEX_DUMP_WIDTH);
        for pair in chunk.chunks(2) {
            out.push(' ');
            for byte in pair {
                let _ = write!(out, "{byte:02x}");
            }
        }
        out.push('\n');
    }
    out
}
