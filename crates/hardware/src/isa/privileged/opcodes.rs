//! RISC-V Privileged Architecture Opcodes.
//!
//! Opcodes and function codes for system instructions. ECALL and EBREAK are
//! executed; the trap-return, wait and fence encodings are recognized so the
//! decoder can report them as unimplemented instead of illegal.

/// System instruction opcode (0b1110011).
pub const OP_SYSTEM: u32 = 0b1110011;

/// `funct3` of the fixed-encoding system instructions.
pub const PRIV: u32 = 0b000;

/// Environment Call (ECALL).
pub const ECALL: u32 = 0x0000_0073;
/// Environment Break (EBREAK).
pub const EBREAK: u32 = 0x0010_0073;
/// Machine Return (MRET).
pub const MRET: u32 = 0x3020_0073;
/// Supervisor Return (SRET).
pub const SRET: u32 = 0x1020_0073;
/// Wait for Interrupt (WFI).
pub const WFI: u32 = 0x1050_0073;

/// Supervisor Memory-Management Fence (SFENCE.VMA), with `rs1`/`rs2` zero.
pub const SFENCE_VMA: u32 = 0x1200_0073;
/// Mask clearing the `rs1`/`rs2` fields of SFENCE.VMA.
pub const SFENCE_VMA_MASK: u32 = 0xFE00_7FFF;

/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u32 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u32 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u32 = 0b011;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u32 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u32 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u32 = 0b111;
