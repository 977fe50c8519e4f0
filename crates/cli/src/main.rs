//! RISC-V RV64 emulator CLI.
//!
//! This binary is the command-line entry point to the emulator. It performs:
//! 1. **Run:** Load a raw image or ELF executable and execute it until halt, fault, or budget.
//! 2. **Disassemble:** Print a raw image as one decoded instruction per word.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvemu_core::config::Config;
use rvemu_core::isa::disasm::disassemble;
use rvemu_core::sim::loader::{self, ImageKind};
use rvemu_core::sim::{Simulator, StopReason};

/// Exit status when the run halts normally.
const EXIT_HALTED: u8 = 0;
/// Exit status on a fault, load error, or bad configuration.
const EXIT_FAILURE: u8 = 1;
/// Exit status when the instruction budget runs out.
const EXIT_BUDGET: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "rvemu",
    author,
    version,
    about = "RISC-V RV64 instruction-set emulator",
    long_about = "Execute RV64IMA + Zicsr programs on a single functional hart.\n\nExamples:\n  rvemu run -f program.bin\n  rvemu run -f program.elf --max-instructions 1000000 --dump-regs\n  rvemu disasm -f program.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw binary or ELF executable.
    Run(RunArgs),

    /// Disassemble a raw binary, one 32-bit word per line.
    Disasm {
        /// Raw binary to disassemble.
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program to execute (raw image loaded at the RAM base, or ELF).
    #[arg(short, long)]
    file: PathBuf,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many instructions (overrides the configuration).
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Print a hex dump of the program before running it.
    #[arg(long)]
    hexdump: bool,

    /// Print the register file when the run ends.
    #[arg(long)]
    dump_regs: bool,

    /// Log every retired instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics when the run ends.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_tracing(args.trace);
            ExitCode::from(cmd_run(&args))
        }
        Commands::Disasm { file } => {
            init_tracing(false);
            ExitCode::from(cmd_disasm(&file))
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the run configuration from the optional file and the CLI overrides.
fn build_config(args: &RunArgs) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("could not read '{}': {e}", path.display()))?;
            Config::from_json(&text).map_err(|e| e.to_string())?
        }
        None => Config::default(),
    };

    if args.max_instructions.is_some() {
        config.general.max_instructions = args.max_instructions;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }
    Ok(config)
}

/// Loads and runs a program; returns the process exit status.
fn cmd_run(args: &RunArgs) -> u8 {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return EXIT_FAILURE;
        }
    };

    let bytes = match loader::load_binary(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return EXIT_FAILURE;
        }
    };
    if args.hexdump {
        print!("{}", loader::hex_dump(&bytes));
    }

    let mut sim = Simulator::new(&config);
    match sim.load_program(&bytes) {
        Ok(ImageKind::Raw) => {
            println!("[*] Raw image: {} ({} bytes)", args.file.display(), bytes.len());
        }
        Ok(ImageKind::Elf { entry }) => {
            println!("[*] ELF: {} (entry {entry:#x})", args.file.display());
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return EXIT_FAILURE;
        }
    }

    let status = match sim.run() {
        Ok(summary) => {
            let (what, status) = match summary.reason {
                StopReason::Halted => ("Halted", EXIT_HALTED),
                StopReason::BudgetExhausted => ("Instruction budget exhausted", EXIT_BUDGET),
            };
            println!(
                "\n[*] {what} after {} instructions at pc {:#x}",
                summary.instructions, summary.pc
            );
            status
        }
        Err(fault) => {
            eprintln!(
                "\n[!] FATAL: {fault} at pc {:#x} (cause {})",
                sim.cpu.pc,
                fault.exception_code()
            );
            EXIT_FAILURE
        }
    };

    if args.dump_regs {
        println!("pc   = {:#018x}", sim.cpu.pc);
        print!("{}", sim.cpu.regs.dump());
    }
    if args.stats {
        sim.cpu.stats.print();
    }
    status
}

/// Disassembles a raw image word by word from the default RAM base.
fn cmd_disasm(path: &Path) -> u8 {
    let bytes = match loader::load_binary(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return EXIT_FAILURE;
        }
    };

    let base = Config::default().memory.ram_base;
    for (i, word) in bytes.chunks(4).enumerate() {
        let mut buf = [0u8; 4];
        buf[..word.len()].copy_from_slice(word);
        let inst = u32::from_le_bytes(buf);
        println!(
            "{:#010x}: {inst:08x}  {}",
            base + (i as u64) * 4,
            disassemble(inst)
        );
    }
    EXIT_HALTED
}
