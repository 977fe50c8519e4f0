//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline memory map constants (RAM base and size).
//! 2. **Structures:** Hierarchical config for general run options and the memory window.
//! 3. **Loading:** JSON parsing with validation via `Config::from_json`.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Base address of main system RAM.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of main system RAM (1 MiB).
    pub const RAM_SIZE: usize = 1024 * 1024;
}

/// Errors produced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a `Config`.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memory window is empty or wraps past the end of the address space.
    #[error("invalid memory window: base {base:#x}, size {size:#x}")]
    InvalidMemory {
        /// Configured RAM base.
        base: u64,
        /// Configured RAM size in bytes.
        size: usize,
    },
}

/// Root emulator configuration.
///
/// # Examples
///
/// ```
/// use rvemu_core::Config;
///
/// let config = Config::from_json(r#"{ "memory": { "ram_size": 65536 } }"#).unwrap();
/// assert_eq!(config.memory.ram_size, 65536);
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// assert!(!config.general.trace_instructions);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory window.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the memory window is non-empty and does not wrap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let MemoryConfig { ram_base, ram_size } = self.memory;
        let wraps = ram_base.checked_add(ram_size as u64).is_none();
        if ram_size == 0 || wraps {
            return Err(ConfigError::InvalidMemory {
                base: ram_base,
                size: ram_size,
            });
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions; `None` runs until halt or fault.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Main memory window `[ram_base, ram_base + ram_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Physical base address of RAM; also the reset PC.
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,

    /// RAM size in bytes; the reset stack pointer is `ram_base + ram_size`.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    const fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// First address past the end of RAM.
    pub const fn ram_end(&self) -> u64 {
        self.ram_base.wrapping_add(self.ram_size as u64)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}
