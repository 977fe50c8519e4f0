//! Configuration parsing.

use pretty_assertions::assert_eq;
use rvemu_core::config::{Config, ConfigError, GeneralConfig, MemoryConfig};

#[test]
fn full_document() {
    let json = r#"{
        "general": { "trace_instructions": true, "max_instructions": 5000 },
        "memory": { "ram_base": 2147483648, "ram_size": 4096 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: true,
                max_instructions: Some(5000),
            },
            memory: MemoryConfig {
                ram_base: 0x8000_0000,
                ram_size: 4096,
            },
        }
    );
    assert_eq!(config.memory.ram_end(), 0x8000_1000);
}

#[test]
fn partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "memory": { "ram_base": 4096 } }"#).unwrap();
    assert_eq!(config.memory.ram_base, 0x1000);
    assert_eq!(config.memory.ram_size, MemoryConfig::default().ram_size);
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn empty_memory_is_rejected() {
    let err = Config::from_json(r#"{ "memory": { "ram_size": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMemory { size: 0, .. }));
}

#[test]
fn wrapping_window_is_rejected() {
    let json = r#"{ "memory": { "ram_base": 18446744073709551615, "ram_size": 16 } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::InvalidMemory { .. })
    ));
}

#[test]
fn syntax_errors_are_parse_errors() {
    assert!(matches!(
        Config::from_json("{ memory: }"),
        Err(ConfigError::Parse(_))
    ));
}
