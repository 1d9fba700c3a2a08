use crate::{
    AppError,
    config::{Config, PinConfig, TimingConfig},
};

use std::{fs, path::Path, time::Duration};

use uuid::Uuid;

fn default_config() -> Config {
    Config::with_data_dir(Path::new("/var/lib/sequencer"))
}

/// WHAT: The generated default configuration is valid
/// WHY: First launch must work without editing the file
#[test]
fn given_default_config_when_validating_then_ok() {
    // Given: Defaults for a data directory
    let config = default_config();

    // When/Then: Validation passes and commands point at Sample.wav
    assert!(config.validate().is_ok());
    assert_eq!(config.commands.record[0], "arecord");
    assert!(config.commands.record[1].ends_with("Sample.wav"));
    assert_eq!(config.commands.play[1], config.commands.record[1]);
    assert_eq!(config.commands.placeholder, vec!["true".to_string()]);
}

/// WHAT: Missing pins and timing sections fall back to defaults
/// WHY: Users only need to configure the commands
#[test]
#[allow(clippy::unwrap_used)]
fn given_commands_only_toml_when_parsing_then_defaults_filled() {
    // Given: A config with only a commands section
    let toml = r#"
        [commands]
        record = ["arecord", "/tmp/a.wav"]
        play = ["aplay", "/tmp/a.wav"]
    "#;

    // When: Parsing
    let config = Config::from_toml(toml).unwrap();

    // Then: Pins and timing take their defaults
    assert_eq!(config.pins, PinConfig::default());
    assert_eq!(config.timing, TimingConfig::default());
    assert_eq!(
        config.timing.controller_timing().debounce,
        Duration::from_millis(100)
    );
    assert_eq!(
        config.timing.controller_timing().hold_threshold,
        Duration::from_secs(1)
    );
    assert!(config.validate().is_ok());
}

/// WHAT: A config without commands is rejected at parse time
/// WHY: There is no sensible record target without a data directory
#[test]
fn given_toml_without_commands_when_parsing_then_config_error() {
    let result = Config::from_toml("[timing]\ndebounce_ms = 50\n");

    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Two roles sharing one pin are rejected
/// WHY: Each of the four roles needs its own pin
#[test]
fn given_duplicate_pins_when_validating_then_config_error() {
    let mut config = default_config();
    config.pins.power_led = config.pins.record_led.clone();

    assert!(matches!(
        config.validate(),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: Blank pins are rejected
/// WHY: Every role must be assigned
#[test]
fn given_blank_pin_when_validating_then_config_error() {
    let mut config = default_config();
    config.pins.play_button = "   ".to_string();

    assert!(matches!(
        config.validate(),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: Unparseable button hotkeys are rejected
/// WHY: Registration would fail later with a less helpful error
#[test]
fn given_invalid_hotkey_when_validating_then_config_error() {
    let mut config = default_config();
    config.pins.record_button = "ctrl+NotAKey".to_string();

    assert!(matches!(
        config.validate(),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: The same hotkey spelled two ways is rejected
/// WHY: Both buttons would fire on one key combination
#[test]
fn given_equivalent_hotkeys_when_validating_then_config_error() {
    let mut config = default_config();
    config.pins.record_button = "ctrl+shift+KeyR".to_string();
    config.pins.play_button = "shift+ctrl+KeyR".to_string();

    assert!(matches!(
        config.validate(),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: Empty commands are rejected
/// WHY: The controller needs a program for every role
#[test]
fn given_empty_play_command_when_validating_then_control_error() {
    let mut config = default_config();
    config.commands.play.clear();

    assert!(matches!(config.validate(), Err(AppError::Control { .. })));
}

/// WHAT: A debounce window at or above the hold threshold is rejected
/// WHY: No release could ever stop a held recording
#[test]
fn given_inverted_timing_when_validating_then_config_error() {
    let mut config = default_config();
    config.timing = TimingConfig {
        debounce_ms: 1000,
        hold_threshold_ms: 1000,
    };

    assert!(matches!(
        config.validate(),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: A saved config reads back identically
/// WHY: Atomic save must produce a loadable file
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_when_saved_then_file_parses_to_same_config() {
    // Given: A customised config and a scratch directory
    let dir = std::env::temp_dir().join(format!("sequencer-config-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    let mut config = default_config();
    config.pins.record_led = "Rec".to_string();
    config.timing.debounce_ms = 80;

    // When: Saving
    config.save_to(&path).unwrap();

    // Then: The file parses back and no temp file is left behind
    let loaded = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("toml.tmp").exists());

    fs::remove_dir_all(&dir).unwrap();
}
