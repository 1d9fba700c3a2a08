mod command_config;
#[allow(clippy::module_inception)]
mod config;
mod pin_config;
mod timing_config;

pub(crate) use {
    command_config::CommandConfig, config::Config, pin_config::PinConfig,
    timing_config::TimingConfig,
};

pub(crate) const DEFAULT_RECORD_BUTTON: &str = "ctrl+shift+KeyR";
pub(crate) const DEFAULT_PLAY_BUTTON: &str = "ctrl+shift+KeyP";
pub(crate) const DEFAULT_RECORD_LED: &str = "Record";
pub(crate) const DEFAULT_POWER_LED: &str = "Power";
pub(crate) const DEFAULT_DEBOUNCE_MS: u64 = 100;
pub(crate) const DEFAULT_HOLD_THRESHOLD_MS: u64 = 1000;
pub(crate) const SAMPLE_FILE_NAME: &str = "Sample.wav";

pub(crate) fn default_record_button() -> String {
    DEFAULT_RECORD_BUTTON.to_string()
}

pub(crate) fn default_play_button() -> String {
    DEFAULT_PLAY_BUTTON.to_string()
}

pub(crate) fn default_record_led() -> String {
    DEFAULT_RECORD_LED.to_string()
}

pub(crate) fn default_power_led() -> String {
    DEFAULT_POWER_LED.to_string()
}

pub(crate) fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

pub(crate) fn default_hold_threshold_ms() -> u64 {
    DEFAULT_HOLD_THRESHOLD_MS
}
