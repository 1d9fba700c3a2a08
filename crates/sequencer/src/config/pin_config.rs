use crate::{
    AppError, AppResult,
    config::{default_play_button, default_power_led, default_record_button, default_record_led},
};

use std::{collections::HashSet, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use global_hotkey::hotkey::HotKey;
use sequencer_core::{Button, IndicatorRole};
use serde::{Deserialize, Serialize};

/// Physical identifiers for the four panel roles.
///
/// Buttons are global hotkey accelerators (e.g. `ctrl+shift+KeyR`);
/// indicators are the labels of their tray menu entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinConfig {
    /// Record button.
    #[serde(default = "default_record_button")]
    pub record_button: String,
    /// Play button.
    #[serde(default = "default_play_button")]
    pub play_button: String,
    /// Record indicator.
    #[serde(default = "default_record_led")]
    pub record_led: String,
    /// Power indicator.
    #[serde(default = "default_power_led")]
    pub power_led: String,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            record_button: default_record_button(),
            play_button: default_play_button(),
            record_led: default_record_led(),
            power_led: default_power_led(),
        }
    }
}

impl PinConfig {
    /// Check every role is assigned, no two roles share an identifier, and
    /// both buttons are valid hotkeys.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let roles = [
            ("record_button", &self.record_button),
            ("play_button", &self.play_button),
            ("record_led", &self.record_led),
            ("power_led", &self.power_led),
        ];

        let mut seen = HashSet::new();
        for (role, pin) in roles {
            if pin.trim().is_empty() {
                return Err(AppError::ConfigError {
                    reason: format!("Pin for {} is empty", role),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !seen.insert(pin.trim()) {
                return Err(AppError::ConfigError {
                    reason: format!("Pin {:?} for {} is assigned to more than one role", pin, role),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let record = self.hotkey(Button::Record)?;
        let play = self.hotkey(Button::Play)?;
        if record.id() == play.id() {
            return Err(AppError::ConfigError {
                reason: format!(
                    "record_button {:?} and play_button {:?} are the same hotkey",
                    self.record_button, self.play_button
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Parsed hotkey for `button`.
    #[track_caller]
    pub fn hotkey(&self, button: Button) -> AppResult<HotKey> {
        let pin = match button {
            Button::Record => &self.record_button,
            Button::Play => &self.play_button,
        };

        HotKey::from_str(pin.trim()).map_err(|e| AppError::ConfigError {
            reason: format!("Invalid hotkey {:?} for {:?} button: {}", pin, button, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Display label for an indicator.
    pub fn led_label(&self, role: IndicatorRole) -> &str {
        match role {
            IndicatorRole::Record => &self.record_led,
            IndicatorRole::Power => &self.power_led,
        }
    }
}
