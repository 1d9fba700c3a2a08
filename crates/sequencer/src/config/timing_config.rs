use crate::{
    AppError, AppResult,
    config::{default_debounce_ms, default_hold_threshold_ms},
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use sequencer_core::ControllerTiming;
use serde::{Deserialize, Serialize};

/// Record button release timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Releases this many milliseconds after a recording starts are bounce.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Releases after the recording has run this long always stop it.
    #[serde(default = "default_hold_threshold_ms")]
    pub hold_threshold_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            hold_threshold_ms: default_hold_threshold_ms(),
        }
    }
}

impl TimingConfig {
    /// The debounce window must be shorter than the hold threshold.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        if self.debounce_ms >= self.hold_threshold_ms {
            return Err(AppError::ConfigError {
                reason: format!(
                    "debounce_ms ({}) must be less than hold_threshold_ms ({})",
                    self.debounce_ms, self.hold_threshold_ms
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Controller timing in core units.
    pub fn controller_timing(&self) -> ControllerTiming {
        ControllerTiming {
            debounce: Duration::from_millis(self.debounce_ms),
            hold_threshold: Duration::from_millis(self.hold_threshold_ms),
        }
    }
}
