use crate::CommandLine;

use std::time::Duration;

/// Default window after a recording starts in which a release is treated as bounce.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Default hold time after which a release always stops the recording.
pub const DEFAULT_HOLD_THRESHOLD: Duration = Duration::from_secs(1);

/// Commands the controller launches for each role.
#[derive(Debug, Clone)]
pub struct SessionCommands {
    /// Starts a recording, e.g. `arecord Sample.wav -f dat`.
    pub record: CommandLine,
    /// Plays the recording back, e.g. `aplay Sample.wav`.
    pub play: CommandLine,
    /// Trivial command that exits immediately. Seeds both roles with a
    /// finished process so liveness can always be polled.
    pub placeholder: CommandLine,
}

/// Release timing rules for the Record button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerTiming {
    /// Releases this soon after the recording started are ignored.
    pub debounce: Duration,
    /// Releases after the recording has run longer than this stop it.
    pub hold_threshold: Duration,
}

impl Default for ControllerTiming {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            hold_threshold: DEFAULT_HOLD_THRESHOLD,
        }
    }
}
