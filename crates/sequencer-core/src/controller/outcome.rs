use crate::{Button, ControlError};

use std::time::Duration;

use uuid::Uuid;

/// What the controller did in response to one button event.
#[derive(Debug)]
pub enum Outcome {
    /// A recording process was started and the Record indicator lit.
    RecordingStarted {
        /// Log correlation id for this recording.
        session_id: Uuid,
    },
    /// The recording process was terminated and the Record indicator cleared.
    RecordingStopped {
        /// Id of the recording that was stopped.
        session_id: Option<Uuid>,
        /// How long the recording ran.
        duration: Duration,
    },
    /// A playback process was started.
    PlaybackStarted,
    /// The event was deliberately not acted upon.
    Ignored(Ignored),
    /// Launching the role's process failed. Controller state is unchanged.
    Failed {
        /// Which role failed.
        role: Button,
        /// The spawn error.
        error: ControlError,
    },
}

/// Reason an event caused no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// Record pressed while a recording is already running.
    AlreadyRecording,
    /// Record pressed while playback is running.
    PlaybackActive,
    /// Play pressed while a recording is running.
    RecordingActive,
    /// Play pressed while playback is already running.
    AlreadyPlaying,
    /// Record released too soon after the recording started; contact bounce.
    Bounce,
    /// Short single press released: the recording stays latched until the next release.
    AwaitingRelease,
    /// Event with no behavior attached, or a stop with nothing to stop.
    NotBound,
}
