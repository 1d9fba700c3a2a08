use crate::ProcessHandle;

use std::time::Instant;

use uuid::Uuid;

/// Liveness of one role, derived from its process handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleState {
    /// No process is running for this role.
    Idle,
    /// The role's process is running.
    Active,
}

impl RoleState {
    pub(crate) fn of<H: ProcessHandle>(handle: &mut H) -> Self {
        if handle.is_running() {
            RoleState::Active
        } else {
            RoleState::Idle
        }
    }
}

/// Recording role: the process plus the bookkeeping for hold/latch detection.
pub(crate) struct RecordingSession<H> {
    pub(crate) handle: H,
    /// When the current recording was started. `None` until the first one.
    pub(crate) started_at: Option<Instant>,
    /// Record presses since the last honored stop.
    pub(crate) press_count: u32,
    /// Log correlation id of the current recording.
    pub(crate) session_id: Option<Uuid>,
}

impl<H: ProcessHandle> RecordingSession<H> {
    pub(crate) fn new(placeholder: H) -> Self {
        Self {
            handle: placeholder,
            started_at: None,
            press_count: 0,
            session_id: None,
        }
    }

    pub(crate) fn state(&mut self) -> RoleState {
        RoleState::of(&mut self.handle)
    }
}

/// Playback role.
pub(crate) struct PlaybackSession<H> {
    pub(crate) handle: H,
}

impl<H: ProcessHandle> PlaybackSession<H> {
    pub(crate) fn new(placeholder: H) -> Self {
        Self {
            handle: placeholder,
        }
    }

    pub(crate) fn state(&mut self) -> RoleState {
        RoleState::of(&mut self.handle)
    }
}
