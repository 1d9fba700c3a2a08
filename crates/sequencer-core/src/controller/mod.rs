mod outcome;
mod record_play;
mod session;
mod settings;

pub use {
    outcome::{Ignored, Outcome},
    record_play::RecordPlayController,
    session::RoleState,
    settings::{ControllerTiming, DEFAULT_DEBOUNCE, DEFAULT_HOLD_THRESHOLD, SessionCommands},
};
