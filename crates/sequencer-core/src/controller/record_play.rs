use crate::{
    Button, ButtonEvent, Clock, ControlError, CoreResult, IndicatorPanel, IndicatorRole,
    ProcessHandle, ProcessLauncher,
    controller::{
        ControllerTiming, Ignored, Outcome, RoleState, SessionCommands,
        session::{PlaybackSession, RecordingSession},
    },
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Record/play state machine behind the two buttons.
///
/// Owns both process sessions and the indicator panel. Every button event
/// is handled to completion before the next one, so callers must serialize
/// access (one owning task, or a single lock around the controller).
///
/// Rules:
/// - Record and play are never active at the same time.
/// - Record is "hold to record" or "tap twice to latch": a release stops the
///   recording once it has been held past the hold threshold, or when the
///   button has been pressed more than once since the last stop.
/// - A release within the debounce window of the start is contact bounce.
/// - The Record indicator is lit exactly while the recording process runs.
pub struct RecordPlayController<L: ProcessLauncher, P, C> {
    launcher: L,
    indicators: P,
    clock: C,
    commands: SessionCommands,
    timing: ControllerTiming,
    recording: RecordingSession<L::Handle>,
    playback: PlaybackSession<L::Handle>,
}

impl<L, P, C> RecordPlayController<L, P, C>
where
    L: ProcessLauncher,
    P: IndicatorPanel,
    C: Clock,
{
    /// Build the controller and seed both roles with a placeholder process.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::BootstrapFailed`] if a placeholder process
    /// cannot be spawned. The controller cannot operate without a pollable
    /// handle for each role, so this is fatal.
    #[track_caller]
    #[instrument(skip_all, fields(placeholder = %commands.placeholder))]
    pub fn new(
        launcher: L,
        indicators: P,
        clock: C,
        commands: SessionCommands,
        timing: ControllerTiming,
    ) -> CoreResult<Self> {
        let location = Location::caller();
        let record_placeholder = Self::bootstrap(&launcher, &commands, location)?;
        let play_placeholder = Self::bootstrap(&launcher, &commands, location)?;

        info!(
            record = %commands.record,
            play = %commands.play,
            debounce_ms = timing.debounce.as_millis(),
            hold_threshold_ms = timing.hold_threshold.as_millis(),
            "RecordPlayController initialized"
        );

        Ok(Self {
            launcher,
            indicators,
            clock,
            commands,
            timing,
            recording: RecordingSession::new(record_placeholder),
            playback: PlaybackSession::new(play_placeholder),
        })
    }

    fn bootstrap(
        launcher: &L,
        commands: &SessionCommands,
        location: &'static Location<'static>,
    ) -> CoreResult<L::Handle> {
        launcher
            .spawn(&commands.placeholder)
            .map_err(|e| match e {
                ControlError::SpawnFailed {
                    command, source, ..
                } => ControlError::BootstrapFailed {
                    command,
                    source,
                    location: ErrorLocation::from(location),
                },
                other => other,
            })
    }

    /// Dispatch one button event.
    ///
    /// Polls for a recording that ended by itself first, so the decision is
    /// made against current process liveness.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: ButtonEvent) -> Outcome {
        self.reconcile();

        let outcome = match event {
            ButtonEvent::Pressed(Button::Record) => self.on_record_pressed(),
            ButtonEvent::Released(Button::Record) => self.on_record_released(),
            ButtonEvent::Pressed(Button::Play) => self.on_play_pressed(),
            ButtonEvent::Released(Button::Play) => self.on_play_released(),
        };

        match &outcome {
            Outcome::RecordingStarted { session_id } => {
                info!(session_id = %session_id, "Recording started");
            }
            Outcome::RecordingStopped {
                session_id,
                duration,
            } => {
                info!(
                    session_id = ?session_id,
                    duration_ms = duration.as_millis(),
                    "Recording stopped"
                );
            }
            Outcome::PlaybackStarted => info!("Playback started"),
            Outcome::Ignored(reason) => debug!(?reason, "Event ignored"),
            Outcome::Failed { role, error } => {
                error!(?role, error = ?error, "Operation failed");
            }
        }

        outcome
    }

    /// Record button pressed.
    pub fn on_record_pressed(&mut self) -> Outcome {
        self.recording.press_count = self.recording.press_count.saturating_add(1);

        if self.recording.state() == RoleState::Active {
            return Outcome::Ignored(Ignored::AlreadyRecording);
        }
        if self.playback.state() == RoleState::Active {
            return Outcome::Ignored(Ignored::PlaybackActive);
        }

        self.indicators.set_state(IndicatorRole::Record, true);

        match self.launcher.spawn(&self.commands.record) {
            Ok(handle) => {
                let session_id = Uuid::new_v4();
                self.recording.handle = handle;
                self.recording.started_at = Some(self.clock.now());
                self.recording.session_id = Some(session_id);
                Outcome::RecordingStarted { session_id }
            }
            Err(error) => {
                // Nothing is running, so the indicator must not claim otherwise.
                self.indicators.set_state(IndicatorRole::Record, false);
                Outcome::Failed {
                    role: Button::Record,
                    error,
                }
            }
        }
    }

    /// Record button released.
    pub fn on_record_released(&mut self) -> Outcome {
        // No recording yet counts as "started long ago".
        let held = self
            .recording
            .started_at
            .map(|started| self.clock.now().saturating_duration_since(started));

        if let Some(held) = held {
            if held < self.timing.debounce {
                return Outcome::Ignored(Ignored::Bounce);
            }
            if held <= self.timing.hold_threshold && self.recording.press_count <= 1 {
                return Outcome::Ignored(Ignored::AwaitingRelease);
            }
        }

        let was_active = self.recording.state() == RoleState::Active;

        self.recording.handle.terminate();
        self.indicators.set_state(IndicatorRole::Record, false);
        self.recording.press_count = 0;
        let session_id = self.recording.session_id.take();

        if was_active {
            Outcome::RecordingStopped {
                session_id,
                duration: held.unwrap_or(Duration::ZERO),
            }
        } else {
            Outcome::Ignored(Ignored::NotBound)
        }
    }

    /// Play button pressed.
    pub fn on_play_pressed(&mut self) -> Outcome {
        if self.recording.state() == RoleState::Active {
            return Outcome::Ignored(Ignored::RecordingActive);
        }
        // No retrigger or stop while playing.
        if self.playback.state() == RoleState::Active {
            return Outcome::Ignored(Ignored::AlreadyPlaying);
        }

        match self.launcher.spawn(&self.commands.play) {
            Ok(handle) => {
                self.playback.handle = handle;
                Outcome::PlaybackStarted
            }
            Err(error) => Outcome::Failed {
                role: Button::Play,
                error,
            },
        }
    }

    /// Play button released. Has no effect.
    pub fn on_play_released(&mut self) -> Outcome {
        Outcome::Ignored(Ignored::NotBound)
    }

    /// Bring the Record indicator back in line with the recording process.
    ///
    /// Clears the indicator if the recording exited on its own, and retries
    /// the stop if a recording is still running after its stop was honored.
    /// Also polls playback so a finished player is reaped. Returns `true` if
    /// anything changed.
    pub fn reconcile(&mut self) -> bool {
        self.playback.state();

        let running = self.recording.state() == RoleState::Active;

        match (self.recording.session_id.is_some(), running) {
            (true, false) => {
                let session_id = self.recording.session_id.take();
                self.indicators.set_state(IndicatorRole::Record, false);
                self.recording.press_count = 0;

                info!(session_id = ?session_id, "Recording process exited by itself");

                true
            }
            (false, true) => {
                warn!("Recording process survived its stop, terminating again");
                self.recording.handle.terminate();
                true
            }
            _ => false,
        }
    }

    /// `true` while the recording process runs.
    pub fn is_recording(&mut self) -> bool {
        self.record_state() == RoleState::Active
    }

    /// `true` while the playback process runs.
    pub fn is_playing(&mut self) -> bool {
        self.play_state() == RoleState::Active
    }

    /// Liveness of the recording role.
    pub fn record_state(&mut self) -> RoleState {
        self.recording.state()
    }

    /// Liveness of the playback role.
    pub fn play_state(&mut self) -> RoleState {
        self.playback.state()
    }

    /// Record presses since the last honored stop.
    pub fn press_count(&self) -> u32 {
        self.recording.press_count
    }

    /// The indicator panel this controller drives.
    pub fn indicators(&self) -> &P {
        &self.indicators
    }

    /// The launcher used to start processes.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Stop both roles and clear every indicator.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        self.recording.handle.terminate();
        self.playback.handle.terminate();
        self.recording.press_count = 0;
        self.recording.session_id = None;
        self.indicators.all_off();

        info!("RecordPlayController shut down");
    }
}
