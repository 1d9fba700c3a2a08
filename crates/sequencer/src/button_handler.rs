//! Global hotkey input source for the two panel buttons.
//!
//! Registers the Record and Play hotkeys and turns their press/release
//! events into [`ButtonEvent`]s sent to the main application.

use crate::{AppCommand, AppError, AppResult, config::PinConfig};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use sequencer_core::{Button, ButtonEvent};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, trace, warn};

/// Hotkey ids of the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBindings {
    /// Id of the Record hotkey.
    pub record_id: u32,
    /// Id of the Play hotkey.
    pub play_id: u32,
}

impl ButtonBindings {
    fn button(&self, id: u32) -> Option<Button> {
        if id == self.record_id {
            Some(Button::Record)
        } else if id == self.play_id {
            Some(Button::Play)
        } else {
            None
        }
    }
}

/// Maps raw hotkey events to button edges.
///
/// Keyboard auto-repeat delivers repeated presses while a key is held; only
/// the first press after a release is passed on.
#[derive(Debug)]
pub struct ButtonMapper {
    bindings: ButtonBindings,
    record_held: bool,
    play_held: bool,
}

impl ButtonMapper {
    /// Mapper for `bindings` with both buttons up.
    pub fn new(bindings: ButtonBindings) -> Self {
        Self {
            bindings,
            record_held: false,
            play_held: false,
        }
    }

    /// Translate one hotkey event. Returns `None` for foreign hotkeys and repeats.
    pub fn map(&mut self, id: u32, state: HotKeyState) -> Option<ButtonEvent> {
        let button = self.bindings.button(id)?;
        let held = match button {
            Button::Record => &mut self.record_held,
            Button::Play => &mut self.play_held,
        };

        match state {
            HotKeyState::Pressed if *held => None,
            HotKeyState::Pressed => {
                *held = true;
                Some(ButtonEvent::Pressed(button))
            }
            HotKeyState::Released => {
                *held = false;
                Some(ButtonEvent::Released(button))
            }
        }
    }
}

/// Forwards button hotkey events to the application.
pub struct ButtonHandler {
    bindings: ButtonBindings,
    command_tx: mpsc::Sender<AppCommand>,
}

impl ButtonHandler {
    /// Register the Record and Play hotkeys from `pins`.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao` event loop) so that hotkey messages are dispatched on
    /// Windows. The returned [`GlobalHotKeyManager`] must be kept alive on
    /// that thread for the hotkeys to remain registered.
    #[track_caller]
    #[instrument(skip(pins))]
    pub fn register_buttons(pins: &PinConfig) -> AppResult<(GlobalHotKeyManager, ButtonBindings)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let record = pins.hotkey(Button::Record)?;
        let play = pins.hotkey(Button::Play)?;

        manager
            .register_all(&[record, play])
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!(
                    "Failed to register {} / {}: {}",
                    pins.record_button, pins.play_button, e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            record_button = %pins.record_button,
            play_button = %pins.play_button,
            "Button hotkeys registered"
        );

        Ok((
            manager,
            ButtonBindings {
                record_id: record.id(),
                play_id: play.id(),
            },
        ))
    }

    /// Create a handler for previously registered buttons.
    ///
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub fn new(bindings: ButtonBindings, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            bindings,
            command_tx,
        }
    }

    /// Run the button event loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // Presses made while the startup pattern was playing are discarded.
        let stale = receiver.try_iter().count();
        if stale > 0 {
            debug!(stale, "Discarded hotkey events queued during startup");
        }

        // GlobalHotKeyEvent::receiver() is a crossbeam channel with a blocking
        // recv(); one blocking task forwards into the async side. It exits on
        // the first blocking_send() after event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut mapper = ButtonMapper::new(self.bindings);

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Button handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    match mapper.map(event.id, event.state) {
                        Some(button_event) => self.forward(button_event).await?,
                        None => trace!(id = event.id, state = ?event.state, "Hotkey event dropped"),
                    }
                }
            }
        }

        drop(event_rx);

        // The blocking task may be parked in recv() until the next hotkey;
        // it is cleaned up by the runtime on exit.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    async fn forward(&self, event: ButtonEvent) -> AppResult<()> {
        debug!(?event, "Button event");

        self.command_tx
            .send(AppCommand::Button(event))
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", event, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
