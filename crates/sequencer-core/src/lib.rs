//! Sequencer Core Library
//!
//! Two-button record/play control: debounced Record button with hold or
//! double-tap latching, a Play button, two status indicators, and mutual
//! exclusion between the external recording and playback processes.
//!
//! Hardware and process access sit behind [`IndicatorPanel`],
//! [`ProcessLauncher`]/[`ProcessHandle`] and [`Clock`].
//!
//! # Example
//!
//! ```no_run
//! use sequencer_core::{
//!     Button, ButtonEvent, CommandLine, ControllerTiming, CoreResult, IndicatorPanel,
//!     IndicatorRole, RecordPlayController, SessionCommands, StartupSequencer, SystemClock,
//!     SystemLauncher,
//! };
//!
//! struct Leds;
//!
//! impl IndicatorPanel for Leds {
//!     fn set_state(&mut self, role: IndicatorRole, on: bool) {
//!         println!("{:?} -> {}", role, on);
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let mut leds = Leds;
//!     StartupSequencer::new().run(&mut leds, &SystemClock);
//!
//!     let commands = SessionCommands {
//!         record: CommandLine::new(["arecord", "Sample.wav", "-f", "dat"])?,
//!         play: CommandLine::new(["aplay", "Sample.wav"])?,
//!         placeholder: CommandLine::new(["true"])?,
//!     };
//!     let mut controller = RecordPlayController::new(
//!         SystemLauncher,
//!         leds,
//!         SystemClock,
//!         commands,
//!         ControllerTiming::default(),
//!     )?;
//!
//!     controller.handle(ButtonEvent::Pressed(Button::Record));
//!     Ok(())
//! }
//! ```

mod clock;
mod controller;
mod error;
mod indicator;
mod input;
mod process;
mod startup;

pub use {
    clock::{Clock, SystemClock},
    controller::{
        ControllerTiming, DEFAULT_DEBOUNCE, DEFAULT_HOLD_THRESHOLD, Ignored, Outcome,
        RecordPlayController, RoleState, SessionCommands,
    },
    error::{ControlError, Result as CoreResult},
    indicator::{IndicatorPanel, IndicatorRole},
    input::{Button, ButtonEvent},
    process::{ChildProcess, CommandLine, ProcessHandle, ProcessLauncher, SystemLauncher},
    startup::{STARTUP_STEPS, StartupSequencer, StartupStep},
};

#[cfg(test)]
mod tests;
