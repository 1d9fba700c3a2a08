//! Power-on indicator flash.
//!
//! Plays a fixed light pattern once at boot so the user can see both
//! indicators work and knows when the buttons become live.

use crate::{Clock, IndicatorPanel, IndicatorRole};

use std::time::Duration;

use tracing::{debug, info, instrument};

/// One frame of the startup pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupStep {
    /// Record indicator state.
    pub record: bool,
    /// Power indicator state.
    pub power: bool,
    /// How long the frame is held before the next one.
    pub hold: Duration,
}

const fn step(record: bool, power: bool, hold_ms: u64) -> StartupStep {
    StartupStep {
        record,
        power,
        hold: Duration::from_millis(hold_ms),
    }
}

/// Default pattern. Ends with only Power lit, which is the ready state.
pub const STARTUP_STEPS: [StartupStep; 7] = [
    step(false, false, 0),
    step(true, false, 500),
    step(true, true, 1000),
    step(false, false, 200),
    step(true, true, 200),
    step(false, false, 1000),
    step(false, true, 0),
];

/// Runs the startup light pattern.
#[derive(Debug, Clone, Copy)]
pub struct StartupSequencer {
    steps: &'static [StartupStep],
}

impl Default for StartupSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupSequencer {
    /// Sequencer for the default pattern.
    pub fn new() -> Self {
        Self {
            steps: &STARTUP_STEPS,
        }
    }

    /// Frames this sequencer plays.
    pub fn steps(&self) -> &'static [StartupStep] {
        self.steps
    }

    /// Total time [`run`](Self::run) blocks for.
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.hold).sum()
    }

    /// Play the pattern, blocking until the last frame is shown.
    #[instrument(skip_all)]
    pub fn run<P, C>(&self, indicators: &mut P, clock: &C)
    where
        P: IndicatorPanel + ?Sized,
        C: Clock + ?Sized,
    {
        for (index, frame) in self.steps.iter().enumerate() {
            indicators.set_state(IndicatorRole::Record, frame.record);
            indicators.set_state(IndicatorRole::Power, frame.power);

            debug!(
                step = index,
                record = frame.record,
                power = frame.power,
                hold_ms = frame.hold.as_millis(),
                "Startup frame"
            );

            if !frame.hold.is_zero() {
                clock.sleep(frame.hold);
            }
        }

        info!(duration_ms = self.duration().as_millis(), "Startup sequence complete");
    }
}
