//! Test doubles for the controller's collaborators.

use crate::{Clock, CommandLine, ControlError, CoreResult, IndicatorPanel, IndicatorRole};
use crate::{ProcessHandle, ProcessLauncher};

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    io,
    panic::Location,
    rc::Rc,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;

/// Process handle whose liveness is flipped by the test.
#[derive(Clone)]
pub(crate) struct FakeHandle {
    running: Rc<Cell<bool>>,
    terminations: Rc<Cell<u32>>,
    polls: Rc<Cell<u32>>,
    stubborn: Rc<Cell<bool>>,
}

impl FakeHandle {
    /// Simulate the process exiting by itself.
    pub(crate) fn exit(&self) {
        self.running.set(false);
    }

    pub(crate) fn running(&self) -> bool {
        self.running.get()
    }

    pub(crate) fn terminations(&self) -> u32 {
        self.terminations.get()
    }

    pub(crate) fn polls(&self) -> u32 {
        self.polls.get()
    }

    /// While set, `terminate` is counted but the process keeps running.
    pub(crate) fn set_stubborn(&self, stubborn: bool) {
        self.stubborn.set(stubborn);
    }
}

impl ProcessHandle for FakeHandle {
    fn is_running(&mut self) -> bool {
        self.polls.set(self.polls.get() + 1);
        self.running.get()
    }

    fn terminate(&mut self) {
        self.terminations.set(self.terminations.get() + 1);
        if !self.stubborn.get() {
            self.running.set(false);
        }
    }
}

/// Launcher that records every spawn and never touches the OS.
///
/// Programs listed in `instant_exit` produce handles that are already
/// finished; programs in `failing` return a spawn error.
pub(crate) struct FakeLauncher {
    spawned: RefCell<Vec<(CommandLine, FakeHandle)>>,
    instant_exit: HashSet<String>,
    failing: RefCell<HashSet<String>>,
}

impl FakeLauncher {
    pub(crate) fn new() -> Self {
        Self {
            spawned: RefCell::new(Vec::new()),
            instant_exit: HashSet::from(["true".to_string()]),
            failing: RefCell::new(HashSet::new()),
        }
    }

    pub(crate) fn failing(self, program: &str) -> Self {
        self.failing.borrow_mut().insert(program.to_string());
        self
    }

    pub(crate) fn recover(&self, program: &str) {
        self.failing.borrow_mut().remove(program);
    }

    /// Number of successful spawns of `program`.
    pub(crate) fn spawn_count(&self, program: &str) -> usize {
        self.spawned
            .borrow()
            .iter()
            .filter(|(cmd, _)| cmd.program() == program)
            .count()
    }

    /// Handle of the most recent successful spawn of `program`.
    pub(crate) fn last(&self, program: &str) -> Option<FakeHandle> {
        self.spawned
            .borrow()
            .iter()
            .rev()
            .find(|(cmd, _)| cmd.program() == program)
            .map(|(_, handle)| handle.clone())
    }
}

impl ProcessLauncher for FakeLauncher {
    type Handle = FakeHandle;

    #[track_caller]
    fn spawn(&self, command: &CommandLine) -> CoreResult<FakeHandle> {
        if self.failing.borrow().contains(command.program()) {
            return Err(ControlError::SpawnFailed {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such program"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let handle = FakeHandle {
            running: Rc::new(Cell::new(!self.instant_exit.contains(command.program()))),
            terminations: Rc::new(Cell::new(0)),
            polls: Rc::new(Cell::new(0)),
            stubborn: Rc::new(Cell::new(false)),
        };
        self.spawned
            .borrow_mut()
            .push((command.clone(), handle.clone()));

        Ok(handle)
    }
}

/// Indicator panel that remembers its state and every write.
#[derive(Debug, Default)]
pub(crate) struct RecordingPanel {
    pub(crate) record: bool,
    pub(crate) power: bool,
    pub(crate) writes: Vec<(IndicatorRole, bool)>,
}

impl IndicatorPanel for RecordingPanel {
    fn set_state(&mut self, role: IndicatorRole, on: bool) {
        match role {
            IndicatorRole::Record => self.record = on,
            IndicatorRole::Power => self.power = on,
        }
        self.writes.push((role, on));
    }
}

/// Clock moved forward only by the test (or by `sleep`).
#[derive(Clone)]
pub(crate) struct ManualClock {
    now: Rc<Cell<Instant>>,
    start: Instant,
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        let start = Instant::now();
        Self {
            now: Rc::new(Cell::new(start)),
            start,
            sleeps: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Jump to `ms` milliseconds after the clock was created.
    pub(crate) fn set_ms(&self, ms: u64) {
        self.now.set(self.start + Duration::from_millis(ms));
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.now.get() - self.start
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        self.now.set(self.now.get() + duration);
    }
}

#[allow(clippy::unwrap_used)]
pub(crate) fn commands() -> crate::SessionCommands {
    crate::SessionCommands {
        record: CommandLine::new(["arecord", "/tmp/Sample.wav", "-f", "dat"]).unwrap(),
        play: CommandLine::new(["aplay", "/tmp/Sample.wav"]).unwrap(),
        placeholder: CommandLine::new(["true"]).unwrap(),
    }
}
