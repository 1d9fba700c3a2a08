use crate::{
    ControlError, CoreResult,
    process::{CommandLine, ProcessHandle, ProcessLauncher},
};

use std::{
    panic::Location,
    process::{Child, Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// [`ProcessHandle`] over an OS child process.
///
/// Reports stopped as soon as the kill signal has been delivered; the exit
/// status is reaped by a later poll.
pub struct ChildProcess {
    child: Child,
    command: String,
    exited: bool,
    killed: bool,
}

impl ChildProcess {
    /// OS process id.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Non-blocking liveness of the OS process, ignoring a pending kill.
    fn poll(&mut self) -> bool {
        if self.exited {
            return false;
        }

        match self.child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                debug!(command = %self.command, ?status, "Process exited");
                self.exited = true;
                false
            }
            Err(e) => {
                // Can't poll it any more; treat as gone so the role is usable again.
                warn!(command = %self.command, error = ?e, "Failed to poll process");
                self.exited = true;
                false
            }
        }
    }
}

impl ProcessHandle for ChildProcess {
    fn is_running(&mut self) -> bool {
        let alive = self.poll();
        alive && !self.killed
    }

    fn terminate(&mut self) {
        if !self.poll() {
            return;
        }

        match self.child.kill() {
            Ok(()) => {
                self.killed = true;
                debug!(command = %self.command, pid = self.child.id(), "Kill signal sent");
            }
            // Raced with a natural exit.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {
                self.exited = true;
            }
            Err(e) => warn!(command = %self.command, error = ?e, "Failed to kill process"),
        }
    }
}

/// Spawns real OS processes.
///
/// stdin is detached so the child never competes with the controller for
/// terminal input. stdout and stderr are inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    type Handle = ChildProcess;

    #[track_caller]
    #[instrument(skip(self, command), fields(command = %command))]
    fn spawn(&self, command: &CommandLine) -> CoreResult<ChildProcess> {
        let child = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| ControlError::SpawnFailed {
                command: command.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(pid = child.id(), "Process spawned");

        Ok(ChildProcess {
            child,
            command: command.to_string(),
            exited: false,
            killed: false,
        })
    }
}
