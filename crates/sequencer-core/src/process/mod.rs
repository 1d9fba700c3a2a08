mod child;
mod command_line;

pub use {
    child::{ChildProcess, SystemLauncher},
    command_line::CommandLine,
};

use crate::CoreResult;

/// A spawned external process that can be polled and stopped.
pub trait ProcessHandle {
    /// Returns `true` while the process has not exited.
    ///
    /// Must never block waiting for the process.
    fn is_running(&mut self) -> bool;

    /// Ask the process to stop.
    ///
    /// Best-effort and fire-and-forget: does not wait for the exit to be
    /// observed, and is a no-op when the process has already exited. Once the
    /// stop request has been delivered, [`is_running`](Self::is_running)
    /// returns `false`. If it could not be delivered the process keeps
    /// reporting running and callers may retry.
    fn terminate(&mut self);
}

/// Launches [`CommandLine`]s and hands back handles to the running processes.
pub trait ProcessLauncher {
    /// Handle type produced by this launcher.
    type Handle: ProcessHandle;

    /// Spawn `command` without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::SpawnFailed`](crate::ControlError::SpawnFailed)
    /// if the OS refuses to start the program.
    fn spawn(&self, command: &CommandLine) -> CoreResult<Self::Handle>;
}
