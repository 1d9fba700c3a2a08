use error_location::ErrorLocation;
use thiserror::Error;

/// Process control errors with source location tracking.
#[derive(Error, Debug)]
pub enum ControlError {
    /// A command line was built without a program to run.
    #[error("Command line is empty {location}")]
    EmptyCommand {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An external record or play process could not be launched.
    #[error("Failed to spawn `{command}`: {source} {location}")]
    SpawnFailed {
        /// The command line that failed to launch.
        command: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A placeholder process could not be created while building the controller.
    #[error("Failed to bootstrap placeholder process `{command}`: {source} {location}")]
    BootstrapFailed {
        /// The placeholder command line.
        command: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ControlError`].
pub type Result<T> = std::result::Result<T, ControlError>;
