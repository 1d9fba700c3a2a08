use crate::{ControlError, CoreResult};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// Program plus arguments for an external process.
///
/// Always holds at least the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Build a command line from `program` followed by its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::EmptyCommand`] if `parts` is empty or the
    /// program name is blank.
    #[track_caller]
    pub fn new<I, S>(parts: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = parts.into_iter().map(Into::into);

        let program = parts
            .next()
            .filter(|p: &String| !p.trim().is_empty())
            .ok_or_else(|| ControlError::EmptyCommand {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
