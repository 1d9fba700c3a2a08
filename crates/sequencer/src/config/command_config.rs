use crate::AppResult;

use sequencer_core::{CommandLine, SessionCommands};
use serde::{Deserialize, Serialize};

/// External programs launched for each role.
///
/// Each entry is the program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Recording command, e.g. `["arecord", "Sample.wav", "-f", "dat"]`.
    pub record: Vec<String>,
    /// Playback command, e.g. `["aplay", "Sample.wav"]`.
    pub play: Vec<String>,
    /// Command that exits immediately, used to seed both roles.
    #[serde(default = "default_placeholder")]
    pub placeholder: Vec<String>,
}

fn default_placeholder() -> Vec<String> {
    vec!["true".to_string()]
}

impl CommandConfig {
    /// Default `arecord`/`aplay` pair writing to and reading from `sample_path`.
    pub fn for_sample(sample_path: &str) -> Self {
        Self {
            record: vec![
                "arecord".to_string(),
                sample_path.to_string(),
                "-f".to_string(),
                "dat".to_string(),
            ],
            play: vec!["aplay".to_string(), sample_path.to_string()],
            placeholder: default_placeholder(),
        }
    }

    /// Build validated command lines for the controller.
    ///
    /// # Errors
    ///
    /// Fails if any command is empty.
    #[track_caller]
    pub fn session_commands(&self) -> AppResult<SessionCommands> {
        Ok(SessionCommands {
            record: CommandLine::new(self.record.iter().cloned())?,
            play: CommandLine::new(self.play.iter().cloned())?,
            placeholder: CommandLine::new(self.placeholder.iter().cloned())?,
        })
    }
}
