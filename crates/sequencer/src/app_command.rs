use sequencer_core::ButtonEvent;

/// Commands sent from the button handler to the main application.
#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    /// A panel button changed state.
    Button(ButtonEvent),
    /// Request application shutdown.
    Shutdown,
}
