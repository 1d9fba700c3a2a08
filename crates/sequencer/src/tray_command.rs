use sequencer_core::IndicatorRole;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all indicator changes and process lifecycle events flow through this enum.
#[derive(Debug, Clone, Copy)]
pub enum TrayCommand {
    /// Switch one indicator on or off.
    SetIndicator {
        /// Which indicator.
        role: IndicatorRole,
        /// New state.
        on: bool,
    },
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
