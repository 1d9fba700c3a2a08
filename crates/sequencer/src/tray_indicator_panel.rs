use crate::TrayCommand;

use sequencer_core::{IndicatorPanel, IndicatorRole};
use tao::event_loop::EventLoopProxy;
use tracing::warn;

/// [`IndicatorPanel`] that forwards every change to the tray on the UI thread.
///
/// `TrayIcon` is `!Send`, so the controller never touches it directly.
pub struct TrayIndicatorPanel {
    proxy: EventLoopProxy<TrayCommand>,
}

impl TrayIndicatorPanel {
    /// Panel writing through `proxy`.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self { proxy }
    }
}

impl IndicatorPanel for TrayIndicatorPanel {
    fn set_state(&mut self, role: IndicatorRole, on: bool) {
        // Only fails once the event loop has exited.
        if let Err(e) = self
            .proxy
            .send_event(TrayCommand::SetIndicator { role, on })
        {
            warn!(?role, on, error = ?e, "Indicator update dropped, event loop closed");
        }
    }
}
