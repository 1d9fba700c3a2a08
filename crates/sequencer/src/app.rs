use crate::{AppCommand, AppResult, TrayCommand, TrayIndicatorPanel};

use std::{path::PathBuf, time::Duration};

use sequencer_core::{RecordPlayController, SystemClock, SystemLauncher};
use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument};
use tray_icon::menu::MenuEvent;

/// How often both roles' process liveness is polled between button events.
pub(crate) const RECONCILE_INTERVAL: Duration = Duration::from_millis(250);

/// Controller wired to real processes, the tray panel and wall-clock time.
pub(crate) type Controller =
    RecordPlayController<SystemLauncher, TrayIndicatorPanel, SystemClock>;

/// Main application state.
///
/// Runs on the async runtime thread and is the only owner of the
/// controller, so button events are handled one at a time. Tray updates go
/// back to the main thread via `tray_proxy` because `TrayIcon` is `!Send`.
pub struct App {
    pub(crate) controller: Controller,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) config_path: PathBuf,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) settings_menu_id: tray_icon::menu::MenuId,
    pub(crate) exit_menu_id: tray_icon::menu::MenuId,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Sequencer ready");

        // MenuEvent::receiver() is a crossbeam channel with a blocking recv();
        // one blocking task forwards into the async side. It exits on the
        // first blocking_send() after tray_event_rx is dropped.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut reconcile = tokio::time::interval(RECONCILE_INTERVAL);
        reconcile.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    self.handle_tray_event(event).await;
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::Button(event) => {
                            // Outcomes, failures included, are logged by the controller.
                            self.controller.handle(event);
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                _ = reconcile.tick() => {
                    self.controller.reconcile();
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        self.controller.shutdown();

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
        info!("Sequencer shut down successfully");

        Ok(())
    }

    /// Handle tray menu events.
    #[instrument(skip(self))]
    async fn handle_tray_event(&mut self, event: MenuEvent) {
        let event_id = &event.id;

        if *event_id == self.settings_menu_id {
            match open::that(&self.config_path) {
                Ok(()) => info!(config_path = ?self.config_path, "Opened settings file"),
                Err(e) => error!(error = ?e, "Failed to open settings file"),
            }
        } else if *event_id == self.exit_menu_id {
            info!("Exit requested from tray menu");
            if let Err(e) = self.command_tx.send(AppCommand::Shutdown).await {
                error!(error = ?e, "Failed to send shutdown command");
            }
        }
    }
}
