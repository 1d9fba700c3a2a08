//! Sequencer: two-button record/play box with status indicators.

mod app;
mod app_command;
mod button_handler;
mod config;
mod error;
mod indicator_state;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_indicator_panel;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    button_handler::ButtonHandler,
    error::{AppError, Result as AppResult},
    indicator_state::IndicatorState,
    tray_command::TrayCommand,
    tray_indicator_panel::TrayIndicatorPanel,
    tray_manager::TrayManager,
};

use crate::config::Config;

use global_hotkey::GlobalHotKeyManager;
use sequencer_core::{RecordPlayController, StartupSequencer, SystemClock, SystemLauncher};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{mpsc, watch};
use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sequencer=debug,sequencer_core=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let config_path = match Config::path() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to resolve config path: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(&config.pins) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Persists across event loop iterations — dropping it unregisters the hotkeys.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;
    let mut config = Some(config);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetIndicator { role, on } => {
                        if let Err(e) = tray_manager.set_indicator(role, on) {
                            error!(error = ?e, "Failed to update tray indicator");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let Some(config) = config.take() else {
                    return;
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let commands = match config.commands.session_commands() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Invalid commands: {:?}", e);
                        std::process::exit(1);
                    }
                };
                let timing = config.timing.controller_timing();

                let (command_tx, command_rx) = mpsc::channel(32);
                let (shutdown_tx, shutdown_rx) = watch::channel(false);

                // Register hotkeys on the main thread — tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery.
                let (manager, bindings) = match ButtonHandler::register_buttons(&config.pins) {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to register buttons: {:?}", e);
                        std::process::exit(1);
                    }
                };
                hotkey_manager = Some(manager);

                let tray_proxy = tray_proxy.clone();
                let settings_menu_id = tray_manager.settings_item_id().clone();
                let exit_menu_id = tray_manager.exit_item_id().clone();
                let config_path = config_path.clone();

                // Controller and tokio runtime live on a separate thread.
                // TrayManager and hotkey_manager stay on the main thread.
                std::thread::spawn(move || {
                    let mut indicators = TrayIndicatorPanel::new(tray_proxy.clone());

                    // Buttons are not serviced until the pattern has finished.
                    StartupSequencer::new().run(&mut indicators, &SystemClock);

                    let controller = match RecordPlayController::new(
                        SystemLauncher,
                        indicators,
                        SystemClock,
                        commands,
                        timing,
                    ) {
                        Ok(c) => c,
                        Err(e) => {
                            error!("Failed to bootstrap controller: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let button_handler = ButtonHandler::new(bindings, command_tx.clone());

                        let app = App {
                            controller,
                            tray_proxy,
                            config_path,
                            command_tx,
                            command_rx,
                            shutdown_tx,
                            settings_menu_id,
                            exit_menu_id,
                        };

                        tokio::join!(
                            async {
                                if let Err(e) = button_handler.run(shutdown_rx).await {
                                    error!(error = ?e, "Button handler error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keep hotkey_manager alive in the closure for the app's lifetime.
        let _ = &hotkey_manager;
    });
}
