//! System tray icon acting as the indicator panel.
//!
//! Shows the Record and Power indicators as two lamps on the icon and as two
//! read-only check items in the context menu, plus Settings and Exit entries.

use crate::{AppError, AppResult, IndicatorState, config::PinConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use sequencer_core::IndicatorRole;
use tracing::{debug, info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    record_item: CheckMenuItem,
    power_item: CheckMenuItem,
    state: IndicatorState,
    settings_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon with both indicators off.
    #[track_caller]
    #[instrument(skip(pins))]
    pub fn new(pins: &PinConfig) -> AppResult<Self> {
        let menu = Menu::new();

        // Disabled: indicators are outputs, clicking them does nothing.
        let record_item =
            CheckMenuItem::new(pins.led_label(IndicatorRole::Record), false, false, None);
        let power_item =
            CheckMenuItem::new(pins.led_label(IndicatorRole::Power), false, false, None);
        let settings_item = MenuItem::new("Settings", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let settings_id = settings_item.id().clone();
        let exit_id = exit_item.id().clone();

        menu.append_items(&[
            &record_item,
            &power_item,
            &PredefinedMenuItem::separator(),
            &settings_item,
            &exit_item,
        ])
        .map_err(|e| AppError::IndicatorError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let state = IndicatorState::default();
        let icon = Self::load_icon(state)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(state.tooltip())
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::IndicatorError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray indicators initialized");

        Ok(Self {
            tray_icon,
            record_item,
            power_item,
            state,
            settings_item_id: settings_id,
            exit_item_id: exit_id,
        })
    }

    /// Switch one indicator and redraw the icon and tooltip.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn set_indicator(&mut self, role: IndicatorRole, on: bool) -> AppResult<()> {
        if self.state.is_on(role) == on {
            return Ok(());
        }
        self.state.set(role, on);

        match role {
            IndicatorRole::Record => self.record_item.set_checked(on),
            IndicatorRole::Power => self.power_item.set_checked(on),
        }

        self.tray_icon
            .set_icon(Some(Self::load_icon(self.state)?))
            .map_err(|e| AppError::IndicatorError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(self.state.tooltip()))
            .map_err(|e| AppError::IndicatorError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(state = ?self.state, "Indicators updated");

        Ok(())
    }

    /// Build a tray icon from the rendered indicator lamps.
    #[track_caller]
    fn load_icon(state: IndicatorState) -> AppResult<Icon> {
        let rgba = state.icon();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IndicatorError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the settings menu item ID.
    pub fn settings_item_id(&self) -> &MenuId {
        &self.settings_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
