use image::{Rgba, RgbaImage};
use sequencer_core::IndicatorRole;

/// Side length of the generated tray icon in pixels.
pub(crate) const ICON_SIZE: u32 = 32;

const RECORD_ON: Rgba<u8> = Rgba([220, 40, 40, 255]);
const POWER_ON: Rgba<u8> = Rgba([40, 200, 80, 255]);
const LED_OFF: Rgba<u8> = Rgba([70, 70, 70, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Current state of the two indicators as shown in the tray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorState {
    /// Record indicator lit.
    pub record: bool,
    /// Power indicator lit.
    pub power: bool,
}

impl IndicatorState {
    /// Update one indicator.
    pub fn set(&mut self, role: IndicatorRole, on: bool) {
        match role {
            IndicatorRole::Record => self.record = on,
            IndicatorRole::Power => self.power = on,
        }
    }

    /// Whether `role` is lit.
    pub fn is_on(&self, role: IndicatorRole) -> bool {
        match role {
            IndicatorRole::Record => self.record,
            IndicatorRole::Power => self.power,
        }
    }

    /// Tray tooltip for this state.
    pub fn tooltip(&self) -> &'static str {
        match (self.record, self.power) {
            (true, _) => "Sequencer - Recording...",
            (false, true) => "Sequencer - Ready",
            (false, false) => "Sequencer - Starting...",
        }
    }

    /// Render the tray icon: Record lamp on the left, Power lamp on the right.
    pub fn icon(&self) -> RgbaImage {
        let radius = ICON_SIZE as f32 / 4.0 - 1.0;
        let centre_y = ICON_SIZE as f32 / 2.0;
        let lamps = [
            (ICON_SIZE as f32 / 4.0, if self.record { RECORD_ON } else { LED_OFF }),
            (ICON_SIZE as f32 * 3.0 / 4.0, if self.power { POWER_ON } else { LED_OFF }),
        ];

        RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            lamps
                .iter()
                .find(|(cx, _)| (px - cx).powi(2) + (py - centre_y).powi(2) <= radius * radius)
                .map_or(BACKGROUND, |(_, colour)| *colour)
        })
    }
}
