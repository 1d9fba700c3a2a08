/// The two status indicators on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorRole {
    /// Lit while a recording is in progress.
    Record,
    /// Lit once the sequencer is ready.
    Power,
}

impl IndicatorRole {
    /// Every role, in panel order.
    pub const ALL: [IndicatorRole; 2] = [IndicatorRole::Record, IndicatorRole::Power];
}

/// Output side of the hardware: two binary indicators.
pub trait IndicatorPanel {
    /// Switch the indicator for `role` on or off.
    fn set_state(&mut self, role: IndicatorRole, on: bool);

    /// Switch every indicator on.
    fn all_on(&mut self) {
        for role in IndicatorRole::ALL {
            self.set_state(role, true);
        }
    }

    /// Switch every indicator off.
    fn all_off(&mut self) {
        for role in IndicatorRole::ALL {
            self.set_state(role, false);
        }
    }
}
