/// The two physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Hold to record, or tap twice to latch and stop.
    Record,
    /// Plays back the last recording.
    Play,
}

/// Edge event delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The button went down.
    Pressed(Button),
    /// The button came back up.
    Released(Button),
}
