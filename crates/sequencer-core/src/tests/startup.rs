use crate::{
    IndicatorRole, STARTUP_STEPS, StartupSequencer,
    tests::support::{ManualClock, RecordingPanel},
};

use std::time::Duration;

/// WHAT: Startup plays the exact light pattern with the expected holds
/// WHY: The pattern is the user's only sign that the box booted
#[test]
fn given_panel_when_startup_runs_then_pattern_matches() {
    // Given: A dark panel and a manual clock
    let mut panel = RecordingPanel::default();
    let clock = ManualClock::new();

    // When: Running the startup sequence
    StartupSequencer::new().run(&mut panel, &clock);

    // Then: Each frame writes Record then Power in order
    let frames: Vec<(bool, bool)> = panel
        .writes
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair[0].0, IndicatorRole::Record);
            assert_eq!(pair[1].0, IndicatorRole::Power);
            (pair[0].1, pair[1].1)
        })
        .collect();

    assert_eq!(
        frames,
        vec![
            (false, false),
            (true, false),
            (true, true),
            (false, false),
            (true, true),
            (false, false),
            (false, true),
        ]
    );

    // And: Only non-zero holds sleep, in order
    let ms: Vec<u128> = clock.sleeps().iter().map(Duration::as_millis).collect();
    assert_eq!(ms, vec![500, 1000, 200, 200, 1000]);
}

/// WHAT: Startup ends in the ready state after 2.9 seconds
/// WHY: Buttons go live only once Power alone is lit
#[test]
fn given_panel_when_startup_completes_then_power_only_and_duration_elapsed() {
    let mut panel = RecordingPanel::default();
    let clock = ManualClock::new();
    let sequencer = StartupSequencer::new();

    sequencer.run(&mut panel, &clock);

    assert!(!panel.record);
    assert!(panel.power);
    assert_eq!(clock.elapsed(), Duration::from_millis(2900));
    assert_eq!(sequencer.duration(), clock.elapsed());
    assert_eq!(sequencer.steps(), &STARTUP_STEPS);
}
