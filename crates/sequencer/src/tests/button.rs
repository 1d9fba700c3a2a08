use crate::{AppCommand, button_handler::{ButtonBindings, ButtonMapper}};

use global_hotkey::HotKeyState;
use sequencer_core::{Button, ButtonEvent};
use tokio::sync::mpsc;

const BINDINGS: ButtonBindings = ButtonBindings {
    record_id: 11,
    play_id: 22,
};

/// WHAT: Hotkey press and release map to the bound button's edges
/// WHY: The controller needs both edges of the Record button
#[test]
fn given_bound_hotkeys_when_pressed_and_released_then_button_events() {
    // Given: A mapper for Record=11, Play=22
    let mut mapper = ButtonMapper::new(BINDINGS);

    // When/Then: Each edge maps to the right button
    assert_eq!(
        mapper.map(11, HotKeyState::Pressed),
        Some(ButtonEvent::Pressed(Button::Record))
    );
    assert_eq!(
        mapper.map(22, HotKeyState::Pressed),
        Some(ButtonEvent::Pressed(Button::Play))
    );
    assert_eq!(
        mapper.map(11, HotKeyState::Released),
        Some(ButtonEvent::Released(Button::Record))
    );
    assert_eq!(
        mapper.map(22, HotKeyState::Released),
        Some(ButtonEvent::Released(Button::Play))
    );
}

/// WHAT: Auto-repeat presses while a key is held are dropped
/// WHY: Repeats would inflate the Record press count and stop recording early
#[test]
fn given_held_key_when_repeat_press_arrives_then_dropped() {
    // Given: Record is held
    let mut mapper = ButtonMapper::new(BINDINGS);
    assert!(mapper.map(11, HotKeyState::Pressed).is_some());

    // When: The OS repeats the press
    let repeat = mapper.map(11, HotKeyState::Pressed);

    // Then: Dropped until released
    assert_eq!(repeat, None);
    assert!(mapper.map(11, HotKeyState::Released).is_some());
    assert_eq!(
        mapper.map(11, HotKeyState::Pressed),
        Some(ButtonEvent::Pressed(Button::Record))
    );
}

/// WHAT: Hotkeys registered by other code are ignored
/// WHY: The global event channel is shared by the whole process
#[test]
fn given_foreign_hotkey_when_mapped_then_ignored() {
    let mut mapper = ButtonMapper::new(BINDINGS);

    assert_eq!(mapper.map(99, HotKeyState::Pressed), None);
    assert_eq!(mapper.map(99, HotKeyState::Released), None);
}

/// WHAT: Button commands are delivered in order over the app channel
/// WHY: The app handles each event to completion in arrival order
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_button_events_when_sent_then_received_in_order() {
    // Given: An open command channel
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let events = [
        ButtonEvent::Pressed(Button::Record),
        ButtonEvent::Released(Button::Record),
        ButtonEvent::Pressed(Button::Play),
    ];

    // When: Sending the events
    for event in events {
        command_tx.send(AppCommand::Button(event)).await.unwrap();
    }

    // Then: They arrive unchanged and in order
    for expected in events {
        match command_rx.recv().await.unwrap() {
            AppCommand::Button(event) => assert_eq!(event, expected),
            AppCommand::Shutdown => unreachable!("unexpected shutdown"),
        }
    }
}

/// WHAT: Sending to a closed app channel fails
/// WHY: The handler surfaces ChannelSendFailed instead of losing events silently
#[tokio::test]
async fn given_closed_channel_when_sending_button_then_error() {
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);

    let result = command_tx
        .send(AppCommand::Button(ButtonEvent::Pressed(Button::Record)))
        .await;

    assert!(result.is_err());
}
