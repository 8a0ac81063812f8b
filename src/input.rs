//! Keyboard input handling.
//!
//! Translates pressed keys into discrete `PlayerAction`s. Edge-triggered:
//! a key is consumed from the pressed set when its action fires, so
//! holding a key doesn't hammer a toggle every frame.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::game::PlayerAction;
use crate::location::{DoorSide, Location};

/// Input state tracking
#[derive(Default)]
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
        }
    }

    /// Record a key transition. OS key-repeat presses are ignored so a
    /// held key can't re-arm its action after it fires.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if pressed {
            if !repeat {
                self.keys_pressed.insert(key);
            }
        } else {
            self.keys_pressed.remove(&key);
        }
    }
}

/// Feed-selection keys, in `Location::CAMERA_FEEDS` order.
const FEED_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// Process keyboard input and return the player actions for this frame.
pub fn process_keyboard(input: &mut InputState) -> Vec<PlayerAction> {
    let mut actions = Vec::new();

    if input.keys_pressed.remove(&KeyCode::KeyA) {
        actions.push(PlayerAction::ToggleDoor(DoorSide::Left));
    }
    if input.keys_pressed.remove(&KeyCode::KeyD) {
        actions.push(PlayerAction::ToggleDoor(DoorSide::Right));
    }
    if input.keys_pressed.remove(&KeyCode::KeyQ) {
        actions.push(PlayerAction::ToggleLight(DoorSide::Left));
    }
    if input.keys_pressed.remove(&KeyCode::KeyE) {
        actions.push(PlayerAction::ToggleLight(DoorSide::Right));
    }
    if input.keys_pressed.remove(&KeyCode::Space) {
        actions.push(PlayerAction::ToggleCamera);
    }
    for (key, feed) in FEED_KEYS.iter().zip(Location::CAMERA_FEEDS) {
        if input.keys_pressed.remove(key) {
            actions.push(PlayerAction::SelectCamera(feed));
        }
    }
    if input.keys_pressed.remove(&KeyCode::KeyR) {
        actions.push(PlayerAction::RestartNight);
    }
    if input.keys_pressed.remove(&KeyCode::KeyN) {
        actions.push(PlayerAction::NextNight);
    }
    if input.keys_pressed.remove(&KeyCode::Escape) {
        actions.push(PlayerAction::Quit);
    }

    actions
}
