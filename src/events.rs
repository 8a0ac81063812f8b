//! Game event system for decoupled communication between systems.
//!
//! The simulation emits events, collaborators (audio, UI) consume them.
//! The core never calls into rendering or audio directly.

use crate::location::{DoorSide, Location};

/// Events the simulation emits during an update tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A door was toggled by the player
    DoorToggled { side: DoorSide, closed: bool },
    /// A door light was toggled by the player
    LightToggled { side: DoorSide, on: bool },
    /// A door light hit its maximum duration and shut itself off
    LightExpired { side: DoorSide },
    /// The camera console was raised
    CameraOpened { feed: Location },
    /// The camera console was lowered
    CameraClosed,
    /// The player switched to a different feed
    CameraSwitched { feed: Location },
    /// A camera switch kicked off a static burst
    StaticBurst { duration: f32 },
    /// An animatronic advanced along its path
    AnimatronicMoved {
        name: String,
        from: Location,
        to: Location,
    },
    /// The ambush animatronic left its home and started its rush
    AnimatronicRushed { name: String },
    /// The in-game clock rolled over to a new hour
    HourAdvanced { hour: u32 },
    /// An animatronic reached an open door
    Jumpscare { name: String },
    /// The power budget hit zero
    PowerOut,
    /// The night was survived
    NightComplete { night: u32 },
}

/// Simple event queue - events are pushed during update, drained at end of frame.
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
