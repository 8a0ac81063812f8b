//! Restaurant locations and door sides.
//!
//! Every animatronic path is a linear walk over these locations, ending at
//! one of the two door endpoints. Doors are not viewable camera feeds.

use serde::{Deserialize, Serialize};

/// A named location in the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    ShowStage,
    DiningArea,
    Backstage,
    SupplyCloset,
    Kitchen,
    PirateCove,
    WestHall,
    EastHall,
    LeftDoor,
    RightDoor,
}

impl Location {
    /// The camera-viewable rooms, in feed-selection order.
    pub const CAMERA_FEEDS: [Location; 8] = [
        Location::ShowStage,
        Location::DiningArea,
        Location::PirateCove,
        Location::SupplyCloset,
        Location::Backstage,
        Location::Kitchen,
        Location::WestHall,
        Location::EastHall,
    ];

    /// Whether this location has a camera feed the player can select.
    pub fn has_camera(self) -> bool {
        Self::CAMERA_FEEDS.contains(&self)
    }

    /// Whether this location is one of the two door endpoints.
    pub fn is_door(self) -> bool {
        matches!(self, Location::LeftDoor | Location::RightDoor)
    }

    /// Display name for UI labels.
    pub fn label(self) -> &'static str {
        match self {
            Location::ShowStage => "Show Stage",
            Location::DiningArea => "Dining Area",
            Location::Backstage => "Backstage",
            Location::SupplyCloset => "Supply Closet",
            Location::Kitchen => "Kitchen",
            Location::PirateCove => "Pirate Cove",
            Location::WestHall => "West Hall",
            Location::EastHall => "East Hall",
            Location::LeftDoor => "Left Door",
            Location::RightDoor => "Right Door",
        }
    }
}

/// Which side of the office a door (and its light) is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorSide {
    Left,
    Right,
}

impl DoorSide {
    pub const BOTH: [DoorSide; 2] = [DoorSide::Left, DoorSide::Right];

    /// The door endpoint location for this side.
    pub fn location(self) -> Location {
        match self {
            DoorSide::Left => Location::LeftDoor,
            DoorSide::Right => Location::RightDoor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DoorSide::Left => "Left",
            DoorSide::Right => "Right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doors_are_not_camera_feeds() {
        assert!(!Location::LeftDoor.has_camera());
        assert!(!Location::RightDoor.has_camera());
        assert_eq!(Location::CAMERA_FEEDS.len(), 8);
    }

    #[test]
    fn test_door_side_locations() {
        assert_eq!(DoorSide::Left.location(), Location::LeftDoor);
        assert_eq!(DoorSide::Right.location(), Location::RightDoor);
        assert!(DoorSide::Left.location().is_door());
    }
}
