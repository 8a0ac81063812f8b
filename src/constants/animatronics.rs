//! Animatronic behavior constants.

/// Chance a due move attempt actually advances the path cursor
pub const MOVE_CHANCE: f64 = 0.3;

/// Aggression multiplier gained per night number
pub const AGGRESSION_PER_NIGHT: f32 = 0.3;
/// Aggression multiplier applied while power is below the low threshold
pub const LOW_POWER_AGGRESSION_MULT: f32 = 1.5;

/// Range for the first move interval drawn at night start (seconds)
pub const INITIAL_MOVE_INTERVAL: (f32, f32) = (3.0, 8.0);
/// Range for every move interval redrawn after an attempt (seconds)
pub const MOVE_INTERVAL: (f32, f32) = (2.0, 6.0);

/// Continuous unwatched seconds before the ambush character rushes
pub const RUSH_UNWATCHED_THRESHOLD: f32 = 5.0;
