//! Surveillance camera constants.

/// Chance a camera switch triggers a static burst
pub const STATIC_CHANCE: f64 = 0.3;
/// Range for how long a static burst degrades the feed (seconds)
pub const STATIC_DURATION: (f32, f32) = (0.5, 2.0);
