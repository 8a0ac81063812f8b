//! Night clock and terminal-sequence constants.

/// Seconds of real time per in-game hour
pub const HOUR_DURATION: f32 = 85.0;
/// Hours survived to win a night (12 AM to 6 AM)
pub const TOTAL_HOURS: u32 = 6;
/// Night number a fresh game starts on
pub const STARTING_NIGHT: u32 = 1;

/// Seconds a door light stays on before shutting itself off
pub const LIGHT_MAX_DURATION: f32 = 3.0;

/// Length of the jumpscare sequence before game over
pub const JUMPSCARE_DURATION: f32 = 3.0;
/// Length of the dark sequence after power runs out, before game over
pub const POWER_OUT_DURATION: f32 = 5.0;
