//! Synthesized audio cue constants (frequency Hz, duration s, amplitude).

pub const TONE_DOOR: (f32, f32, f32) = (110.0, 0.20, 0.40);
pub const TONE_LIGHT: (f32, f32, f32) = (660.0, 0.08, 0.25);
pub const TONE_CAMERA: (f32, f32, f32) = (880.0, 0.06, 0.20);
pub const TONE_STATIC: (f32, f32, f32) = (1760.0, 0.15, 0.10);
pub const TONE_HOUR: (f32, f32, f32) = (523.0, 0.40, 0.30);
pub const TONE_JUMPSCARE: (f32, f32, f32) = (70.0, 1.50, 0.90);
pub const TONE_POWER_OUT: (f32, f32, f32) = (55.0, 2.50, 0.60);
pub const TONE_VICTORY: (f32, f32, f32) = (784.0, 0.80, 0.35);
