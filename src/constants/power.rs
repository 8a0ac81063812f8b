//! Power budget constants.

/// Starting (and maximum) power for a night
pub const POWER_MAX: f32 = 100.0;
/// Baseline drain with everything switched off (units per second)
pub const POWER_DRAIN_BASE: f32 = 0.1;
/// Extra drain while the camera console is up
pub const POWER_DRAIN_CAMERA: f32 = 0.2;
/// Extra drain per closed door
pub const POWER_DRAIN_DOOR: f32 = 0.5;
/// Extra drain per lit door light
pub const POWER_DRAIN_LIGHT: f32 = 0.3;

/// Percentage above which the power readout is nominal
pub const POWER_NOMINAL_ABOVE: f32 = 50.0;
/// Percentage above which (up to nominal) the readout is a warning
pub const POWER_WARNING_ABOVE: f32 = 25.0;

/// Below this percentage the animatronics get an aggression bonus
pub const LOW_POWER_THRESHOLD: f32 = 20.0;
