//! UI and window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Cap on per-frame simulation dt, so a long frame can't skip an hour
pub const MAX_SIM_DT: f32 = 0.25;

/// Dots painted per frame while a feed shows static
pub const STATIC_NOISE_DOTS: usize = 140;
