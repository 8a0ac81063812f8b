//! Default game constants organized by domain.
//!
//! These are the built-in tuning values; they are gathered into a
//! `GameConfig` at startup (and can be overridden by an optional
//! `config.json`), so nothing reads them ambiently at runtime.

mod animatronics;
mod audio;
mod camera;
mod night;
mod power;
mod ui;

pub use animatronics::*;
pub use audio::*;
pub use camera::*;
pub use night::*;
pub use power::*;
pub use ui::*;
