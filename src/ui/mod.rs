//! UI rendering using egui.
//!
//! Pure consumer of read-only snapshots from the game state; anything the
//! player clicks comes back as `PlayerAction`s in `UiActions` and is fed
//! through the same input path as the keyboard.

mod camera_view;
mod office;
mod screens;
mod status_bar;
pub mod style;

pub use camera_view::{draw_camera_view, get_camera_view_data, CameraViewData};
pub use office::{draw_office, get_office_data, OfficeData};
pub use screens::draw_mode_overlay;
pub use status_bar::{clock_label, draw_status_bar, get_status_bar_data, StatusBarData};

use crate::game::{GameMode, GameState, PlayerAction};

/// Actions the UI wants to perform (returned to game logic)
#[derive(Default)]
pub struct UiActions {
    actions: Vec<PlayerAction>,
}

impl UiActions {
    pub fn push(&mut self, action: PlayerAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = PlayerAction> + '_ {
        self.actions.drain(..)
    }
}

/// Run the whole UI pass for one frame.
pub fn draw(
    ctx: &egui::Context,
    game: &GameState,
    viewport_width: f32,
    viewport_height: f32,
) -> UiActions {
    let mut actions = UiActions::default();

    if game.mode() == GameMode::Playing {
        let status = get_status_bar_data(game);
        draw_status_bar(ctx, &status);

        let office = get_office_data(game);
        draw_office(ctx, &office, viewport_width, viewport_height, &mut actions);

        if let Some(camera) = get_camera_view_data(game) {
            draw_camera_view(ctx, &camera, viewport_width, &mut actions);
        }
    }

    draw_mode_overlay(ctx, game, &mut actions);

    actions
}
