//! Office view: door and light controls, hall warnings.

use super::style;
use super::UiActions;
use crate::game::{GameState, PlayerAction};
use crate::location::DoorSide;

/// One side's door panel state
pub struct DoorPanelData {
    pub side: DoorSide,
    pub closed: bool,
    pub light_on: bool,
    /// Who the door light reveals standing outside, if anyone
    pub revealed: Option<String>,
}

/// Data needed to render the office controls
pub struct OfficeData {
    pub left: DoorPanelData,
    pub right: DoorPanelData,
    pub camera_up: bool,
}

/// Extract office control data from the game state
pub fn get_office_data(game: &GameState) -> OfficeData {
    let panel = |side: DoorSide| {
        let light_on = game.light_on(side);
        let revealed = if light_on {
            game.director()
                .at_door(side)
                .map(|a| a.name().to_uppercase())
        } else {
            None
        };
        DoorPanelData {
            side,
            closed: game.door_closed(side),
            light_on,
            revealed,
        }
    };

    OfficeData {
        left: panel(DoorSide::Left),
        right: panel(DoorSide::Right),
        camera_up: game.camera().is_up(),
    }
}

/// Render both door panels and the camera toggle
pub fn draw_office(
    ctx: &egui::Context,
    data: &OfficeData,
    viewport_width: f32,
    viewport_height: f32,
    actions: &mut UiActions,
) {
    draw_door_panel(ctx, &data.left, [10.0, viewport_height - 130.0], actions);
    draw_door_panel(
        ctx,
        &data.right,
        [viewport_width - 180.0, viewport_height - 130.0],
        actions,
    );

    egui::Window::new("Console")
        .fixed_pos([viewport_width / 2.0 - 90.0, viewport_height - 70.0])
        .fixed_size([180.0, 40.0])
        .title_bar(false)
        .frame(style::night_window_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let label = if data.camera_up {
                    "LOWER CAMERAS [Space]"
                } else {
                    "RAISE CAMERAS [Space]"
                };
                if ui.button(label).clicked() {
                    actions.push(PlayerAction::ToggleCamera);
                }
            });
        });
}

fn draw_door_panel(
    ctx: &egui::Context,
    panel: &DoorPanelData,
    pos: [f32; 2],
    actions: &mut UiActions,
) {
    let title = format!("{} door", panel.side.label());
    egui::Window::new(&title)
        .fixed_pos(pos)
        .fixed_size([170.0, 100.0])
        .title_bar(false)
        .frame(style::night_window_frame())
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} DOOR", panel.side.label().to_uppercase()))
                    .color(style::colors::TEXT_MUTED)
                    .small(),
            );

            let door_text = if panel.closed { "SHUT" } else { "OPEN" };
            let door_color = if panel.closed {
                style::colors::DOOR_SHUT
            } else {
                style::colors::BLOOD
            };
            let door_button = egui::Button::new(
                egui::RichText::new(format!("DOOR: {door_text}")).color(door_color),
            )
            .min_size(egui::vec2(154.0, 24.0));
            if ui.add(door_button).clicked() {
                actions.push(PlayerAction::ToggleDoor(panel.side));
            }

            let light_text = if panel.light_on { "LIGHT: ON" } else { "LIGHT" };
            let light_button =
                egui::Button::new(light_text).min_size(egui::vec2(154.0, 24.0));
            if ui.add(light_button).clicked() {
                actions.push(PlayerAction::ToggleLight(panel.side));
            }

            if let Some(name) = &panel.revealed {
                ui.label(
                    egui::RichText::new(format!("{name} IS HERE"))
                        .color(style::colors::BLOOD)
                        .strong(),
                );
            } else if panel.light_on {
                ui.label(
                    egui::RichText::new("hall clear")
                        .color(style::colors::TEXT_MUTED)
                        .small(),
                );
            }
        });
}
