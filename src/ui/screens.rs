//! Full-screen overlays for the terminal game modes.

use super::style;
use super::UiActions;
use crate::game::{GameMode, GameState, PlayerAction};

/// Render the overlay for the current mode, if any.
pub fn draw_mode_overlay(ctx: &egui::Context, game: &GameState, actions: &mut UiActions) {
    match game.mode() {
        GameMode::Playing => {}
        GameMode::Jumpscare => {
            let name = game.jumpscare_by().unwrap_or("SOMETHING").to_uppercase();
            full_screen(ctx, style::colors::BLOOD, |ui| {
                big_text(ui, &format!("{name} GOT YOU"), egui::Color32::BLACK, 64.0);
            });
        }
        GameMode::PowerOut => {
            full_screen(ctx, egui::Color32::BLACK, |ui| {
                big_text(
                    ui,
                    "the power is out",
                    style::colors::TEXT_MUTED,
                    28.0,
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("something is moving in the dark")
                        .color(egui::Color32::from_gray(60))
                        .italics(),
                );
            });
        }
        GameMode::GameOver => {
            let night = game.night_number();
            full_screen(ctx, egui::Color32::BLACK, |ui| {
                big_text(ui, "GAME OVER", style::colors::BLOOD, 56.0);
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(format!("Night {night} claims another guard"))
                        .color(style::colors::TEXT_MUTED),
                );
                ui.add_space(30.0);
                if menu_button(ui, "Try Again [R]") {
                    actions.push(PlayerAction::RestartNight);
                }
            });
        }
        GameMode::Victory => {
            let night = game.night_number();
            full_screen(ctx, egui::Color32::BLACK, |ui| {
                big_text(ui, "6 AM", style::colors::TEXT_ACCENT, 72.0);
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(format!("Night {night} survived"))
                        .color(style::colors::TEXT_PRIMARY)
                        .size(22.0),
                );
                ui.add_space(30.0);
                if menu_button(ui, &format!("Night {} [N]", night + 1)) {
                    actions.push(PlayerAction::NextNight);
                }
            });
        }
    }
}

fn full_screen(
    ctx: &egui::Context,
    fill: egui::Color32,
    content: impl FnOnce(&mut egui::Ui),
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(fill))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                content(ui);
            });
        });
}

fn big_text(ui: &mut egui::Ui, text: &str, color: egui::Color32, size: f32) {
    ui.label(egui::RichText::new(text).color(color).size(size).strong());
}

fn menu_button(ui: &mut egui::Ui, label: &str) -> bool {
    let button = egui::Button::new(egui::RichText::new(label).size(20.0))
        .min_size(egui::vec2(200.0, 44.0));
    ui.add(button).clicked()
}
