//! Status bar: power readout, usage pips, night and clock.

use super::style;
use crate::game::GameState;
use crate::location::DoorSide;
use crate::power::PowerStatus;

/// Data needed to render the status bar
pub struct StatusBarData {
    pub power_pct: f32,
    pub power_status: PowerStatus,
    /// Number of subsystems currently pulling power (plus baseline)
    pub usage: usize,
    pub night: u32,
    pub hour: u32,
}

/// Extract status bar data from the game state
pub fn get_status_bar_data(game: &GameState) -> StatusBarData {
    let usage = 1
        + game.camera().is_up() as usize
        + game.door_closed(DoorSide::Left) as usize
        + game.door_closed(DoorSide::Right) as usize
        + game.light_on(DoorSide::Left) as usize
        + game.light_on(DoorSide::Right) as usize;

    StatusBarData {
        power_pct: game.power().percentage(),
        power_status: game.power().status(),
        usage,
        night: game.night_number(),
        hour: game.hour(),
    }
}

/// "12 AM" through "6 AM".
pub fn clock_label(hour: u32) -> String {
    if hour == 0 {
        "12 AM".to_string()
    } else {
        format!("{hour} AM")
    }
}

/// Render the status bar
pub fn draw_status_bar(ctx: &egui::Context, data: &StatusBarData) {
    let power_color = match data.power_status {
        PowerStatus::Nominal => style::colors::POWER_NOMINAL,
        PowerStatus::Warning => style::colors::POWER_WARNING,
        PowerStatus::Critical => style::colors::POWER_CRITICAL,
    };

    egui::Window::new("Status")
        .fixed_pos([10.0, 10.0])
        .fixed_size([230.0, 90.0])
        .title_bar(false)
        .frame(style::night_window_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Night {}", data.night))
                        .color(style::colors::TEXT_ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(clock_label(data.hour))
                            .color(style::colors::TEXT_PRIMARY)
                            .strong(),
                    );
                });
            });

            ui.add_sized(
                [214.0, 18.0],
                egui::ProgressBar::new(data.power_pct / 100.0)
                    .fill(power_color)
                    .text(format!("POWER {:.0}%", data.power_pct)),
            );

            // Usage pips, one per active draw
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("USAGE")
                        .small()
                        .color(style::colors::TEXT_MUTED),
                );
                for i in 0..data.usage {
                    let (_, rect) = ui.allocate_space(egui::vec2(10.0, 12.0));
                    let pip_color = if i < 2 {
                        style::colors::POWER_NOMINAL
                    } else if i < 4 {
                        style::colors::POWER_WARNING
                    } else {
                        style::colors::POWER_CRITICAL
                    };
                    ui.painter().rect_filled(rect, 0.0, pip_color);
                }
            });
        });
}
