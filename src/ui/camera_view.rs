//! Surveillance camera feed window.
//!
//! Painted with egui shapes: a dark feed area with scanlines, red
//! detection labels for occupants, and a noise overlay during static
//! bursts. The noise is cosmetic, so it uses a throwaway rng.

use rand::Rng;

use super::style;
use super::UiActions;
use crate::constants::STATIC_NOISE_DOTS;
use crate::game::{GameState, PlayerAction};
use crate::location::Location;

/// Data needed to render the camera console
pub struct CameraViewData {
    pub feed: Location,
    pub occupants: Vec<String>,
    pub show_static: bool,
}

/// Extract camera console data; `None` while the console is down.
pub fn get_camera_view_data(game: &GameState) -> Option<CameraViewData> {
    let feed = game.camera().target()?;
    let occupants = game
        .director()
        .at_location(feed)
        .iter()
        .map(|a| a.name().to_uppercase())
        .collect();
    Some(CameraViewData {
        feed,
        occupants,
        show_static: game.camera().show_static(),
    })
}

/// Render the raised camera console
pub fn draw_camera_view(
    ctx: &egui::Context,
    data: &CameraViewData,
    viewport_width: f32,
    actions: &mut UiActions,
) {
    let feed_size = egui::vec2(640.0, 360.0);

    egui::Window::new("Cameras")
        .fixed_pos([viewport_width / 2.0 - feed_size.x / 2.0 - 8.0, 60.0])
        .title_bar(false)
        .frame(style::night_window_frame())
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("CAM: {}", data.feed.label().to_uppercase()))
                    .color(style::colors::TEXT_ACCENT)
                    .strong(),
            );

            let (response, painter) = ui.allocate_painter(feed_size, egui::Sense::hover());
            let rect = response.rect;

            painter.rect_filled(rect, 0.0, style::colors::CAMERA_FEED_BG);
            // Scanlines
            let mut y = rect.top();
            while y < rect.bottom() {
                painter.hline(
                    rect.x_range(),
                    y,
                    egui::Stroke::new(1.0, style::colors::CAMERA_SCANLINE),
                );
                y += 6.0;
            }

            // Occupants, stacked like detection readouts
            for (i, name) in data.occupants.iter().enumerate() {
                painter.text(
                    rect.left_top() + egui::vec2(16.0, 24.0 + i as f32 * 30.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{name} DETECTED"),
                    egui::FontId::monospace(22.0),
                    style::colors::BLOOD,
                );
            }

            if data.show_static {
                draw_static_noise(&painter, rect);
            }

            painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, style::colors::PANEL_BORDER));
        });

    draw_feed_selector(ctx, data.feed, viewport_width, actions);
}

fn draw_static_noise(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_white_alpha(24));

    let mut rng = rand::thread_rng();
    for _ in 0..STATIC_NOISE_DOTS {
        let x = rng.gen_range(rect.left()..rect.right());
        let y = rng.gen_range(rect.top()..rect.bottom());
        let shade = [0u8, 128, 255][rng.gen_range(0..3)];
        painter.circle_filled(
            egui::pos2(x, y),
            rng.gen_range(1.0..3.0),
            egui::Color32::from_gray(shade),
        );
    }
}

fn draw_feed_selector(
    ctx: &egui::Context,
    current: Location,
    viewport_width: f32,
    actions: &mut UiActions,
) {
    egui::Window::new("Feeds")
        .fixed_pos([viewport_width / 2.0 - 330.0, 470.0])
        .title_bar(false)
        .frame(style::night_window_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (i, feed) in Location::CAMERA_FEEDS.into_iter().enumerate() {
                    let selected = feed == current;
                    let text = format!("{} {}", i + 1, feed.label());
                    let button = egui::Button::new(if selected {
                        egui::RichText::new(text).color(style::colors::TEXT_ACCENT)
                    } else {
                        egui::RichText::new(text)
                    });
                    if ui.add(button).clicked() && !selected {
                        actions.push(PlayerAction::SelectCamera(feed));
                    }
                }
            });
        });
}
