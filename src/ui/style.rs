//! Night-shift security-office egui styling.
//!
//! Flat panels, hard borders, near-black backgrounds with blood-red and
//! amber accents, monospace font where available.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Security-office color palette
pub mod colors {
    use egui::Color32;

    // Panel backgrounds
    pub const PANEL_BG: Color32 = Color32::from_rgb(12, 12, 14);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(55, 50, 48);

    // Interactive elements
    pub const BUTTON_BG: Color32 = Color32::from_rgb(24, 24, 28);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(40, 36, 36);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(60, 44, 40);
    pub const BUTTON_BORDER: Color32 = Color32::from_rgb(75, 68, 62);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(200, 195, 185);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 124, 115);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(215, 175, 95);

    // Power readout
    pub const POWER_NOMINAL: Color32 = Color32::from_rgb(70, 160, 70);
    pub const POWER_WARNING: Color32 = Color32::from_rgb(200, 170, 50);
    pub const POWER_CRITICAL: Color32 = Color32::from_rgb(180, 45, 40);

    // Alerts
    pub const BLOOD: Color32 = Color32::from_rgb(165, 25, 25);
    pub const DOOR_SHUT: Color32 = Color32::from_rgb(90, 140, 95);
    pub const CAMERA_FEED_BG: Color32 = Color32::from_rgb(18, 22, 18);
    pub const CAMERA_SCANLINE: Color32 = Color32::from_rgb(32, 40, 32);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the night-office visuals
pub fn night_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;
    visuals.extreme_bg_color = colors::PANEL_BG;
    visuals.faint_bg_color = Color32::from_rgb(20, 19, 20);

    visuals.widgets = night_widgets();

    visuals.selection.bg_fill = colors::BUTTON_ACTIVE;
    visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ACCENT);
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

fn night_widgets() -> Widgets {
    Widgets {
        noninteractive: WidgetVisuals {
            bg_fill: colors::PANEL_BG,
            weak_bg_fill: colors::PANEL_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_MUTED),
            expansion: 0.0,
        },
        inactive: WidgetVisuals {
            bg_fill: colors::BUTTON_BG,
            weak_bg_fill: colors::BUTTON_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        hovered: WidgetVisuals {
            bg_fill: colors::BUTTON_HOVER,
            weak_bg_fill: colors::BUTTON_HOVER,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::TEXT_ACCENT),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        active: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(2.0, colors::TEXT_ACCENT),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        open: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER),
            rounding: Rounding::ZERO,
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
    }
}

/// Create a night-office window frame
pub fn night_window_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(8.0))
}

/// Create the night-office style
pub fn night_style() -> Style {
    let mut style = Style::default();
    style.visuals = night_visuals();
    style.interaction.tooltip_delay = 0.0;
    style.interaction.show_tooltips_only_when_still = false;
    style
}
