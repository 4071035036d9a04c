use eframe::egui::{self, Color32, Context, Rounding};
use serde::{Deserialize, Serialize};

pub const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
pub const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
pub const WARNING: Color32 = Color32::from_rgb(230, 160, 0);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(220, 50, 50);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);
pub const INFO: Color32 = Color32::from_rgb(43, 120, 228);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self::Light
    }
}

/// Soft accent used for badge fills and the drop-surface highlight.
pub fn accent_soft() -> Color32 {
    ACCENT.gamma_multiply(0.2)
}

pub fn apply(choice: ThemeChoice, ctx: &Context) {
    let mut visuals = match choice {
        ThemeChoice::Light => egui::Visuals::light(),
        ThemeChoice::Dark => egui::Visuals::dark(),
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.4);
    visuals.widgets.hovered.bg_stroke.color = ACCENT;
    visuals.widgets.active.bg_stroke.color = ACCENT;

    let rounding = Rounding::same(6.0);
    visuals.window_rounding = rounding;
    visuals.widgets.noninteractive.rounding = rounding;
    visuals.widgets.inactive.rounding = rounding;
    visuals.widgets.hovered.rounding = rounding;
    visuals.widgets.active.rounding = rounding;

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;
    ctx.set_style(style);
}
