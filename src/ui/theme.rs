//! UI theme definitions.

use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => DARK_PALETTE,
            Theme::Light => LIGHT_PALETTE,
        }
    }
}

impl From<crate::storage::config::Theme> for Theme {
    fn from(pref: crate::storage::config::Theme) -> Self {
        match pref {
            crate::storage::config::Theme::Dark => Theme::Dark,
            crate::storage::config::Theme::Light => Theme::Light,
        }
    }
}

/// Colors the showcase widgets draw with.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window background
    pub background: Color32,
    /// Card background (testimonial slides, FAQ panels)
    pub card_bg: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary text (attribution lines, answers)
    pub text_secondary: Color32,
    /// Muted text and inactive indicator dots
    pub text_muted: Color32,
    /// Accent for active headers, active dots, arrows
    pub accent: Color32,
    /// Card and panel borders
    pub border: Color32,
}

/// Dark palette.
pub const DARK_PALETTE: Palette = Palette {
    background: Color32::from_rgb(20, 21, 26),
    card_bg: Color32::from_rgb(32, 34, 42),
    text_primary: Color32::from_rgb(238, 240, 244),
    text_secondary: Color32::from_rgb(170, 174, 184),
    text_muted: Color32::from_rgb(104, 108, 120),
    accent: Color32::from_rgb(64, 182, 166),
    border: Color32::from_rgb(58, 60, 72),
};

/// Light palette.
pub const LIGHT_PALETTE: Palette = Palette {
    background: Color32::from_rgb(250, 250, 252),
    card_bg: Color32::from_rgb(244, 245, 248),
    text_primary: Color32::from_rgb(30, 32, 38),
    text_secondary: Color32::from_rgb(92, 96, 106),
    text_muted: Color32::from_rgb(148, 152, 162),
    accent: Color32::from_rgb(16, 140, 126),
    border: Color32::from_rgb(216, 218, 226),
};

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    let palette = DARK_PALETTE;

    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.card_bg;
    visuals.extreme_bg_color = Color32::from_rgb(14, 15, 18);

    visuals.widgets.noninteractive.bg_fill = palette.card_bg;
    visuals.widgets.inactive.bg_fill = palette.card_bg;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(44, 46, 56);
    visuals.widgets.active.bg_fill = palette.accent;

    visuals.selection.bg_fill = palette.accent.linear_multiply(0.4);
    visuals.selection.stroke.color = palette.accent;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
    visuals.widgets.active.fg_stroke.color = palette.text_primary;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    let palette = LIGHT_PALETTE;

    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.card_bg;
    visuals.extreme_bg_color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_fill = palette.card_bg;
    visuals.widgets.inactive.bg_fill = palette.card_bg;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(233, 234, 239);
    visuals.widgets.active.bg_fill = palette.accent;

    visuals.selection.bg_fill = palette.accent.linear_multiply(0.2);
    visuals.selection.stroke.color = palette.accent;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.fg_stroke.color = palette.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = palette.text_primary;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}
