//! Color roles and the curve palette for the graph surfaces.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global palette used for effective-curve color allocation. Updated whenever
// a theme is applied. The value is cloned internally so callers can freely
// mutate the returned vector.
static CURVE_PALETTE: Lazy<Mutex<Vec<Color32>>> = Lazy::new(|| {
    Mutex::new(ThemeKind::Dark.curve_colors())
});

/// Get a copy of the current curve color palette.
pub fn curve_palette() -> Vec<Color32> {
    CURVE_PALETTE.lock().unwrap().clone()
}

/// Update the curve palette. Called automatically when a [`ThemeKind`] is
/// applied, but user code (or tests) may call it directly.
pub fn set_curve_palette(new: Vec<Color32>) {
    let mut guard = CURVE_PALETTE.lock().unwrap();
    *guard = new;
}

/// Palette color for the graph at `index`, wrapping around the palette.
pub fn curve_color(index: usize) -> Color32 {
    let guard = CURVE_PALETTE.lock().unwrap();
    if guard.is_empty() {
        return Color32::from_rgb(31, 119, 180);
    }
    guard[index % guard.len()]
}

/// Visual theme for the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl Default for ThemeKind {
    fn default() -> Self {
        ThemeKind::Dark
    }
}

impl ThemeKind {
    /// All built-in themes (useful for combo-box UIs).
    pub const ALL: &'static [ThemeKind] = &[ThemeKind::Dark, ThemeKind::Light];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    /// Apply this theme's visuals to an egui context and refresh the curve
    /// palette to match.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ThemeKind::Dark => ctx.set_visuals(Visuals::dark()),
            ThemeKind::Light => ctx.set_visuals(Visuals::light()),
        }
        set_curve_palette(self.curve_colors());
    }

    /// Color roles used by the render passes.
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme {
                background: Color32::from_rgb(24, 26, 30),
                axis: Color32::from_rgb(150, 150, 150),
                axis_label: Color32::from_rgb(190, 190, 190),
                frameline: Color32::from_rgb(55, 58, 64),
                optimal: Color32::from_rgb(120, 120, 120),
                marker: Color32::from_rgb(230, 90, 80),
                hint: Color32::from_rgb(200, 170, 90),
                readout: Color32::from_rgb(235, 235, 235),
            },
            ThemeKind::Light => Theme {
                background: Color32::from_rgb(250, 250, 248),
                axis: Color32::from_rgb(90, 90, 90),
                axis_label: Color32::from_rgb(60, 60, 60),
                frameline: Color32::from_rgb(225, 225, 222),
                optimal: Color32::from_rgb(150, 150, 150),
                marker: Color32::from_rgb(200, 40, 40),
                hint: Color32::from_rgb(170, 130, 30),
                readout: Color32::from_rgb(25, 25, 25),
            },
        }
    }

    /// Effective-curve palette for this theme (one color per graph, wrapping).
    pub fn curve_colors(&self) -> Vec<Color32> {
        match self {
            ThemeKind::Dark => vec![
                Color32::from_rgb(31, 119, 180),
                Color32::from_rgb(255, 127, 14),
                Color32::from_rgb(44, 160, 44),
                Color32::from_rgb(214, 39, 40),
                Color32::from_rgb(148, 103, 189),
                Color32::from_rgb(140, 86, 75),
                Color32::from_rgb(227, 119, 194),
                Color32::from_rgb(127, 127, 127),
            ],
            ThemeKind::Light => vec![
                Color32::from_rgb(228, 26, 28),
                Color32::from_rgb(55, 126, 184),
                Color32::from_rgb(77, 175, 74),
                Color32::from_rgb(152, 78, 163),
                Color32::from_rgb(255, 127, 0),
                Color32::from_rgb(166, 86, 40),
                Color32::from_rgb(247, 129, 191),
                Color32::from_rgb(153, 153, 153),
            ],
        }
    }
}

/// Resolved color roles handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Surface clear color.
    pub background: Color32,
    /// Axis strokes.
    pub axis: Color32,
    /// Axis label text (drawn by the egui overlay).
    pub axis_label: Color32,
    /// Per-frame vertical gridlines.
    pub frameline: Color32,
    /// The reference polyline.
    pub optimal: Color32,
    /// Point markers on the effective curve.
    pub marker: Color32,
    /// Dashed hint lines of the hover highlight.
    pub hint: Color32,
    /// The "(ms, value)" readout text.
    pub readout: Color32,
}
