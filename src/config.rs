//! Configuration types for the viewer.

use crate::theme::ThemeKind;

/// Render feature toggles.
///
/// All layers default to on. Toggles are applied uniformly to every graph at
/// the start of its next run; a running curve keeps the layers it started
/// with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw a marker at each accumulated point.
    pub points: bool,
    /// Enable the hover highlight with its "(ms, value)" readout.
    pub coords: bool,
    /// Draw the per-millisecond reference polyline.
    pub optimal: bool,
    /// Draw the live frame-driven polyline.
    pub effective: bool,
    /// Draw one vertical gridline per produced frame.
    pub framelines: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            points: true,
            coords: true,
            optimal: true,
            effective: true,
            framelines: true,
        }
    }
}

/// Top-level configuration for the viewer.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `graph_width/height` | Fixed pixel size of every graph surface |
/// | `margin`         | Gap between surface edge and axes |
/// | `from`/`to`      | Animated value range (upward, `from < to`) |
/// | `duration_ms`    | Initial animation duration |
/// | `render`         | Initial render toggles |
/// | `theme`          | Visual theme |
#[derive(Clone)]
pub struct EasescopeConfig {
    /// Native window title.
    pub title: String,
    /// Width of each graph surface in pixels.
    pub graph_width: u32,
    /// Height of each graph surface in pixels.
    pub graph_height: u32,
    /// Margin between the surface edge and the axes, in pixels.
    pub margin: f64,
    /// Start of the animated value range.
    pub from: f64,
    /// End of the animated value range.
    pub to: f64,
    /// Initial animation duration in milliseconds.
    pub duration_ms: u64,
    /// Range of the duration slider (min, max) in milliseconds.
    pub duration_range: (u64, u64),
    /// Initial render toggles, shared by all graphs.
    pub render: RenderOptions,
    /// Visual theme.
    pub theme: ThemeKind,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for EasescopeConfig {
    fn default() -> Self {
        Self {
            title: "EaseScope".to_string(),
            graph_width: 300,
            graph_height: 200,
            margin: 20.0,
            from: 0.0,
            to: 100.0,
            duration_ms: 1000,
            duration_range: (100, 4000),
            render: RenderOptions::default(),
            theme: ThemeKind::default(),
            native_options: None,
        }
    }
}
