//! The two render passes of one graph surface.
//!
//! The base pass redraws the whole scene (axes, optional framelines, the
//! reference and live polylines, markers) into the front buffer and, only on
//! full completion, commits the result to the cache buffer. A pass that
//! fails mid-way restores the front buffer from the cache and leaves the
//! cache untouched, so a partial frame is never the one on screen.
//!
//! The highlight pass never redraws the scene: it restores the cached frame
//! and draws the dashed hover hints on top.
//!
//! Geometry is rasterized with tiny-skia. Text has no raster stack here;
//! both passes return positioned [`TextLabel`]s that the egui layer paints
//! over the blitted texture.

use egui::{pos2, Align2, Color32, Pos2};
use tiny_skia::{FillRule, Paint, PathBuilder, Stroke, StrokeDash, Transform};

use crate::anim::AnimationOptions;
use crate::config::RenderOptions;
use crate::error::GraphError;
use crate::graph::{Coordinate, Screen, Segment};
use crate::theme::Theme;

/// A piece of text produced by a pass, anchored in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub pos: Pos2,
    pub align: Align2,
    pub text: String,
    pub color: Color32,
}

/// Draws one graph's passes. Holds the per-run copies of the options, so a
/// toggle flipped mid-run only takes effect on the next run.
pub struct Renderer {
    pub theme: Theme,
    /// Effective-curve color of this graph (from the palette).
    pub curve: Color32,
    pub options: RenderOptions,
}

impl Renderer {
    pub fn new(theme: Theme, curve: Color32, options: RenderOptions) -> Self {
        Self { theme, curve, options }
    }

    /// Full scene redraw. Commits to the cache on success; restores the
    /// front buffer and keeps the cache on failure.
    pub fn base_pass(
        &self,
        screen: &mut Screen,
        points: &[Coordinate],
        segments: &[Segment],
        optimal: Option<&[Coordinate]>,
    ) -> Result<Vec<TextLabel>, GraphError> {
        match self.draw_scene(screen, points, segments, optimal) {
            Ok(labels) => {
                screen.commit();
                Ok(labels)
            }
            Err(e) => {
                screen.restore();
                Err(e)
            }
        }
    }

    /// Cheap overlay pass: restore the cached frame, then draw dashed hints
    /// and the readout for `highlight`. With no highlight this is a pure
    /// restore.
    pub fn highlight_pass(
        &self,
        screen: &mut Screen,
        highlight: Option<Coordinate>,
        anim: &AnimationOptions,
    ) -> Result<Vec<TextLabel>, GraphError> {
        screen.restore();
        let Some(c) = highlight else {
            return Ok(Vec::new());
        };
        if !c.is_finite() {
            return Err(GraphError::NonFinite { x: c.x, y: c.y });
        }

        let map = screen.map;
        let (px, py) = map.absolute(c);
        let baseline = map.y.absolute(0.0);
        let origin_x = map.x.absolute(0.0);

        // Dashed hints from both axes to the point. The mapping is linear
        // and unclamped, so a negative-y highlight simply puts the vertical
        // hint below the x axis, mirroring the in-range geometry.
        let mut pb = PathBuilder::new();
        pb.move_to(px as f32, baseline as f32);
        pb.line_to(px as f32, py as f32);
        pb.move_to(origin_x as f32, py as f32);
        pb.line_to(px as f32, py as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.0,
                dash: StrokeDash::new(vec![4.0, 4.0], 0.0),
                ..Stroke::default()
            };
            screen.front.stroke_path(
                &path,
                &paint(self.theme.hint),
                &stroke,
                Transform::identity(),
                None,
            );
        }

        let ms = (c.x * anim.duration_ms as f64).round() as i64;
        let value = c.y * anim.to;
        // flip the readout to the left of the point near the right edge
        let (anchor, align) = if px > screen.width() as f64 - 70.0 {
            (pos2(px as f32 - 8.0, py as f32 - 6.0), Align2::RIGHT_BOTTOM)
        } else {
            (pos2(px as f32 + 8.0, py as f32 - 6.0), Align2::LEFT_BOTTOM)
        };
        Ok(vec![TextLabel {
            pos: anchor,
            align,
            text: format!("({ms} ms, {value:.2})"),
            color: self.theme.readout,
        }])
    }

    fn draw_scene(
        &self,
        screen: &mut Screen,
        points: &[Coordinate],
        segments: &[Segment],
        optimal: Option<&[Coordinate]>,
    ) -> Result<Vec<TextLabel>, GraphError> {
        screen.front.fill(color(self.theme.background));
        let labels = self.draw_axes(screen);

        if self.options.framelines {
            validate(points)?;
            self.draw_framelines(screen, points);
        }
        if self.options.optimal {
            if let Some(reference) = optimal {
                validate(reference)?;
                self.draw_polyline(screen, reference, self.theme.optimal, 1.0);
            }
        }
        if self.options.effective {
            validate(points)?;
            self.draw_segments(screen, segments);
        }
        if self.options.points {
            validate(points)?;
            self.draw_markers(screen, points);
        }
        Ok(labels)
    }

    fn draw_axes(&self, screen: &mut Screen) -> Vec<TextLabel> {
        let map = screen.map;
        let baseline = map.y.absolute(0.0);
        let top = map.y.absolute(1.0);
        let left = map.x.absolute(0.0);
        let right = map.x.absolute(1.0);

        let mut pb = PathBuilder::new();
        pb.move_to(left as f32, baseline as f32);
        pb.line_to(right as f32, baseline as f32);
        pb.move_to(left as f32, baseline as f32);
        pb.line_to(left as f32, top as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.0,
                ..Stroke::default()
            };
            screen.front.stroke_path(
                &path,
                &paint(self.theme.axis),
                &stroke,
                Transform::identity(),
                None,
            );
        }

        vec![
            TextLabel {
                pos: pos2(left as f32 - 4.0, baseline as f32 + 4.0),
                align: Align2::RIGHT_TOP,
                text: "0".to_string(),
                color: self.theme.axis_label,
            },
            TextLabel {
                pos: pos2(right as f32, baseline as f32 + 4.0),
                align: Align2::CENTER_TOP,
                text: "1".to_string(),
                color: self.theme.axis_label,
            },
            TextLabel {
                pos: pos2(left as f32 - 4.0, top as f32),
                align: Align2::RIGHT_CENTER,
                text: "1".to_string(),
                color: self.theme.axis_label,
            },
        ]
    }

    fn draw_framelines(&self, screen: &mut Screen, points: &[Coordinate]) {
        if points.is_empty() {
            return;
        }
        let map = screen.map;
        let baseline = map.y.absolute(0.0);
        let top = map.y.absolute(1.0);
        let mut pb = PathBuilder::new();
        for p in points {
            let px = map.x.absolute(p.x) as f32;
            pb.move_to(px, baseline as f32);
            pb.line_to(px, top as f32);
        }
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.0,
                ..Stroke::default()
            };
            screen.front.stroke_path(
                &path,
                &paint(self.theme.frameline),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_polyline(&self, screen: &mut Screen, points: &[Coordinate], col: Color32, width: f32) {
        if points.len() < 2 {
            return;
        }
        let map = screen.map;
        let mut pb = PathBuilder::new();
        let (x0, y0) = map.absolute(points[0]);
        pb.move_to(x0 as f32, y0 as f32);
        for p in &points[1..] {
            let (x, y) = map.absolute(*p);
            pb.line_to(x as f32, y as f32);
        }
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            screen
                .front
                .stroke_path(&path, &paint(col), &stroke, Transform::identity(), None);
        }
    }

    // The live curve is stroked straight from the shared segment list;
    // consecutive segments share endpoints, so the path chains through them.
    fn draw_segments(&self, screen: &mut Screen, segments: &[Segment]) {
        let Some(first) = segments.first() else {
            return;
        };
        let map = screen.map;
        let mut pb = PathBuilder::new();
        let (x0, y0) = map.absolute(first.from);
        pb.move_to(x0 as f32, y0 as f32);
        for seg in segments {
            let (x, y) = map.absolute(seg.to);
            pb.line_to(x as f32, y as f32);
        }
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 2.0,
                ..Stroke::default()
            };
            screen.front.stroke_path(
                &path,
                &paint(self.curve),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_markers(&self, screen: &mut Screen, points: &[Coordinate]) {
        if points.is_empty() {
            return;
        }
        let map = screen.map;
        let mut pb = PathBuilder::new();
        for p in points {
            let (x, y) = map.absolute(*p);
            pb.push_circle(x as f32, y as f32, 2.5);
        }
        if let Some(path) = pb.finish() {
            screen.front.fill_path(
                &path,
                &paint(self.theme.marker),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}

fn color(c: Color32) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r(), c.g(), c.b(), c.a())
}

fn paint(c: Color32) -> Paint<'static> {
    let mut p = Paint::default();
    p.set_color_rgba8(c.r(), c.g(), c.b(), c.a());
    p.anti_alias = true;
    p
}

fn validate(points: &[Coordinate]) -> Result<(), GraphError> {
    for p in points {
        if !p.is_finite() {
            return Err(GraphError::NonFinite { x: p.x, y: p.y });
        }
    }
    Ok(())
}
