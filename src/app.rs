//! Native viewer: the easing catalogue grid and its shared controls.
//!
//! [`EaseScopeApp`] owns one [`GraphInstance`] per catalogue entry and drives
//! them all from the egui frame loop: each update advances every instance
//! with one shared timestamp, re-uploads dirty surfaces as textures, and
//! paints the text labels the passes produced. [`run`] / [`run_with_config`]
//! open the native window and block until it closes.

use std::time::{Duration, Instant};

use eframe::egui;
use egui_phosphor::regular::ARROW_CLOCKWISE;

use crate::config::{EasescopeConfig, RenderOptions};
use crate::easing::Easing;
use crate::graph::Screen;
use crate::instance::GraphInstance;
use crate::theme;

/// One grid slot: a graph instance plus its GPU-side texture.
struct GraphCell {
    instance: GraphInstance,
    texture: Option<egui::TextureHandle>,
}

/// The catalogue application.
///
/// The duration slider and the render toggles are shared inputs. Changing
/// either restarts every graph with the new values; a running curve never
/// mutates mid-run, it is superseded.
pub struct EaseScopeApp {
    config: EasescopeConfig,
    cells: Vec<GraphCell>,
    /// Easings whose surface could not be allocated at startup.
    failed: Vec<&'static str>,
    /// Shared duration, adopted by each graph at run start.
    duration_ms: u64,
    /// Shared render toggles, adopted by each graph at run start.
    render: RenderOptions,
}

impl EaseScopeApp {
    /// Build the app with the full easing catalogue and start every graph.
    pub fn new(config: EasescopeConfig) -> Self {
        Self::with_catalogue(Easing::ALL, config)
    }

    /// Build the app with a chosen subset of the catalogue.
    pub fn with_catalogue(catalogue: &[Easing], config: EasescopeConfig) -> Self {
        // Instances take their curve color from the palette at construction,
        // so the palette must match the configured theme first.
        theme::set_curve_palette(config.theme.curve_colors());

        let mut cells = Vec::with_capacity(catalogue.len());
        let mut failed = Vec::new();
        for (index, easing) in catalogue.iter().enumerate() {
            // A failed allocation skips that one graph; siblings keep going.
            match GraphInstance::new(*easing, index, &config) {
                Ok(instance) => cells.push(GraphCell {
                    instance,
                    texture: None,
                }),
                Err(_) => failed.push(easing.name),
            }
        }

        let mut app = Self {
            duration_ms: config.duration_ms,
            render: config.render,
            cells,
            failed,
            config,
        };
        app.restart_all();
        app
    }

    /// Restart every graph with the current shared duration and toggles.
    pub fn restart_all(&mut self) {
        for cell in &mut self.cells {
            cell.instance.restart(self.duration_ms, self.render);
        }
    }

    /// Number of graphs that came up.
    pub fn graph_count(&self) -> usize {
        self.cells.len()
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut restart = false;

            ui.label("Duration:");
            let (lo, hi) = self.config.duration_range;
            restart |= ui
                .add(egui::Slider::new(&mut self.duration_ms, lo..=hi).suffix(" ms"))
                .changed();

            ui.separator();

            restart |= ui.checkbox(&mut self.render.effective, "Effective").changed();
            restart |= ui.checkbox(&mut self.render.optimal, "Optimal").changed();
            restart |= ui.checkbox(&mut self.render.points, "Points").changed();
            restart |= ui.checkbox(&mut self.render.coords, "Coordinates").changed();
            restart |= ui
                .checkbox(&mut self.render.framelines, "Framelines")
                .changed();

            ui.separator();

            restart |= ui
                .button(format!("{ARROW_CLOCKWISE} Restart all"))
                .on_hover_text("Restart every graph with the settings above")
                .clicked();

            if restart {
                self.restart_all();
            }

            if !self.failed.is_empty() {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(220, 80, 80),
                    format!("{} graph(s) unavailable", self.failed.len()),
                );
            }
        });
    }

    fn grid_ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        let duration_ms = self.duration_ms;
        let render = self.render;
        ui.horizontal_wrapped(|ui| {
            for cell in &mut self.cells {
                cell_ui(ui, cell, now, duration_ms, render);
            }
        });
    }
}

impl eframe::App for EaseScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One timestamp per update keeps sibling graphs in lockstep.
        let now = Instant::now();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls_ui(ui);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.grid_ui(ui, now);
            });
        });
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Draw one catalogue cell: header row, the blitted surface, and the text
/// labels the passes produced.
fn cell_ui(
    ui: &mut egui::Ui,
    cell: &mut GraphCell,
    now: Instant,
    duration_ms: u64,
    render: RenderOptions,
) {
    let w = cell.instance.screen().width() as f32;
    let h = cell.instance.screen().height() as f32;

    ui.allocate_ui(egui::vec2(w, h + 22.0), |ui| {
        ui.set_width(w);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(cell.instance.name()).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button(ARROW_CLOCKWISE)
                    .on_hover_text("Restart this graph")
                    .clicked()
                {
                    cell.instance.restart(duration_ms, render);
                }
            });
        });

        let (response, painter) = ui.allocate_painter(egui::vec2(w, h), egui::Sense::hover());
        let rect = response.rect;
        let hover = response
            .hover_pos()
            .map(|p| ((p.x - rect.left()) as f64, (p.y - rect.top()) as f64));

        if let Err(e) = cell.instance.frame(now, hover) {
            // Scoped to this graph; the previous complete frame stays visible.
            log::error!("graph '{}': {e}", cell.instance.name());
        }

        if cell.instance.take_dirty() || cell.texture.is_none() {
            let image = surface_image(cell.instance.screen());
            match &mut cell.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    let name = format!("easing-{}", cell.instance.name());
                    cell.texture =
                        Some(ui.ctx().load_texture(name, image, egui::TextureOptions::LINEAR));
                }
            }
        }

        if let Some(texture) = &cell.texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let font = egui::FontId::proportional(10.0);
        for label in cell.instance.labels() {
            painter.text(
                rect.left_top() + label.pos.to_vec2(),
                label.align,
                &label.text,
                font.clone(),
                label.color,
            );
        }
    });
}

/// Copy a graph surface into an egui image. tiny-skia stores premultiplied
/// RGBA, which is exactly what the texture upload expects.
fn surface_image(screen: &Screen) -> egui::ColorImage {
    let size = [screen.width() as usize, screen.height() as usize];
    egui::ColorImage::from_rgba_premultiplied(size, screen.front.data())
}

/// Launch the viewer with the default configuration.
pub fn run() -> eframe::Result<()> {
    run_with_config(EasescopeConfig::default())
}

/// Launch the viewer in a native window.
///
/// The call blocks until the window is closed.
pub fn run_with_config(mut config: EasescopeConfig) -> eframe::Result<()> {
    let title = config.title.clone();
    let theme = config.theme;
    let mut opts = config
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1320.0, 880.0));
    }

    let app = EaseScopeApp::new(config);
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
