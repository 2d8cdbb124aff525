//! One isolated graph: surface, feed, orchestrator, pointer pipeline.
//!
//! Every catalogue entry gets its own [`GraphInstance`]; instances share
//! nothing but the read-only control values handed to [`restart`]
//! (GraphInstance::restart), so restarting or failing one graph never
//! disturbs a sibling.

use std::time::Instant;

use crate::anim::AnimationOptions;
use crate::config::{EasescopeConfig, RenderOptions};
use crate::easing::Easing;
use crate::error::GraphError;
use crate::feed::CurveFeed;
use crate::graph::Screen;
use crate::hover::NearestPointResolver;
use crate::pointer::PointerTracker;
use crate::render::{Renderer, TextLabel};
use crate::run::{Orchestrator, RunPhase};
use crate::theme;

pub struct GraphInstance {
    easing: Easing,
    screen: Screen,
    feed: CurveFeed,
    orchestrator: Orchestrator,
    tracker: PointerTracker,
    resolver: NearestPointResolver,
    renderer: Renderer,
    from: f64,
    to: f64,
    base_labels: Vec<TextLabel>,
    overlay_labels: Vec<TextLabel>,
    front_dirty: bool,
}

impl GraphInstance {
    /// Build the graph for `easing`, taking its curve color from the palette
    /// at `index`. Fails only when the surface cannot be allocated; the
    /// failure is logged here and scoped to this one graph.
    pub fn new(easing: Easing, index: usize, config: &EasescopeConfig) -> Result<Self, GraphError> {
        let screen = Screen::new(config.graph_width, config.graph_height, config.margin)
            .map_err(|e| {
                log::error!("graph '{}': {e}", easing.name);
                e
            })?;
        let tracker = PointerTracker::new(screen.map);
        let feed = CurveFeed::new();
        let orchestrator = Orchestrator::new(feed.clone());
        let renderer = Renderer::new(
            config.theme.theme(),
            theme::curve_color(index),
            config.render,
        );
        Ok(Self {
            easing,
            screen,
            feed,
            orchestrator,
            tracker,
            resolver: NearestPointResolver::new(),
            renderer,
            from: config.from,
            to: config.to,
            base_labels: Vec::new(),
            overlay_labels: Vec::new(),
            front_dirty: false,
        })
    }

    pub fn name(&self) -> &'static str {
        self.easing.name
    }

    pub fn phase(&self) -> RunPhase {
        self.orchestrator.phase()
    }

    pub fn feed(&self) -> &CurveFeed {
        &self.feed
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn render_options(&self) -> RenderOptions {
        self.renderer.options
    }

    /// Labels to paint over the blitted surface, base pass first.
    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.base_labels.iter().chain(self.overlay_labels.iter())
    }

    /// True once per front-buffer mutation; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.front_dirty)
    }

    /// Start a new run, adopting the shared duration and toggles as of now.
    /// The previous run (if any) is cancelled and its data cleared before
    /// the new run produces anything.
    pub fn restart(&mut self, duration_ms: u64, render: RenderOptions) {
        self.renderer.options = render;
        self.resolver = NearestPointResolver::new();
        self.overlay_labels.clear();
        self.orchestrator.start(AnimationOptions::new(
            self.easing,
            self.from,
            self.to,
            duration_ms,
        ));
    }

    /// Stop producing without clearing what is on screen.
    pub fn cancel(&mut self) {
        self.orchestrator.cancel();
    }

    /// Advance one frame: pump the run, track the pointer, and run the
    /// passes that the new state requires. `hover` is this frame's pointer
    /// position in surface pixels, None when the pointer is elsewhere.
    pub fn frame(&mut self, now: Instant, hover: Option<(f64, f64)>) -> Result<(), GraphError> {
        let produced = self.orchestrator.advance(now);
        if produced {
            let (points, segments) = self.feed.snapshot();
            let optimal = self.orchestrator.optimal();
            self.base_labels = self.renderer.base_pass(
                &mut self.screen,
                &points,
                &segments,
                optimal.as_deref(),
            )?;
            self.front_dirty = true;
        }

        self.tracker.track(hover);

        if self.renderer.options.coords {
            let emission = self
                .feed
                .with_points(|points| self.resolver.update(points, self.tracker.current()));
            // redraw the overlay when the highlight changed, or when a base
            // pass just painted over an unchanged one
            if emission.is_some() || (produced && self.resolver.current().is_some()) {
                self.overlay_labels = self.renderer.highlight_pass(
                    &mut self.screen,
                    self.resolver.current(),
                    &self.orchestrator.options(),
                )?;
                self.front_dirty = true;
            }
        }
        Ok(())
    }
}
