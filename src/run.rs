//! Run lifecycle: the frame-driven time source and the per-graph
//! orchestrator that starts, cancels and completes runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::anim::AnimationOptions;
use crate::feed::CurveFeed;
use crate::graph::Coordinate;

static NEXT_RUN_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one run of one graph instance.
///
/// Ids are allocated from a process-wide counter, so they are unique across
/// instances as well as across restarts; `RunId(0)` is the before-first-run
/// sentinel. Every per-run artifact carries its id, which is how callbacks
/// from a superseded run detect that they are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

impl RunId {
    pub(crate) fn next() -> Self {
        Self(NEXT_RUN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle of one graph's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No run started yet.
    Idle,
    /// Points are being produced frame by frame.
    Running,
    /// Superseded or disposed before reaching the terminal point.
    Cancelled,
    /// The terminal (1, 1) point was produced. The final frame stays
    /// rendered until a new run supersedes it.
    Completed,
}

/// Per-run elapsed-time source, driven by the host's repaint callback.
///
/// The timeline starts lazily: the first [`tick`](Self::tick) pins zero, so
/// the first sample is always elapsed 0 no matter when the run was
/// constructed. Once elapsed reaches the duration the source emits one
/// terminal sample of exactly the duration and then nothing more, which
/// guarantees the curve visually completes regardless of frame jitter.
pub struct FrameSource {
    run: RunId,
    duration_ms: u64,
    started: Option<Instant>,
    finished: bool,
}

impl FrameSource {
    pub fn new(run: RunId, duration_ms: u64) -> Self {
        Self { run, duration_ms, started: None, finished: false }
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Elapsed milliseconds at `now`, or None once the terminal sample has
    /// been emitted.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        if self.finished {
            return None;
        }
        let t0 = *self.started.get_or_insert(now);
        let elapsed = now.duration_since(t0).as_secs_f64() * 1000.0;
        if elapsed >= self.duration_ms as f64 {
            self.finished = true;
            return Some(self.duration_ms as f64);
        }
        Some(elapsed)
    }
}

/// Owns one graph instance's run lifecycle.
///
/// Starting a new run synchronously detaches the previous run's frame source
/// and clears the feed before the new run's first point can exist; stale
/// pushes are additionally rejected by the feed's run check.
pub struct Orchestrator {
    feed: CurveFeed,
    phase: RunPhase,
    run: RunId,
    options: AnimationOptions,
    source: Option<FrameSource>,
    optimal: Option<Arc<[Coordinate]>>,
}

impl Orchestrator {
    pub fn new(feed: CurveFeed) -> Self {
        Self {
            feed,
            phase: RunPhase::Idle,
            run: RunId(0),
            options: AnimationOptions::default(),
            source: None,
            optimal: None,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    /// Options of the current run.
    pub fn options(&self) -> AnimationOptions {
        self.options
    }

    /// The run's reference polyline, computed once at start.
    pub fn optimal(&self) -> Option<Arc<[Coordinate]>> {
        self.optimal.clone()
    }

    /// Start a new run with `options`, cancelling any run in progress.
    pub fn start(&mut self, options: AnimationOptions) -> RunId {
        if self.phase == RunPhase::Running {
            log::debug!(
                "run {} cancelled ({})",
                self.run.0,
                self.options.easing.name
            );
            self.phase = RunPhase::Cancelled;
        }
        self.source = None;
        let run = RunId::next();
        self.run = run;
        self.options = options;
        self.feed.begin_run(run);
        self.optimal = Some(options.optimal_curve());
        self.source = Some(FrameSource::new(run, options.duration_ms));
        self.phase = RunPhase::Running;
        log::debug!("run {} started ({})", run.0, options.easing.name);
        run
    }

    /// Cancel without starting a new run. The feed keeps its data; nothing
    /// further is produced.
    pub fn cancel(&mut self) {
        if self.phase == RunPhase::Running {
            self.phase = RunPhase::Cancelled;
            log::debug!("run {} cancelled", self.run.0);
        }
        self.source = None;
    }

    /// Advance one frame: sample the source at `now` and feed the generated
    /// point. Returns true when a point was produced, i.e. the surface needs
    /// a base pass.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        let Some(elapsed) = source.tick(now) else {
            return false;
        };
        let point = self.options.curve_point(elapsed);
        let produced = self.feed.push(self.run, point);
        if source.is_finished() {
            self.phase = RunPhase::Completed;
            log::debug!("run {} completed ({})", self.run.0, self.options.easing.name);
        }
        produced
    }
}
