//! EaseScope crate root: re-exports and module wiring.
//!
//! An animated easing-function visualizer built on egui/eframe. Every
//! catalogue entry gets its own graph that animates a value across a shared
//! duration, rasterized frame by frame into a double-buffered tiny-skia
//! surface; hovering a graph highlights the nearest produced point with its
//! "(ms, value)" readout.
//!
//! Cohesive modules:
//! - `easing`: the tweening-formula catalogue
//! - `anim`: curve generation and the per-millisecond reference curve
//! - `graph`: coordinate model, pixel mapping, double-buffered surface
//! - `feed`: multicast, replayable point/segment feed
//! - `pointer` / `hover`: pointer normalization and nearest-point lookup
//! - `render`: the base and highlight passes
//! - `run`: frame source and run orchestration
//! - `instance`: one isolated graph per easing
//! - `app`: the eframe viewer and run helpers
//! - `config` / `theme`: plain-struct configuration and color roles

pub mod anim;
pub mod app;
pub mod config;
pub mod easing;
pub mod error;
pub mod feed;
pub mod graph;
pub mod hover;
pub mod instance;
pub mod pointer;
pub mod render;
pub mod run;
pub mod theme;

// Public re-exports for a compact external API
pub use anim::AnimationOptions;
pub use app::{run, run_with_config, EaseScopeApp};
pub use config::{EasescopeConfig, RenderOptions};
pub use easing::{Easing, EasingFn};
pub use error::GraphError;
pub use feed::{CurveFeed, FeedEvent};
pub use graph::{Coordinate, GraphMap, Screen, Segment};
pub use hover::NearestPointResolver;
pub use instance::GraphInstance;
pub use pointer::PointerTracker;
pub use render::{Renderer, TextLabel};
pub use run::{FrameSource, Orchestrator, RunId, RunPhase};
pub use theme::{Theme, ThemeKind};
