//! Error type shared by surface setup and the render passes.

/// Failures scoped to a single graph instance. A failing instance never
/// affects its siblings.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },
    #[error("non-finite coordinate ({x}, {y}) reached the renderer")]
    NonFinite { x: f64, y: f64 },
}
