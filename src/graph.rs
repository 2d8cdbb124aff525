//! Coordinate model and screen mapping for one graph surface.
//!
//! Curve data lives in normalized space: x is the time fraction, y the value
//! fraction. Both are nominally in [0, 1] but y may leave that range for
//! overshooting easings, which is valid data, not an error. [`GraphMap`]
//! converts between normalized space and surface pixels, and [`Screen`] owns
//! the front/cache pixel-buffer pair the render passes draw into.

use tiny_skia::Pixmap;

use crate::error::GraphError;

/// A point in normalized graph space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A line segment between two consecutive curve points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Screen-space parameters of one graph dimension, derived once from the
/// surface size and margin.
///
/// `min` is the pixel of normalized 0 and `max` the pixel of normalized 1;
/// for the y axis `min > max` (screen y grows downward), so `delta` is
/// negative and the shared mapping formulas handle the inversion without a
/// special case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub delta: f64,
    pub edge: f64,
    pub offset: f64,
}

impl Axis {
    /// Axis running with the screen direction (x: left to right).
    pub fn forward(edge: f64, offset: f64) -> Self {
        let (min, max) = (offset, edge - offset);
        Self { min, max, delta: max - min, edge, offset }
    }

    /// Axis running against the screen direction (y: bottom to top).
    pub fn inverted(edge: f64, offset: f64) -> Self {
        let (min, max) = (edge - offset, offset);
        Self { min, max, delta: max - min, edge, offset }
    }

    pub fn absolute(&self, normalized: f64) -> f64 {
        self.min + normalized * self.delta
    }

    pub fn normalize(&self, pixel: f64) -> f64 {
        (pixel - self.min) / self.delta
    }
}

/// Paired axes converting between normalized coordinates and surface pixels.
/// `absolute` and `normalize` are inverses of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphMap {
    pub x: Axis,
    pub y: Axis,
}

impl GraphMap {
    pub fn new(width: u32, height: u32, margin: f64) -> Self {
        Self {
            x: Axis::forward(width as f64, margin),
            y: Axis::inverted(height as f64, margin),
        }
    }

    /// Surface pixel position to normalized coordinate. Out-of-range pixels
    /// map to out-of-range coordinates; nothing is clamped.
    pub fn normalize(&self, px: f64, py: f64) -> Coordinate {
        Coordinate::new(self.x.normalize(px), self.y.normalize(py))
    }

    /// Normalized coordinate to surface pixel position.
    pub fn absolute(&self, c: Coordinate) -> (f64, f64) {
        (self.x.absolute(c.x), self.y.absolute(c.y))
    }
}

/// One graph's drawing surface: the front buffer (the only one ever shown),
/// the cache buffer (snapshot of the last completed base pass) and the
/// pixel mapping. Each graph instance owns exactly one `Screen`; buffers are
/// never shared across instances.
pub struct Screen {
    pub front: Pixmap,
    cache: Pixmap,
    pub map: GraphMap,
}

impl Screen {
    pub fn new(width: u32, height: u32, margin: f64) -> Result<Self, GraphError> {
        let surface = || GraphError::Surface { width, height };
        let front = Pixmap::new(width, height).ok_or_else(surface)?;
        let cache = Pixmap::new(width, height).ok_or_else(surface)?;
        Ok(Self {
            front,
            cache,
            map: GraphMap::new(width, height, margin),
        })
    }

    pub fn width(&self) -> u32 {
        self.front.width()
    }

    pub fn height(&self) -> u32 {
        self.front.height()
    }

    /// Snapshot the front buffer into the cache. Called only after a base
    /// pass has fully completed.
    pub fn commit(&mut self) {
        self.cache.data_mut().copy_from_slice(self.front.data());
    }

    /// Overwrite the front buffer with the cached base frame.
    pub fn restore(&mut self) {
        self.front.data_mut().copy_from_slice(self.cache.data());
    }

    pub fn cache_data(&self) -> &[u8] {
        self.cache.data()
    }
}
