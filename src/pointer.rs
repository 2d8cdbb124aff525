//! Pointer tracking: raw hover positions to normalized graph coordinates.

use crate::graph::{Coordinate, GraphMap};

/// Tracks the pointer over one graph surface.
///
/// The tracked value is `None` before the first enter and after a leave.
/// Positions are converted through the surface's [`GraphMap`] without
/// clamping, so a pointer below the x axis yields a negative y coordinate.
/// Consecutive identical values are suppressed.
pub struct PointerTracker {
    map: GraphMap,
    current: Option<Coordinate>,
}

impl PointerTracker {
    pub fn new(map: GraphMap) -> Self {
        Self { map, current: None }
    }

    /// Feed this frame's hover state (surface pixels, None when the pointer
    /// is off the surface). Returns the new tracked value when it changed,
    /// or None when this frame is a duplicate.
    pub fn track(&mut self, hover: Option<(f64, f64)>) -> Option<Option<Coordinate>> {
        let next = hover.map(|(px, py)| self.map.normalize(px, py));
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    pub fn current(&self) -> Option<Coordinate> {
        self.current
    }
}
