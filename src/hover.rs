//! Nearest-point resolution for the hover highlight.

use crate::graph::Coordinate;

/// Resolves the accumulated curve point closest to the pointer.
///
/// Distances are Euclidean in normalized space; ties go to the first point
/// in list order. The resolver remembers its last emission and suppresses
/// repeats, so an unchanged highlight never triggers a redraw.
pub struct NearestPointResolver {
    last: Option<Coordinate>,
}

impl NearestPointResolver {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Pure scan: nearest of `points` to `pointer`, or None when the pointer
    /// is absent or there are no points yet.
    pub fn resolve(points: &[Coordinate], pointer: Option<Coordinate>) -> Option<Coordinate> {
        let p = pointer?;
        let mut best: Option<Coordinate> = None;
        let mut best_d2 = f64::INFINITY;
        for c in points {
            let dx = c.x - p.x;
            let dy = c.y - p.y;
            let d2 = dx * dx + dy * dy;
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(*c);
            }
        }
        best
    }

    /// Recompute against the current inputs. Returns the new highlight when
    /// it differs from the previous emission, None when suppressed.
    pub fn update(
        &mut self,
        points: &[Coordinate],
        pointer: Option<Coordinate>,
    ) -> Option<Option<Coordinate>> {
        let resolved = Self::resolve(points, pointer);
        if resolved == self.last {
            return None;
        }
        self.last = resolved;
        Some(resolved)
    }

    pub fn current(&self) -> Option<Coordinate> {
        self.last
    }
}

impl Default for NearestPointResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn picks_the_minimum_distance_point() {
        let points = [c(0.0, 0.0), c(0.5, 0.5), c(1.0, 1.0)];
        let got = NearestPointResolver::resolve(&points, Some(c(0.6, 0.4)));
        assert_eq!(got, Some(c(0.5, 0.5)));
    }

    #[test]
    fn exact_hit_has_distance_zero() {
        let points = [c(0.0, 0.0), c(0.25, 0.75), c(1.0, 1.0)];
        let got = NearestPointResolver::resolve(&points, Some(c(0.25, 0.75)));
        assert_eq!(got, Some(c(0.25, 0.75)));
    }

    #[test]
    fn ties_go_to_the_first_point_in_order() {
        // both candidates are 0.1 away from the pointer on the x axis
        let points = [c(0.4, 0.0), c(0.6, 0.0)];
        let got = NearestPointResolver::resolve(&points, Some(c(0.5, 0.0)));
        assert_eq!(got, Some(c(0.4, 0.0)));
    }

    #[test]
    fn absent_pointer_or_empty_list_resolves_none() {
        let points = [c(0.0, 0.0)];
        assert_eq!(NearestPointResolver::resolve(&points, None), None);
        assert_eq!(NearestPointResolver::resolve(&[], Some(c(0.5, 0.5))), None);
    }

    #[test]
    fn unchanged_resolution_is_suppressed() {
        let points = [c(0.0, 0.0), c(1.0, 1.0)];
        let mut r = NearestPointResolver::new();
        assert_eq!(r.update(&points, Some(c(0.1, 0.1))), Some(Some(c(0.0, 0.0))));
        // pointer moved, nearest point unchanged: suppressed
        assert_eq!(r.update(&points, Some(c(0.2, 0.1))), None);
        // nearest flips to the far point: emitted
        assert_eq!(r.update(&points, Some(c(0.9, 0.9))), Some(Some(c(1.0, 1.0))));
    }

    #[test]
    fn pointer_leave_cascades_to_null_once() {
        let points = [c(0.0, 0.0)];
        let mut r = NearestPointResolver::new();
        r.update(&points, Some(c(0.1, 0.1)));
        assert_eq!(r.update(&points, None), Some(None));
        assert_eq!(r.update(&points, None), None);
        assert_eq!(r.current(), None);
    }

    #[test]
    fn growing_list_can_change_the_resolution() {
        let mut r = NearestPointResolver::new();
        let early = [c(0.0, 0.0)];
        assert_eq!(r.update(&early, Some(c(0.8, 0.8))), Some(Some(c(0.0, 0.0))));
        let grown = [c(0.0, 0.0), c(0.7, 0.7)];
        assert_eq!(r.update(&grown, Some(c(0.8, 0.8))), Some(Some(c(0.7, 0.7))));
    }
}
