//! Curve generation: animation parameters to normalized curve points.
//!
//! [`AnimationOptions::curve_point`] is a pure map from elapsed time to a
//! [`Coordinate`]; it never depends on how many other samples were taken, so
//! frame-driven and per-millisecond sampling of the same options agree
//! wherever they share an elapsed value.

use std::sync::Arc;

use crate::easing::Easing;
use crate::graph::Coordinate;

/// Parameters of one animation run, immutable for the run's lifetime.
///
/// Values are normalized against `to`, which assumes an upward animation
/// (`0 <= from < to`); the bundled viewer animates 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 100.0,
            duration_ms: 1000,
            easing: Easing::ALL[0],
        }
    }
}

impl AnimationOptions {
    pub fn new(easing: Easing, from: f64, to: f64, duration_ms: u64) -> Self {
        Self { from, to, duration_ms, easing }
    }

    /// Normalized curve point at `elapsed_ms`.
    ///
    /// At or past the duration this returns exactly (1, 1) so that easings
    /// whose formula lands near but not on the target (bounce, elastic) still
    /// end pixel-perfect. Mid-run overshoot past [0, 1] is preserved.
    pub fn curve_point(&self, elapsed_ms: f64) -> Coordinate {
        let d = self.duration_ms as f64;
        if elapsed_ms >= d {
            return Coordinate::new(1.0, 1.0);
        }
        let delta = (self.to - self.from).abs();
        let value = (self.easing.f)(elapsed_ms, self.from, delta, d);
        Coordinate::new(elapsed_ms / d, value / self.to)
    }

    /// Frame-rate-independent reference polyline: one sample per integer
    /// millisecond from 1 to the duration, prefixed with the start point.
    /// The final sample lands on the terminal guard, exactly (1, 1).
    ///
    /// Computed once per run and shared unchanged with every consumer.
    pub fn optimal_curve(&self) -> Arc<[Coordinate]> {
        let mut points = Vec::with_capacity(self.duration_ms as usize + 1);
        points.push(Coordinate::new(0.0, self.from / self.to));
        for ms in 1..=self.duration_ms {
            points.push(self.curve_point(ms as f64));
        }
        points.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing;

    fn options(name: &str, duration_ms: u64) -> AnimationOptions {
        AnimationOptions::new(
            Easing::by_name(name).expect("catalogue entry"),
            0.0,
            100.0,
            duration_ms,
        )
    }

    #[test]
    fn start_point_is_normalized_origin() {
        let opts = options("easeOutBounce", 1000);
        assert_eq!(opts.curve_point(0.0), Coordinate::new(0.0, 0.0));

        let shifted = AnimationOptions::new(easing::Easing::ALL[0], 25.0, 100.0, 1000);
        let c = shifted.curve_point(0.0);
        assert_eq!(c.x, 0.0);
        assert!((c.y - 0.25).abs() < 1e-12);
    }

    #[test]
    fn terminal_point_is_exact_for_inexact_easings() {
        for name in ["easeOutBounce", "easeInElastic", "easeInOutBounce"] {
            let opts = options(name, 1000);
            assert_eq!(opts.curve_point(1000.0), Coordinate::new(1.0, 1.0), "{name}");
            assert_eq!(opts.curve_point(1234.5), Coordinate::new(1.0, 1.0), "{name}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let opts = options("easeInOutCubic", 700);
        for elapsed in [0.0, 1.5, 350.0, 699.9] {
            assert_eq!(opts.curve_point(elapsed), opts.curve_point(elapsed));
        }
    }

    #[test]
    fn overshoot_is_preserved_not_clamped() {
        let elastic = options("easeOutElastic", 1000);
        let overshoots = (1..1000).any(|ms| elastic.curve_point(ms as f64).y > 1.0);
        assert!(overshoots, "elastic-out never left [0, 1]");

        let back = options("easeInBack", 1000);
        let undershoots = (1..1000).any(|ms| back.curve_point(ms as f64).y < 0.0);
        assert!(undershoots, "back-in never dipped below 0");
    }

    #[test]
    fn optimal_curve_samples_every_millisecond() {
        let opts = options("easeOutBounce", 1000);
        let curve = opts.optimal_curve();
        assert_eq!(curve.len(), 1001);
        assert_eq!(curve[0], Coordinate::new(0.0, 0.0));
        assert_eq!(curve[curve.len() - 1], Coordinate::new(1.0, 1.0));
        for pair in curve.windows(2) {
            assert!(pair[0].x < pair[1].x, "x must be strictly increasing");
        }
    }

    #[test]
    fn optimal_curve_is_independent_of_duration_scale() {
        // same easing at two durations: equal x fractions give equal y
        let short = options("easeInQuad", 500);
        let long = options("easeInQuad", 1000);
        let c_short = short.curve_point(250.0);
        let c_long = long.curve_point(500.0);
        assert!((c_short.x - c_long.x).abs() < 1e-12);
        assert!((c_short.y - c_long.y).abs() < 1e-12);
    }
}
