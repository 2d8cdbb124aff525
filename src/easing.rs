//! Easing-function catalogue: the classic tweening formulas.
//!
//! Every function shares the signature `(t, b, c, d) -> value` where `t` is
//! the elapsed time, `b` the start value, `c` the value delta and `d` the
//! duration. `t` and `d` are in the same unit (milliseconds throughout this
//! crate). The [`Easing`] descriptor pairs a function with its display name;
//! [`Easing::ALL`] lists the whole catalogue in page order.

use std::f64::consts::PI;

/// Signature shared by all easing formulas: (elapsed, start, delta, duration).
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// A named easing function, as shown in the graph header.
#[derive(Copy, Clone)]
pub struct Easing {
    pub name: &'static str,
    pub f: EasingFn,
}

impl std::fmt::Debug for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Easing").field("name", &self.name).finish()
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Easing {
    /// The full catalogue, one graph per entry.
    pub const ALL: &'static [Easing] = &[
        Easing { name: "linear", f: linear },
        Easing { name: "easeInQuad", f: quad_in },
        Easing { name: "easeOutQuad", f: quad_out },
        Easing { name: "easeInOutQuad", f: quad_in_out },
        Easing { name: "easeInCubic", f: cubic_in },
        Easing { name: "easeOutCubic", f: cubic_out },
        Easing { name: "easeInOutCubic", f: cubic_in_out },
        Easing { name: "easeInQuart", f: quart_in },
        Easing { name: "easeOutQuart", f: quart_out },
        Easing { name: "easeInOutQuart", f: quart_in_out },
        Easing { name: "easeInQuint", f: quint_in },
        Easing { name: "easeOutQuint", f: quint_out },
        Easing { name: "easeInOutQuint", f: quint_in_out },
        Easing { name: "easeInSine", f: sine_in },
        Easing { name: "easeOutSine", f: sine_out },
        Easing { name: "easeInOutSine", f: sine_in_out },
        Easing { name: "easeInExpo", f: expo_in },
        Easing { name: "easeOutExpo", f: expo_out },
        Easing { name: "easeInOutExpo", f: expo_in_out },
        Easing { name: "easeInCirc", f: circ_in },
        Easing { name: "easeOutCirc", f: circ_out },
        Easing { name: "easeInOutCirc", f: circ_in_out },
        Easing { name: "easeInElastic", f: elastic_in },
        Easing { name: "easeOutElastic", f: elastic_out },
        Easing { name: "easeInOutElastic", f: elastic_in_out },
        Easing { name: "easeInBack", f: back_in },
        Easing { name: "easeOutBack", f: back_out },
        Easing { name: "easeInOutBack", f: back_in_out },
        Easing { name: "easeInBounce", f: bounce_in },
        Easing { name: "easeOutBounce", f: bounce_out },
        Easing { name: "easeInOutBounce", f: bounce_in_out },
    ];

    /// Look up a catalogue entry by its display name.
    pub fn by_name(name: &str) -> Option<Easing> {
        Self::ALL.iter().copied().find(|e| e.name == name)
    }
}

pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

pub fn quad_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

pub fn quad_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn quad_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

pub fn cubic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

pub fn cubic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn cubic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

pub fn quart_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t + b
}

pub fn quart_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

pub fn quart_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    t -= 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

pub fn quint_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t * t + b
}

pub fn quint_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

pub fn quint_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

pub fn sine_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

pub fn sine_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

pub fn sine_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

/// Exponential easings special-case the endpoints: 2^(-10) is small but not
/// zero, so the raw formula would miss `b` and `b + c`.
pub fn expo_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    c * 2f64.powf(10.0 * (t / d - 1.0)) + b
}

pub fn expo_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        return b + c;
    }
    c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
}

pub fn expo_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b;
    }
    t -= 1.0;
    c / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + b
}

pub fn circ_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

pub fn circ_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

pub fn circ_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    t -= 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

/// Damped spring: amplitude `c`, period 0.3*d, overshoots past the target.
pub fn elastic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let mut t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    t -= 1.0;
    -(c * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

pub fn elastic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

pub fn elastic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let mut t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    if t < 1.0 {
        t -= 1.0;
        return -0.5 * (c * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b;
    }
    t -= 1.0;
    c * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() * 0.5 + c + b
}

/// Overshoot constant 1.70158 gives the canonical 10% pull-back.
pub fn back_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = 1.70158;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

pub fn back_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = 1.70158;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

pub fn back_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = 1.70158 * 1.525;
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

pub fn bounce_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

/// Four parabolic arcs with 7.5625 curvature, each bounce 1/4 the height of
/// the previous one.
pub fn bounce_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        t -= 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

pub fn bounce_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}
