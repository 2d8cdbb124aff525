use easescope::{AnimationOptions, Easing};

fn options(name: &str, duration_ms: u64) -> AnimationOptions {
    AnimationOptions::new(Easing::by_name(name).unwrap(), 0.0, 100.0, duration_ms)
}

#[test]
fn linear_curve_is_the_diagonal() {
    let opts = options("linear", 1000);
    for ms in [0.0, 250.0, 500.0, 750.0] {
        let c = opts.curve_point(ms);
        assert!((c.x - ms / 1000.0).abs() < 1e-12);
        assert!((c.y - ms / 1000.0).abs() < 1e-12);
    }
}

#[test]
fn every_easing_starts_at_the_origin() {
    for e in Easing::ALL {
        let opts = AnimationOptions::new(*e, 0.0, 100.0, 800);
        let c = opts.curve_point(0.0);
        assert!(c.x.abs() < 1e-9, "{} x={}", e.name, c.x);
        assert!(c.y.abs() < 1e-9, "{} y={}", e.name, c.y);
    }
}

#[test]
fn every_easing_ends_exactly_at_one_one() {
    for e in Easing::ALL {
        let opts = AnimationOptions::new(*e, 0.0, 100.0, 800);
        // at or past the duration the terminal point is exact, not eased
        assert_eq!(opts.curve_point(800.0).x, 1.0, "{}", e.name);
        assert_eq!(opts.curve_point(800.0).y, 1.0, "{}", e.name);
        assert_eq!(opts.curve_point(950.0).y, 1.0, "{}", e.name);
    }
}

#[test]
fn nonzero_from_offsets_the_start() {
    let opts = AnimationOptions::new(Easing::by_name("linear").unwrap(), 50.0, 100.0, 1000);
    let c = opts.curve_point(0.0);
    assert!((c.y - 0.5).abs() < 1e-12);
    // and the end is still exactly 1
    assert_eq!(opts.curve_point(1000.0).y, 1.0);
}

#[test]
fn elastic_overshoots_and_back_undershoots() {
    let out_back = options("easeOutBack", 1000);
    assert!(out_back.curve_point(700.0).y > 1.0);

    let in_back = options("easeInBack", 1000);
    assert!(in_back.curve_point(300.0).y < 0.0);

    let out_elastic = options("easeOutElastic", 1000);
    let overshoot = (1..1000)
        .map(|ms| out_elastic.curve_point(ms as f64).y)
        .fold(f64::MIN, f64::max);
    assert!(overshoot > 1.0);
}

#[test]
fn optimal_curve_samples_every_millisecond() {
    let opts = options("easeInQuad", 250);
    let curve = opts.optimal_curve();
    assert_eq!(curve.len(), 251);
    for (i, c) in curve.iter().enumerate() {
        assert!((c.x - i as f64 / 250.0).abs() < 1e-12, "sample {i}");
    }
    assert_eq!(curve[0].y, 0.0);
    assert_eq!(curve[250].x, 1.0);
    assert_eq!(curve[250].y, 1.0);
}

#[test]
fn optimal_curve_prefix_reflects_from() {
    let opts = AnimationOptions::new(Easing::by_name("easeOutQuad").unwrap(), 25.0, 100.0, 100);
    let curve = opts.optimal_curve();
    assert!((curve[0].y - 0.25).abs() < 1e-12);
}

#[test]
fn optimal_curve_is_deterministic() {
    let opts = options("easeInOutElastic", 500);
    let a = opts.optimal_curve();
    let b = opts.optimal_curve();
    assert_eq!(a.as_ref(), b.as_ref());
}
