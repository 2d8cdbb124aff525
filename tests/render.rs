use eframe::egui::{Align2, Color32};

use easescope::{
    AnimationOptions, Coordinate, Easing, GraphError, RenderOptions, Renderer, Screen, Segment,
    ThemeKind,
};

fn screen() -> Screen {
    Screen::new(200, 150, 20.0).unwrap()
}

fn renderer(kind: ThemeKind) -> Renderer {
    Renderer::new(
        kind.theme(),
        Color32::from_rgb(31, 119, 180),
        RenderOptions::default(),
    )
}

fn curve(points: &[(f64, f64)]) -> (Vec<Coordinate>, Vec<Segment>) {
    let pts: Vec<Coordinate> = points.iter().map(|&(x, y)| Coordinate::new(x, y)).collect();
    let segs = pts
        .windows(2)
        .map(|w| Segment { from: w[0], to: w[1] })
        .collect();
    (pts, segs)
}

fn pixel(s: &Screen, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * s.width() + x) * 4) as usize;
    let d = s.front.data();
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

fn anim() -> AnimationOptions {
    AnimationOptions::new(Easing::by_name("linear").unwrap(), 0.0, 100.0, 1000)
}

#[test]
fn backgrounds_match_the_theme() {
    for kind in ThemeKind::ALL {
        let mut s = screen();
        let r = renderer(*kind);
        r.base_pass(&mut s, &[], &[], None).unwrap();
        let bg = kind.theme().background;
        assert_eq!(
            pixel(&s, 2, 2),
            [bg.r(), bg.g(), bg.b(), 255],
            "{}",
            kind.label()
        );
    }
}

#[test]
fn marker_lands_on_the_mapped_pixel() {
    let mut s = screen();
    let r = renderer(ThemeKind::Dark);
    let (pts, segs) = curve(&[(0.5, 0.5)]);
    r.base_pass(&mut s, &pts, &segs, None).unwrap();

    // (0.5, 0.5) in a 200x150 surface with margin 20 is pixel (100, 75)
    let marker = ThemeKind::Dark.theme().marker;
    assert_eq!(pixel(&s, 100, 75), [marker.r(), marker.g(), marker.b(), 255]);
}

#[test]
fn failed_pass_recovers_on_the_next_good_one() {
    let mut s = screen();
    let r = renderer(ThemeKind::Dark);

    r.base_pass(&mut s, &[], &[], None).unwrap();
    let blank = s.front.data().to_vec();

    let (bad, segs) = curve(&[(0.2, 0.2), (f64::NAN, 0.5)]);
    let err = r.base_pass(&mut s, &bad, &segs, None).unwrap_err();
    assert!(matches!(err, GraphError::NonFinite { .. }));
    assert_eq!(s.front.data(), &blank[..], "failure restores the last good frame");

    let (good, segs) = curve(&[(0.2, 0.2), (0.8, 0.8)]);
    r.base_pass(&mut s, &good, &segs, None).unwrap();
    assert_ne!(s.front.data(), &blank[..]);
    assert_eq!(s.front.data(), s.cache_data(), "recovery commits again");
}

#[test]
fn highlight_with_nothing_under_it_is_a_pure_restore() {
    let mut s = screen();
    let r = renderer(ThemeKind::Dark);
    let (pts, segs) = curve(&[(0.1, 0.1), (0.9, 0.9)]);
    r.base_pass(&mut s, &pts, &segs, None).unwrap();

    let labels = r.highlight_pass(&mut s, None, &anim()).unwrap();
    assert!(labels.is_empty());
    assert_eq!(s.front.data(), s.cache_data());

    // with a highlight the dashed hints show up on the front buffer only
    r.highlight_pass(&mut s, Some(Coordinate::new(0.5, 0.5)), &anim())
        .unwrap();
    assert_ne!(s.front.data(), s.cache_data());
}

#[test]
fn readout_denormalizes_and_flips_near_the_right_edge() {
    let mut s = screen();
    let r = renderer(ThemeKind::Dark);
    r.base_pass(&mut s, &[], &[], None).unwrap();

    let labels = r
        .highlight_pass(&mut s, Some(Coordinate::new(0.3, 0.5)), &anim())
        .unwrap();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "(300 ms, 50.00)");
    assert_eq!(labels[0].align, Align2::LEFT_BOTTOM);

    let labels = r
        .highlight_pass(&mut s, Some(Coordinate::new(0.96, 0.5)), &anim())
        .unwrap();
    assert_eq!(labels[0].text, "(960 ms, 50.00)");
    assert_eq!(labels[0].align, Align2::RIGHT_BOTTOM);
}

#[test]
fn non_finite_highlight_is_rejected_after_the_restore() {
    let mut s = screen();
    let r = renderer(ThemeKind::Dark);
    let (pts, segs) = curve(&[(0.1, 0.1), (0.9, 0.9)]);
    r.base_pass(&mut s, &pts, &segs, None).unwrap();

    let err = r
        .highlight_pass(&mut s, Some(Coordinate::new(f64::NAN, 0.5)), &anim())
        .unwrap_err();
    assert!(matches!(err, GraphError::NonFinite { .. }));
    // the front buffer is left on the cached base frame
    assert_eq!(s.front.data(), s.cache_data());
}
