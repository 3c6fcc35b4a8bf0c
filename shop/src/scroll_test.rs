#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn geometry(scroll_y: f64) -> ScrollGeometry {
    ScrollGeometry { scroll_y, viewport_height: 800.0, section_top: 1000.0, section_height: 600.0 }
}

fn applied(update: ScrollUpdate) -> VideoTransform {
    match update {
        ScrollUpdate::Apply(t) => t,
        other => panic!("expected Apply, got {other:?}"),
    }
}

// =============================================================
// progress
// =============================================================

#[test]
fn progress_zero_at_section_top() {
    assert_eq!(geometry(1000.0).progress(), 0.0);
}

#[test]
fn progress_half_viewport_past_top() {
    assert!(approx_eq(geometry(1400.0).progress(), 0.5));
}

#[test]
fn progress_clamps_to_one() {
    assert_eq!(geometry(5000.0).progress(), 1.0);
}

#[test]
fn progress_clamps_to_zero_above() {
    assert_eq!(geometry(0.0).progress(), 0.0);
}

#[test]
fn progress_zero_for_degenerate_viewport() {
    let g = ScrollGeometry { viewport_height: 0.0, ..geometry(2000.0) };
    assert_eq!(g.progress(), 0.0);
}

// =============================================================
// VideoTransform
// =============================================================

#[test]
fn transform_at_zero_is_identity() {
    assert_eq!(VideoTransform::at_progress(0.0), VideoTransform::IDENTITY);
}

#[test]
fn transform_at_one_hits_bounds() {
    let t = VideoTransform::at_progress(1.0);
    assert!(approx_eq(t.scale, 0.4));
    assert!(approx_eq(t.opacity, 0.8));
    assert!(approx_eq(t.radius_px, 20.0));
}

#[test]
fn transform_is_linear_at_midpoint() {
    let t = VideoTransform::at_progress(0.5);
    assert!(approx_eq(t.scale, 0.7));
    assert!(approx_eq(t.opacity, 0.9));
    assert!(approx_eq(t.radius_px, 10.0));
}

#[test]
fn transform_stays_in_bounds_for_out_of_range_progress() {
    for p in [-3.0, -0.1, 1.1, 42.0] {
        let t = VideoTransform::at_progress(p);
        assert!((0.4..=1.0).contains(&t.scale), "scale {} at {p}", t.scale);
        assert!((0.8..=1.0).contains(&t.opacity), "opacity {} at {p}", t.opacity);
        assert!((0.0..=20.0).contains(&t.radius_px), "radius {} at {p}", t.radius_px);
    }
}

#[test]
fn css_values() {
    let t = VideoTransform { scale: 0.5, opacity: 0.9, radius_px: 12.5 };
    assert_eq!(t.css_transform(), "scale(0.5)");
    assert_eq!(t.css_opacity(), "0.9");
    assert_eq!(t.css_radius(), "12.5px");
    assert_eq!(VideoTransform::IDENTITY.css_transform(), "scale(1)");
    assert_eq!(VideoTransform::IDENTITY.css_radius(), "0px");
}

// =============================================================
// ScrollUpdate
// =============================================================

#[test]
fn above_section_resets() {
    assert_eq!(ScrollUpdate::for_geometry(&geometry(999.0)), ScrollUpdate::Reset);
}

#[test]
fn at_section_top_applies_identity() {
    assert_eq!(applied(ScrollUpdate::for_geometry(&geometry(1000.0))), VideoTransform::IDENTITY);
}

#[test]
fn inside_section_applies_scaled() {
    let t = applied(ScrollUpdate::for_geometry(&geometry(1200.0)));
    assert!(approx_eq(t.scale, 1.0 - 0.25 * 0.6));
}

#[test]
fn window_extends_one_viewport_past_bottom() {
    // bottom = 1600, window end = 2400
    let t = applied(ScrollUpdate::for_geometry(&geometry(2400.0)));
    assert!(approx_eq(t.scale, 0.4));
}

#[test]
fn past_window_is_unchanged() {
    assert_eq!(ScrollUpdate::for_geometry(&geometry(2400.5)), ScrollUpdate::Unchanged);
}

// =============================================================
// Playback
// =============================================================

#[test]
fn playback_follows_visibility() {
    assert_eq!(Playback::for_visibility(true), Playback::Play);
    assert_eq!(Playback::for_visibility(false), Playback::Pause);
}
