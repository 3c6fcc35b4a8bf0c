#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// items_per_view
// =============================================================

#[test]
fn narrow_viewport_shows_one() {
    assert_eq!(items_per_view(375.0), 1);
    assert_eq!(items_per_view(767.9), 1);
}

#[test]
fn wide_viewport_shows_two() {
    assert_eq!(items_per_view(768.0), 2);
    assert_eq!(items_per_view(1920.0), 2);
}

// =============================================================
// Construction and derived values
// =============================================================

#[test]
fn new_starts_at_zero() {
    let c = Carousel::new(6, 2);
    assert_eq!(c.index(), 0);
    assert_eq!(c.max_index(), 4);
    assert!(c.at_start());
    assert!(!c.at_end());
}

#[test]
fn zero_per_view_is_raised_to_one() {
    let c = Carousel::new(3, 0);
    assert_eq!(c.per_view(), 1);
    assert_eq!(c.max_index(), 2);
}

#[test]
fn fewer_items_than_per_view_has_zero_max() {
    let c = Carousel::new(1, 2);
    assert_eq!(c.max_index(), 0);
    assert!(c.at_start());
    assert!(c.at_end());
}

#[test]
fn empty_carousel_is_stuck_at_zero() {
    let mut c = Carousel::new(0, 1);
    assert!(!c.next_slide());
    assert!(!c.prev_slide());
    assert!(!c.auto_advance());
    assert_eq!(c.index(), 0);
    assert_eq!(c.dot_count(), 0);
}

#[test]
fn offset_moves_by_slide_width() {
    let mut c = Carousel::new(6, 2);
    assert_eq!(c.offset_percent(), 0.0);
    assert_eq!(c.css_transform(), "translateX(0%)");
    c.next_slide();
    assert_eq!(c.offset_percent(), -50.0);
    c.next_slide();
    assert_eq!(c.css_transform(), "translateX(-100%)");
}

#[test]
fn offset_single_per_view() {
    let mut c = Carousel::new(4, 1);
    c.go_to(3);
    assert_eq!(c.offset_percent(), -300.0);
}

#[test]
fn dots_cover_all_items() {
    assert_eq!(Carousel::new(6, 2).dot_count(), 3);
    assert_eq!(Carousel::new(5, 2).dot_count(), 3);
    assert_eq!(Carousel::new(5, 1).dot_count(), 5);
}

#[test]
fn active_dot_tracks_index() {
    let mut c = Carousel::new(6, 2);
    assert_eq!(c.active_dot(), 0);
    c.next_slide();
    assert_eq!(c.active_dot(), 0);
    c.next_slide();
    assert_eq!(c.active_dot(), 1);
}

#[test]
fn dot_target_is_page_start() {
    let c = Carousel::new(6, 2);
    assert_eq!(c.dot_target(0), 0);
    assert_eq!(c.dot_target(2), 4);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn next_stops_at_max() {
    let mut c = Carousel::new(3, 1);
    assert!(c.next_slide());
    assert!(c.next_slide());
    assert!(!c.next_slide());
    assert_eq!(c.index(), 2);
    assert!(c.at_end());
}

#[test]
fn prev_stops_at_zero() {
    let mut c = Carousel::new(3, 1);
    assert!(!c.prev_slide());
    c.next_slide();
    assert!(c.prev_slide());
    assert_eq!(c.index(), 0);
}

#[test]
fn go_to_clamps() {
    let mut c = Carousel::new(6, 2);
    assert!(c.go_to(100));
    assert_eq!(c.index(), 4);
    assert!(!c.go_to(4));
    assert!(c.go_to(1));
    assert_eq!(c.index(), 1);
}

#[test]
fn last_dot_target_clamps_to_max() {
    let mut c = Carousel::new(5, 2);
    let target = c.dot_target(c.dot_count() - 1);
    assert_eq!(target, 4);
    c.go_to(target);
    assert_eq!(c.index(), 3);
}

#[test]
fn auto_advance_wraps() {
    let mut c = Carousel::new(3, 1);
    assert!(c.auto_advance());
    assert!(c.auto_advance());
    assert_eq!(c.index(), 2);
    assert!(c.auto_advance());
    assert_eq!(c.index(), 0);
}

#[test]
fn auto_advance_single_page_never_moves() {
    let mut c = Carousel::new(2, 2);
    assert!(!c.auto_advance());
    assert_eq!(c.index(), 0);
}

#[test]
fn resize_resets_index_when_changed() {
    let mut c = Carousel::new(6, 1);
    c.go_to(5);
    assert!(c.resize(2));
    assert_eq!(c.index(), 0);
    assert_eq!(c.max_index(), 4);
}

#[test]
fn resize_same_value_keeps_index() {
    let mut c = Carousel::new(6, 2);
    c.go_to(3);
    assert!(!c.resize(2));
    assert_eq!(c.index(), 3);
}

#[test]
fn resize_recomputes_max_index() {
    let mut c = Carousel::new(6, 2);
    c.resize(1);
    c.go_to(100);
    assert_eq!(c.index(), 5);
}

#[test]
fn index_stays_in_bounds_under_mixed_sequence() {
    let mut c = Carousel::new(7, 2);
    let ops: [fn(&mut Carousel); 6] = [
        |c| {
            c.next_slide();
        },
        |c| {
            c.prev_slide();
        },
        |c| {
            c.go_to(usize::MAX);
        },
        |c| {
            c.auto_advance();
        },
        |c| {
            c.resize(1);
        },
        |c| {
            c.resize(2);
        },
    ];

    // Deterministic walk through every op in varying order.
    for step in 0..500usize {
        let op = ops[(step * 7 + step / 3) % ops.len()];
        op(&mut c);
        assert!(c.index() <= c.total().saturating_sub(c.per_view()), "step {step}: {c:?}");
    }
}

// =============================================================
// SwipeTracker
// =============================================================

#[test]
fn swipe_left_is_next() {
    let mut t = SwipeTracker::default();
    t.begin(300.0);
    assert!(t.is_dragging());
    assert_eq!(t.end(200.0), Some(Swipe::Next));
    assert!(!t.is_dragging());
}

#[test]
fn swipe_right_is_prev() {
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    assert_eq!(t.end(200.0), Some(Swipe::Prev));
}

#[test]
fn short_swipe_is_ignored() {
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    assert_eq!(t.end(150.0), None);
    t.begin(100.0);
    assert_eq!(t.end(50.0), None);
}

#[test]
fn end_without_begin_is_ignored() {
    let mut t = SwipeTracker::default();
    assert_eq!(t.end(0.0), None);
    t.begin(500.0);
    t.end(0.0);
    assert_eq!(t.end(0.0), None);
}

#[test]
fn cancel_drops_the_gesture() {
    let mut t = SwipeTracker::default();
    t.begin(400.0);
    t.cancel();
    assert!(!t.is_dragging());
    assert_eq!(t.end(0.0), None);
}
