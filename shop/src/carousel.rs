//! Carousel index state machine for the "why choose us" strip.
//!
//! The strip holds `total` slides and shows `per_view` of them at once. The
//! index is the first visible slide and always stays in `0..=max_index`,
//! where `max_index = total - per_view` (or 0 when everything fits).
//!
//! [`SwipeTracker`] turns a touch start/end pair into a next/prev intent.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{NARROW_ITEMS_PER_VIEW, SWIPE_THRESHOLD_PX, WIDE_ITEMS_PER_VIEW, WIDE_VIEWPORT_PX};

/// Slides visible at once for a viewport width in CSS pixels.
#[must_use]
pub fn items_per_view(viewport_width: f64) -> usize {
    if viewport_width >= WIDE_VIEWPORT_PX { WIDE_ITEMS_PER_VIEW } else { NARROW_ITEMS_PER_VIEW }
}

/// Current position of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    per_view: usize,
    index: usize,
}

impl Carousel {
    /// A carousel at index 0. `per_view` is raised to at least 1.
    #[must_use]
    pub fn new(total: usize, per_view: usize) -> Self {
        Self { total, per_view: per_view.max(1), index: 0 }
    }

    // --- Queries ---

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Largest valid index.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.per_view)
    }

    /// Horizontal track offset as a percentage (negative moves left).
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // slide counts are tiny
    pub fn offset_percent(&self) -> f64 {
        0.0 - self.index as f64 * (100.0 / self.per_view as f64)
    }

    /// CSS `transform` for the track.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// Whether the "previous" button should be disabled.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    /// Whether the "next" button should be disabled.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.index >= self.max_index()
    }

    /// Number of page dots.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.total.div_ceil(self.per_view)
    }

    /// Index of the highlighted dot.
    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.index / self.per_view
    }

    /// Slide index a dot jumps to.
    #[must_use]
    pub fn dot_target(&self, dot: usize) -> usize {
        dot.saturating_mul(self.per_view)
    }

    // --- Transitions ---
    //
    // Each returns whether the index moved.

    /// Advance by one; no-op at the end.
    pub fn next_slide(&mut self) -> bool {
        if self.index < self.max_index() {
            self.index += 1;
            return true;
        }
        false
    }

    /// Go back by one; no-op at the start.
    pub fn prev_slide(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            return true;
        }
        false
    }

    /// Jump to `index`, clamped into range.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.max_index());
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Timer tick: advance, wrapping to the start after the last position.
    pub fn auto_advance(&mut self) -> bool {
        if self.at_end() { self.go_to(0) } else { self.next_slide() }
    }

    /// Apply a new items-per-view.
    ///
    /// When the value changes the index resets to 0 and `true` is returned so
    /// the caller can rebuild the dots.
    pub fn resize(&mut self, per_view: usize) -> bool {
        let per_view = per_view.max(1);
        if per_view == self.per_view {
            return false;
        }
        self.per_view = per_view;
        self.index = 0;
        true
    }
}

/// Direction requested by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Prev,
}

/// Tracks one touch gesture on the track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    dragging: bool,
}

impl SwipeTracker {
    /// Touch started at `x`.
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.dragging = true;
    }

    /// Whether a touch is in progress (touch-move should be swallowed).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Abandon the gesture without producing a swipe.
    pub fn cancel(&mut self) {
        self.dragging = false;
    }

    /// Touch ended at `x`. Returns a swipe if the travel beat the threshold.
    ///
    /// Returns `None` without a matching [`begin`](Self::begin).
    pub fn end(&mut self, x: f64) -> Option<Swipe> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;

        let diff = self.start_x - x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            None
        } else if diff > 0.0 {
            Some(Swipe::Next)
        } else {
            Some(Swipe::Prev)
        }
    }
}
