//! Scroll-driven shrink effect for the hero video.
//!
//! As the page scrolls through the video section, the container scales from
//! full size down to [`MIN_VIDEO_SCALE`], fades slightly and gains rounded
//! corners. Progress is measured in viewport heights past the section top.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{MAX_VIDEO_RADIUS_PX, MIN_VIDEO_OPACITY, MIN_VIDEO_SCALE};

/// Scroll position and section geometry, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Window vertical scroll offset.
    pub scroll_y: f64,
    /// Window inner height.
    pub viewport_height: f64,
    /// Section offset from the document top.
    pub section_top: f64,
    /// Section height.
    pub section_height: f64,
}

impl ScrollGeometry {
    /// Fraction of one viewport height scrolled past the section top, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        ((self.scroll_y - self.section_top) / self.viewport_height).clamp(0.0, 1.0)
    }

    fn section_bottom(&self) -> f64 {
        self.section_top + self.section_height
    }
}

/// Visual state applied to the video container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoTransform {
    pub scale: f64,
    pub opacity: f64,
    pub radius_px: f64,
}

impl VideoTransform {
    /// Full size, fully opaque, square corners.
    pub const IDENTITY: Self = Self { scale: 1.0, opacity: 1.0, radius_px: 0.0 };

    /// Transform for a given scroll progress in `[0, 1]`.
    #[must_use]
    pub fn at_progress(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            scale: (1.0 - p * (1.0 - MIN_VIDEO_SCALE)).max(MIN_VIDEO_SCALE),
            opacity: (1.0 - p * (1.0 - MIN_VIDEO_OPACITY)).max(MIN_VIDEO_OPACITY),
            radius_px: p * MAX_VIDEO_RADIUS_PX,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// CSS `opacity` value.
    #[must_use]
    pub fn css_opacity(&self) -> String {
        self.opacity.to_string()
    }

    /// CSS `border-radius` value.
    #[must_use]
    pub fn css_radius(&self) -> String {
        format!("{}px", self.radius_px)
    }
}

/// What a scroll event should do to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    /// Inside the effect window: apply this transform.
    Apply(VideoTransform),
    /// Above the section: restore [`VideoTransform::IDENTITY`].
    Reset,
    /// Well past the section: keep whatever was applied last.
    Unchanged,
}

impl ScrollUpdate {
    /// Decide the update for the current geometry.
    ///
    /// The effect window runs from the section top to one viewport height
    /// past the section bottom.
    #[must_use]
    pub fn for_geometry(geometry: &ScrollGeometry) -> Self {
        let y = geometry.scroll_y;
        if y >= geometry.section_top && y <= geometry.section_bottom() + geometry.viewport_height {
            Self::Apply(VideoTransform::at_progress(geometry.progress()))
        } else if y < geometry.section_top {
            Self::Reset
        } else {
            Self::Unchanged
        }
    }
}

/// Whether the section video should be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Play,
    Pause,
}

impl Playback {
    /// Map an intersection-observer visibility flag to a playback intent.
    #[must_use]
    pub fn for_visibility(is_intersecting: bool) -> Self {
        if is_intersecting { Self::Play } else { Self::Pause }
    }
}
