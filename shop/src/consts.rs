//! Shared numeric constants for the shop crate.

// ── Cart ────────────────────────────────────────────────────────

/// Upper bound for a single line item's quantity.
pub const MAX_QUANTITY: u32 = 99;

/// Size label used when a product card offers no size options.
pub const DEFAULT_SIZE: &str = "40";

/// Color key used when a product card offers no color options.
pub const DEFAULT_COLOR: &str = "default";

/// Product name used when a card has no heading.
pub const UNKNOWN_PRODUCT: &str = "Unknown Shoe";

/// How long button feedback ("added", "cleared") stays visible, in milliseconds.
pub const FEEDBACK_MS: u32 = 1500;

/// Background color flashed on buttons while feedback is visible.
pub const FEEDBACK_BACKGROUND: &str = "#10b981";

// ── Scroll effect ───────────────────────────────────────────────

/// Smallest scale the video container shrinks to.
pub const MIN_VIDEO_SCALE: f64 = 0.4;

/// Smallest opacity the video container fades to.
pub const MIN_VIDEO_OPACITY: f64 = 0.8;

/// Border radius at full scroll progress, in CSS pixels.
pub const MAX_VIDEO_RADIUS_PX: f64 = 20.0;

/// Fraction of the video section that must be visible before playback starts.
pub const VIDEO_VISIBILITY_THRESHOLD: f64 = 0.3;

// ── Carousel ────────────────────────────────────────────────────

/// Viewport width (CSS pixels) at and above which two slides are shown.
pub const WIDE_VIEWPORT_PX: f64 = 768.0;

/// Slides visible on wide viewports.
pub const WIDE_ITEMS_PER_VIEW: usize = 2;

/// Slides visible on narrow viewports.
pub const NARROW_ITEMS_PER_VIEW: usize = 1;

/// Auto-advance period in milliseconds.
pub const AUTO_ADVANCE_MS: u32 = 5000;

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
