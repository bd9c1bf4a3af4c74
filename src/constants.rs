/// Presentation and interaction tuning constants.
///
/// These express intended behavior (breakpoint tables, animation timing,
/// gesture thresholds) and keep magic numbers out of the code.
// Responsive breakpoints (CSS pixels)
pub const TABLET_MIN_WIDTH_PX: f32 = 768.0;
pub const DESKTOP_MIN_WIDTH_PX: f32 = 1024.0;

// Logical tile size as a multiple of the viewport. Larger tiles on small
// screens keep whitespace between items instead of a wall of images.
pub const TILE_SCALE_DESKTOP: f32 = 2.0;
pub const TILE_SCALE_TABLET: f32 = 2.7;
pub const TILE_SCALE_MOBILE: f32 = 3.5;

// Bounding box for item images, per breakpoint (px)
pub const MAX_IMAGE_PX_DESKTOP: f32 = 400.0;
pub const MAX_IMAGE_PX_TABLET: f32 = 300.0;
pub const MAX_IMAGE_PX_MOBILE: f32 = 200.0;

// Fraction of the viewport the modal image may occupy, per breakpoint
pub const MODAL_FRACTION_DESKTOP: f32 = 0.7;
pub const MODAL_FRACTION_TABLET: f32 = 0.75;
pub const MODAL_FRACTION_MOBILE: f32 = 0.85;

// Modal transition timing
pub const MODAL_OPEN_DURATION: f32 = 0.6;
pub const MODAL_CLOSE_DURATION: f32 = 0.5;
pub const MODAL_OVERLAY_DURATION: f32 = 0.4;
pub const MODAL_OVERLAY_ALPHA: f32 = 0.75;

// Resource-link button inset from the modal image's top-right corner (px)
pub const MODAL_LINK_INSET_PX: f32 = 12.0;

// A press counts as a click (opens/closes the modal) only below both
// thresholds; anything longer or farther is a drag.
pub const CLICK_MAX_TRAVEL_PX: f32 = 8.0;
pub const CLICK_MAX_DURATION: f32 = 0.2;

// Window resizes are applied after this much quiet time (seconds)
pub const RESIZE_DEBOUNCE: f32 = 0.15;

// Session-storage key marking the intro loader as seen
pub const INTRO_SEEN_KEY: &str = "archive-intro-seen";
