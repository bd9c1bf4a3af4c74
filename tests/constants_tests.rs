// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod tile {
    include!("../src/core/tile.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}
mod intro {
    include!("../src/core/intro.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_are_ordered() {
    assert!(TABLET_MIN_WIDTH_PX > 0.0);
    assert!(DESKTOP_MIN_WIDTH_PX > TABLET_MIN_WIDTH_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smaller_screens_get_larger_tiles_and_smaller_images() {
    // More whitespace per item as the viewport shrinks.
    assert!(TILE_SCALE_MOBILE > TILE_SCALE_TABLET);
    assert!(TILE_SCALE_TABLET > TILE_SCALE_DESKTOP);
    // A tile below 2x the viewport would need edge clones again.
    assert!(TILE_SCALE_DESKTOP >= 2.0);

    assert!(MAX_IMAGE_PX_MOBILE < MAX_IMAGE_PX_TABLET);
    assert!(MAX_IMAGE_PX_TABLET < MAX_IMAGE_PX_DESKTOP);

    // The modal compensates: more of the small viewport is used.
    assert!(MODAL_FRACTION_MOBILE > MODAL_FRACTION_TABLET);
    assert!(MODAL_FRACTION_TABLET > MODAL_FRACTION_DESKTOP);
    for fraction in [
        MODAL_FRACTION_MOBILE,
        MODAL_FRACTION_TABLET,
        MODAL_FRACTION_DESKTOP,
    ] {
        assert!(fraction > 0.0 && fraction <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn modal_timing_is_positive_and_close_is_snappier() {
    assert!(MODAL_OPEN_DURATION > 0.0);
    assert!(MODAL_CLOSE_DURATION > 0.0);
    assert!(MODAL_OVERLAY_DURATION > 0.0);
    assert!(MODAL_CLOSE_DURATION <= MODAL_OPEN_DURATION);
    assert!(MODAL_OVERLAY_ALPHA > 0.0 && MODAL_OVERLAY_ALPHA < 1.0);
    assert!(MODAL_LINK_INSET_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_reasonable() {
    assert!(CLICK_MAX_TRAVEL_PX > 0.0);
    assert!(CLICK_MAX_DURATION > 0.0);
    // A click must resolve well before a deliberate drag would.
    assert!(CLICK_MAX_DURATION < 1.0);
    assert!(RESIZE_DEBOUNCE > 0.0);
    assert!(!INTRO_SEEN_KEY.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_decay_to_a_stop() {
    assert!(camera::FRICTION > 0.0 && camera::FRICTION < 1.0);
    assert!(camera::VELOCITY_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tile_constants_are_consistent() {
    assert!(tile::PARALLAX_MIN > 0.0);
    assert!(tile::PARALLAX_MAX > tile::PARALLAX_MIN);
    // Jitter must stay inside its cell or cells could collide.
    assert!(tile::CELL_JITTER_BAND > 0.0 && tile::CELL_JITTER_BAND < 1.0);
    assert!(tile::PULSE_GAIN > 0.0 && tile::PULSE_GAIN < 0.1);
    assert!(tile::PULSE_SPEED_NORM > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_constants_are_consistent() {
    assert!(reveal::MAX_OFFSET_VH > 0.0);
    assert!(reveal::SCROLL_SENSITIVITY > 0.0 && reveal::SCROLL_SENSITIVITY < 1.0);
    assert!(reveal::RESISTANCE_CAP > 0.0 && reveal::RESISTANCE_CAP < 1.0);
    assert!(reveal::RESISTANCE_EXPONENT >= 1.0);
    assert!(reveal::SNAP_DURATION > 0.0);
    assert!(reveal::SNAP_COOLDOWN > 0.0);
    // The idle snap must not race a deliberate scroll pause.
    assert!(reveal::IDLE_SNAP_DELAY > reveal::SNAP_DURATION);
    assert!(reveal::SHADOW_MAX_OPACITY > 0.0 && reveal::SHADOW_MAX_OPACITY < 1.0);
    assert!(reveal::CENTER_EPSILON_VH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intro_constants_are_consistent() {
    assert!(intro::FLASH_DELAY >= 0.0);
    assert!(intro::FLASH_FADE_DURATION > 0.0);
    assert!(intro::OUTRO_FADE_DURATION > 0.0);
    assert!(intro::APPEAR_DURATION > intro::APPEAR_DURATION_REDUCED);
    assert!(intro::HOLD_DURATION > intro::HOLD_DURATION_REDUCED);
    assert!(intro::DISPERSE_DURATION > intro::DISPERSE_DURATION_REDUCED);
    assert!(intro::APPEAR_RISE_PX > 0.0);
    assert!(intro::INTRO_VIEWPORT_FRACTION > 0.0 && intro::INTRO_VIEWPORT_FRACTION <= 1.0);
}
