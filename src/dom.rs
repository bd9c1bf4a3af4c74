use crate::constants::{
    DESKTOP_MIN_WIDTH_PX, INTRO_SEEN_KEY, MAX_IMAGE_PX_DESKTOP, MAX_IMAGE_PX_MOBILE,
    MAX_IMAGE_PX_TABLET, MODAL_FRACTION_DESKTOP, MODAL_FRACTION_MOBILE, MODAL_FRACTION_TABLET,
    TABLET_MIN_WIDTH_PX, TILE_SCALE_DESKTOP, TILE_SCALE_MOBILE, TILE_SCALE_TABLET,
};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels; falls back to 1x1 so layout math stays sane.
pub fn viewport_size() -> Vec2 {
    let Some(window) = web::window() else {
        return Vec2::ONE;
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Vec2::new(w.max(1.0) as f32, h.max(1.0) as f32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f32) -> Self {
        if width < TABLET_MIN_WIDTH_PX {
            Breakpoint::Mobile
        } else if width < DESKTOP_MIN_WIDTH_PX {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn current() -> Self {
        Self::from_width(viewport_size().x)
    }

    pub fn tile_scale(self) -> f32 {
        match self {
            Breakpoint::Mobile => TILE_SCALE_MOBILE,
            Breakpoint::Tablet => TILE_SCALE_TABLET,
            Breakpoint::Desktop => TILE_SCALE_DESKTOP,
        }
    }

    pub fn max_image_px(self) -> f32 {
        match self {
            Breakpoint::Mobile => MAX_IMAGE_PX_MOBILE,
            Breakpoint::Tablet => MAX_IMAGE_PX_TABLET,
            Breakpoint::Desktop => MAX_IMAGE_PX_DESKTOP,
        }
    }

    pub fn modal_fraction(self) -> f32 {
        match self {
            Breakpoint::Mobile => MODAL_FRACTION_MOBILE,
            Breakpoint::Tablet => MODAL_FRACTION_TABLET,
            Breakpoint::Desktop => MODAL_FRACTION_DESKTOP,
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Whether this session already played the intro loader. Absence of
/// session storage degrades to always playing it.
pub fn intro_seen() -> bool {
    web::window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .and_then(|s| s.get_item(INTRO_SEEN_KEY).ok())
        .flatten()
        .is_some()
}

pub fn mark_intro_seen() {
    if let Some(storage) = web::window().and_then(|w| w.session_storage().ok()).flatten() {
        _ = storage.set_item(INTRO_SEEN_KEY, "1");
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    set_style(el, "display", "none");
}

/// Attach a listener that stays alive for the page's lifetime.
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The reveal panel moves the page itself, so the native scrollbar would
/// only add a fighting offset; lock it.
pub fn lock_vertical_scroll(document: &web::Document) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow-y", "hidden");
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, "overflow-y", "hidden");
    }
}
