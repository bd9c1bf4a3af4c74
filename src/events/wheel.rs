use crate::core::intro::Loader;
use crate::core::reveal::{RevealPanel, ScrollDir};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct WheelWiring {
    pub loader: Rc<RefCell<Loader>>,
    /// Present only when the panel reveal is active (desktop, section found).
    pub reveal: Option<Rc<RefCell<RevealPanel>>>,
}

/// Wheel input serves two masters: while the loader is up it dismisses the
/// intro, afterwards it drives the panel reveal. Wheel-down raises the
/// panel (revealing the content below), wheel-up lowers it.
pub fn wire_wheel(w: WheelWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        {
            let mut loader = w.loader.borrow_mut();
            if !loader.done() {
                loader.trigger_outro();
                return;
            }
        }
        if let Some(reveal) = &w.reveal {
            let delta = ev.delta_y();
            if delta == 0.0 {
                return;
            }
            let dir = if delta > 0.0 {
                ScrollDir::Up
            } else {
                ScrollDir::Down
            };
            reveal.borrow_mut().scroll(dir);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
