use crate::constants::{CLICK_MAX_DURATION, CLICK_MAX_TRAVEL_PX};
use crate::core::camera::Camera;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Running state of the active pointer gesture.
pub struct GestureState {
    pub down: bool,
    pub last_client: Vec2,
    pub pressed_at: Instant,
    pub travelled: f32,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            down: false,
            last_client: Vec2::ZERO,
            pressed_at: Instant::now(),
            travelled: 0.0,
        }
    }
}

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<Camera>>,
    pub gesture: Rc<RefCell<GestureState>>,
    pub queued_click: Rc<RefCell<Option<Vec2>>>,
    pub interactions_enabled: Rc<RefCell<bool>>,
    pub reduced_motion: bool,
}

/// Wire the drag-gesture source: press/drag/release on the canvas, with
/// cumulative deltas fed to the camera and click-vs-drag discrimination.
pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position in canvas CSS pixels.
#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

fn set_cursor(canvas: &web::HtmlCanvasElement, value: &str) {
    _ = canvas.style().set_property("cursor", value);
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !*w.interactions_enabled.borrow() {
            return;
        }
        {
            let mut g = w.gesture.borrow_mut();
            g.down = true;
            g.last_client = client_pos(&ev);
            g.pressed_at = Instant::now();
            g.travelled = 0.0;
        }
        w.camera.borrow_mut().begin_drag();
        set_cursor(&w.canvas, "grabbing");
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.camera.borrow().is_dragging() {
            return;
        }
        let mut g = w.gesture.borrow_mut();
        if !g.down {
            return;
        }
        let pos = client_pos(&ev);
        let delta = pos - g.last_client;
        g.last_client = pos;
        g.travelled += delta.length();
        drop(g);
        // The camera pans opposite the gesture; drag_by handles the sign.
        w.camera.borrow_mut().drag_by(delta);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (was_down, travelled, held) = {
            let mut g = w.gesture.borrow_mut();
            let was_down = g.down;
            g.down = false;
            (was_down, g.travelled, g.pressed_at.elapsed().as_secs_f32())
        };
        if !was_down {
            return;
        }
        set_cursor(&w.canvas, "grab");

        // Short, still presses are clicks; the frame loop resolves the hit.
        if travelled <= CLICK_MAX_TRAVEL_PX && held < CLICK_MAX_DURATION {
            *w.queued_click.borrow_mut() = Some(pointer_canvas_px(&ev, &w.canvas));
        }

        let mut cam = w.camera.borrow_mut();
        cam.release();
        if w.reduced_motion {
            cam.halt();
        }
        log::info!("[drag] release, phase {:?}", cam.phase());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
