use crate::dom::Breakpoint;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One CMS gallery item, read from its `.infinite_page_image` element.
///
/// The optional `ressource-*` attributes come straight from the CMS:
/// per-item size caps, an external resource link shown in the modal, and
/// an explicit parallax factor overriding the distributed one.
pub struct ItemSource {
    pub image: web::HtmlImageElement,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub link: Option<String>,
    pub factor: Option<f32>,
}

fn attr_f32(el: &web::HtmlImageElement, name: &str) -> Option<f32> {
    el.get_attribute(name)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Collect all gallery images on the page, in document order.
pub fn collect(document: &web::Document) -> Vec<ItemSource> {
    let mut items = Vec::new();
    let Ok(nodes) = document.query_selector_all(".infinite_page_image") else {
        return items;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(image) = node.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        items.push(ItemSource {
            max_width: attr_f32(&image, "ressource-max-width"),
            max_height: attr_f32(&image, "ressource-max-height"),
            link: image
                .get_attribute("ressource-link")
                .filter(|s| !s.is_empty()),
            factor: image
                .get_attribute("ressource-factor")
                .and_then(|v| v.trim().parse::<f32>().ok()),
            image,
        });
    }
    items
}

/// Resolves once the image has either loaded or failed; failures resolve
/// too so a broken asset degrades instead of stalling initialization.
fn settled_promise(image: &web::HtmlImageElement) -> js_sys::Promise {
    let image = image.clone();
    js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let resolve_load = resolve.clone();
        let on_load = Closure::once_into_js(move |_: web::Event| {
            _ = resolve_load.call0(&JsValue::NULL);
        });
        _ = image.add_event_listener_with_callback("load", on_load.unchecked_ref());
        let resolve_error = resolve.clone();
        let on_error = Closure::once_into_js(move |_: web::Event| {
            _ = resolve_error.call0(&JsValue::NULL);
        });
        _ = image.add_event_listener_with_callback("error", on_error.unchecked_ref());
    })
}

/// Wait for every item image to settle (load or fail).
pub async fn wait_until_settled(items: &[ItemSource]) {
    for item in items {
        if item.image.complete() {
            continue;
        }
        _ = JsFuture::from(settled_promise(&item.image)).await;
    }
}

/// Whether the image actually decoded; a failed load reports zero natural
/// size even when `complete` is true.
pub fn loaded_ok(item: &ItemSource) -> bool {
    item.image.natural_width() > 0 && item.image.natural_height() > 0
}

/// Scale fitting the image's natural size into its responsive bounding
/// box, honoring the CMS size attributes. Width caps take precedence over
/// height caps; images are never upscaled.
pub fn base_scale(item: &ItemSource, breakpoint: Breakpoint) -> f32 {
    let max_box = breakpoint.max_image_px();
    let w = item.image.natural_width() as f32;
    let h = item.image.natural_height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    if let Some(max_w) = item.max_width {
        return (max_w.min(max_box) / w).min(1.0);
    }
    if let Some(max_h) = item.max_height {
        return (max_h.min(max_box) / h).min(1.0);
    }
    (max_box / w).min(max_box / h).min(1.0)
}
