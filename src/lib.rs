#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod items;
mod modal;
mod render;

use crate::core::camera::Camera;
use crate::core::intro::{GalleryIntro, Loader};
use crate::core::reveal::RevealPanel;
use crate::core::tile::{self, Tile};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("archive-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Missing root or empty CMS collection disables the gallery, quietly.
    let Some(root) = dom::query(&document, ".infinite_page_wrap") else {
        log::warn!("no .infinite_page_wrap on this page; gallery disabled");
        return Ok(());
    };
    let item_sources = items::collect(&document);
    if item_sources.is_empty() {
        log::warn!("no .infinite_page_image items found; gallery disabled");
        return Ok(());
    }

    let reduced_motion = dom::prefers_reduced_motion();
    let viewport = dom::viewport_size();
    let breakpoint = dom::Breakpoint::current();

    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("canvas cast: {:?}", e))?;
    _ = canvas.style().set_property("cursor", "grab");
    _ = canvas.style().set_property("touch-action", "none");
    root.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;

    let stage = render::Stage::new(canvas, viewport)?;

    // Wait for the CMS images; failures settle too and degrade per item.
    items::wait_until_settled(&item_sources).await;
    for (i, item) in item_sources.iter().enumerate() {
        if !items::loaded_ok(item) {
            log::warn!("[items] image {} failed to load; hiding it", i);
        }
    }

    let tile = Tile::from_viewport(viewport, breakpoint.tile_scale());
    let seed = js_sys::Date::now() as u64;
    let mut placements = tile::layout(item_sources.len(), tile, seed);
    // CMS items may pin their parallax factor explicitly.
    for (placement, item) in placements.iter_mut().zip(&item_sources) {
        if let Some(factor) = item.factor {
            placement.factor = tile::clamp(factor, tile::PARALLAX_MIN, tile::PARALLAX_MAX);
        }
    }

    let sprites: Vec<render::Sprite> = item_sources
        .iter()
        .map(|item| {
            render::Sprite::new(
                item.image.clone(),
                items::base_scale(item, breakpoint),
                items::loaded_ok(item),
            )
        })
        .collect();

    // Loader overlay; skipped when absent or already seen this session.
    let loader_dom = dom::query(&document, ".loader_wrap").map(|wrap| frame::LoaderDom {
        flash: dom::query(&document, ".loader_flash_wrap"),
        wrap,
    });
    let loader = Rc::new(RefCell::new(
        if loader_dom.is_some() && !dom::intro_seen() {
            Loader::new()
        } else {
            Loader::skipped()
        },
    ));
    if let Some(content) = dom::query(&document, ".loader_content_wrap") {
        for event in ["click", "touchstart"] {
            let loader = loader.clone();
            dom::add_event_listener(&content, event, move || {
                loader.borrow_mut().trigger_outro();
            });
        }
    }

    // Panel reveal is desktop-only.
    let reveal = Rc::new(RefCell::new(RevealPanel::new()));
    let reveal_dom = (breakpoint == dom::Breakpoint::Desktop)
        .then(|| dom::query(&document, ".infinite_section"))
        .flatten()
        .map(|section| {
            dom::lock_vertical_scroll(&document);
            frame::RevealDom {
                bar_top: dom::query(&document, ".infinite_navigation.is-top .infinite_progress_bar"),
                bar_bottom: dom::query(
                    &document,
                    ".infinite_navigation.is-bottom .infinite_progress_bar",
                ),
                section,
            }
        });

    let camera = Rc::new(RefCell::new(Camera::new()));
    let gesture = Rc::new(RefCell::new(events::GestureState::default()));
    let queued_click = Rc::new(RefCell::new(None));
    let interactions_enabled = Rc::new(RefCell::new(false));
    let pending_resize = Rc::new(RefCell::new(None));

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: stage.canvas().clone(),
        camera: camera.clone(),
        gesture,
        queued_click: queued_click.clone(),
        interactions_enabled: interactions_enabled.clone(),
        reduced_motion,
    });
    events::wire_wheel(events::WheelWiring {
        loader: loader.clone(),
        reveal: reveal_dom.is_some().then(|| reveal.clone()),
    });
    wire_resize(pending_resize.clone());

    let modal = modal::Modal::new(dom::query(&document, ".infinite_link_btn"));

    log::info!(
        "[init] {} items, tile {:.0}x{:.0}, seed {}",
        item_sources.len(),
        tile.w,
        tile.h,
        seed
    );

    let ctx = frame::FrameContext {
        stage,
        tile,
        placements,
        sprites,
        items: item_sources,
        camera,
        loader,
        reveal,
        queued_click,
        interactions_enabled,
        pending_resize,
        loader_dom,
        reveal_dom,
        intro: GalleryIntro::new(reduced_motion),
        intro_targets: Vec::new(),
        modal,
        last_instant: Instant::now(),
        flash_hidden: false,
        loader_finished: false,
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

fn wire_resize(pending: Rc<RefCell<Option<Instant>>>) {
    let closure = Closure::wrap(Box::new(move || {
        *pending.borrow_mut() = Some(Instant::now());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
