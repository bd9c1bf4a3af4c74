use crate::constants::RESIZE_DEBOUNCE;
use crate::core::camera::Camera;
use crate::core::intro::{self, GalleryIntro, Loader};
use crate::core::reveal::RevealPanel;
use crate::core::tile::{self, Placement, Tile};
use crate::dom::{self, Breakpoint};
use crate::items::{self, ItemSource};
use crate::modal::Modal;
use crate::render::{Sprite, Stage};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Loader overlay elements, when the page carries an intro loader.
pub struct LoaderDom {
    pub wrap: web::HtmlElement,
    pub flash: Option<web::HtmlElement>,
}

/// Panel-reveal elements (desktop only).
pub struct RevealDom {
    pub section: web::HtmlElement,
    pub bar_top: Option<web::HtmlElement>,
    pub bar_bottom: Option<web::HtmlElement>,
}

/// Per-item targets for the gallery intro, fixed when the intro starts.
pub struct IntroTarget {
    pub intro_scale: f32,
    pub resting: Vec2,
}

pub struct FrameContext {
    pub stage: Stage,
    pub tile: Tile,
    pub placements: Vec<Placement>,
    pub sprites: Vec<Sprite>,
    pub items: Vec<ItemSource>,

    pub camera: Rc<RefCell<Camera>>,
    pub loader: Rc<RefCell<Loader>>,
    pub reveal: Rc<RefCell<RevealPanel>>,
    pub queued_click: Rc<RefCell<Option<Vec2>>>,
    pub interactions_enabled: Rc<RefCell<bool>>,
    pub pending_resize: Rc<RefCell<Option<Instant>>>,

    pub loader_dom: Option<LoaderDom>,
    pub reveal_dom: Option<RevealDom>,
    pub intro: GalleryIntro,
    pub intro_targets: Vec<IntroTarget>,
    pub modal: Modal,

    pub last_instant: Instant,
    pub flash_hidden: bool,
    pub loader_finished: bool,
}

impl FrameContext {
    /// One render tick: advance every state machine, project, draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.apply_pending_resize(now);
        self.tick_loader(dt);
        self.intro.tick(dt);
        *self.interactions_enabled.borrow_mut() = self.intro.interactions_enabled();

        // Inertia only runs once the gallery is live; during the intro the
        // camera sits at the origin with all input disabled.
        if self.intro.done() {
            self.camera.borrow_mut().step();
        }

        self.handle_queued_click();
        if let Some(closed) = self.modal.tick(dt) {
            if let Some(sprite) = self.sprites.get_mut(closed) {
                sprite.alpha = 1.0;
            }
        }
        self.tick_reveal(dt);
        self.update_sprites();
        self.draw();
    }

    fn apply_pending_resize(&mut self, now: Instant) {
        let due = {
            let pending = self.pending_resize.borrow();
            matches!(*pending, Some(stamp) if (now - stamp).as_secs_f32() >= RESIZE_DEBOUNCE)
        };
        if !due {
            return;
        }
        *self.pending_resize.borrow_mut() = None;

        let viewport = dom::viewport_size();
        let breakpoint = Breakpoint::from_width(viewport.x);
        self.stage.resize(viewport);
        self.tile = Tile::from_viewport(viewport, breakpoint.tile_scale());
        // Logical positions survive a resize; wrap absorbs the new tile.
        for (sprite, item) in self.sprites.iter_mut().zip(&self.items) {
            sprite.base_scale = items::base_scale(item, breakpoint);
        }
        log::info!(
            "[resize] viewport {:.0}x{:.0} tile {:.0}x{:.0}",
            viewport.x,
            viewport.y,
            self.tile.w,
            self.tile.h
        );
    }

    fn tick_loader(&mut self, dt: f32) {
        let mut loader = self.loader.borrow_mut();
        loader.tick(dt);

        if let Some(ld) = &self.loader_dom {
            if !loader.flash_done() {
                if let Some(flash) = &ld.flash {
                    dom::set_style(flash, "opacity", &format!("{:.3}", loader.flash_alpha()));
                }
            } else if !self.flash_hidden {
                if let Some(flash) = &ld.flash {
                    dom::hide(flash);
                }
                self.flash_hidden = true;
            }
            if !loader.done() {
                dom::set_style(&ld.wrap, "opacity", &format!("{:.3}", loader.wrap_alpha()));
            }
        }

        if loader.done() && !self.loader_finished {
            self.loader_finished = true;
            // The flag only means anything when the page had a loader.
            if let Some(ld) = &self.loader_dom {
                dom::hide(&ld.wrap);
                dom::mark_intro_seen();
            }
            drop(loader);
            self.start_gallery_intro();
        }
    }

    /// Fix the intro flight targets now that image sizes and the tile are
    /// known, then let the intro run.
    fn start_gallery_intro(&mut self) {
        let viewport = self.stage.size();
        let max = viewport * intro::INTRO_VIEWPORT_FRACTION;
        self.intro_targets = self
            .sprites
            .iter()
            .zip(&self.placements)
            .map(|(sprite, placement)| {
                let natural = sprite.natural_size();
                let intro_scale = if natural.x > 0.0 && natural.y > 0.0 {
                    (max.x / natural.x)
                        .min(max.y / natural.y)
                        .min(sprite.base_scale)
                } else {
                    sprite.base_scale
                };
                IntroTarget {
                    intro_scale,
                    resting: tile::resting_position(placement, self.tile),
                }
            })
            .collect();
        self.intro.start();
        log::info!("[intro] gallery intro started ({} items)", self.sprites.len());
    }

    fn handle_queued_click(&mut self) {
        let Some(click) = self.queued_click.borrow_mut().take() else {
            return;
        };

        if self.modal.is_active() {
            // Any click closes; fly back to wherever the source sits now.
            if let Some(idx) = self.modal.item() {
                if let Some(source) = self.sprites.get(idx) {
                    let screen = source.pos + self.stage.world_origin();
                    self.modal.request_close(screen, source.scale);
                }
            }
            return;
        }
        if !self.intro.done() {
            return;
        }

        let world = click - self.stage.world_origin();
        // Later items draw on top, so scan back to front.
        if let Some(idx) = self.sprites.iter().rposition(|s| s.contains(world)) {
            let screen = self.sprites[idx].pos + self.stage.world_origin();
            let link = self.items[idx].link.clone();
            let viewport = self.stage.size();
            self.modal
                .open(idx, &self.sprites[idx], screen, viewport, link);
            if self.modal.item() == Some(idx) {
                self.sprites[idx].alpha = 0.0;
            }
        }
    }

    fn tick_reveal(&mut self, dt: f32) {
        let mut reveal = self.reveal.borrow_mut();
        reveal.tick(dt);
        let Some(rd) = &self.reveal_dom else {
            return;
        };

        dom::set_style(
            &rd.section,
            "transform",
            &format!("translateY({:.4}vh)", reveal.shown_vh()),
        );
        match reveal.shadow() {
            Some(s) => dom::set_style(
                &rd.section,
                "box-shadow",
                &format!(
                    "0px {}px {:.1}px 0px rgba(0, 0, 0, {:.3})",
                    s.offset_y_px, s.blur_px, s.opacity
                ),
            ),
            None => dom::set_style(&rd.section, "box-shadow", "none"),
        }
        let (top, bottom) = reveal.bar_fractions();
        if let Some(bar) = &rd.bar_top {
            dom::set_style(bar, "width", &format!("{:.1}%", top * 100.0));
        }
        if let Some(bar) = &rd.bar_bottom {
            dom::set_style(bar, "width", &format!("{:.1}%", bottom * 100.0));
        }
        dom::set_style(
            &rd.section,
            "pointer-events",
            if reveal.pointer_events_enabled() {
                "auto"
            } else {
                "none"
            },
        );
    }

    fn update_sprites(&mut self) {
        if !self.intro.started() {
            // Loader still up; keep the gallery hidden.
            for sprite in &mut self.sprites {
                sprite.alpha = 0.0;
            }
            return;
        }

        if !self.intro.done() {
            let center = self.stage.size() * 0.5 - self.stage.world_origin();
            let appear = self.intro.appear_progress();
            let disperse = self.intro.disperse_progress();
            for (sprite, target) in self.sprites.iter_mut().zip(&self.intro_targets) {
                if disperse > 0.0 {
                    sprite.pos = center.lerp(target.resting, disperse);
                    sprite.scale =
                        target.intro_scale + (sprite.base_scale - target.intro_scale) * disperse;
                    sprite.alpha = 1.0;
                } else {
                    sprite.pos =
                        center + Vec2::new(0.0, intro::APPEAR_RISE_PX * (1.0 - appear));
                    sprite.scale = target.intro_scale;
                    sprite.alpha = appear;
                }
            }
            return;
        }

        let camera = *self.camera.borrow();
        let speed = camera.speed();
        let modal_item = self.modal.item();
        for (i, (sprite, placement)) in
            self.sprites.iter_mut().zip(&self.placements).enumerate()
        {
            sprite.pos = tile::project(placement, camera.offset, self.tile);
            sprite.scale = sprite.base_scale * tile::speed_pulse(speed, placement.factor);
            if modal_item != Some(i) {
                sprite.alpha = 1.0;
            }
        }
    }

    fn draw(&self) {
        self.stage.clear();
        for sprite in &self.sprites {
            self.stage.draw_sprite(sprite);
        }
        self.modal.draw(&self.stage);
    }
}

/// Drive the frame loop with requestAnimationFrame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
