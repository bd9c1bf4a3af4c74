use crate::constants::{
    MODAL_CLOSE_DURATION, MODAL_LINK_INSET_PX, MODAL_OPEN_DURATION, MODAL_OVERLAY_ALPHA,
    MODAL_OVERLAY_DURATION,
};
use crate::core::tween::{Ease, Tween};
use crate::dom::{self, Breakpoint};
use crate::render::{Sprite, Stage};
use glam::Vec2;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Zoom modal with FLIP transitions.
///
/// Opening captures the source sprite's current on-screen placement and
/// flies it to a centered fit; closing re-captures the source (it may have
/// drifted with inertia) and flies back, restoring the hidden sprite once
/// the flight lands. A white overlay fades in behind the image, and the
/// CMS resource link button docks to the image's top-right corner while
/// the modal is open.
pub struct Modal {
    phase: Phase,
    item: usize,
    clock: Tween,
    overlay: Tween,
    from_pos: Vec2,
    from_scale: f32,
    to_pos: Vec2,
    to_scale: f32,
    natural: Vec2,
    image: Option<web::HtmlImageElement>,
    link_button: Option<web::HtmlElement>,
    link: Option<String>,
}

impl Modal {
    pub fn new(link_button: Option<web::HtmlElement>) -> Self {
        if let Some(btn) = &link_button {
            dom::hide(btn);
        }
        Self {
            phase: Phase::Closed,
            item: 0,
            clock: Tween::new(0.0, 1.0, 0.0, Ease::CubicOut),
            overlay: Tween::new(0.0, 0.0, 0.0, Ease::QuadOut),
            from_pos: Vec2::ZERO,
            from_scale: 1.0,
            to_pos: Vec2::ZERO,
            to_scale: 1.0,
            natural: Vec2::ONE,
            image: None,
            link_button,
            link: None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Index of the sprite the modal currently covers.
    pub fn item(&self) -> Option<usize> {
        self.is_active().then_some(self.item)
    }

    /// Begin the FLIP open from the sprite's current screen placement.
    pub fn open(
        &mut self,
        index: usize,
        sprite: &Sprite,
        screen_pos: Vec2,
        viewport: Vec2,
        link: Option<String>,
    ) {
        let natural = sprite.natural_size();
        if natural.x <= 0.0 || natural.y <= 0.0 {
            return;
        }
        let fraction = Breakpoint::current().modal_fraction();
        let max = viewport * fraction;
        // Fit the viewport fraction but never exceed natural size.
        let to_scale = (max.x / natural.x).min(max.y / natural.y).min(1.0);

        self.phase = Phase::Opening;
        self.item = index;
        self.natural = natural;
        self.image = Some(sprite.image.clone());
        self.from_pos = screen_pos;
        self.from_scale = sprite.scale;
        self.to_pos = viewport * 0.5;
        self.to_scale = to_scale;
        self.clock = Tween::new(0.0, 1.0, MODAL_OPEN_DURATION, Ease::CubicOut);
        self.overlay = Tween::new(
            self.overlay.value(),
            MODAL_OVERLAY_ALPHA,
            MODAL_OVERLAY_DURATION,
            Ease::QuadOut,
        );
        self.link = link;
        log::info!("[modal] open item {}", index);
    }

    /// Begin the FLIP close back to wherever the source sprite sits now.
    pub fn request_close(&mut self, source_screen: Vec2, source_scale: f32) {
        if !matches!(self.phase, Phase::Opening | Phase::Open) {
            return;
        }
        self.from_pos = self.current_center();
        self.from_scale = self.current_scale();
        self.to_pos = source_screen;
        self.to_scale = source_scale;
        self.clock = Tween::new(0.0, 1.0, MODAL_CLOSE_DURATION, Ease::CubicIn);
        self.overlay = Tween::new(
            self.overlay.value(),
            0.0,
            MODAL_OVERLAY_DURATION,
            Ease::QuadIn,
        );
        self.phase = Phase::Closing;
        self.hide_link_button();
        log::info!("[modal] close item {}", self.item);
    }

    /// Advance animations. Returns the covered item's index once the close
    /// flight lands, so the caller can unhide the source sprite.
    pub fn tick(&mut self, dt: f32) -> Option<usize> {
        if self.phase == Phase::Closed {
            return None;
        }
        self.clock.advance(dt);
        self.overlay.advance(dt);
        match self.phase {
            Phase::Opening if self.clock.done() => {
                self.phase = Phase::Open;
                self.show_link_button();
            }
            Phase::Closing if self.clock.done() => {
                self.phase = Phase::Closed;
                self.image = None;
                return Some(self.item);
            }
            _ => {}
        }
        None
    }

    fn current_center(&self) -> Vec2 {
        self.from_pos.lerp(self.to_pos, self.clock.value())
    }

    fn current_scale(&self) -> f32 {
        self.from_scale + (self.to_scale - self.from_scale) * self.clock.value()
    }

    fn current_size(&self) -> Vec2 {
        self.natural * self.current_scale()
    }

    pub fn draw(&self, stage: &Stage) {
        if self.phase == Phase::Closed {
            return;
        }
        stage.draw_overlay(self.overlay.value());
        if let Some(image) = &self.image {
            stage.draw_image_at(image, self.current_center(), self.current_size(), 1.0);
        }
        self.sync_link_button(stage);
    }

    fn show_link_button(&self) {
        let (Some(btn), Some(link)) = (&self.link_button, &self.link) else {
            return;
        };
        _ = btn.set_attribute("href", link);
        _ = btn.set_attribute("target", "_blank");
        _ = btn.set_attribute("rel", "noopener");
        dom::set_style(btn, "display", "block");
        dom::set_style(btn, "position", "fixed");
        dom::set_style(btn, "z-index", "999");
    }

    fn hide_link_button(&self) {
        if let Some(btn) = &self.link_button {
            dom::hide(btn);
        }
    }

    /// Keep the link button docked to the image's top-right corner.
    fn sync_link_button(&self, stage: &Stage) {
        if self.phase != Phase::Open {
            return;
        }
        let (Some(btn), Some(_)) = (&self.link_button, &self.link) else {
            return;
        };
        let rect = stage.canvas().get_bounding_client_rect();
        let center = self.current_center();
        let size = self.current_size();
        let right = rect.left() as f32 + center.x + size.x * 0.5;
        let top = rect.top() as f32 + center.y - size.y * 0.5;
        let left = right - btn.offset_width() as f32 - MODAL_LINK_INSET_PX;
        let top = (top + MODAL_LINK_INSET_PX).max(0.0);
        dom::set_style(btn, "left", &format!("{left}px"));
        dom::set_style(btn, "top", &format!("{top}px"));
    }
}
