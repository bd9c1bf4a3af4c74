use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One drawable gallery image. `pos` lives in tile space; the stage shifts
/// everything by its world origin at draw time.
pub struct Sprite {
    pub image: web::HtmlImageElement,
    pub pos: Vec2,
    pub scale: f32,
    pub base_scale: f32,
    pub alpha: f32,
    pub visible: bool,
}

impl Sprite {
    pub fn new(image: web::HtmlImageElement, base_scale: f32, visible: bool) -> Self {
        Self {
            image,
            pos: Vec2::ZERO,
            scale: base_scale,
            base_scale,
            alpha: 1.0,
            visible,
        }
    }

    #[inline]
    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(
            self.image.natural_width() as f32,
            self.image.natural_height() as f32,
        )
    }

    #[inline]
    pub fn draw_size(&self) -> Vec2 {
        self.natural_size() * self.scale
    }

    /// Hit test in tile space, against the sprite's centered rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.visible || self.alpha <= 0.0 {
            return false;
        }
        let half = self.draw_size() * 0.5;
        (point.x - self.pos.x).abs() <= half.x && (point.y - self.pos.y).abs() <= half.y
    }
}

/// Canvas2D sprite stage. Drawing happens in CSS pixels; the backing store
/// is scaled by the device pixel ratio.
pub struct Stage {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size_css: Vec2,
}

impl Stage {
    pub fn new(canvas: web::HtmlCanvasElement, size_css: Vec2) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("canvas 2d context: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas 2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("canvas 2d context cast: {:?}", e))?;
        let mut stage = Self {
            canvas,
            ctx,
            size_css,
        };
        stage.resize(size_css);
        Ok(stage)
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Viewport size in CSS pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size_css
    }

    /// Tile-space coordinate of the canvas's top-left corner. The tile is
    /// at least 2x the viewport, so centering it keeps items from popping
    /// at the edges.
    #[inline]
    pub fn world_origin(&self) -> Vec2 {
        -self.size_css * 0.5
    }

    /// Resize the backing store to match CSS size times devicePixelRatio.
    /// Resets and re-applies the context transform.
    pub fn resize(&mut self, size_css: Vec2) {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.size_css = size_css.max(Vec2::ONE);
        self.canvas
            .set_width((self.size_css.x as f64 * dpr).round().max(1.0) as u32);
        self.canvas
            .set_height((self.size_css.y as f64 * dpr).round().max(1.0) as u32);
        _ = self
            .canvas
            .style()
            .set_property("width", &format!("{}px", self.size_css.x));
        _ = self
            .canvas
            .style()
            .set_property("height", &format!("{}px", self.size_css.y));
        _ = self.ctx.scale(dpr, dpr);
    }

    /// Clear to the page background.
    pub fn clear(&self) {
        self.ctx.set_fill_style_str("#fff");
        self.ctx
            .fill_rect(0.0, 0.0, self.size_css.x as f64, self.size_css.y as f64);
    }

    pub fn draw_sprite(&self, sprite: &Sprite) {
        if !sprite.visible || sprite.alpha <= 0.0 {
            return;
        }
        let size = sprite.draw_size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let screen = sprite.pos + self.world_origin();
        self.draw_image_at(&sprite.image, screen, size, sprite.alpha);
    }

    /// Draw an image centered at a screen-space point (CSS pixels).
    pub fn draw_image_at(
        &self,
        image: &web::HtmlImageElement,
        center: Vec2,
        size: Vec2,
        alpha: f32,
    ) {
        if alpha <= 0.0 {
            return;
        }
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            (center.x - size.x * 0.5) as f64,
            (center.y - size.y * 0.5) as f64,
            size.x as f64,
            size.y as f64,
        );
        self.ctx.restore();
    }

    /// Full-viewport white overlay used behind the modal.
    pub fn draw_overlay(&self, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_fill_style_str("#fff");
        self.ctx
            .fill_rect(0.0, 0.0, self.size_css.x as f64, self.size_css.y as f64);
        self.ctx.restore();
    }
}
