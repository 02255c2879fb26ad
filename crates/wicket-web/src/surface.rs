//! Canvas 2D backend for the engine's drawing surface.

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use wicket_engine::renderer::ops::{CompositeMode, ImageRegion, Rect, Shadow};
use wicket_engine::Surface;

// Non-deprecated helper to set the fill style via property assignment.
fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

/// Replays engine plans onto a `CanvasRenderingContext2d`.
///
/// The plan's image is bound up front; `DrawImage` ops pull their pixels
/// from it and are skipped when no image is bound.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    image: Option<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, image: None }
    }

    pub fn with_image(ctx: CanvasRenderingContext2d, image: HtmlImageElement) -> Self {
        Self {
            ctx,
            image: Some(image),
        }
    }

    fn source_rect(&self, src: ImageRegion) -> Option<Rect> {
        match src {
            ImageRegion::Pixels(rect) => Some(rect),
            ImageRegion::MinSquare => {
                let image = self.image.as_ref()?;
                let side = image.natural_width().min(image.natural_height()) as f32;
                Some(Rect::new(0.0, 0.0, side, side))
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn clear(&mut self, area: Rect) {
        self.ctx
            .clear_rect(area.x as f64, area.y as f64, area.w as f64, area.h as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, to: Vec2) {
        self.ctx.move_to(to.x as f64, to.y as f64);
    }

    fn line_to(&mut self, to: Vec2) {
        self.ctx.line_to(to.x as f64, to.y as f64);
    }

    fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        let _ = self.ctx.arc_with_anticlockwise(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
            anticlockwise,
        );
    }

    fn arc_to(&mut self, c1: Vec2, c2: Vec2, radius: f32) {
        let _ = self
            .ctx
            .arc_to(c1.x as f64, c1.y as f64, c2.x as f64, c2.y as f64, radius as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_fill_color(&mut self, color: &str) {
        set_fill_style(&self.ctx, color);
    }

    fn set_alpha(&mut self, value: f32) {
        self.ctx.set_global_alpha(value as f64);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        let _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.ctx.set_shadow_color(&shadow.color);
        self.ctx.set_shadow_offset_x(shadow.offset.x as f64);
        self.ctx.set_shadow_offset_y(shadow.offset.y as f64);
        self.ctx.set_shadow_blur(shadow.blur as f64);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn translate(&mut self, by: Vec2) {
        let _ = self.ctx.translate(by.x as f64, by.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn draw_image(&mut self, src: ImageRegion, dst: Rect) {
        let Some(source) = self.source_rect(src) else {
            return;
        };
        let Some(image) = self.image.as_ref() else {
            return;
        };
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x as f64,
                source.y as f64,
                source.w as f64,
                source.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            );
    }

    fn fill_text(&mut self, text: &str, font_size: i32, at: Vec2) {
        self.ctx.set_font(&format!("bold {}px sans-serif", font_size));
        self.ctx.set_text_align("start");
        self.ctx.set_text_baseline("top");
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
