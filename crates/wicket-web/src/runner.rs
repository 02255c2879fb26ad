//! Bridge runner: owns the engine controllers, the canvases they draw to,
//! and the bookkeeping for image loads in flight.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use wicket_engine::renderer::ops::{Rect, SurfaceOp};
use wicket_engine::{
    replay, CaptchaConfig, ImageCatalog, InteractionEvent, PointClickController, RotateController,
    Rng, SlideController, Surface,
};

use crate::surface::CanvasSurface;

/// One canvas and its 2d context, looked up by element id.
struct Binding {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Binding {
    fn lookup(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&self, width: f32, height: f32) {
        let mut surface = CanvasSurface::new(self.ctx.clone());
        surface.clear(Rect::new(0.0, 0.0, width, height));
    }

    fn replay(&self, ops: &[SurfaceOp], image: &HtmlImageElement) {
        let mut surface = CanvasSurface::with_image(self.ctx.clone(), image.clone());
        replay(ops, &mut surface);
    }
}

/// The slide puzzle draws on three stacked canvases: the intact photo, the
/// photo with the hole punched out, and the sliding piece strip.
struct SlideCanvases {
    full: Binding,
    hole: Binding,
    piece: Binding,
}

pub struct CaptchaRunner {
    document: Document,
    catalog: ImageCatalog,
    rng: Rng,

    slide: SlideController,
    point: PointClickController,
    rotate: RotateController,

    slide_canvases: Option<SlideCanvases>,
    point_canvas: Option<Binding>,
    rotate_canvas: Option<Binding>,

    // Image loads resolve out of order; an epoch mismatch means a newer
    // reset owns the surfaces and the stale result is dropped.
    slide_epoch: u32,
    point_epoch: u32,
    rotate_epoch: u32,
}

impl CaptchaRunner {
    pub fn new(config: CaptchaConfig, seed: u64) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        Ok(Self {
            document,
            catalog: ImageCatalog::new(config.images),
            rng: Rng::new(seed),
            slide: SlideController::new(config.slide),
            point: PointClickController::new(config.point),
            rotate: RotateController::new(config.rotate),
            slide_canvases: None,
            point_canvas: None,
            rotate_canvas: None,
            slide_epoch: 0,
            point_epoch: 0,
            rotate_epoch: 0,
        })
    }

    /// Swap in a new configuration. Current challenges are dropped and any
    /// pending loads are invalidated.
    pub fn configure(&mut self, config: CaptchaConfig) {
        self.catalog = ImageCatalog::new(config.images);
        self.slide = SlideController::new(config.slide);
        self.point = PointClickController::new(config.point);
        self.rotate = RotateController::new(config.rotate);
        if self.slide_canvases.is_some() {
            self.slide.attach();
        }
        if self.point_canvas.is_some() {
            self.point.attach();
        }
        if self.rotate_canvas.is_some() {
            self.rotate.attach();
        }
        self.slide_epoch += 1;
        self.point_epoch += 1;
        self.rotate_epoch += 1;
    }

    // -- Canvas binding --

    pub fn bind_slide(
        &mut self,
        full_id: &str,
        hole_id: &str,
        piece_id: &str,
    ) -> Result<(), JsValue> {
        self.slide_canvases = Some(SlideCanvases {
            full: Binding::lookup(&self.document, full_id)?,
            hole: Binding::lookup(&self.document, hole_id)?,
            piece: Binding::lookup(&self.document, piece_id)?,
        });
        self.slide.attach();
        Ok(())
    }

    pub fn bind_point(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        self.point_canvas = Some(Binding::lookup(&self.document, canvas_id)?);
        self.point.attach();
        Ok(())
    }

    pub fn bind_rotate(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        self.rotate_canvas = Some(Binding::lookup(&self.document, canvas_id)?);
        self.rotate.attach();
        Ok(())
    }

    /// Unhook everything: controllers forget their interaction state and
    /// pending loads are invalidated.
    pub fn detach(&mut self) {
        self.slide.detach();
        self.point.detach();
        self.rotate.detach();
        self.slide_canvases = None;
        self.point_canvas = None;
        self.rotate_canvas = None;
        self.slide_epoch += 1;
        self.point_epoch += 1;
        self.rotate_epoch += 1;
    }

    // -- Reset and load completion --

    /// Generate a fresh slide puzzle and blank its canvases. Returns the
    /// image url to load and the epoch that guards its completion.
    pub fn reset_slide(&mut self) -> Result<(String, u32), JsValue> {
        self.slide_epoch += 1;
        let epoch = self.slide_epoch;

        let (image, width, height, strip_width) = {
            let challenge = self
                .slide
                .reset(&self.catalog, &mut self.rng)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            (
                challenge.image.clone(),
                challenge.width,
                challenge.height,
                challenge.strip_width,
            )
        };

        if let Some(canvases) = &self.slide_canvases {
            canvases.full.resize(width, height);
            canvases.full.clear(width, height);
            canvases.hole.resize(width, height);
            canvases.hole.clear(width, height);
            canvases.piece.resize(strip_width, height);
            canvases.piece.clear(strip_width, height);
        }
        Ok((image, epoch))
    }

    pub fn finish_slide_load(&mut self, epoch: u32, image: &HtmlImageElement) {
        if epoch != self.slide_epoch {
            log::debug!("slide: stale load dropped");
            return;
        }
        if let (Some(challenge), Some(canvases)) = (self.slide.challenge(), &self.slide_canvases) {
            canvases.full.replay(&challenge.full_plan, image);
            canvases.hole.replay(&challenge.hole_plan, image);
            canvases.piece.replay(&challenge.piece_plan, image);
        }
        self.slide.complete_load();
    }

    pub fn abandon_slide_load(&mut self, epoch: u32, message: String) {
        if epoch != self.slide_epoch {
            log::debug!("slide: stale load failure dropped");
            return;
        }
        self.slide.fail_load(message);
    }

    pub fn reset_point(&mut self) -> Result<(String, u32), JsValue> {
        self.point_epoch += 1;
        let epoch = self.point_epoch;

        let (image, width, height) = {
            let challenge = self
                .point
                .reset(&self.catalog, &mut self.rng)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            (challenge.image.clone(), challenge.width, challenge.height)
        };

        if let Some(canvas) = &self.point_canvas {
            canvas.resize(width, height);
            canvas.clear(width, height);
        }
        Ok((image, epoch))
    }

    pub fn finish_point_load(&mut self, epoch: u32, image: &HtmlImageElement) {
        if epoch != self.point_epoch {
            log::debug!("point-click: stale load dropped");
            return;
        }
        if let (Some(challenge), Some(canvas)) = (self.point.challenge(), &self.point_canvas) {
            canvas.replay(&challenge.plan, image);
        }
        self.point.complete_load();
    }

    pub fn abandon_point_load(&mut self, epoch: u32, message: String) {
        if epoch != self.point_epoch {
            log::debug!("point-click: stale load failure dropped");
            return;
        }
        self.point.fail_load(message);
    }

    pub fn reset_rotate(&mut self) -> Result<(String, u32), JsValue> {
        self.rotate_epoch += 1;
        let epoch = self.rotate_epoch;

        let (image, size) = {
            let challenge = self
                .rotate
                .reset(&self.catalog, &mut self.rng)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            (challenge.image.clone(), challenge.size)
        };

        if let Some(canvas) = &self.rotate_canvas {
            canvas.resize(size, size);
            canvas.clear(size, size);
        }
        Ok((image, epoch))
    }

    pub fn finish_rotate_load(&mut self, epoch: u32, image: &HtmlImageElement) {
        if epoch != self.rotate_epoch {
            log::debug!("rotate: stale load dropped");
            return;
        }
        if let (Some(challenge), Some(canvas)) = (self.rotate.challenge(), &self.rotate_canvas) {
            canvas.replay(&challenge.plan, image);
        }
        self.rotate.complete_load();
    }

    pub fn abandon_rotate_load(&mut self, epoch: u32, message: String) {
        if epoch != self.rotate_epoch {
            log::debug!("rotate: stale load failure dropped");
            return;
        }
        self.rotate.fail_load(message);
    }

    // -- Interaction and verification --

    pub fn slide_event(&mut self, event: InteractionEvent) {
        self.slide.handle_event(event);
    }

    pub fn point_event(&mut self, event: InteractionEvent) {
        self.point.handle_event(event);
    }

    pub fn clear_point_clicks(&mut self) {
        self.point.clear_clicks();
    }

    pub fn rotate_event(&mut self, event: InteractionEvent) {
        self.rotate.handle_event(event);
    }

    pub fn verify_slide(&mut self, tolerance: f32) -> bool {
        self.slide.verify(tolerance)
    }

    pub fn verify_point(&mut self) -> bool {
        self.point.verify()
    }

    pub fn verify_rotate(&mut self, tolerance: f32) -> bool {
        self.rotate.verify(tolerance)
    }

    // -- State read by the host page --

    pub fn slide_offset(&self) -> f32 {
        self.slide.offset()
    }

    pub fn slide_max_offset(&self) -> f32 {
        self.slide
            .challenge()
            .map_or(0.0, |challenge| challenge.max_offset())
    }

    pub fn slide_strip_width(&self) -> f32 {
        self.slide
            .challenge()
            .map_or(0.0, |challenge| challenge.strip_width)
    }

    pub fn rotate_angle(&self) -> f32 {
        self.rotate.current_angle()
    }

    pub fn point_click_count(&self) -> u32 {
        self.point.clicks().len() as u32
    }

    pub fn point_complete(&self) -> bool {
        self.point.is_complete()
    }

    pub fn slide_state(&self) -> &'static str {
        self.slide.state().as_str()
    }

    pub fn point_state(&self) -> &'static str {
        self.point.state().as_str()
    }

    pub fn rotate_state(&self) -> &'static str {
        self.rotate.state().as_str()
    }

    pub fn slide_loading(&self) -> bool {
        self.slide.is_loading()
    }

    pub fn point_loading(&self) -> bool {
        self.point.is_loading()
    }

    pub fn rotate_loading(&self) -> bool {
        self.rotate.is_loading()
    }

    pub fn slide_load_error(&self) -> Option<String> {
        self.slide.load_error().map(|err| err.to_string())
    }

    pub fn point_load_error(&self) -> Option<String> {
        self.point.load_error().map(|err| err.to_string())
    }

    pub fn rotate_load_error(&self) -> Option<String> {
        self.rotate.load_error().map(|err| err.to_string())
    }

    pub fn slide_descriptor(&self) -> Option<String> {
        self.slide
            .descriptor()
            .and_then(|descriptor| serde_json::to_string(&descriptor).ok())
    }

    pub fn point_descriptor(&self) -> Option<String> {
        self.point
            .descriptor()
            .and_then(|descriptor| serde_json::to_string(&descriptor).ok())
    }

    pub fn rotate_descriptor(&self) -> Option<String> {
        self.rotate
            .descriptor()
            .and_then(|descriptor| serde_json::to_string(&descriptor).ok())
    }
}
