//! Surface trait for drawing backends.
//!
//! The engine never draws; it records `SurfaceOp` plans. An embedding
//! implements `Surface` over its real drawing target (the wasm bridge wraps
//! `CanvasRenderingContext2d`) and calls `replay` once the challenge image
//! is bound.

use glam::Vec2;

use super::ops::{CompositeMode, ImageRegion, PathCommand, Rect, Shadow, SurfaceOp};

/// A 2D drawing target with canvas-style state and path semantics.
///
/// One method per `SurfaceOp` variant, plus `clear`, which embeddings call
/// directly when a challenge resets (old pixels must vanish while the next
/// image is still loading, before any plan exists to replay).
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn clear(&mut self, area: Rect);
    fn begin_path(&mut self);
    fn move_to(&mut self, to: Vec2);
    fn line_to(&mut self, to: Vec2);
    fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );
    fn arc_to(&mut self, c1: Vec2, c2: Vec2, radius: f32);
    fn close_path(&mut self);
    fn set_fill_color(&mut self, color: &str);
    fn set_alpha(&mut self, value: f32);
    fn set_composite(&mut self, mode: CompositeMode);
    fn set_shadow(&mut self, shadow: &Shadow);
    fn fill(&mut self);
    fn clip(&mut self);
    fn translate(&mut self, by: Vec2);
    fn rotate(&mut self, radians: f32);
    fn draw_image(&mut self, src: ImageRegion, dst: Rect);
    fn fill_text(&mut self, text: &str, font_size: i32, at: Vec2);
}

/// Replay a recorded plan onto a surface, in order.
pub fn replay<S: Surface>(ops: &[SurfaceOp], surface: &mut S) {
    for op in ops {
        match op {
            SurfaceOp::Save => surface.save(),
            SurfaceOp::Restore => surface.restore(),
            SurfaceOp::BeginPath => surface.begin_path(),
            SurfaceOp::Path(command) => match *command {
                PathCommand::MoveTo { to } => surface.move_to(to),
                PathCommand::LineTo { to } => surface.line_to(to),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => surface.arc(center, radius, start_angle, end_angle, anticlockwise),
                PathCommand::ArcTo { c1, c2, radius } => surface.arc_to(c1, c2, radius),
                PathCommand::Close => surface.close_path(),
            },
            SurfaceOp::FillColor { color } => surface.set_fill_color(color),
            SurfaceOp::Alpha { value } => surface.set_alpha(*value),
            SurfaceOp::Composite { mode } => surface.set_composite(*mode),
            SurfaceOp::Shadow(shadow) => surface.set_shadow(shadow),
            SurfaceOp::Fill => surface.fill(),
            SurfaceOp::Clip => surface.clip(),
            SurfaceOp::Translate { by } => surface.translate(*by),
            SurfaceOp::Rotate { radians } => surface.rotate(*radians),
            SurfaceOp::DrawImage { src, dst } => surface.draw_image(*src, *dst),
            SurfaceOp::FillText {
                text,
                font_size,
                at,
            } => surface.fill_text(text, *font_size, *at),
        }
    }
}
