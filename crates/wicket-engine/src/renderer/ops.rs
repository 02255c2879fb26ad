//! The declarative drawing vocabulary.
//!
//! Challenge generation emits a `Vec<SurfaceOp>` per canvas layer instead of
//! touching a drawing context. The embedding replays the plan onto whatever
//! 2D surface it owns (Canvas2D in the wasm bridge). Plans are plain data
//! and serialize cleanly, so a non-Rust renderer can consume them too.
//!
//! Ops carry no image handles. The image a plan blits is bound to the
//! surface by the embedding, which lets plans be built before the image has
//! loaded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Composite mode for fills and blits. Matches the Canvas2D
/// `globalCompositeOperation` values the plans use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositeMode {
    /// Paint over existing pixels (the canvas default).
    #[default]
    SourceOver,
    /// Keep new pixels only where existing pixels are opaque.
    SourceAtop,
    /// Paint under existing pixels.
    DestinationOver,
}

impl CompositeMode {
    /// The Canvas2D `globalCompositeOperation` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::SourceAtop => "source-atop",
            CompositeMode::DestinationOver => "destination-over",
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Shadow parameters for subsequent fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// CSS color.
    pub color: String,
    pub offset: Vec2,
    pub blur: f32,
}

impl Shadow {
    pub fn new(color: &str, offset: Vec2, blur: f32) -> Self {
        Self {
            color: color.to_owned(),
            offset,
            blur,
        }
    }
}

/// Source region of the bound image for a blit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ImageRegion {
    /// Exact pixel rectangle in image space.
    Pixels(Rect),
    /// The largest square at the image's top-left corner. Plans are built
    /// before the image loads, so this region is resolved at replay time.
    MinSquare,
}

/// One path-building step, canvas semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { to: Vec2 },
    LineTo { to: Vec2 },
    /// Circular arc around `center`, angles in radians. A straight segment
    /// connects the current point to the arc's start point.
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    /// Corner arc tangent to the lines current->c1 and c1->c2.
    ArcTo { c1: Vec2, c2: Vec2, radius: f32 },
    Close,
}

/// One declarative drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceOp {
    /// Push the surface state (styles, transform, clip).
    Save,
    /// Pop the surface state.
    Restore,
    /// Start a new path.
    BeginPath,
    /// Append a path step to the current path.
    Path(PathCommand),
    /// Set the fill color (CSS).
    FillColor { color: String },
    /// Set the global alpha for subsequent fills and blits.
    Alpha { value: f32 },
    /// Set the composite mode for subsequent fills and blits.
    Composite { mode: CompositeMode },
    /// Set the shadow for subsequent fills.
    Shadow(Shadow),
    /// Fill the current path with the current style.
    Fill,
    /// Clip to the current path.
    Clip,
    /// Translate the coordinate system.
    Translate { by: Vec2 },
    /// Rotate the coordinate system, radians.
    Rotate { radians: f32 },
    /// Blit a region of the bound image.
    DrawImage { src: ImageRegion, dst: Rect },
    /// Fill `text` at `at` under the current transform, styled
    /// `bold {font_size}px sans-serif`, start-aligned, top baseline.
    FillText {
        text: String,
        font_size: i32,
        at: Vec2,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_css_keywords() {
        assert_eq!(CompositeMode::SourceOver.as_css(), "source-over");
        assert_eq!(CompositeMode::SourceAtop.as_css(), "source-atop");
        assert_eq!(CompositeMode::DestinationOver.as_css(), "destination-over");
    }

    #[test]
    fn plan_round_trips_through_json() {
        let plan = vec![
            SurfaceOp::Save,
            SurfaceOp::BeginPath,
            SurfaceOp::Path(PathCommand::Arc {
                center: Vec2::new(100.0, 75.0),
                radius: 75.0,
                start_angle: 0.0,
                end_angle: std::f32::consts::TAU,
                anticlockwise: false,
            }),
            SurfaceOp::Clip,
            SurfaceOp::DrawImage {
                src: ImageRegion::MinSquare,
                dst: Rect::new(-75.0, -75.0, 150.0, 150.0),
            },
            SurfaceOp::FillText {
                text: "w".into(),
                font_size: 28,
                at: Vec2::new(-14.0, -14.0),
            },
            SurfaceOp::Restore,
        ];

        let json = serde_json::to_string(&plan).unwrap();
        let back: Vec<SurfaceOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn shadow_carries_offset_and_blur() {
        let shadow = Shadow::new("#000", Vec2::new(2.0, 2.0), 16.0);
        assert_eq!(shadow.color, "#000");
        assert_eq!(shadow.offset, Vec2::new(2.0, 2.0));
        assert_eq!(shadow.blur, 16.0);
    }
}
