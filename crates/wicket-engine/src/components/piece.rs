use serde::{Deserialize, Serialize};

/// Half-angle of the gap where a knob arc meets the piece edge, in radians.
/// The knob's circle center sits `radius * cos(OFFSET_ANGLE)` outside the
/// edge, which keeps the knob neck narrower than its bulb.
pub const OFFSET_ANGLE: f32 = 0.7;

/// Outline family for the cut-out piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Knob on top and right, notch on the bottom, flat left edge.
    Jigsaw,
    /// Rounded rectangle, for image sets where knobs read poorly.
    RoundedRect,
}

/// Measurements of one cut-out piece.
///
/// `x`/`y` anchor the top-left of the drawn bounding box. A jigsaw outline
/// keeps its body inset by `bulge_size()` from the top and right of that box
/// so the knobs fit; a rounded rectangle fills the box exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub x: f32,
    pub y: f32,
    /// Body width, excluding knobs.
    pub width: f32,
    /// Body height, excluding knobs.
    pub height: f32,
    /// Knob radius (a fifth of the body size).
    pub bulge_radius: f32,
    /// How far the knob's circle center sits outside the body edge.
    pub bulge_offset: f32,
    /// Corner radius for the rounded-rect outline.
    pub corner_radius: f32,
}

impl PieceSpec {
    /// Square jigsaw piece anchored at (x, y).
    pub fn jigsaw(x: f32, y: f32, size: f32) -> Self {
        let bulge_radius = size / 5.0;
        Self {
            kind: PieceKind::Jigsaw,
            x,
            y,
            width: size,
            height: size,
            bulge_radius,
            bulge_offset: bulge_radius * OFFSET_ANGLE.cos(),
            corner_radius: 0.0,
        }
    }

    /// Square rounded-rect piece anchored at (x, y).
    pub fn rounded_rect(x: f32, y: f32, size: f32, corner_radius: f32) -> Self {
        let bulge_radius = size / 5.0;
        Self {
            kind: PieceKind::RoundedRect,
            x,
            y,
            width: size,
            height: size,
            bulge_radius,
            bulge_offset: bulge_radius * OFFSET_ANGLE.cos(),
            corner_radius,
        }
    }

    /// Same outline re-anchored at a different position.
    pub fn at(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }

    /// How far a knob protrudes past the body edge.
    pub fn bulge_size(&self) -> f32 {
        self.bulge_radius + self.bulge_offset
    }

    /// Drawn width including knobs.
    pub fn base_width(&self) -> f32 {
        match self.kind {
            PieceKind::Jigsaw => self.width + self.bulge_size(),
            PieceKind::RoundedRect => self.width,
        }
    }

    /// Drawn height including knobs.
    pub fn base_height(&self) -> f32 {
        match self.kind {
            PieceKind::Jigsaw => self.height + self.bulge_size(),
            PieceKind::RoundedRect => self.height,
        }
    }
}
