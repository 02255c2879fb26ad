use serde::{Deserialize, Serialize};

use crate::components::piece::PieceSpec;
use crate::components::text_item::TextItem;
use crate::renderer::ops::SurfaceOp;

/// Which text pool a point-click challenge draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickKind {
    /// Distinct dictionary glyphs, clicked in the order they were issued.
    Order,
    /// A four-character idiom, clicked in reading order.
    Idiom,
}

/// A generated slide-puzzle challenge: the answer plus one draw plan per
/// canvas layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideChallenge {
    pub width: f32,
    pub height: f32,
    /// The cut-out piece, anchored at the hole.
    pub piece: PieceSpec,
    /// Drag offset that aligns the strip's piece with the hole.
    pub correct_x: f32,
    /// Width of the floating strip canvas.
    pub strip_width: f32,
    /// The piece's inset from the strip's left edge.
    pub strip_padding: f32,
    /// Background image URL the embedding must load and bind.
    pub image: String,
    /// Full preview layer.
    pub full_plan: Vec<SurfaceOp>,
    /// Background layer with the hole cut out.
    pub hole_plan: Vec<SurfaceOp>,
    /// Floating piece strip layer.
    pub piece_plan: Vec<SurfaceOp>,
}

impl SlideChallenge {
    /// Largest drag offset the strip can reach.
    pub fn max_offset(&self) -> f32 {
        (self.width - self.strip_width).max(0.0)
    }
}

/// A generated point-click challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointClickChallenge {
    pub width: f32,
    pub height: f32,
    pub kind: ClickKind,
    /// Scattered glyphs, in required click order.
    pub items: Vec<TextItem>,
    /// Background image URL the embedding must load and bind.
    pub image: String,
    pub plan: Vec<SurfaceOp>,
}

/// A generated rotate challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotateChallenge {
    /// Canvas side length; also the disc diameter.
    pub size: f32,
    /// Rotation baked into the drawn disc, degrees in [10, 350).
    pub correct_angle: f32,
    /// Background image URL the embedding must load and bind.
    pub image: String,
    pub plan: Vec<SurfaceOp>,
}

/// One whole generated challenge of any kind.
///
/// Descriptors are created whole on each reset and never mutated afterward;
/// transient interaction state (drag offsets, clicks, the current angle)
/// lives on the controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChallengeDescriptor {
    SlidePuzzle(SlideChallenge),
    PointClick(PointClickChallenge),
    Rotate(RotateChallenge),
}

impl ChallengeDescriptor {
    /// The background image the embedding must load for this challenge.
    pub fn image(&self) -> &str {
        match self {
            ChallengeDescriptor::SlidePuzzle(c) => &c.image,
            ChallengeDescriptor::PointClick(c) => &c.image,
            ChallengeDescriptor::Rotate(c) => &c.image,
        }
    }

    /// Short kind label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ChallengeDescriptor::SlidePuzzle(_) => "slide_puzzle",
            ChallengeDescriptor::PointClick(_) => "point_click",
            ChallengeDescriptor::Rotate(_) => "rotate",
        }
    }
}

impl From<SlideChallenge> for ChallengeDescriptor {
    fn from(challenge: SlideChallenge) -> Self {
        ChallengeDescriptor::SlidePuzzle(challenge)
    }
}

impl From<PointClickChallenge> for ChallengeDescriptor {
    fn from(challenge: PointClickChallenge) -> Self {
        ChallengeDescriptor::PointClick(challenge)
    }
}

impl From<RotateChallenge> for ChallengeDescriptor {
    fn from(challenge: RotateChallenge) -> Self {
        ChallengeDescriptor::Rotate(challenge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_round_trips_through_json() {
        let challenge = RotateChallenge {
            size: 150.0,
            correct_angle: 120.0,
            image: "bg/harbor.jpg".into(),
            plan: crate::renderer::compose::rotated_disc_ops(150.0, 120.0),
        };
        let descriptor = ChallengeDescriptor::from(challenge);

        let json = serde_json::to_string(&descriptor).unwrap();
        let back: ChallengeDescriptor = serde_json::from_str(&json).unwrap();

        assert_eq!(back.kind_name(), "rotate");
        assert_eq!(back.image(), "bg/harbor.jpg");
        match back {
            ChallengeDescriptor::Rotate(c) => {
                assert_eq!(c.correct_angle, 120.0);
                assert_eq!(c.plan.len(), 10);
            }
            other => panic!("expected rotate, got {}", other.kind_name()),
        }
    }

    #[test]
    fn max_offset_accounts_for_strip_width() {
        let challenge = SlideChallenge {
            width: 320.0,
            height: 160.0,
            piece: PieceSpec::jigsaw(100.0, 50.0, 40.0),
            correct_x: 98.0,
            strip_width: 58.0,
            strip_padding: 2.0,
            image: "bg/forest.jpg".into(),
            full_plan: Vec::new(),
            hole_plan: Vec::new(),
            piece_plan: Vec::new(),
        };
        assert_eq!(challenge.max_offset(), 262.0);
    }
}
