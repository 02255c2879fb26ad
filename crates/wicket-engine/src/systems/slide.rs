//! Slide-puzzle challenge generation.

use crate::api::challenge::SlideChallenge;
use crate::api::config::SlideConfig;
use crate::api::error::ChallengeError;
use crate::assets::images::ImageCatalog;
use crate::components::piece::{PieceKind, PieceSpec};
use crate::core::rng::Rng;
use crate::renderer::compose;
use crate::renderer::ops::{CompositeMode, ImageRegion, Rect, SurfaceOp};

/// Generate a fresh slide-puzzle challenge.
///
/// The hole always lands to the right of the strip, so the piece is never
/// already in place at offset zero. `correct_x` is the strip offset that
/// lines the piece up with the hole.
pub fn generate(
    config: &SlideConfig,
    catalog: &ImageCatalog,
    rng: &mut Rng,
) -> Result<SlideChallenge, ChallengeError> {
    let template = match config.piece_kind {
        PieceKind::Jigsaw => PieceSpec::jigsaw(0.0, 0.0, config.piece_size),
        PieceKind::RoundedRect => {
            PieceSpec::rounded_rect(0.0, 0.0, config.piece_size, config.corner_radius)
        }
    };
    let base_width = template.base_width();
    let base_height = template.base_height();
    let strip_width = base_width + config.strip_padding * 2.0;

    let min_x = strip_width + config.safe_padding;
    let max_x = config.width - config.safe_padding - base_width;
    let max_y = config.height - config.safe_padding - base_height;
    if max_x <= min_x || max_y <= config.safe_padding {
        return Err(ChallengeError::Precondition(
            "canvas too small for the piece",
        ));
    }

    let hole_x = rng.int_range(min_x, max_x) as f32;
    let hole_y = rng.int_range(config.safe_padding, max_y) as f32;
    let piece = template.at(hole_x, hole_y);
    let image = catalog.pick(rng)?.to_owned();

    let canvas = Rect::new(0.0, 0.0, config.width, config.height);
    let full_plan = vec![SurfaceOp::DrawImage {
        src: ImageRegion::Pixels(canvas),
        dst: canvas,
    }];

    // Hole first, then the photo composited underneath it.
    let mut hole_plan = compose::missing_piece_ops(&piece);
    hole_plan.push(SurfaceOp::Save);
    hole_plan.push(SurfaceOp::Composite {
        mode: CompositeMode::DestinationOver,
    });
    hole_plan.push(SurfaceOp::DrawImage {
        src: ImageRegion::Pixels(canvas),
        dst: canvas,
    });
    hole_plan.push(SurfaceOp::Restore);

    let piece_plan =
        compose::piece_strip_ops(&piece, config.strip_padding, strip_width, config.height);

    Ok(SlideChallenge {
        width: config.width,
        height: config.height,
        piece,
        correct_x: hole_x - config.strip_padding,
        strip_width,
        strip_padding: config.strip_padding,
        image,
        full_plan,
        hole_plan,
        piece_plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ops::PathCommand;

    fn catalog() -> ImageCatalog {
        ImageCatalog::new(vec!["a.jpg".into(), "b.jpg".into()])
    }

    #[test]
    fn hole_stays_clear_of_the_strip_and_the_edges() {
        let config = SlideConfig {
            width: 300.0,
            height: 150.0,
            piece_size: 40.0,
            ..SlideConfig::default()
        };
        for seed in 1..300u64 {
            let mut rng = Rng::new(seed);
            let challenge = generate(&config, &catalog(), &mut rng).unwrap();
            let piece = &challenge.piece;
            let base_w = piece.base_width();
            let base_h = piece.base_height();

            let pad = config.safe_padding;
            assert!(piece.x >= challenge.strip_width + pad, "seed {}", seed);
            assert!(piece.x + base_w <= 300.0 - pad);
            assert!(piece.y >= pad);
            assert!(piece.y + base_h <= 150.0 - pad);
        }
    }

    #[test]
    fn answer_is_always_reachable_by_the_strip() {
        let config = SlideConfig::default();
        for seed in 1..300u64 {
            let mut rng = Rng::new(seed);
            let challenge = generate(&config, &catalog(), &mut rng).unwrap();
            assert!(challenge.correct_x > 0.0);
            assert!(challenge.correct_x <= challenge.max_offset());
            assert_eq!(challenge.correct_x, challenge.piece.x - challenge.strip_padding);
        }
    }

    #[test]
    fn strip_plan_slices_the_photo_at_the_hole() {
        let config = SlideConfig::default();
        let mut rng = Rng::new(11);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();

        let slice = challenge.piece_plan.iter().find_map(|op| match op {
            SurfaceOp::DrawImage {
                src: ImageRegion::Pixels(rect),
                ..
            } => Some(*rect),
            _ => None,
        });
        let slice = slice.unwrap();
        assert_eq!(slice.x, challenge.piece.x - challenge.strip_padding);
        assert_eq!(slice.w, challenge.strip_width);
        assert_eq!(slice.h, config.height);
    }

    #[test]
    fn paddings_come_from_the_config() {
        let config = SlideConfig {
            safe_padding: 10.0,
            strip_padding: 6.0,
            ..SlideConfig::default()
        };
        for seed in 1..100u64 {
            let mut rng = Rng::new(seed);
            let challenge = generate(&config, &catalog(), &mut rng).unwrap();

            assert_eq!(challenge.strip_padding, 6.0);
            assert_eq!(challenge.strip_width, challenge.piece.base_width() + 12.0);
            assert!(challenge.piece.x >= challenge.strip_width + 10.0, "seed {}", seed);
            assert_eq!(challenge.correct_x, challenge.piece.x - 6.0);
        }
    }

    #[test]
    fn hole_plan_puts_the_photo_underneath() {
        let config = SlideConfig::default();
        let mut rng = Rng::new(7);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();

        let under = challenge
            .hole_plan
            .iter()
            .position(|op| {
                matches!(
                    op,
                    SurfaceOp::Composite {
                        mode: CompositeMode::DestinationOver
                    }
                )
            })
            .unwrap();
        assert!(matches!(
            challenge.hole_plan[under + 1],
            SurfaceOp::DrawImage { .. }
        ));
        assert!(matches!(challenge.hole_plan.last(), Some(SurfaceOp::Restore)));
    }

    #[test]
    fn rounded_piece_paths_use_corner_arcs() {
        let config = SlideConfig {
            piece_kind: PieceKind::RoundedRect,
            ..SlideConfig::default()
        };
        let mut rng = Rng::new(3);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();
        assert_eq!(challenge.piece.kind, PieceKind::RoundedRect);
        assert!(challenge
            .piece_plan
            .iter()
            .any(|op| matches!(op, SurfaceOp::Path(PathCommand::ArcTo { .. }))));
    }

    #[test]
    fn cramped_canvas_is_rejected() {
        let config = SlideConfig {
            width: 120.0,
            height: 80.0,
            piece_size: 50.0,
            ..SlideConfig::default()
        };
        let mut rng = Rng::new(1);
        assert!(matches!(
            generate(&config, &catalog(), &mut rng),
            Err(ChallengeError::Precondition(_))
        ));
    }

    #[test]
    fn same_seed_reproduces_the_challenge() {
        let config = SlideConfig::default();
        let a = generate(&config, &catalog(), &mut Rng::new(42)).unwrap();
        let b = generate(&config, &catalog(), &mut Rng::new(42)).unwrap();
        assert_eq!(a.piece.x, b.piece.x);
        assert_eq!(a.piece.y, b.piece.y);
        assert_eq!(a.image, b.image);
        assert_eq!(a.correct_x, b.correct_x);
    }
}
