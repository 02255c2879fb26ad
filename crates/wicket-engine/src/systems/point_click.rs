//! Point-and-click challenge generation.

use crate::api::challenge::{ClickKind, PointClickChallenge};
use crate::api::config::PointClickConfig;
use crate::api::error::ChallengeError;
use crate::assets::dictionary;
use crate::assets::images::ImageCatalog;
use crate::core::rng::Rng;
use crate::renderer::compose;
use crate::renderer::ops::{ImageRegion, Rect, SurfaceOp};
use crate::systems::text_layout::{self, TextLayoutOptions};

/// Generate a fresh point-and-click challenge.
///
/// `items` carries the glyphs in answer order: distinct random glyphs for
/// [`ClickKind::Order`], an idiom's characters in reading order for
/// [`ClickKind::Idiom`]. Their on-canvas placement is shuffled either way.
pub fn generate(
    config: &PointClickConfig,
    catalog: &ImageCatalog,
    rng: &mut Rng,
) -> Result<PointClickChallenge, ChallengeError> {
    let texts = match config.kind {
        ClickKind::Order => dictionary::random_glyphs(rng, config.glyph_count)?,
        ClickKind::Idiom => dictionary::random_idiom(rng),
    };
    let options = TextLayoutOptions {
        min_font_size: config.min_font_size,
        max_font_size: config.max_font_size,
        safe_padding: config.safe_padding,
    };
    let items = text_layout::scatter_text(config.width, config.height, &texts, &options, rng)?;
    let image = catalog.pick(rng)?.to_owned();

    let canvas = Rect::new(0.0, 0.0, config.width, config.height);
    let mut plan = vec![SurfaceOp::DrawImage {
        src: ImageRegion::Pixels(canvas),
        dst: canvas,
    }];
    for item in &items {
        plan.extend(compose::glyph_ops(item));
    }

    Ok(PointClickChallenge {
        width: config.width,
        height: config.height,
        kind: config.kind,
        items,
        image,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> ImageCatalog {
        ImageCatalog::new(vec!["photo.jpg".into()])
    }

    #[test]
    fn order_kind_yields_distinct_glyphs() {
        let config = PointClickConfig::default();
        let mut rng = Rng::new(9);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();

        assert_eq!(challenge.kind, ClickKind::Order);
        assert_eq!(challenge.items.len(), config.glyph_count);
        let unique: HashSet<&str> = challenge.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(unique.len(), challenge.items.len());
    }

    #[test]
    fn idiom_kind_yields_four_characters_in_reading_order() {
        let config = PointClickConfig {
            kind: ClickKind::Idiom,
            ..PointClickConfig::default()
        };
        let mut rng = Rng::new(9);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();

        assert_eq!(challenge.items.len(), 4);
        let joined: String = challenge.items.iter().map(|i| i.text.as_str()).collect();
        assert!(dictionary::IDIOMS.contains(&joined.as_str()));
    }

    #[test]
    fn plan_draws_the_photo_then_every_glyph() {
        let config = PointClickConfig::default();
        let mut rng = Rng::new(2);
        let challenge = generate(&config, &catalog(), &mut rng).unwrap();

        assert!(matches!(challenge.plan[0], SurfaceOp::DrawImage { .. }));
        // Six ops per glyph: save, translate, rotate, color, text, restore.
        assert_eq!(challenge.plan.len(), 1 + challenge.items.len() * 6);
        let texts: Vec<&str> = challenge
            .plan
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let expected: Vec<&str> = challenge.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let config = PointClickConfig::default();
        let mut rng = Rng::new(2);
        assert!(matches!(
            generate(&config, &ImageCatalog::new(Vec::new()), &mut rng),
            Err(ChallengeError::Precondition(_))
        ));
    }

    #[test]
    fn oversized_glyph_count_is_rejected() {
        let config = PointClickConfig {
            width: 140.0,
            height: 140.0,
            glyph_count: 9,
            ..PointClickConfig::default()
        };
        let mut rng = Rng::new(2);
        assert!(matches!(
            generate(&config, &catalog(), &mut rng),
            Err(ChallengeError::Precondition(_))
        ));
    }

    #[test]
    fn layout_follows_the_config_bounds() {
        let config = PointClickConfig {
            width: 400.0,
            height: 260.0,
            min_font_size: 40,
            max_font_size: 50,
            safe_padding: 30.0,
            ..PointClickConfig::default()
        };
        for seed in 1..50u64 {
            let mut rng = Rng::new(seed);
            let challenge = generate(&config, &catalog(), &mut rng).unwrap();
            for item in &challenge.items {
                assert!((40..50).contains(&item.font_size), "seed {}", seed);
                let size = item.font_size as f32;
                assert!(item.x >= 30.0);
                assert!(item.y >= 30.0);
                assert!(item.x + size <= 370.0);
                assert!(item.y + size <= 230.0);
            }
        }
    }
}
