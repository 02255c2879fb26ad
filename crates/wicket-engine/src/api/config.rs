use serde::{Deserialize, Serialize};

use crate::api::challenge::ClickKind;
use crate::components::piece::PieceKind;

/// Slide-puzzle settings, provided by the embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Piece outline family.
    pub piece_kind: PieceKind,
    /// Piece body size in pixels (pieces are square).
    pub piece_size: f32,
    /// Corner radius for rounded-rect pieces.
    pub corner_radius: f32,
    /// Margin kept between the hole and the canvas edge.
    pub safe_padding: f32,
    /// The piece's inset from the left edge of its strip.
    pub strip_padding: f32,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 160.0,
            piece_kind: PieceKind::Jigsaw,
            piece_size: 50.0,
            corner_radius: 5.0,
            safe_padding: 4.0,
            strip_padding: 2.0,
        }
    }
}

/// Point-click settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointClickConfig {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Text pool the challenge draws from.
    pub kind: ClickKind,
    /// How many glyphs an `Order` challenge scatters.
    pub glyph_count: usize,
    /// Smallest glyph size, pixels.
    pub min_font_size: i32,
    /// Largest glyph size, pixels, exclusive.
    pub max_font_size: i32,
    /// Margin kept clear around the canvas edge.
    pub safe_padding: f32,
}

impl Default for PointClickConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 180.0,
            kind: ClickKind::Order,
            glyph_count: 5,
            min_font_size: 26,
            max_font_size: 36,
            safe_padding: 15.0,
        }
    }
}

/// Rotate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateConfig {
    /// Canvas side length in pixels; the disc fills it.
    pub size: f32,
    /// Length of the drag track that maps to a full turn.
    pub track_length: f32,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            track_length: 220.0,
        }
    }
}

/// Top-level configuration blob, accepted by the bridge as one JSON string.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptchaConfig {
    /// Background image pool shared by all challenge kinds.
    pub images: Vec<String>,
    pub slide: SlideConfig,
    pub point: PointClickConfig,
    pub rotate: RotateConfig,
}

impl CaptchaConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "images": ["bg/forest.jpg", "bg/harbor.jpg"],
            "slide": { "width": 300, "height": 150, "piece_kind": "rounded_rect", "piece_size": 40, "safe_padding": 8 },
            "point": { "kind": "idiom", "safe_padding": 20 },
            "rotate": { "size": 150 }
        }"#;
        let config = CaptchaConfig::from_json(json).unwrap();

        assert_eq!(config.images.len(), 2);
        assert_eq!(config.slide.width, 300.0);
        assert_eq!(config.slide.piece_kind, PieceKind::RoundedRect);
        assert_eq!(config.slide.piece_size, 40.0);
        assert_eq!(config.slide.safe_padding, 8.0);
        assert_eq!(config.point.safe_padding, 20.0);
        // untouched fields keep their defaults
        assert_eq!(config.slide.corner_radius, 5.0);
        assert_eq!(config.slide.strip_padding, 2.0);
        assert_eq!(config.point.kind, ClickKind::Idiom);
        assert_eq!(config.point.glyph_count, 5);
        assert_eq!(config.point.min_font_size, 26);
        assert_eq!(config.point.max_font_size, 36);
        assert_eq!(config.rotate.size, 150.0);
        assert_eq!(config.rotate.track_length, 220.0);
    }

    #[test]
    fn parse_minimal_config() {
        let config = CaptchaConfig::from_json("{}").unwrap();
        assert!(config.images.is_empty());
        assert_eq!(config.slide.width, 320.0);
        assert_eq!(config.slide.safe_padding, 4.0);
        assert_eq!(config.point.glyph_count, 5);
        assert_eq!(config.point.safe_padding, 15.0);
        assert_eq!(config.rotate.size, 200.0);
    }
}
