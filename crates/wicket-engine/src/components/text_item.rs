use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One glyph scattered over a challenge image.
///
/// `x`/`y` is the unrotated top-left of the glyph box; the glyph rotates
/// around the box center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    /// The glyph itself (a single character in practice, not enforced).
    pub text: String,
    /// CSS color, `#rrggbb`.
    pub color: String,
    /// Font size in whole pixels; also the side of the glyph box.
    pub font_size: i32,
    /// Rotation in degrees, within [-90, 90].
    pub angle: f32,
}

impl TextItem {
    /// Center of the glyph box; the rotation pivot and the click target.
    pub fn center(&self) -> Vec2 {
        let r = self.font_size as f32 / 2.0;
        Vec2::new(self.x + r, self.y + r)
    }

    /// Radius of the circular click area around `center()`.
    pub fn hit_radius(&self) -> f32 {
        self.font_size as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offsets_by_half_font_size() {
        let item = TextItem {
            x: 100.0,
            y: 40.0,
            text: "w".into(),
            color: "#ff0000".into(),
            font_size: 30,
            angle: -45.0,
        };
        assert_eq!(item.center(), Vec2::new(115.0, 55.0));
        assert_eq!(item.hit_radius(), 15.0);
    }
}
