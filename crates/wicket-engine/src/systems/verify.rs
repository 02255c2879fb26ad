//! Answer predicates. Tolerances come from the embedding.

use glam::Vec2;

use crate::components::text_item::TextItem;
use crate::core::math::distance;

/// True when the strip offset lands within `tolerance` of the hole.
/// The comparison is strict: an offset exactly `tolerance` away fails.
pub fn slide_within(correct_x: f32, offset: f32, tolerance: f32) -> bool {
    (correct_x - offset).abs() < tolerance
}

/// True when the user's counter-rotation cancels the baked-in one.
///
/// The two angles must sum to one full turn. The sum is not normalized, so
/// an answer reached through an extra loop (630 degrees, say) fails even
/// though the disc looks upright. Long-standing behavior, kept as is.
pub fn rotation_within(correct_angle: f32, current_angle: f32, tolerance: f32) -> bool {
    (correct_angle + current_angle - 360.0).abs() < tolerance
}

/// Nearest glyph to `point`, with its center distance. `None` when `items`
/// is empty. Ties keep the earliest glyph.
pub fn closest_item(items: &[TextItem], point: Vec2) -> Option<(&TextItem, f32)> {
    let mut best: Option<(&TextItem, f32)> = None;
    for item in items {
        let d = distance(item.center(), point);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((item, d));
        }
    }
    best
}

/// True when every click hits its glyph, in answer order.
///
/// Click `i` must land within the hit radius of whichever glyph is nearest,
/// and that glyph must carry the text expected at position `i`. Matching is
/// by text, so a repeated character accepts either of its copies. A click
/// count that differs from the glyph count always fails.
pub fn clicks_match(items: &[TextItem], clicks: &[Vec2]) -> bool {
    if clicks.len() != items.len() {
        return false;
    }
    clicks.iter().zip(items).all(|(click, expected)| {
        match closest_item(items, *click) {
            Some((nearest, d)) => d <= nearest.hit_radius() && nearest.text == expected.text,
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_tolerance_is_strict() {
        assert!(slide_within(100.0, 100.0, 5.0));
        assert!(slide_within(100.0, 96.0, 5.0));
        assert!(!slide_within(100.0, 95.0, 5.0));
        assert!(!slide_within(100.0, 94.0, 5.0));
        assert!(slide_within(100.0, 104.9, 5.0));
    }

    #[test]
    fn rotation_must_sum_to_a_full_turn() {
        assert!(rotation_within(90.0, 270.0, 5.0));
        assert!(rotation_within(90.0, 266.0, 5.0));
        assert!(!rotation_within(90.0, 260.0, 5.0));
        assert!(!rotation_within(90.0, 90.0, 5.0));
    }

    #[test]
    fn extra_full_turn_is_not_forgiven() {
        // 630 leaves the disc upright for a 90-degree answer, yet fails.
        assert!(!rotation_within(90.0, 630.0, 5.0));
    }

    fn glyph(text: &str, x: f32, y: f32) -> TextItem {
        TextItem {
            x,
            y,
            text: text.to_string(),
            color: "#333333".to_string(),
            font_size: 30,
            angle: 0.0,
        }
    }

    #[test]
    fn ordered_clicks_on_centers_pass() {
        let items = vec![glyph("山", 10.0, 10.0), glyph("水", 120.0, 40.0)];
        let clicks = vec![Vec2::new(25.0, 25.0), Vec2::new(135.0, 55.0)];
        assert!(clicks_match(&items, &clicks));
    }

    #[test]
    fn swapped_clicks_fail() {
        let items = vec![glyph("山", 10.0, 10.0), glyph("水", 120.0, 40.0)];
        let clicks = vec![Vec2::new(135.0, 55.0), Vec2::new(25.0, 25.0)];
        assert!(!clicks_match(&items, &clicks));
    }

    #[test]
    fn hit_radius_edge_is_inclusive() {
        let items = vec![glyph("山", 10.0, 10.0)];
        // 15 from center, exactly the radius of a 30px glyph
        assert!(clicks_match(&items, &[Vec2::new(40.0, 25.0)]));
        assert!(!clicks_match(&items, &[Vec2::new(40.1, 25.0)]));
    }

    #[test]
    fn click_count_must_match_glyph_count() {
        let items = vec![glyph("山", 10.0, 10.0), glyph("水", 120.0, 40.0)];
        assert!(!clicks_match(&items, &[Vec2::new(25.0, 25.0)]));
        assert!(!clicks_match(&items, &[]));
        assert!(!clicks_match(
            &items,
            &[
                Vec2::new(25.0, 25.0),
                Vec2::new(135.0, 55.0),
                Vec2::new(135.0, 55.0)
            ]
        ));
    }

    #[test]
    fn repeated_characters_accept_either_copy() {
        let items = vec![
            glyph("津", 10.0, 10.0),
            glyph("津", 120.0, 40.0),
            glyph("味", 10.0, 120.0),
        ];
        // First two clicks cross over to the other copy.
        let clicks = vec![
            Vec2::new(135.0, 55.0),
            Vec2::new(25.0, 25.0),
            Vec2::new(25.0, 135.0),
        ];
        assert!(clicks_match(&items, &clicks));
    }

    #[test]
    fn closest_item_prefers_the_nearer_glyph() {
        let items = vec![glyph("山", 0.0, 0.0), glyph("水", 100.0, 0.0)];
        let (item, d) = closest_item(&items, Vec2::new(90.0, 15.0)).unwrap();
        assert_eq!(item.text, "水");
        assert!((d - 25.0).abs() < 1e-6);
        assert!(closest_item(&[], Vec2::ZERO).is_none());
    }
}
