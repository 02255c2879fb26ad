//! Random CSS colors for scattered glyphs.

use crate::core::rng::Rng;

/// Format a 24-bit value as a `#rrggbb` CSS color.
///
/// Values shorter than six hex digits are padded on the RIGHT with zeros
/// (0xff becomes `#ff0000`, not `#0000ff`). Glyph palettes in deployed
/// embeddings depend on this padding.
pub fn format_hex_color(value: u32) -> String {
    let digits = format!("{:x}", value);
    let mut color = String::with_capacity(7);
    color.push('#');
    color.push_str(&digits);
    for _ in digits.len()..6 {
        color.push('0');
    }
    color
}

/// Random opaque CSS color in `#rrggbb` form.
pub fn random_hex_color(rng: &mut Rng) -> String {
    format_hex_color(rng.next_int(0xffffff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_values_on_the_right() {
        assert_eq!(format_hex_color(0xff), "#ff0000");
        assert_eq!(format_hex_color(0x0), "#000000");
        assert_eq!(format_hex_color(0xabc), "#abc000");
    }

    #[test]
    fn six_digit_values_pass_through() {
        assert_eq!(format_hex_color(0xabcdef), "#abcdef");
        assert_eq!(format_hex_color(0x123456), "#123456");
    }

    #[test]
    fn random_color_is_well_formed() {
        let mut rng = Rng::new(42);
        for _ in 0..50 {
            let color = random_hex_color(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
