//! Grid-based glyph scattering.
//!
//! The canvas is cut into a centered grid of square cells sized off the
//! largest font; every glyph draws its own cell and jitters inside it.
//! Distinct cells make overlap impossible, so no rejection sampling is
//! needed.

use glam::Vec2;

use crate::api::error::ChallengeError;
use crate::components::text_item::TextItem;
use crate::core::color::random_hex_color;
use crate::core::rng::Rng;

/// Cell side as a factor of the largest font size. Leaves room for a glyph
/// to jitter and rotate without escaping its cell.
const CELL_FACTOR: f32 = 1.6;

/// Tuning for the scatter grid.
#[derive(Debug, Clone)]
pub struct TextLayoutOptions {
    /// Smallest glyph size, pixels.
    pub min_font_size: i32,
    /// Largest glyph size, pixels, exclusive.
    pub max_font_size: i32,
    /// Margin kept clear around the canvas edge.
    pub safe_padding: f32,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self {
            min_font_size: 26,
            max_font_size: 36,
            safe_padding: 15.0,
        }
    }
}

/// Scatter `texts` over a `width` x `height` canvas without overlap.
///
/// Returns items in `texts` order, which is also the required click order.
/// Fails when the padded canvas has fewer grid cells than texts.
pub fn scatter_text(
    width: f32,
    height: f32,
    texts: &[String],
    options: &TextLayoutOptions,
    rng: &mut Rng,
) -> Result<Vec<TextItem>, ChallengeError> {
    let cell = options.max_font_size as f32 * CELL_FACTOR;
    let cols = ((width - options.safe_padding * 2.0) / cell).floor() as i64;
    let rows = ((height - options.safe_padding * 2.0) / cell).floor() as i64;
    if cols <= 0 || rows <= 0 || texts.len() > (cols * rows) as usize {
        return Err(ChallengeError::Precondition(
            "text count exceeds the layout grid",
        ));
    }

    let grid_origin = Vec2::new(
        (width - cols as f32 * cell) / 2.0,
        (height - rows as f32 * cell) / 2.0,
    );

    let cells: Vec<i64> = (0..cols * rows).collect();
    let picked = rng.sample(&cells, texts.len());

    let items = picked
        .into_iter()
        .zip(texts)
        .map(|(index, text)| {
            let col = (index % cols) as f32;
            let row = (index / cols) as f32;
            let font_size =
                rng.int_range(options.min_font_size as f32, options.max_font_size as f32);

            let cell_x = grid_origin.x + col * cell;
            let cell_y = grid_origin.y + row * cell;
            let x = rng.int_range(cell_x, cell_x + cell - font_size as f32) as f32;
            let y = rng.int_range(cell_y, cell_y + cell - font_size as f32) as f32;

            TextItem {
                x,
                y,
                text: text.clone(),
                color: random_hex_color(rng),
                font_size,
                angle: rng.int_range(-90.0, 90.0) as f32,
            }
        })
        .collect();

    Ok(items)
}
