//! Challenge generation and verification systems.

pub mod point_click;
pub mod rotate;
pub mod slide;
pub mod text_layout;
pub mod verify;

// Re-export key types for convenient access
pub use text_layout::{scatter_text, TextLayoutOptions};
pub use verify::{clicks_match, closest_item, rotation_within, slide_within};
