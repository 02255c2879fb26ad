pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::challenge::{
    ChallengeDescriptor, ClickKind, PointClickChallenge, RotateChallenge, SlideChallenge,
};
pub use api::config::{CaptchaConfig, PointClickConfig, RotateConfig, SlideConfig};
pub use api::controller::{
    ControlState, PointClickController, RotateController, SlideController,
};
pub use api::error::ChallengeError;
pub use assets::dictionary::{GLYPHS, IDIOMS};
pub use assets::images::ImageCatalog;
pub use components::piece::{PieceKind, PieceSpec, OFFSET_ANGLE};
pub use components::text_item::TextItem;
pub use core::color::{format_hex_color, random_hex_color};
pub use core::math::{clamp, distance, mean, stddev, variance};
pub use core::rng::Rng;
pub use input::events::InteractionEvent;
pub use renderer::ops::{
    CompositeMode, ImageRegion, PathCommand, Rect, Shadow, SurfaceOp,
};
pub use renderer::surface::{replay, Surface};
pub use systems::text_layout::{scatter_text, TextLayoutOptions};
pub use systems::verify::{clicks_match, closest_item, rotation_within, slide_within};
