//! Rotation challenge generation.

use crate::api::challenge::RotateChallenge;
use crate::api::config::RotateConfig;
use crate::api::error::ChallengeError;
use crate::assets::images::ImageCatalog;
use crate::core::rng::Rng;
use crate::renderer::compose;

/// Smallest rotation ever baked into the disc, degrees.
pub const MIN_ANGLE: f32 = 10.0;
/// Largest rotation ever baked into the disc, degrees, exclusive.
pub const MAX_ANGLE: f32 = 350.0;

/// Generate a fresh rotation challenge.
///
/// The baked-in angle stays inside `[MIN_ANGLE, MAX_ANGLE)` so the disc is
/// always visibly turned and never a full loop away from upright.
pub fn generate(
    config: &RotateConfig,
    catalog: &ImageCatalog,
    rng: &mut Rng,
) -> Result<RotateChallenge, ChallengeError> {
    let correct_angle = rng.int_range(MIN_ANGLE, MAX_ANGLE) as f32;
    let image = catalog.pick(rng)?.to_owned();
    let plan = compose::rotated_disc_ops(config.size, correct_angle);

    Ok(RotateChallenge {
        size: config.size,
        correct_angle,
        image,
        plan,
    })
}
