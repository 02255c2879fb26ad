//! Public API: challenge data, configuration, controllers, errors.

pub mod challenge;
pub mod config;
pub mod controller;
pub mod error;

// Re-export key types for convenient access
pub use challenge::{
    ChallengeDescriptor, ClickKind, PointClickChallenge, RotateChallenge, SlideChallenge,
};
pub use config::{CaptchaConfig, PointClickConfig, RotateConfig, SlideConfig};
pub use controller::{ControlState, PointClickController, RotateController, SlideController};
pub use error::ChallengeError;
