//! Per-challenge controllers.
//!
//! A controller owns everything that changes after generation: the user's
//! interaction (strip offset, clicks, disc angle), the image load tracking,
//! and the verification outcome. The challenge data itself stays immutable
//! once generated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::challenge::{
    ChallengeDescriptor, PointClickChallenge, RotateChallenge, SlideChallenge,
};
use crate::api::config::{PointClickConfig, RotateConfig, SlideConfig};
use crate::api::error::ChallengeError;
use crate::assets::images::ImageCatalog;
use crate::core::math::clamp;
use crate::core::rng::Rng;
use crate::input::events::InteractionEvent;
use crate::systems::{point_click, rotate, slide, verify};

/// Where a challenge stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    /// Waiting for an answer.
    #[default]
    Ready,
    /// The last answer was wrong.
    Error,
    /// The last answer passed.
    Success,
}

impl ControlState {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlState::Ready => "ready",
            ControlState::Error => "error",
            ControlState::Success => "success",
        }
    }
}

/// Load and outcome bookkeeping shared by every controller.
#[derive(Debug)]
struct Lifecycle {
    label: &'static str,
    state: ControlState,
    loading: bool,
    load_error: Option<ChallengeError>,
    attached: bool,
}

impl Lifecycle {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: ControlState::Ready,
            loading: false,
            load_error: None,
            attached: false,
        }
    }

    fn begin_reset(&mut self) {
        self.state = ControlState::Ready;
        self.loading = true;
        self.load_error = None;
    }

    fn abort_reset(&mut self) {
        self.loading = false;
    }

    fn complete_load(&mut self) {
        self.loading = false;
    }

    fn fail_load(&mut self, cause: String) {
        log::warn!("{}: image load failed: {}", self.label, cause);
        self.load_error = Some(ChallengeError::LoadFailure(cause));
        self.loading = false;
    }

    fn cancel_load(&mut self) {
        self.loading = false;
    }

    fn record(&mut self, passed: bool) -> bool {
        self.state = if passed {
            ControlState::Success
        } else {
            ControlState::Error
        };
        passed
    }
}

// -- Slide puzzle --

/// Drives one slide-puzzle instance.
pub struct SlideController {
    config: SlideConfig,
    lifecycle: Lifecycle,
    challenge: Option<SlideChallenge>,
    offset: f32,
    drag_origin: Option<f32>,
}

impl SlideController {
    pub fn new(config: SlideConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new("slide"),
            challenge: None,
            offset: 0.0,
            drag_origin: None,
        }
    }

    /// Generate a fresh challenge, resetting the strip and the outcome.
    ///
    /// Marks an image load pending. The embedding clears its surfaces now,
    /// replays the plans once the image is in, and reports back through
    /// `complete_load` or `fail_load`.
    pub fn reset(
        &mut self,
        catalog: &ImageCatalog,
        rng: &mut Rng,
    ) -> Result<&SlideChallenge, ChallengeError> {
        self.lifecycle.begin_reset();
        self.offset = 0.0;
        self.drag_origin = None;

        let challenge = match slide::generate(&self.config, catalog, rng) {
            Ok(challenge) => challenge,
            Err(err) => {
                self.lifecycle.abort_reset();
                self.challenge = None;
                return Err(err);
            }
        };
        Ok(&*self.challenge.insert(challenge))
    }

    /// The embedding finished loading and drawing the image.
    pub fn complete_load(&mut self) {
        self.lifecycle.complete_load();
    }

    /// The embedding could not load the image.
    pub fn fail_load(&mut self, cause: impl Into<String>) {
        self.lifecycle.fail_load(cause.into());
    }

    /// The embedding abandoned the pending load.
    pub fn cancel_load(&mut self) {
        self.lifecycle.cancel_load();
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::PointerDown { x, .. } => self.begin_drag(x),
            InteractionEvent::PointerMove { x, .. } => self.drag_to(x),
            InteractionEvent::PointerUp { .. } => self.end_drag(),
            InteractionEvent::AngleInput { .. } => {}
        }
    }

    /// Start a drag. The grab point keeps the strip from jumping, and a
    /// re-grab resumes from wherever the strip sits.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.lifecycle.loading || self.challenge.is_none() {
            return;
        }
        self.drag_origin = Some(pointer_x - self.offset);
    }

    /// Track a drag, clamping the strip to its travel range.
    pub fn drag_to(&mut self, pointer_x: f32) {
        let Some(origin) = self.drag_origin else { return };
        let Some(challenge) = self.challenge.as_ref() else { return };
        self.offset = clamp(pointer_x - origin, 0.0, challenge.max_offset());
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Compare the strip offset against the answer and record the outcome.
    pub fn verify(&mut self, tolerance: f32) -> bool {
        let passed = self.challenge.as_ref().map_or(false, |challenge| {
            verify::slide_within(challenge.correct_x, self.offset, tolerance)
        });
        self.lifecycle.record(passed)
    }

    pub fn attach(&mut self) {
        self.lifecycle.attached = true;
    }

    /// Unhook from event sources, drop in-flight interaction, and cancel
    /// any pending image load.
    pub fn detach(&mut self) {
        self.lifecycle.attached = false;
        self.lifecycle.cancel_load();
        self.drag_origin = None;
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn state(&self) -> ControlState {
        self.lifecycle.state
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.loading
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle.attached
    }

    pub fn load_error(&self) -> Option<&ChallengeError> {
        self.lifecycle.load_error.as_ref()
    }

    pub fn challenge(&self) -> Option<&SlideChallenge> {
        self.challenge.as_ref()
    }

    pub fn descriptor(&self) -> Option<ChallengeDescriptor> {
        self.challenge.clone().map(ChallengeDescriptor::from)
    }
}

// -- Point and click --

/// Drives one point-and-click instance.
pub struct PointClickController {
    config: PointClickConfig,
    lifecycle: Lifecycle,
    challenge: Option<PointClickChallenge>,
    clicks: Vec<Vec2>,
}

impl PointClickController {
    pub fn new(config: PointClickConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new("point-click"),
            challenge: None,
            clicks: Vec::new(),
        }
    }

    /// Generate a fresh challenge, dropping recorded clicks and the outcome.
    pub fn reset(
        &mut self,
        catalog: &ImageCatalog,
        rng: &mut Rng,
    ) -> Result<&PointClickChallenge, ChallengeError> {
        self.lifecycle.begin_reset();
        self.clicks.clear();

        let challenge = match point_click::generate(&self.config, catalog, rng) {
            Ok(challenge) => challenge,
            Err(err) => {
                self.lifecycle.abort_reset();
                self.challenge = None;
                return Err(err);
            }
        };
        Ok(&*self.challenge.insert(challenge))
    }

    pub fn complete_load(&mut self) {
        self.lifecycle.complete_load();
    }

    pub fn fail_load(&mut self, cause: impl Into<String>) {
        self.lifecycle.fail_load(cause.into());
    }

    pub fn cancel_load(&mut self) {
        self.lifecycle.cancel_load();
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        if let InteractionEvent::PointerDown { x, y } = event {
            self.push_click(Vec2::new(x, y));
        }
    }

    /// Record a click. Ignored while loading or once every glyph has one.
    pub fn push_click(&mut self, point: Vec2) {
        let Some(challenge) = self.challenge.as_ref() else { return };
        if self.lifecycle.loading || self.clicks.len() >= challenge.items.len() {
            return;
        }
        self.clicks.push(point);
    }

    /// Drop recorded clicks so the sequence can start over.
    pub fn clear_clicks(&mut self) {
        self.clicks.clear();
    }

    /// True once every glyph has a click recorded.
    pub fn is_complete(&self) -> bool {
        self.challenge
            .as_ref()
            .map_or(false, |challenge| self.clicks.len() == challenge.items.len())
    }

    /// Check the recorded clicks against the glyphs and record the outcome.
    pub fn verify(&mut self) -> bool {
        let passed = self.challenge.as_ref().map_or(false, |challenge| {
            verify::clicks_match(&challenge.items, &self.clicks)
        });
        self.lifecycle.record(passed)
    }

    pub fn attach(&mut self) {
        self.lifecycle.attached = true;
    }

    pub fn detach(&mut self) {
        self.lifecycle.attached = false;
        self.lifecycle.cancel_load();
        self.clicks.clear();
    }

    pub fn clicks(&self) -> &[Vec2] {
        &self.clicks
    }

    pub fn state(&self) -> ControlState {
        self.lifecycle.state
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.loading
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle.attached
    }

    pub fn load_error(&self) -> Option<&ChallengeError> {
        self.lifecycle.load_error.as_ref()
    }

    pub fn challenge(&self) -> Option<&PointClickChallenge> {
        self.challenge.as_ref()
    }

    pub fn descriptor(&self) -> Option<ChallengeDescriptor> {
        self.challenge.clone().map(ChallengeDescriptor::from)
    }
}

// -- Rotate --

/// Drives one rotation instance. The disc is turned either by dragging a
/// track (a full track is a full turn) or by an absolute angle input.
pub struct RotateController {
    config: RotateConfig,
    lifecycle: Lifecycle,
    challenge: Option<RotateChallenge>,
    current_angle: f32,
    track_offset: f32,
    drag_origin: Option<f32>,
}

impl RotateController {
    pub fn new(config: RotateConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::new("rotate"),
            challenge: None,
            current_angle: 0.0,
            track_offset: 0.0,
            drag_origin: None,
        }
    }

    /// Generate a fresh challenge, resetting the disc and the outcome.
    pub fn reset(
        &mut self,
        catalog: &ImageCatalog,
        rng: &mut Rng,
    ) -> Result<&RotateChallenge, ChallengeError> {
        self.lifecycle.begin_reset();
        self.current_angle = 0.0;
        self.track_offset = 0.0;
        self.drag_origin = None;

        let challenge = match rotate::generate(&self.config, catalog, rng) {
            Ok(challenge) => challenge,
            Err(err) => {
                self.lifecycle.abort_reset();
                self.challenge = None;
                return Err(err);
            }
        };
        Ok(&*self.challenge.insert(challenge))
    }

    pub fn complete_load(&mut self) {
        self.lifecycle.complete_load();
    }

    pub fn fail_load(&mut self, cause: impl Into<String>) {
        self.lifecycle.fail_load(cause.into());
    }

    pub fn cancel_load(&mut self) {
        self.lifecycle.cancel_load();
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::PointerDown { x, .. } => self.begin_drag(x),
            InteractionEvent::PointerMove { x, .. } => self.drag_to(x),
            InteractionEvent::PointerUp { .. } => self.end_drag(),
            InteractionEvent::AngleInput { degrees } => self.set_angle(degrees),
        }
    }

    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.lifecycle.loading || self.challenge.is_none() {
            return;
        }
        self.drag_origin = Some(pointer_x - self.track_offset);
    }

    /// Track a drag along the control, turning travel into degrees.
    pub fn drag_to(&mut self, pointer_x: f32) {
        let Some(origin) = self.drag_origin else { return };
        self.track_offset = clamp(pointer_x - origin, 0.0, self.config.track_length);
        self.current_angle = self.angle_from_track();
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Take an absolute angle from a dedicated control, in degrees. The
    /// value is kept as given, not normalized into one turn.
    pub fn set_angle(&mut self, degrees: f32) {
        self.current_angle = degrees;
        self.track_offset = clamp(
            degrees / 360.0 * self.config.track_length,
            0.0,
            self.config.track_length,
        );
    }

    /// Compare the counter-rotation against the answer and record the
    /// outcome.
    pub fn verify(&mut self, tolerance: f32) -> bool {
        let passed = self.challenge.as_ref().map_or(false, |challenge| {
            verify::rotation_within(challenge.correct_angle, self.current_angle, tolerance)
        });
        self.lifecycle.record(passed)
    }

    pub fn attach(&mut self) {
        self.lifecycle.attached = true;
    }

    pub fn detach(&mut self) {
        self.lifecycle.attached = false;
        self.lifecycle.cancel_load();
        self.drag_origin = None;
        self.current_angle = 0.0;
        self.track_offset = 0.0;
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    pub fn state(&self) -> ControlState {
        self.lifecycle.state
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.loading
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle.attached
    }

    pub fn load_error(&self) -> Option<&ChallengeError> {
        self.lifecycle.load_error.as_ref()
    }

    pub fn challenge(&self) -> Option<&RotateChallenge> {
        self.challenge.as_ref()
    }

    pub fn descriptor(&self) -> Option<ChallengeDescriptor> {
        self.challenge.clone().map(ChallengeDescriptor::from)
    }

    fn angle_from_track(&self) -> f32 {
        if self.config.track_length <= 0.0 {
            return 0.0;
        }
        self.track_offset / self.config.track_length * 360.0
    }
}
