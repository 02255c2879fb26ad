//! Interaction events fed to controllers by the embedding.

/// A pointer or control gesture in surface coordinates.
///
/// Coordinates are relative to the challenge surface, not the page; the
/// embedding subtracts the surface origin before forwarding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    /// A press began.
    PointerDown { x: f32, y: f32 },
    /// The pointer moved while pressed or hovering.
    PointerMove { x: f32, y: f32 },
    /// The press ended.
    PointerUp { x: f32, y: f32 },
    /// An absolute angle from a dedicated control, in degrees. Values are
    /// taken as given, not normalized into one turn.
    AngleInput { degrees: f32 },
}
