//! Input events.

pub mod events;

// Re-export key types for convenient access
pub use events::InteractionEvent;
