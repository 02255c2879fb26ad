pub mod compose;
pub mod ops;
pub mod surface;

// Re-export key types for convenient access
pub use ops::{CompositeMode, ImageRegion, PathCommand, Rect, Shadow, SurfaceOp};
pub use surface::{replay, Surface};
