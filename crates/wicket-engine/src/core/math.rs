//! Numeric helpers shared by layout, interaction, and verification.

use glam::Vec2;

/// Clamp `value` into [lower, upper]. Values on a bound pass through
/// unchanged.
pub fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    if value <= lower {
        return lower;
    }
    if value >= upper {
        return upper;
    }
    value
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Arithmetic mean. Empty input yields 0.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population variance (divides by N).
pub fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32
}

/// Population standard deviation.
pub fn stddev(values: &[f32]) -> f32 {
    variance(values).sqrt()
}
