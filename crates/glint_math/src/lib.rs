//! Math types for the glint path tracer.
//!
//! Re-exports glam and adds the ray, interval and bounding box types that the
//! intersection code is written against.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
