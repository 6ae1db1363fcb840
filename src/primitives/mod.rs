//! Integer geometric primitives.
//!
//! Vertices live on an integer grid so that equality tests and boolean
//! results are exact. [`Vec2`] is the floating-point companion used where
//! trigonometry is unavoidable (corner rounding, arc generation).

mod point2;
mod segment2;
mod vec2;

pub use point2::{cross, Point2};
pub use segment2::Segment2;
pub use vec2::Vec2;
