//! Axis-aligned bounding boxes on the integer grid.

mod aabb;

pub use aabb::Aabb2;
