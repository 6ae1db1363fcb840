//! Integer axis-aligned bounding box.

use crate::primitives::Point2;

/// An axis-aligned box with inclusive integer bounds.
///
/// A box built from a single point has zero width and height and still
/// contains that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aabb2 {
    /// Minimum corner (smallest x and y values).
    pub min: Point2,
    /// Maximum corner (largest x and y values).
    pub max: Point2,
}

impl Aabb2 {
    /// Creates a box from min and max corners without reordering them.
    #[inline]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// A zero-sized box at `p`.
    #[inline]
    pub fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Extent along X, widened so it cannot overflow.
    #[inline]
    pub fn width(self) -> i64 {
        self.max.x as i64 - self.min.x as i64
    }

    /// Extent along Y, widened so it cannot overflow.
    #[inline]
    pub fn height(self) -> i64 {
        self.max.y as i64 - self.min.y as i64
    }

    /// Smallest box containing `self` and `p`.
    #[inline]
    pub fn expand_to_include(self, p: Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Grows the box by `clearance` on every side, saturating at the grid limits.
    #[inline]
    pub fn inflate(self, clearance: i32) -> Self {
        Self {
            min: Point2::new(
                self.min.x.saturating_sub(clearance),
                self.min.y.saturating_sub(clearance),
            ),
            max: Point2::new(
                self.max.x.saturating_add(clearance),
                self.max.y.saturating_add(clearance),
            ),
        }
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains_point(self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the boxes overlap or touch.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
