//! Integer 2D line segment type.

use super::point2::cross;
use super::Point2;

/// A directed segment between two grid points.
///
/// A segment whose endpoints coincide is valid; it is how a one-vertex
/// contour reports its only edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a segment from `start` to `end`.
    #[inline]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if start and end are the same point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        (self.end.to_vec2() - self.start.to_vec2()).length()
    }

    /// Exact test for `p` lying on the closed segment.
    #[inline]
    pub fn contains_point(self, p: Point2) -> bool {
        cross(self.start, self.end, p) == 0 && self.in_span(p)
    }

    /// Exact test for the two closed segments sharing at least one point.
    pub fn intersects(self, other: Self) -> bool {
        let d1 = cross(other.start, other.end, self.start);
        let d2 = cross(other.start, other.end, self.end);
        let d3 = cross(self.start, self.end, other.start);
        let d4 = cross(self.start, self.end, other.end);

        if ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
        {
            return true;
        }

        (d1 == 0 && other.in_span(self.start))
            || (d2 == 0 && other.in_span(self.end))
            || (d3 == 0 && self.in_span(other.start))
            || (d4 == 0 && self.in_span(other.end))
    }

    #[inline]
    fn in_span(self, p: Point2) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }
}

impl From<(Point2, Point2)> for Segment2 {
    fn from((start, end): (Point2, Point2)) -> Self {
        Self::new(start, end)
    }
}
