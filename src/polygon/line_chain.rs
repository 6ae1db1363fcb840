//! Contours: ordered polylines that may be closed.

use crate::bounds::Aabb2;
use crate::primitives::{cross, Point2, Segment2};

/// An ordered sequence of vertices with a closed flag.
///
/// When closed, the edge from the last vertex back to the first is part of
/// the chain. Outlines and holes are always closed. Degenerate chains with
/// zero, one or two vertices are allowed and every method accepts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineChain {
    points: Vec<Point2>,
    closed: bool,
}

impl LineChain {
    /// Creates an empty, open chain.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain from vertices, keeping duplicates.
    #[inline]
    pub fn from_points(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a closed chain from vertices, keeping duplicates.
    #[inline]
    pub fn closed_from(points: Vec<Point2>) -> Self {
        Self::from_points(points, true)
    }

    /// Returns `true` if the last vertex connects back to the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sets whether the chain wraps around.
    #[inline]
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Number of vertices.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the chain has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertices in order.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Mutable access to the vertices.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point2] {
        &mut self.points
    }

    /// Returns vertex `index`, panicking when it is out of range.
    #[inline]
    pub fn point(&self, index: usize) -> Point2 {
        assert!(
            index < self.points.len(),
            "vertex index {index} out of range for contour of {} vertices",
            self.points.len()
        );
        self.points[index]
    }

    /// Mutable access to vertex `index`, panicking when it is out of range.
    #[inline]
    pub fn point_mut(&mut self, index: usize) -> &mut Point2 {
        let len = self.points.len();
        assert!(
            index < len,
            "vertex index {index} out of range for contour of {len} vertices"
        );
        &mut self.points[index]
    }

    /// The last vertex, if any.
    #[inline]
    pub fn last_point(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// Appends a vertex unless it repeats the current last vertex.
    ///
    /// Returns `true` if the vertex was added.
    pub fn append(&mut self, p: Point2) -> bool {
        if self.points.last() == Some(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    /// Appends a vertex even if it repeats the current last vertex.
    #[inline]
    pub fn append_allowing_duplicate(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Number of edges, counting the closing edge of a closed chain.
    ///
    /// A closed chain with a single vertex has one degenerate edge.
    #[inline]
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len().saturating_sub(1)
        }
    }

    /// Returns edge `index`, from vertex `index` to its successor.
    pub fn segment(&self, index: usize) -> Segment2 {
        assert!(
            index < self.segment_count(),
            "segment index {index} out of range for contour of {} segments",
            self.segment_count()
        );
        let next = (index + 1) % self.points.len();
        Segment2::new(self.points[index], self.points[next])
    }

    /// Iterates over every edge in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        (0..self.segment_count()).map(move |i| self.segment(i))
    }

    /// Bounding box of the vertices, or `None` for an empty chain.
    pub fn bbox(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.points.iter().copied())
    }

    /// Exact test for `p` lying on any edge (or on the only vertex).
    pub fn point_on_edge(&self, p: Point2) -> bool {
        if self.points.len() == 1 {
            return self.points[0] == p;
        }
        self.segments().any(|s| s.contains_point(p))
    }

    /// Twice the signed enclosed area; positive for counter-clockwise order.
    pub fn signed_area2(&self) -> i128 {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }
        let origin = self.points[0];
        (1..n - 1)
            .map(|i| cross(origin, self.points[i], self.points[i + 1]))
            .sum()
    }

    /// Returns `true` when the vertices wind counter-clockwise.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area2() > 0
    }

    /// Reverses the vertex order.
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Returns a copy with reversed vertex order.
    pub fn reversed(&self) -> Self {
        let mut chain = self.clone();
        chain.reverse();
        chain
    }

    /// Offsets every vertex by `delta`.
    pub fn translate(&mut self, delta: Point2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Removes zero-length edges and returns how many vertices were dropped.
    ///
    /// Consecutive repeats collapse to one vertex. On a closed chain a last
    /// vertex equal to the first is also dropped.
    pub fn remove_null_segments(&mut self) -> usize {
        let before = self.points.len();
        self.points.dedup();
        if self.closed {
            while self.points.len() > 1 && self.points.first() == self.points.last() {
                self.points.pop();
            }
        }
        before - self.points.len()
    }
}

impl FromIterator<Point2> for LineChain {
    /// Collects into a closed chain, skipping consecutive duplicates.
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        let mut chain = Self {
            points: Vec::new(),
            closed: true,
        };
        for p in iter {
            chain.append(p);
        }
        chain
    }
}
