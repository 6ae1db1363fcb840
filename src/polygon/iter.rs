//! Flattened cursors over the vertices and edges of a polygon set.
//!
//! Each item carries its [`VertexIndex`] plus boundary flags, so a caller
//! walking a flat vertex stream can still tell where one contour ends and
//! whether it is inside the last polygon of the requested range.

use super::core::{Polygon, PolygonSet};
use crate::primitives::{Point2, Segment2};

/// Global address of one vertex: polygon, contour (0 = outline), vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex {
    pub polygon: usize,
    pub contour: usize,
    pub vertex: usize,
}

impl VertexIndex {
    /// Creates an index from its three parts.
    #[inline]
    pub const fn new(polygon: usize, contour: usize, vertex: usize) -> Self {
        Self {
            polygon,
            contour,
            vertex,
        }
    }

    /// Returns `true` if the vertex belongs to a hole.
    #[inline]
    pub fn is_hole(self) -> bool {
        self.contour > 0
    }
}

/// A vertex produced by [`VertexIter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexVisit {
    pub index: VertexIndex,
    pub point: Point2,
    /// This is the last vertex of its contour.
    pub is_end_contour: bool,
    /// The vertex lies in the last polygon of the iterated range.
    pub is_last_polygon: bool,
}

/// Forward cursor over `(polygon, contour, vertex)` triples.
///
/// Empty contours are skipped. Holes are visited only when requested.
#[derive(Debug, Clone)]
pub struct VertexIter<'a> {
    polygons: &'a [Polygon],
    end: usize,
    with_holes: bool,
    polygon: usize,
    contour: usize,
    vertex: usize,
}

impl<'a> VertexIter<'a> {
    fn new(polygons: &'a [Polygon], first: usize, end: usize, with_holes: bool) -> Self {
        let mut iter = Self {
            polygons,
            end,
            with_holes,
            polygon: first,
            contour: 0,
            vertex: 0,
        };
        iter.settle();
        iter
    }

    fn contour_limit(&self, polygon: &Polygon) -> usize {
        if self.with_holes {
            polygon.contour_count()
        } else {
            1
        }
    }

    // Advances until the cursor rests on an existing vertex or leaves the range.
    fn settle(&mut self) {
        let polygons = self.polygons;
        while self.polygon < self.end {
            let polygon = &polygons[self.polygon];
            if self.contour >= self.contour_limit(polygon) {
                self.polygon += 1;
                self.contour = 0;
                self.vertex = 0;
            } else if self.vertex >= polygon.contours()[self.contour].point_count() {
                self.contour += 1;
                self.vertex = 0;
            } else {
                return;
            }
        }
    }
}

impl<'a> Iterator for VertexIter<'a> {
    type Item = VertexVisit;

    fn next(&mut self) -> Option<VertexVisit> {
        if self.polygon >= self.end {
            return None;
        }
        let contour = &self.polygons[self.polygon].contours()[self.contour];
        let visit = VertexVisit {
            index: VertexIndex::new(self.polygon, self.contour, self.vertex),
            point: contour.point(self.vertex),
            is_end_contour: self.vertex + 1 == contour.point_count(),
            is_last_polygon: self.polygon + 1 == self.end,
        };
        self.vertex += 1;
        self.settle();
        Some(visit)
    }
}

/// Edges of the iterated contours, closing edges included.
///
/// The index is that of the edge's start vertex. A one-vertex contour yields
/// one degenerate edge.
#[derive(Debug, Clone)]
pub struct SegmentIter<'a> {
    vertices: VertexIter<'a>,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = (VertexIndex, Segment2);

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.vertices.next()?;
        let index = visit.index;
        let points = self.vertices.polygons[index.polygon].contours()[index.contour].points();
        let end = points[(index.vertex + 1) % points.len()];
        Some((index, Segment2::new(visit.point, end)))
    }
}

impl PolygonSet {
    /// Iterates vertices of outlines `first..=last`, optionally with holes.
    ///
    /// # Panics
    ///
    /// Panics if either bound is out of range or `first > last`.
    pub fn iterate(&self, first: isize, last: isize, with_holes: bool) -> VertexIter<'_> {
        let first = self.resolve_outline(first);
        let last = self.resolve_outline(last);
        assert!(first <= last, "iteration range {first}..={last} is reversed");
        VertexIter::new(self.polygons(), first, last + 1, with_holes)
    }

    /// Iterates the vertices of a single polygon.
    pub fn iterate_polygon(&self, outline: isize, with_holes: bool) -> VertexIter<'_> {
        self.iterate(outline, outline, with_holes)
    }

    /// Iterates every outline vertex of the set.
    pub fn vertices(&self) -> VertexIter<'_> {
        VertexIter::new(self.polygons(), 0, self.outline_count(), false)
    }

    /// Iterates every outline and hole vertex of the set.
    pub fn vertices_with_holes(&self) -> VertexIter<'_> {
        VertexIter::new(self.polygons(), 0, self.outline_count(), true)
    }

    /// Iterates edges of outlines `first..=last`, optionally with holes.
    pub fn iterate_segments(&self, first: isize, last: isize, with_holes: bool) -> SegmentIter<'_> {
        SegmentIter {
            vertices: self.iterate(first, last, with_holes),
        }
    }

    /// Iterates every outline edge of the set.
    pub fn segments(&self) -> SegmentIter<'_> {
        SegmentIter {
            vertices: self.vertices(),
        }
    }

    /// Iterates every outline and hole edge of the set.
    pub fn segments_with_holes(&self) -> SegmentIter<'_> {
        SegmentIter {
            vertices: self.vertices_with_holes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::LineChain;

    fn chain(coords: &[(i32, i32)]) -> LineChain {
        LineChain::closed_from(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn two_polygons() -> PolygonSet {
        let mut set = PolygonSet::new();
        set.add_outline(chain(&[(0, 0), (10, 0), (10, 10)]));
        set.add_hole(chain(&[(2, 1), (8, 1), (8, 7)]), 0);
        set.add_outline(chain(&[(20, 0), (30, 0), (30, 10), (20, 10)]));
        set
    }

    #[test]
    fn test_outline_only_iteration() {
        let set = two_polygons();
        let points: Vec<_> = set.vertices().map(|v| v.point).collect();
        assert_eq!(points.len(), 7);
        assert_eq!(points[3], Point2::new(20, 0));
    }

    #[test]
    fn test_iteration_with_holes_flags() {
        let set = two_polygons();
        let visits: Vec<_> = set.vertices_with_holes().collect();
        assert_eq!(visits.len(), 10);

        let ends: Vec<_> = visits
            .iter()
            .filter(|v| v.is_end_contour)
            .map(|v| v.index)
            .collect();
        assert_eq!(
            ends,
            vec![
                VertexIndex::new(0, 0, 2),
                VertexIndex::new(0, 1, 2),
                VertexIndex::new(1, 0, 3)
            ]
        );

        assert_eq!(visits.iter().filter(|v| v.index.is_hole()).count(), 3);
        assert!(visits[..6].iter().all(|v| !v.is_last_polygon));
        assert!(visits[6..].iter().all(|v| v.is_last_polygon));
    }

    #[test]
    fn test_iterate_range() {
        let set = two_polygons();
        assert_eq!(set.iterate(-1, -1, true).count(), 4);
        assert_eq!(set.iterate_polygon(0, true).count(), 6);
        assert_eq!(set.iterate_polygon(0, false).count(), 3);
        assert_eq!(set.iterate(0, 1, false).count(), 7);
    }

    #[test]
    fn test_empty_contours_are_skipped() {
        let mut set = PolygonSet::new();
        set.new_outline();
        set.new_outline();
        set.append(Point2::new(5, 5), -1, None);
        set.new_outline();
        let visits: Vec<_> = set.vertices().collect();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].index, VertexIndex::new(1, 0, 0));
        assert!(visits[0].is_end_contour);
        assert!(!visits[0].is_last_polygon);
    }

    #[test]
    fn test_empty_set_yields_nothing() {
        let set = PolygonSet::new();
        assert_eq!(set.vertices().count(), 0);
        assert_eq!(set.segments_with_holes().count(), 0);
    }

    #[test]
    fn test_segments_close_each_contour() {
        let set = two_polygons();
        let segments: Vec<_> = set.segments_with_holes().collect();
        assert_eq!(segments.len(), 10);

        let (index, closing) = segments[2];
        assert_eq!(index, VertexIndex::new(0, 0, 2));
        assert_eq!(closing, Segment2::new(Point2::new(10, 10), Point2::new(0, 0)));

        let (_, hole_closing) = segments[5];
        assert_eq!(hole_closing, Segment2::new(Point2::new(8, 7), Point2::new(2, 1)));
    }

    #[test]
    fn test_single_vertex_contour_segment() {
        let mut set = PolygonSet::new();
        set.add_outline(chain(&[(100, 50)]));
        let segments: Vec<_> = set.segments().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].1.start, Point2::new(100, 50));
        assert_eq!(segments[0].1.end, Point2::new(100, 50));
    }

    #[test]
    #[should_panic(expected = "reversed")]
    fn test_reversed_range_panics() {
        let set = two_polygons();
        let _ = set.iterate(1, 0, false);
    }
}
