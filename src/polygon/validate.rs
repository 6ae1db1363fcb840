//! Self-intersection detection.
//!
//! Edges of one polygon, outline and holes together, are tested pairwise.
//! Two edges that share a vertex because they follow each other in a contour
//! are not reported. Touching counts as intersecting.
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonSet};
//!
//! let mut bowtie = PolygonSet::new();
//! bowtie.add_outline(LineChain::closed_from(vec![
//!     Point2::new(0, 0),
//!     Point2::new(10, 10),
//!     Point2::new(10, 0),
//!     Point2::new(0, 10),
//! ]));
//! assert!(bowtie.is_self_intersecting());
//! ```

use super::core::PolygonSet;
use super::iter::VertexIndex;
use crate::primitives::Segment2;

/// A pair of non-adjacent edges that touch or cross.
///
/// Each edge is named by the index of its start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfIntersection {
    pub first: VertexIndex,
    pub second: VertexIndex,
}

impl PolygonSet {
    /// Returns `true` if any polygon has touching or crossing edges.
    pub fn is_self_intersecting(&self) -> bool {
        (0..self.outline_count()).any(|i| !self.polygon_intersections(i, true).is_empty())
    }

    /// Lists every intersecting edge pair, polygon by polygon.
    pub fn find_self_intersections(&self) -> Vec<SelfIntersection> {
        (0..self.outline_count())
            .flat_map(|i| self.polygon_intersections(i, false))
            .collect()
    }

    fn polygon_intersections(&self, polygon: usize, first_only: bool) -> Vec<SelfIntersection> {
        let edges: Vec<(VertexIndex, Segment2)> =
            self.iterate_segments(polygon as isize, polygon as isize, true).collect();
        let contours = self.polygons()[polygon].contours();
        let contour_len = |index: VertexIndex| contours[index.contour].point_count();

        let mut found = Vec::new();
        for (i, &(a_index, a)) in edges.iter().enumerate() {
            for &(b_index, b) in &edges[i + 1..] {
                if a_index.contour == b_index.contour {
                    let last = contour_len(a_index) - 1;
                    let adjacent = b_index.vertex == a_index.vertex + 1
                        || (a_index.vertex == 0 && b_index.vertex == last);
                    if adjacent {
                        continue;
                    }
                }
                if a.intersects(b) {
                    found.push(SelfIntersection {
                        first: a_index,
                        second: b_index,
                    });
                    if first_only {
                        return found;
                    }
                }
            }
        }
        found
    }
}
