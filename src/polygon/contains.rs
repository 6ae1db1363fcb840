//! Point containment and collision queries.

use super::boolean::{ClipBackend, OverlayBackend};
use super::core::{Polygon, PolygonSet};
use super::line_chain::LineChain;
use super::offset::OffsetEngine;
use crate::primitives::{cross, Point2};

/// Crossing-number test of `p` against a closed contour.
///
/// Points exactly on the boundary count as inside. Contours with fewer than
/// three vertices contain nothing.
pub fn point_in_contour(p: Point2, contour: &LineChain) -> bool {
    let points = contour.points();
    match contour.bbox() {
        Some(bbox) if bbox.contains_point(p) => {}
        _ => return false,
    }
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut ip = points[0];
    for i in 1..=points.len() {
        let next = points[i % points.len()];

        if next.y == p.y && (next.x == p.x || (ip.y == p.y && (next.x > p.x) == (ip.x < p.x))) {
            return true;
        }

        if (ip.y < p.y) != (next.y < p.y) {
            if ip.x >= p.x && next.x > p.x {
                inside = !inside;
            } else if ip.x >= p.x || next.x > p.x {
                let d = cross(p, ip, next);
                if d == 0 {
                    return true;
                }
                if (d > 0) == (next.y > ip.y) {
                    inside = !inside;
                }
            }
        }

        ip = next;
    }
    inside
}

fn polygon_contains(polygon: &Polygon, p: Point2) -> bool {
    point_in_contour(p, polygon.outline())
        && polygon
            .holes()
            .iter()
            .all(|hole| !point_in_contour(p, hole) || hole.point_on_edge(p))
}

impl PolygonSet {
    /// Returns `true` if any polygon contains `p`.
    ///
    /// A point on an outline or hole edge is contained.
    pub fn contains(&self, p: Point2) -> bool {
        self.polygons().iter().any(|polygon| polygon_contains(polygon, p))
    }

    /// Containment test restricted to one polygon.
    pub fn contains_in(&self, p: Point2, outline: isize) -> bool {
        polygon_contains(self.polygon(outline), p)
    }

    /// Returns `true` if `p` lies exactly on any outline or hole edge.
    pub fn point_on_edge(&self, p: Point2) -> bool {
        self.segments_with_holes()
            .any(|(_, segment)| segment.contains_point(p))
    }

    /// Returns `true` if `p` is within `clearance` of the set's area.
    ///
    /// A positive clearance inflates a copy of the set with the configured
    /// collision arc approximation before testing containment.
    pub fn collide(&self, p: Point2, clearance: i32) -> bool {
        self.collide_with(&mut OffsetEngine::<OverlayBackend>::default(), p, clearance)
    }

    /// [`collide`](Self::collide) using a caller-owned offset engine.
    pub fn collide_with<B: ClipBackend>(
        &self,
        engine: &mut OffsetEngine<B>,
        p: Point2,
        clearance: i32,
    ) -> bool {
        if clearance <= 0 {
            return self.contains(p);
        }
        let mut inflated = self.clone();
        let segments = engine.config().collide_arc_segments;
        engine.inflate(&mut inflated, clearance, segments);
        inflated.contains(p)
    }
}
