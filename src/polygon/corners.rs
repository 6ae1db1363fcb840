//! Corner rounding: chamfers and fillets applied vertex by vertex.
//!
//! Every vertex is replaced using the two edges meeting at it. A chamfer
//! cuts the corner with a straight segment; a fillet replaces it with a
//! polygonal circular arc tangent to both edges. Cut distances and radii are
//! clamped so that no more than half of an edge is consumed from either end.
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonSet};
//!
//! let mut set = PolygonSet::new();
//! set.add_outline(LineChain::closed_from(vec![
//!     Point2::new(0, 0),
//!     Point2::new(100, 0),
//!     Point2::new(100, 100),
//!     Point2::new(0, 100),
//! ]));
//!
//! let chamfered = set.chamfer_polygon(10, 0);
//! assert_eq!(chamfered.outline().point_count(), 8);
//! ```

use std::f64::consts::PI;

use tracing::instrument;

use super::boolean::PolygonMode;
use super::core::{Polygon, PolygonSet};
use super::line_chain::LineChain;
use crate::primitives::{Point2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerMode {
    Chamfer,
    Fillet { segments: u32 },
}

/// Replaces every corner of `contour` with a straight cut `distance` long
/// along each adjacent edge.
pub fn chamfer_contour(contour: &LineChain, distance: u32) -> LineChain {
    round_corners(contour, CornerMode::Chamfer, distance)
}

/// Replaces every corner of `contour` with an arc of `radius`, using
/// `segments` steps per full circle.
pub fn fillet_contour(contour: &LineChain, radius: u32, segments: u32) -> LineChain {
    round_corners(contour, CornerMode::Fillet { segments }, radius)
}

fn round_corners(contour: &LineChain, mode: CornerMode, distance: u32) -> LineChain {
    let points = contour.points();
    let n = points.len();
    let mut out = LineChain::from_points(Vec::with_capacity(n * 2), true);

    for (i, &vertex) in points.iter().enumerate() {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        let a = prev.to_vec2() - vertex.to_vec2();
        let b = next.to_vec2() - vertex.to_vec2();
        let (len_a, len_b) = (a.length(), b.length());

        if len_a == 0.0 || len_b == 0.0 {
            out.append(vertex);
            continue;
        }

        match mode {
            CornerMode::Chamfer => {
                chamfer_vertex(&mut out, vertex, (a, len_a), (b, len_b), distance as f64)
            }
            CornerMode::Fillet { segments } => fillet_vertex(
                &mut out,
                vertex,
                (a, len_a),
                (b, len_b),
                distance as f64,
                segments,
            ),
        }
    }

    out.remove_null_segments();
    out
}

fn chamfer_vertex(
    out: &mut LineChain,
    vertex: Point2,
    (a, len_a): (Vec2, f64),
    (b, len_b): (Vec2, f64),
    distance: f64,
) {
    let distance = distance.min(0.5 * len_a).min(0.5 * len_b);
    out.append(vertex + Point2::from_f64(distance * a.x / len_a, distance * a.y / len_a));
    out.append(vertex + Point2::from_f64(distance * b.x / len_b, distance * b.y / len_b));
}

fn fillet_vertex(
    out: &mut LineChain,
    vertex: Point2,
    (a, len_a): (Vec2, f64),
    (b, len_b): (Vec2, f64),
    radius: f64,
    segments: u32,
) {
    let cosine = a.dot(b) / (len_a * len_b);
    // Relates the tangent length along each edge to the radius.
    let denom = (2.0 / (1.0 + cosine) - 1.0).sqrt();

    // Parallel edges (infinite) and spikes (zero) have no fillet.
    if !denom.is_finite() || denom == 0.0 {
        out.append(vertex);
        return;
    }

    let radius = radius.min(0.5 * len_a * denom).min(0.5 * len_b * denom);

    let v = vertex.to_vec2();
    let ua = a * (1.0 / len_a);
    let ub = b * (1.0 / len_b);
    let bisector = ua + ub;
    let center = v + bisector * (radius / (0.5 * (1.0 - cosine)).sqrt() / bisector.length());

    let tangent = radius / denom;
    let start = v + ua * tangent - center;
    let end = v + ub * tangent - center;

    let argument = (start.dot(end) / (radius * radius)).clamp(-1.0, 1.0);
    let arc_angle = argument.acos();
    let steps = (segments as f64 * arc_angle / (2.0 * PI)).ceil() as u32;

    let start_angle = (-start.y).atan2(start.x);
    let mut delta_angle = arc_angle / steps as f64;
    // Reflex corners sweep the other way.
    if a.cross(b) <= 0.0 {
        delta_angle = -delta_angle;
    }

    out.append((center + start).to_point());
    for j in 1..=steps {
        let angle = start_angle + j as f64 * delta_angle;
        out.append(Point2::from_f64(
            center.x + angle.cos() * radius,
            center.y - angle.sin() * radius,
        ));
    }
}

fn round_polygon(polygon: &Polygon, mode: CornerMode, distance: u32) -> Polygon {
    Polygon::from_contours(
        polygon
            .contours()
            .iter()
            .map(|contour| round_corners(contour, mode, distance))
            .collect(),
    )
}

impl PolygonSet {
    /// Simplifies the set, then returns a chamfered copy of polygon `index`
    /// (outline and holes alike).
    ///
    /// A zero distance returns the simplified polygon unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range after simplification.
    #[instrument(level = "debug", skip(self))]
    pub fn chamfer_polygon(&mut self, distance: u32, index: isize) -> Polygon {
        self.round_polygon_corners(CornerMode::Chamfer, distance, index)
    }

    /// Simplifies the set, then returns a filleted copy of polygon `index`
    /// with arcs of `segments` steps per full circle.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range after simplification.
    #[instrument(level = "debug", skip(self))]
    pub fn fillet_polygon(&mut self, radius: u32, segments: u32, index: isize) -> Polygon {
        self.round_polygon_corners(CornerMode::Fillet { segments }, radius, index)
    }

    /// Chamfered copy of the whole set; `self` is left untouched.
    pub fn chamfer(&self, distance: u32) -> PolygonSet {
        self.rounded_copy(CornerMode::Chamfer, distance)
    }

    /// Filleted copy of the whole set; `self` is left untouched.
    pub fn fillet(&self, radius: u32, segments: u32) -> PolygonSet {
        self.rounded_copy(CornerMode::Fillet { segments }, radius)
    }

    fn round_polygon_corners(&mut self, mode: CornerMode, distance: u32, index: isize) -> Polygon {
        self.simplify(PolygonMode::Fast);
        let polygon = self.polygon(index);
        if distance == 0 {
            return polygon.clone();
        }
        round_polygon(polygon, mode, distance)
    }

    fn rounded_copy(&self, mode: CornerMode, distance: u32) -> PolygonSet {
        let mut simplified = self.clone();
        simplified.simplify(PolygonMode::Fast);
        if distance == 0 {
            return simplified;
        }
        simplified
            .polygons()
            .iter()
            .map(|polygon| round_polygon(polygon, mode, distance))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(coords: &[(i32, i32)]) -> LineChain {
        LineChain::closed_from(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn square() -> LineChain {
        chain(&[(0, 0), (100, 0), (100, 100), (0, 100)])
    }

    #[test]
    fn test_chamfer_square() {
        let chamfered = chamfer_contour(&square(), 10);
        assert_eq!(
            chamfered,
            chain(&[
                (0, 10),
                (10, 0),
                (90, 0),
                (100, 10),
                (100, 90),
                (90, 100),
                (10, 100),
                (0, 90),
            ])
        );
    }

    #[test]
    fn test_chamfer_clamped_to_half_edge() {
        let chamfered = chamfer_contour(&square(), 60);
        assert_eq!(chamfered, chain(&[(0, 50), (50, 0), (100, 50), (50, 100)]));
    }

    #[test]
    fn test_chamfer_diagonal_edge_rounds() {
        let triangle = chain(&[(0, 0), (30, 0), (0, 40)]);
        let chamfered = chamfer_contour(&triangle, 10);
        assert_eq!(chamfered.point_count(), 6);
        assert!(chamfered.points().contains(&Point2::new(24, 8)));
    }

    #[test]
    fn test_fillet_square_corner() {
        let filleted = fillet_contour(&square(), 10, 16);

        // A quarter circle at 16 steps per turn needs 4 steps, 5 when
        // rounding noise pushes the step count over.
        assert!((4 * 5..=4 * 6).contains(&filleted.point_count()));
        assert_eq!(filleted.point(0), Point2::new(0, 10));
        for tangent in [(10, 0), (90, 0), (100, 10), (100, 90), (90, 100), (10, 100), (0, 90)] {
            assert!(filleted.points().contains(&Point2::new(tangent.0, tangent.1)));
        }

        let centers = [(10.0, 10.0), (90.0, 10.0), (90.0, 90.0), (10.0, 90.0)];
        for p in filleted.points() {
            let nearest = centers
                .iter()
                .map(|&(cx, cy)| (Vec2::new(cx, cy) - p.to_vec2()).length())
                .fold(f64::INFINITY, f64::min);
            assert!((nearest - 10.0).abs() <= 1.0, "{p} is off the fillet arcs");
        }

        let bbox = filleted.bbox().unwrap();
        assert_eq!(bbox.min, Point2::new(0, 0));
        assert_eq!(bbox.max, Point2::new(100, 100));
    }

    #[test]
    fn test_fillet_reflex_corner_bulges_inward() {
        let l_shape = chain(&[(0, 0), (60, 0), (60, 30), (30, 30), (30, 60), (0, 60)]);
        let filleted = fillet_contour(&l_shape, 10, 32);
        assert!(filleted.is_counter_clockwise());
        assert!(!filleted.points().contains(&Point2::new(30, 30)));
        assert!(filleted
            .points()
            .iter()
            .all(|p| p.x <= 60 && p.y <= 60 && p.x >= 0 && p.y >= 0));
        assert!(filleted
            .points()
            .iter()
            .any(|p| p.x > 30 && p.y > 30 && p.x < 40 && p.y < 40));
    }

    #[test]
    fn test_fillet_passes_collinear_vertex_through() {
        let with_midpoint = chain(&[(0, 0), (50, 0), (100, 0), (100, 100), (0, 100)]);
        let filleted = fillet_contour(&with_midpoint, 10, 16);
        assert!(filleted.points().contains(&Point2::new(50, 0)));
    }

    #[test]
    fn test_degenerate_contours() {
        assert_eq!(chamfer_contour(&chain(&[(5, 5)]), 10), chain(&[(5, 5)]));
        assert!(fillet_contour(&LineChain::new(), 10, 16).is_empty());
    }
}
