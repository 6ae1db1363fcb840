//! Fracturing: turning a polygon with holes into one hole-free contour.
//!
//! Each hole is joined to the already connected boundary by a horizontal
//! slit running left from the hole's leftmost vertex. The slit is a pair of
//! coincident edges of opposite direction, so the enclosed area is
//! unchanged. Holes are processed from left to right, which keeps every
//! slit clear of holes that are not yet connected.
//!
//! Edges live in an arena for the duration of one call and link to their
//! successor by index.

use tracing::{instrument, trace, warn};

use super::boolean::PolygonMode;
use super::core::{Polygon, PolygonSet};
use super::line_chain::LineChain;
use crate::primitives::Point2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    Unconnected,
    Connected,
    /// Belongs to a hole no slit can reach; left out of the result.
    Orphaned,
}

#[derive(Debug, Clone, Copy)]
struct FractureEdge {
    p1: Point2,
    p2: Point2,
    state: EdgeState,
    next: usize,
}

impl FractureEdge {
    fn spans(&self, y: i32) -> bool {
        y >= self.p1.y.min(self.p2.y) && y <= self.p1.y.max(self.p2.y)
    }

    /// X coordinate where the edge crosses the horizontal line at `y`.
    fn x_at(&self, y: i32) -> i64 {
        if self.p1.y == self.p2.y {
            return self.p1.x.max(self.p2.x) as i64;
        }
        let dx = self.p2.x as i64 - self.p1.x as i64;
        let dy = self.p2.y as i64 - self.p1.y as i64;
        self.p1.x as i64 + rescale(dx, y as i64 - self.p1.y as i64, dy)
    }
}

/// `a * b / c` rounded half away from zero, without intermediate overflow.
fn rescale(a: i64, b: i64, c: i64) -> i64 {
    let numerator = a as i128 * b as i128;
    let denominator = c as i128;
    let half = denominator.abs() / 2;
    let rounded = if (numerator < 0) != (denominator < 0) {
        (numerator - half * denominator.signum()) / denominator
    } else {
        (numerator + half * denominator.signum()) / denominator
    };
    rounded as i64
}

struct EdgeGraph {
    edges: Vec<FractureEdge>,
    /// Hole edges starting at their hole's smallest x.
    border: Vec<usize>,
    unconnected: usize,
}

impl EdgeGraph {
    fn build(contours: &[LineChain]) -> Self {
        let mut graph = Self {
            edges: Vec::with_capacity(contours.iter().map(|c| c.point_count() + 3).sum()),
            border: Vec::new(),
            unconnected: 0,
        };

        for (c, contour) in contours.iter().enumerate() {
            let points = contour.points();
            let Some(x_min) = points.iter().map(|p| p.x).min() else {
                continue;
            };
            let base = graph.edges.len();
            let n = points.len();
            let is_hole = c > 0;

            for i in 0..n {
                graph.edges.push(FractureEdge {
                    p1: points[i],
                    p2: points[(i + 1) % n],
                    state: if is_hole {
                        EdgeState::Unconnected
                    } else {
                        EdgeState::Connected
                    },
                    next: base + (i + 1) % n,
                });
                if is_hole {
                    graph.unconnected += 1;
                    if points[i].x == x_min {
                        graph.border.push(base + i);
                    }
                }
            }
        }
        graph
    }

    /// The unconnected border edge with the smallest start x, first on ties.
    fn leftmost_unconnected(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &i in &self.border {
            let edge = &self.edges[i];
            if edge.state != EdgeState::Unconnected {
                continue;
            }
            if best.map_or(true, |b| edge.p1.x < self.edges[b].p1.x) {
                best = Some(i);
            }
        }
        best
    }

    /// Splices the hole ring containing `start` into the connected ring.
    ///
    /// Returns the number of hole edges connected, or `None` when no
    /// connected edge lies to the left of the hole at that height.
    fn bridge(&mut self, start: usize) -> Option<usize> {
        let hole_start = self.edges[start].p1;
        let (x, y) = (hole_start.x as i64, hole_start.y);

        let mut nearest: Option<(usize, i64)> = None;
        let mut min_dist = i64::MAX;
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.state != EdgeState::Connected || !edge.spans(y) {
                continue;
            }
            let x_intersect = edge.x_at(y);
            let dist = x - x_intersect;
            if dist >= 0 && dist < min_dist {
                min_dist = dist;
                nearest = Some((i, x_intersect));
            }
        }

        let (target, x_intersect) = nearest?;
        // The intercept lies between the target's endpoints, so it fits.
        let junction = Point2::new(x_intersect as i32, y);

        let split = self.edges.len();
        let lead_in = split + 1;
        let lead_out = split + 2;
        let link = self.edges[target].next;

        self.edges.push(FractureEdge {
            p1: junction,
            p2: self.edges[target].p2,
            state: EdgeState::Connected,
            next: link,
        });
        self.edges.push(FractureEdge {
            p1: junction,
            p2: hole_start,
            state: EdgeState::Connected,
            next: start,
        });
        self.edges.push(FractureEdge {
            p1: hole_start,
            p2: junction,
            state: EdgeState::Connected,
            next: split,
        });

        self.edges[target].p2 = junction;
        self.edges[target].next = lead_in;

        let mut count = 1;
        let mut last = start;
        self.edges[last].state = EdgeState::Connected;
        while self.edges[last].next != start {
            last = self.edges[last].next;
            self.edges[last].state = EdgeState::Connected;
            count += 1;
        }
        self.edges[last].next = lead_out;

        trace!(?hole_start, ?junction, edges = count, "bridged hole");
        Some(count)
    }

    /// Marks the hole ring containing `start` as unreachable.
    fn orphan(&mut self, start: usize) -> usize {
        let mut count = 0;
        let mut e = start;
        loop {
            self.edges[e].state = EdgeState::Orphaned;
            count += 1;
            e = self.edges[e].next;
            if e == start {
                return count;
            }
        }
    }

    fn walk(&self, root: usize) -> LineChain {
        let mut chain = LineChain::from_points(Vec::with_capacity(self.edges.len()), true);
        let mut e = root;
        loop {
            chain.append(self.edges[e].p1);
            e = self.edges[e].next;
            if e == root {
                return chain;
            }
        }
    }
}

/// Merges an outline and its holes into a single closed contour.
///
/// The first contour is the outline. A lone outline is returned unchanged.
/// Holes that cannot be bridged (for example a hole lying outside the
/// outline) are dropped with a warning.
pub fn fracture_contours(contours: &[LineChain]) -> LineChain {
    match contours {
        [] => return LineChain::from_points(Vec::new(), true),
        [outline] => return outline.clone(),
        _ => {}
    }

    let mut graph = EdgeGraph::build(contours);
    while graph.unconnected > 0 {
        let Some(start) = graph.leftmost_unconnected() else {
            break;
        };
        let connected = match graph.bridge(start) {
            Some(count) => count,
            None => {
                let dropped = graph.orphan(start);
                warn!(
                    hole_start = ?graph.edges[start].p1,
                    edges = dropped,
                    "no connected edge to the left of hole, dropping it"
                );
                dropped
            }
        };
        graph.unconnected -= connected;
    }

    if contours[0].is_empty() {
        return LineChain::from_points(Vec::new(), true);
    }
    graph.walk(0)
}

impl PolygonSet {
    /// Simplifies the set, then replaces every polygon with holes by a
    /// single outline joined to its holes through zero-width slits.
    #[instrument(level = "debug", skip(self), fields(polygons = self.outline_count()))]
    pub fn fracture(&mut self, mode: PolygonMode) {
        self.simplify(mode);
        for polygon in self.polygons_mut() {
            if polygon.contour_count() > 1 {
                *polygon = Polygon::new(fracture_contours(polygon.contours()));
            }
        }
    }
}
