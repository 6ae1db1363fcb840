//! Boolean operations through the polygon clipping backend.
//!
//! Contours are exported as integer paths with outlines oriented
//! counter-clockwise and holes clockwise, combined under the nonzero fill
//! rule, and the resulting shape forest is imported back as polygons. Each
//! returned shape becomes one polygon: its first path is the outline and the
//! remaining paths are holes.
//!
//! Input vertices come back unchanged and new intersection points are
//! rounded to the grid, as long as the coordinates of one call span less
//! than `i32::MAX` on each axis.
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonMode, PolygonSet};
//!
//! fn square(x: i32, y: i32, size: i32) -> LineChain {
//!     LineChain::closed_from(vec![
//!         Point2::new(x, y),
//!         Point2::new(x + size, y),
//!         Point2::new(x + size, y + size),
//!         Point2::new(x, y + size),
//!     ])
//! }
//!
//! let mut plate = PolygonSet::new();
//! plate.add_outline(square(0, 0, 30));
//! let mut cutout = PolygonSet::new();
//! cutout.add_outline(square(10, 10, 10));
//!
//! plate.boolean_subtract(&cutout, PolygonMode::Fast);
//! assert_eq!(plate.outline_count(), 1);
//! assert_eq!(plate.hole_count(0), 1);
//! ```

use std::collections::HashMap;

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay::Overlay;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::i_float::int::point::IntPoint;
use i_overlay::mesh::outline::offset::OutlineOffset;
use i_overlay::mesh::style::{LineJoin, OutlineStyle};
use tracing::{debug, instrument, warn};

use super::contains::point_in_contour;
use super::core::{Polygon, PolygonSet};
use super::line_chain::LineChain;
use crate::primitives::Point2;

/// A closed path handed to or returned by a [`ClipBackend`].
pub type Path = Vec<Point2>;

/// A backend result shape: outer path followed by its hole paths.
pub type Shape = Vec<Path>;

/// Set operation applied to a subject and a clip operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
}

/// Output guarantees requested from a boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonMode {
    /// Take the backend forest as is.
    #[default]
    Fast,
    /// Additionally split contours that touch themselves at a vertex, so
    /// every output contour is a simple loop.
    StrictlySimple,
}

/// A polygon clipping library able to combine and offset sets of closed
/// paths.
///
/// Paths going in are oriented the way [`PolygonSet`] exports them:
/// outlines counter-clockwise, holes clockwise.
pub trait ClipBackend {
    /// Combines `subject` and `clip` with `op` under the nonzero fill rule.
    fn execute(&self, op: BooleanOp, subject: &[Path], clip: &[Path]) -> Vec<Shape>;

    /// Offsets the region bounded by `paths` by `delta` (negative shrinks),
    /// joining corners with arcs of at most `join_angle` radians per step.
    fn offset(&self, paths: &[Path], delta: f64, join_angle: f64) -> Vec<Shape>;
}

/// [`ClipBackend`] implemented with the `i_overlay` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayBackend;

impl ClipBackend for OverlayBackend {
    fn execute(&self, op: BooleanOp, subject: &[Path], clip: &[Path]) -> Vec<Shape> {
        let rule = match op {
            BooleanOp::Union => OverlayRule::Union,
            BooleanOp::Intersection => OverlayRule::Intersect,
            BooleanOp::Difference => OverlayRule::Difference,
        };
        let subject = to_int_contours(subject);
        let clip = to_int_contours(clip);
        Overlay::with_contours(&subject, &clip)
            .overlay(rule, FillRule::NonZero)
            .into_iter()
            .map(|shape| {
                shape
                    .into_iter()
                    .map(|path| path.into_iter().map(|p| Point2::new(p.x, p.y)).collect())
                    .collect()
            })
            .collect()
    }

    fn offset(&self, paths: &[Path], delta: f64, join_angle: f64) -> Vec<Shape> {
        // The outline builder wants outers clockwise and holes counter-clockwise.
        let paths: Vec<Vec<[f64; 2]>> = paths
            .iter()
            .map(|path| path.iter().rev().map(|p| p.to_array()).collect())
            .collect();
        let style = OutlineStyle::new(delta).line_join(LineJoin::Round(join_angle));
        paths
            .outline(style)
            .into_iter()
            .map(|shape| {
                shape
                    .into_iter()
                    .map(|path| {
                        path.into_iter()
                            .map(|[x, y]| Point2::from_f64(x, y))
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

fn to_int_contours(paths: &[Path]) -> Vec<Vec<IntPoint>> {
    paths
        .iter()
        .map(|path| path.iter().map(|p| IntPoint::new(p.x, p.y)).collect())
        .collect()
}

impl PolygonSet {
    /// Replaces `self` with `self op other` computed by `backend`.
    #[instrument(level = "debug", skip_all, fields(op = ?op, mode = ?mode))]
    pub fn boolean_op_with<B>(
        &mut self,
        backend: &B,
        op: BooleanOp,
        other: &PolygonSet,
        mode: PolygonMode,
    ) where
        B: ClipBackend + ?Sized,
    {
        let subject = export_paths(self);
        let clip = export_paths(other);
        let shapes = backend.execute(op, &subject, &clip);
        debug!(
            subject_paths = subject.len(),
            clip_paths = clip.len(),
            shapes = shapes.len(),
            "clipping backend finished"
        );
        *self = import_shapes(shapes, mode);
    }

    /// In-place union with `other`.
    pub fn boolean_add(&mut self, other: &PolygonSet, mode: PolygonMode) {
        self.boolean_op_with(&OverlayBackend, BooleanOp::Union, other, mode);
    }

    /// In-place difference, removing `other` from `self`.
    pub fn boolean_subtract(&mut self, other: &PolygonSet, mode: PolygonMode) {
        self.boolean_op_with(&OverlayBackend, BooleanOp::Difference, other, mode);
    }

    /// In-place intersection with `other`.
    pub fn boolean_intersection(&mut self, other: &PolygonSet, mode: PolygonMode) {
        self.boolean_op_with(&OverlayBackend, BooleanOp::Intersection, other, mode);
    }

    /// Computes `a op b` into a new set, leaving both operands untouched.
    pub fn boolean(a: &PolygonSet, b: &PolygonSet, op: BooleanOp, mode: PolygonMode) -> Self {
        let mut result = a.clone();
        result.boolean_op_with(&OverlayBackend, op, b, mode);
        result
    }

    /// Union of `a` and `b` as a new set.
    pub fn union_of(a: &PolygonSet, b: &PolygonSet, mode: PolygonMode) -> Self {
        Self::boolean(a, b, BooleanOp::Union, mode)
    }

    /// `a` with `b` removed, as a new set.
    pub fn difference_of(a: &PolygonSet, b: &PolygonSet, mode: PolygonMode) -> Self {
        Self::boolean(a, b, BooleanOp::Difference, mode)
    }

    /// Intersection of `a` and `b` as a new set.
    pub fn intersection_of(a: &PolygonSet, b: &PolygonSet, mode: PolygonMode) -> Self {
        Self::boolean(a, b, BooleanOp::Intersection, mode)
    }

    /// Self-union: resolves self-intersections, overlaps between polygons
    /// and degenerate edges.
    pub fn simplify(&mut self, mode: PolygonMode) {
        self.boolean_op_with(&OverlayBackend, BooleanOp::Union, &PolygonSet::new(), mode);
    }
}

/// Converts every contour with at least three vertices to a backend path,
/// reversing it where its winding does not match its role.
pub(crate) fn export_paths(set: &PolygonSet) -> Vec<Path> {
    let mut paths = Vec::new();
    for polygon in set.polygons() {
        for (i, contour) in polygon.contours().iter().enumerate() {
            if contour.point_count() < 3 {
                continue;
            }
            let mut path: Path = contour.points().to_vec();
            if contour.is_counter_clockwise() != (i == 0) {
                path.reverse();
            }
            paths.push(path);
        }
    }
    paths
}

pub(crate) fn import_shapes(shapes: Vec<Shape>, mode: PolygonMode) -> PolygonSet {
    let mut set = PolygonSet::new();
    for shape in shapes {
        let mut paths = shape.into_iter();
        let Some(outline) = paths.next().and_then(import_path) else {
            continue;
        };
        let mut polygon = Polygon::new(oriented(outline, true));
        for hole in paths.filter_map(import_path) {
            polygon.add_hole(oriented(hole, false));
        }
        set.push_polygon(polygon);
    }

    match mode {
        PolygonMode::Fast => set,
        PolygonMode::StrictlySimple => split_touching_contours(set),
    }
}

fn import_path(path: Path) -> Option<LineChain> {
    let mut chain: LineChain = path.into_iter().collect();
    chain.remove_null_segments();
    (chain.point_count() >= 3).then_some(chain)
}

fn oriented(mut chain: LineChain, counter_clockwise: bool) -> LineChain {
    if chain.is_counter_clockwise() != counter_clockwise {
        chain.reverse();
    }
    chain
}

/// Splits every contour at repeated vertices and rebuilds the polygons.
///
/// Loops winding counter-clockwise become outlines, clockwise loops become
/// holes of the smallest outline loop containing them.
pub(crate) fn split_touching_contours(set: PolygonSet) -> PolygonSet {
    let mut outlines = Vec::new();
    let mut holes = Vec::new();
    for polygon in set.into_polygons() {
        for contour in polygon.into_contours() {
            for piece in split_at_repeated_vertices(&contour) {
                match piece.signed_area2() {
                    0 => {}
                    area if area > 0 => outlines.push(piece),
                    _ => holes.push(piece),
                }
            }
        }
    }

    let mut polygons: Vec<Polygon> = outlines.into_iter().map(Polygon::new).collect();
    for hole in holes {
        let owner = polygons
            .iter()
            .enumerate()
            .filter(|(_, polygon)| encloses(polygon.outline(), &hole))
            .min_by_key(|(_, polygon)| polygon.outline().signed_area2())
            .map(|(i, _)| i);
        match owner {
            Some(i) => {
                polygons[i].add_hole(hole);
            }
            None => warn!(
                vertices = hole.point_count(),
                "dropping hole loop outside every outline"
            ),
        }
    }
    polygons.into_iter().collect()
}

fn encloses(outline: &LineChain, hole: &LineChain) -> bool {
    let candidate = hole
        .points()
        .iter()
        .copied()
        .find(|&p| !outline.point_on_edge(p))
        .unwrap_or_else(|| hole.point(0));
    point_in_contour(candidate, outline)
}

fn split_at_repeated_vertices(contour: &LineChain) -> Vec<LineChain> {
    let mut loops = Vec::new();
    let mut current: Vec<Point2> = Vec::with_capacity(contour.point_count());
    let mut seen: HashMap<Point2, usize> = HashMap::new();

    for &p in contour.points() {
        match seen.get(&p) {
            Some(&k) => {
                let tail = current.split_off(k + 1);
                for q in &tail {
                    seen.remove(q);
                }
                let mut points = Vec::with_capacity(tail.len() + 1);
                points.push(p);
                points.extend(tail);
                loops.push(LineChain::closed_from(points));
            }
            None => {
                seen.insert(p, current.len());
                current.push(p);
            }
        }
    }
    loops.push(LineChain::closed_from(current));
    loops
}
