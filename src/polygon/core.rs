//! Polygon and polygon-set data model with index-based addressing.

use super::iter::VertexIndex;
use super::line_chain::LineChain;
use crate::bounds::Aabb2;
use crate::primitives::Point2;

/// A polygon: an outline contour followed by zero or more hole contours.
///
/// Holes are expected to lie inside the outline, but this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    contours: Vec<LineChain>,
}

impl Polygon {
    /// Creates a polygon with the given outline and no holes.
    #[inline]
    pub fn new(outline: LineChain) -> Self {
        Self {
            contours: vec![outline],
        }
    }

    /// Creates a polygon from contours; the first one is the outline.
    ///
    /// # Panics
    ///
    /// Panics if `contours` is empty.
    pub fn from_contours(contours: Vec<LineChain>) -> Self {
        assert!(!contours.is_empty(), "a polygon needs an outline contour");
        Self { contours }
    }

    /// The outer contour.
    #[inline]
    pub fn outline(&self) -> &LineChain {
        &self.contours[0]
    }

    /// Mutable access to the outer contour.
    #[inline]
    pub fn outline_mut(&mut self) -> &mut LineChain {
        &mut self.contours[0]
    }

    /// Hole contours, in insertion order.
    #[inline]
    pub fn holes(&self) -> &[LineChain] {
        &self.contours[1..]
    }

    /// Number of holes.
    #[inline]
    pub fn hole_count(&self) -> usize {
        self.contours.len() - 1
    }

    /// Returns hole `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Polygon::hole_count`].
    pub fn hole(&self, index: usize) -> &LineChain {
        assert!(
            index < self.hole_count(),
            "hole index {index} out of range for polygon with {} holes",
            self.hole_count()
        );
        &self.contours[index + 1]
    }

    /// Mutable access to hole `index`; panics like [`Polygon::hole`].
    pub fn hole_mut(&mut self, index: usize) -> &mut LineChain {
        let count = self.hole_count();
        assert!(
            index < count,
            "hole index {index} out of range for polygon with {count} holes"
        );
        &mut self.contours[index + 1]
    }

    /// Adds a hole and returns its index.
    pub fn add_hole(&mut self, hole: LineChain) -> usize {
        self.contours.push(hole);
        self.hole_count() - 1
    }

    /// All contours, outline first.
    #[inline]
    pub fn contours(&self) -> &[LineChain] {
        &self.contours
    }

    /// Mutable access to all contours, outline first.
    #[inline]
    pub fn contours_mut(&mut self) -> &mut [LineChain] {
        &mut self.contours
    }

    /// Number of contours including the outline.
    #[inline]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Vertex count summed over outline and holes.
    pub fn total_vertices(&self) -> usize {
        self.contours.iter().map(LineChain::point_count).sum()
    }

    /// Consumes the polygon, returning its contours outline first.
    #[inline]
    pub fn into_contours(self) -> Vec<LineChain> {
        self.contours
    }
}

/// An ordered collection of polygons, each possibly holed.
///
/// Outline indices are `isize` so that negative values address polygons
/// from the end (`-1` is the last polygon). Hole indices are `Option<usize>`
/// where `None` selects the outline itself. Every index is a precondition:
/// an out-of-range index panics.
///
/// # Example
///
/// ```
/// use polyset::{PolygonSet, Point2};
///
/// let mut set = PolygonSet::new();
/// set.new_outline();
/// for (x, y) in [(0, 0), (100, 0), (100, 100), (0, 100)] {
///     set.append(Point2::new(x, y), -1, None);
/// }
/// set.new_hole(-1);
/// for (x, y) in [(20, 20), (20, 80), (80, 80)] {
///     set.append(Point2::new(x, y), -1, Some(0));
/// }
///
/// assert_eq!(set.outline_count(), 1);
/// assert_eq!(set.hole_count(0), 1);
/// assert_eq!(set.total_vertices(), 7);
/// assert!(set.has_holes());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps one polygon as a single-element set.
    #[inline]
    pub fn from_polygon(polygon: Polygon) -> Self {
        Self {
            polygons: vec![polygon],
        }
    }

    /// All polygons in order.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Mutable access to all polygons.
    #[inline]
    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }

    /// Consumes the set, returning its polygons.
    #[inline]
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Polygon `outline`; negative indices count back from the end.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn polygon(&self, outline: isize) -> &Polygon {
        &self.polygons[self.resolve_outline(outline)]
    }

    /// Mutable access to polygon `outline`, indexed like [`PolygonSet::polygon`].
    pub fn polygon_mut(&mut self, outline: isize) -> &mut Polygon {
        let index = self.resolve_outline(outline);
        &mut self.polygons[index]
    }

    /// Adds a polygon and returns its outline index.
    pub fn push_polygon(&mut self, polygon: Polygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    /// Starts a new polygon with an empty closed outline and returns its index.
    pub fn new_outline(&mut self) -> usize {
        self.push_polygon(Polygon::new(LineChain::from_points(Vec::new(), true)))
    }

    /// Adds an empty closed hole to `outline` and returns the hole index.
    pub fn new_hole(&mut self, outline: isize) -> usize {
        self.polygon_mut(outline)
            .add_hole(LineChain::from_points(Vec::new(), true))
    }

    /// Adds a closed contour as a new polygon outline and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the contour is open.
    pub fn add_outline(&mut self, outline: LineChain) -> usize {
        assert!(outline.is_closed(), "an outline contour must be closed");
        self.push_polygon(Polygon::new(outline))
    }

    /// Adds a closed contour as a hole of `outline` and returns the hole index.
    ///
    /// # Panics
    ///
    /// Panics if the contour is open or `outline` is out of range.
    pub fn add_hole(&mut self, hole: LineChain, outline: isize) -> usize {
        assert!(hole.is_closed(), "a hole contour must be closed");
        self.polygon_mut(outline).add_hole(hole)
    }

    /// Appends a vertex to a contour unless it repeats the last vertex.
    ///
    /// Returns the contour's vertex count afterwards.
    pub fn append(&mut self, p: Point2, outline: isize, hole: Option<usize>) -> usize {
        let contour = self.contour_mut(outline, hole);
        contour.append(p);
        contour.point_count()
    }

    /// Appends a vertex to a contour even if it repeats the last vertex.
    pub fn append_allowing_duplicate(
        &mut self,
        p: Point2,
        outline: isize,
        hole: Option<usize>,
    ) -> usize {
        let contour = self.contour_mut(outline, hole);
        contour.append_allowing_duplicate(p);
        contour.point_count()
    }

    /// Appends deep copies of every polygon of `other`.
    pub fn append_set(&mut self, other: &PolygonSet) {
        self.polygons.extend(other.polygons.iter().cloned());
    }

    /// Number of polygons (one outline each).
    #[inline]
    pub fn outline_count(&self) -> usize {
        self.polygons.len()
    }

    /// Number of holes in polygon `outline`.
    pub fn hole_count(&self, outline: isize) -> usize {
        self.polygon(outline).hole_count()
    }

    /// Vertex count of the outline (`hole == None`) or one of its holes.
    pub fn vertex_count(&self, outline: isize, hole: Option<usize>) -> usize {
        self.contour(outline, hole).point_count()
    }

    /// Vertex count over every outline and hole.
    pub fn total_vertices(&self) -> usize {
        self.polygons.iter().map(Polygon::total_vertices).sum()
    }

    /// Returns `true` if any polygon has more than one contour.
    pub fn has_holes(&self) -> bool {
        self.polygons.iter().any(|p| p.contour_count() > 1)
    }

    /// Returns `true` if the set has no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Outline of polygon `outline`.
    pub fn outline(&self, outline: isize) -> &LineChain {
        self.polygon(outline).outline()
    }

    /// Mutable outline of polygon `outline`.
    pub fn outline_mut(&mut self, outline: isize) -> &mut LineChain {
        self.polygon_mut(outline).outline_mut()
    }

    /// Hole `hole` of polygon `outline`.
    pub fn hole(&self, outline: isize, hole: usize) -> &LineChain {
        self.polygon(outline).hole(hole)
    }

    /// Mutable access to hole `hole` of polygon `outline`.
    pub fn hole_mut(&mut self, outline: isize, hole: usize) -> &mut LineChain {
        self.polygon_mut(outline).hole_mut(hole)
    }

    /// The outline when `hole` is `None`, otherwise the given hole.
    pub fn contour(&self, outline: isize, hole: Option<usize>) -> &LineChain {
        match hole {
            None => self.outline(outline),
            Some(h) => self.hole(outline, h),
        }
    }

    /// Mutable form of [`PolygonSet::contour`].
    pub fn contour_mut(&mut self, outline: isize, hole: Option<usize>) -> &mut LineChain {
        match hole {
            None => self.outline_mut(outline),
            Some(h) => self.hole_mut(outline, h),
        }
    }

    /// Returns the vertex addressed by a global index.
    pub fn vertex(&self, index: VertexIndex) -> Point2 {
        let polygon = self.checked_polygon(index.polygon);
        assert!(
            index.contour < polygon.contour_count(),
            "contour index {} out of range for polygon with {} contours",
            index.contour,
            polygon.contour_count()
        );
        polygon.contours()[index.contour].point(index.vertex)
    }

    /// Mutable access to the vertex addressed by a global index.
    ///
    /// # Panics
    ///
    /// Panics if any part of `index` is out of range.
    pub fn vertex_mut(&mut self, index: VertexIndex) -> &mut Point2 {
        let polygon = self.checked_polygon_mut(index.polygon);
        let count = polygon.contour_count();
        assert!(
            index.contour < count,
            "contour index {} out of range for polygon with {count} contours",
            index.contour
        );
        polygon.contours_mut()[index.contour].point_mut(index.vertex)
    }

    /// Returns vertex `vertex` of the outline or hole.
    pub fn vertex_at(&self, vertex: usize, outline: isize, hole: Option<usize>) -> Point2 {
        self.contour(outline, hole).point(vertex)
    }

    /// Removes every polygon.
    pub fn remove_all_contours(&mut self) {
        self.polygons.clear();
    }

    /// Removes polygon `index`, shifting later polygons down.
    pub fn delete_polygon(&mut self, index: usize) {
        assert!(
            index < self.polygons.len(),
            "polygon index {index} out of range for set of {} polygons",
            self.polygons.len()
        );
        self.polygons.remove(index);
    }

    /// Offsets every vertex of every contour by `delta`.
    pub fn translate(&mut self, delta: Point2) {
        for contour in self.polygons.iter_mut().flat_map(|p| p.contours_mut()) {
            contour.translate(delta);
        }
    }

    /// Union of outline boxes grown by `clearance`, or `None` if there are no vertices.
    pub fn bbox(&self, clearance: i32) -> Option<Aabb2> {
        self.polygons
            .iter()
            .filter_map(|p| p.outline().bbox())
            .reduce(Aabb2::union)
            .map(|bbox| bbox.inflate(clearance))
    }

    /// Removes zero-length edges from every contour and returns the number of
    /// vertices dropped.
    pub fn remove_null_segments(&mut self) -> usize {
        self.polygons
            .iter_mut()
            .flat_map(|p| p.contours_mut())
            .map(LineChain::remove_null_segments)
            .sum()
    }

    pub(crate) fn resolve_outline(&self, outline: isize) -> usize {
        let count = self.polygons.len() as isize;
        let index = if outline < 0 { outline + count } else { outline };
        assert!(
            (0..count).contains(&index),
            "outline index {outline} out of range for set of {count} polygons"
        );
        index as usize
    }

    fn checked_polygon(&self, index: usize) -> &Polygon {
        assert!(
            index < self.polygons.len(),
            "polygon index {index} out of range for set of {} polygons",
            self.polygons.len()
        );
        &self.polygons[index]
    }

    fn checked_polygon_mut(&mut self, index: usize) -> &mut Polygon {
        let count = self.polygons.len();
        assert!(
            index < count,
            "polygon index {index} out of range for set of {count} polygons"
        );
        &mut self.polygons[index]
    }
}

impl From<Polygon> for PolygonSet {
    fn from(polygon: Polygon) -> Self {
        Self::from_polygon(polygon)
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}
