//! Rounded offsetting (inflate/deflate) of polygon sets.
//!
//! The clipping backend moves every contour by `|d|`, outward for a positive
//! `d` and inward for a negative one, and joins corners with polygonal arcs.
//! The arc step angle is derived from the cached tolerance of the requested
//! segment count, so a larger offset keeps the same chord error per step.
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonSet};
//!
//! let mut set = PolygonSet::new();
//! set.add_outline(LineChain::closed_from(vec![
//!     Point2::new(0, 0),
//!     Point2::new(20, 0),
//!     Point2::new(20, 20),
//!     Point2::new(0, 20),
//! ]));
//!
//! set.inflate(-5, 16);
//! let bbox = set.bbox(0).unwrap();
//! assert_eq!(bbox.min, Point2::new(5, 5));
//! assert_eq!(bbox.max, Point2::new(15, 15));
//! ```

use std::f64::consts::PI;

use tracing::{debug, instrument};

use super::boolean::{
    export_paths, import_shapes, BooleanOp, ClipBackend, OverlayBackend, PolygonMode,
};
use super::core::PolygonSet;
use crate::config::OffsetConfig;

/// Lazily filled table of `1 - cos(π / segments)` indexed by segment count.
///
/// Multiplying an entry by the offset distance gives the largest gap between
/// a true arc and its polygonal approximation.
#[derive(Debug, Clone)]
pub struct ArcToleranceCache {
    factors: Vec<Option<f64>>,
}

impl ArcToleranceCache {
    /// Creates a table caching segment counts `0..=limit`.
    pub fn new(limit: u32) -> Self {
        Self {
            factors: vec![None; limit as usize + 1],
        }
    }

    /// Returns the tolerance factor for `segments`, computing it on first use.
    pub fn factor(&mut self, segments: u32) -> f64 {
        let compute = || 1.0 - (PI / segments as f64).cos();
        match self.factors.get_mut(segments as usize) {
            Some(slot) => *slot.get_or_insert_with(compute),
            None => compute(),
        }
    }

    /// Number of entries computed so far.
    pub fn cached(&self) -> usize {
        self.factors.iter().filter(|f| f.is_some()).count()
    }
}

/// Offsets polygon sets through a [`ClipBackend`], owning the tolerance cache.
#[derive(Debug, Clone)]
pub struct OffsetEngine<B = OverlayBackend> {
    backend: B,
    config: OffsetConfig,
    tolerances: ArcToleranceCache,
}

impl Default for OffsetEngine<OverlayBackend> {
    fn default() -> Self {
        Self::new(OverlayBackend, OffsetConfig::default())
    }
}

impl<B: ClipBackend> OffsetEngine<B> {
    /// Creates an engine with an empty tolerance cache sized by `config`.
    pub fn new(backend: B, config: OffsetConfig) -> Self {
        Self {
            backend,
            tolerances: ArcToleranceCache::new(config.cached_segment_limit),
            config,
        }
    }

    /// Settings this engine was built with.
    #[inline]
    pub fn config(&self) -> &OffsetConfig {
        &self.config
    }

    /// Tolerance factors computed so far.
    #[inline]
    pub fn tolerance_cache(&self) -> &ArcToleranceCache {
        &self.tolerances
    }

    /// Maximum deviation of a `segments`-per-circle arc of radius `|delta|`.
    ///
    /// `segments` is raised to the configured minimum first.
    pub fn arc_tolerance(&mut self, delta: i32, segments: u32) -> f64 {
        let segments = self.config.clamp_segments(segments);
        (delta as f64).abs() * self.tolerances.factor(segments)
    }

    /// Grows (`delta > 0`) or shrinks (`delta < 0`) every polygon of `set`
    /// with round joins of `segments` steps per full circle.
    ///
    /// A zero `delta` only simplifies the set.
    #[instrument(level = "debug", skip(self, set), fields(polygons = set.outline_count()))]
    pub fn inflate(&mut self, set: &mut PolygonSet, delta: i32, segments: u32) {
        if delta == 0 {
            let empty = PolygonSet::new();
            set.boolean_op_with(&self.backend, BooleanOp::Union, &empty, PolygonMode::Fast);
            return;
        }

        let tolerance = self.arc_tolerance(delta, segments);
        let angle = join_angle((delta as f64).abs(), tolerance);

        let paths = export_paths(set);
        let shapes = self.backend.offset(&paths, delta as f64, angle);
        debug!(
            tolerance,
            join_angle = angle,
            paths = paths.len(),
            shapes = shapes.len(),
            "offset finished"
        );
        *set = import_shapes(shapes, PolygonMode::Fast);
    }
}

impl PolygonSet {
    /// Offsets the set by `delta` with round joins approximated by
    /// `segments` steps per full circle (at least six).
    pub fn inflate(&mut self, delta: i32, segments: u32) {
        OffsetEngine::<OverlayBackend>::default().inflate(self, delta, segments);
    }
}

/// Arc step angle whose chord stays within `tolerance` of a circle of
/// `radius`.
fn join_angle(radius: f64, tolerance: f64) -> f64 {
    2.0 * (1.0 - tolerance / radius).clamp(-1.0, 1.0).acos()
}
