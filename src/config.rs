//! Tunable constants for offsetting and collision queries.

/// Arc approximation settings used by [`OffsetEngine`](crate::polygon::OffsetEngine)
/// and [`PolygonSet::collide`](crate::polygon::PolygonSet::collide).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetConfig {
    /// Requested arc segment counts below this are raised to it.
    pub min_arc_segments: u32,
    /// Segments per full circle used when inflating for a collision test.
    pub collide_arc_segments: u32,
    /// Segment counts up to this value have their tolerance factor cached.
    pub cached_segment_limit: u32,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            min_arc_segments: 6,
            collide_arc_segments: 8,
            cached_segment_limit: 64,
        }
    }
}

impl OffsetConfig {
    /// Sets the minimum arc segment count.
    pub fn with_min_arc_segments(mut self, segments: u32) -> Self {
        self.min_arc_segments = segments;
        self
    }

    /// Sets the arc segment count used by collision queries.
    pub fn with_collide_arc_segments(mut self, segments: u32) -> Self {
        self.collide_arc_segments = segments;
        self
    }

    /// Sets the size of the tolerance cache.
    pub fn with_cached_segment_limit(mut self, limit: u32) -> Self {
        self.cached_segment_limit = limit;
        self
    }

    /// Clamps a requested segment count to the configured minimum.
    #[inline]
    pub fn clamp_segments(&self, segments: u32) -> u32 {
        segments.max(self.min_arc_segments)
    }
}
