//! polyset - Integer polygon sets with holes
//!
//! Polygons live on an `i32` grid. Each polygon is an outline plus any number
//! of holes, and a [`PolygonSet`] groups several of them. The crate covers
//! the editing and query side (indexed vertex access, iteration, containment,
//! bounding boxes) and the heavier geometry that board outlines and copper
//! zones need: boolean operations, rounded inflation, hole fracturing and
//! corner chamfering or filleting.
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonMode, PolygonSet};
//!
//! let square = |x: i32, y: i32| {
//!     LineChain::closed_from(vec![
//!         Point2::new(x, y),
//!         Point2::new(x + 10, y),
//!         Point2::new(x + 10, y + 10),
//!         Point2::new(x, y + 10),
//!     ])
//! };
//!
//! let mut a = PolygonSet::new();
//! a.add_outline(square(0, 0));
//! let mut b = PolygonSet::new();
//! b.add_outline(square(5, 5));
//!
//! a.boolean_add(&b, PolygonMode::Fast);
//! assert_eq!(a.outline_count(), 1);
//! assert!(a.contains(Point2::new(14, 14)));
//!
//! let text = a.to_string();
//! let parsed: PolygonSet = text.parse().unwrap();
//! assert_eq!(parsed, a);
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;

pub use bounds::Aabb2;
pub use config::OffsetConfig;
pub use error::ParseError;
pub use io::{format_polyset, parse_polyset};
pub use polygon::{
    BooleanOp, LineChain, OffsetEngine, Polygon, PolygonMode, PolygonSet, VertexIndex,
};
pub use primitives::{Point2, Segment2, Vec2};
