//! Polygon sets and the operations on them.
//!
//! A [`PolygonSet`] holds polygons made of closed [`LineChain`] contours:
//! contour 0 is the outline and every further contour is a hole. On top of
//! that container this module provides:
//! - Vertex and segment iteration with flat [`VertexIndex`] addressing
//! - Boolean operations through a pluggable [`ClipBackend`]
//! - Rounded offsetting with a cached arc tolerance
//! - Fracturing holes into a single weakly simple outline
//! - Chamfered and filleted corners
//! - Point containment, edge and clearance tests
//!
//! # Example
//!
//! ```
//! use polyset::{LineChain, Point2, PolygonMode, PolygonSet};
//!
//! let mut set = PolygonSet::new();
//! set.add_outline(LineChain::closed_from(vec![
//!     Point2::new(0, 0),
//!     Point2::new(100, 0),
//!     Point2::new(100, 100),
//!     Point2::new(0, 100),
//! ]));
//! set.add_hole(
//!     LineChain::closed_from(vec![
//!         Point2::new(40, 40),
//!         Point2::new(40, 60),
//!         Point2::new(60, 60),
//!         Point2::new(60, 40),
//!     ]),
//!     0,
//! );
//!
//! assert!(set.contains(Point2::new(10, 10)));
//! assert!(!set.contains(Point2::new(50, 50)));
//!
//! set.fracture(PolygonMode::Fast);
//! assert!(!set.has_holes());
//! assert!(!set.contains(Point2::new(50, 50)));
//! ```

mod boolean;
mod contains;
mod core;
mod corners;
mod fracture;
mod iter;
mod line_chain;
mod offset;
mod validate;

pub use boolean::{BooleanOp, ClipBackend, OverlayBackend, Path, PolygonMode, Shape};
pub use contains::point_in_contour;
pub use core::{Polygon, PolygonSet};
pub use corners::{chamfer_contour, fillet_contour};
pub use fracture::fracture_contours;
pub use iter::{SegmentIter, VertexIndex, VertexIter, VertexVisit};
pub use line_chain::LineChain;
pub use offset::{ArcToleranceCache, OffsetEngine};
pub use validate::SelfIntersection;
