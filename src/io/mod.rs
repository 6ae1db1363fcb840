//! Textual interchange format for polygon sets.
//!
//! ```text
//! polyset <polygon count>
//! poly <contour count>
//! <vertex count>
//! <x> <y>
//! ...
//! ```
//!
//! Contour 0 of each polygon is its outline. Tokens are separated by any
//! whitespace; the writer puts one token group per line and a blank line
//! after each polygon.

mod text;

pub use text::{format_polyset, parse_polyset};
