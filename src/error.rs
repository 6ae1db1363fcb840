//! Error types for polyset operations.
//!
//! Only the interchange parser has recoverable failures. Out-of-range
//! indices are programming errors and panic.

use thiserror::Error;

/// Errors produced while parsing the textual polygon-set format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A keyword token did not match the expected one.
    #[error("expected keyword `{expected}`, found `{found}`")]
    UnexpectedKeyword {
        /// The keyword the format requires at this position.
        expected: &'static str,
        /// The token that was read instead.
        found: String,
    },

    /// Input ended before the document was complete.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd {
        /// What was being read.
        context: &'static str,
    },

    /// A token where an integer was expected could not be parsed.
    #[error("invalid integer `{token}` for {context}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// What was being read.
        context: &'static str,
    },

    /// A polygon, contour or vertex count was negative.
    #[error("negative {context}: {value}")]
    NegativeCount {
        /// Which count was negative.
        context: &'static str,
        /// The value that was read.
        value: i64,
    },

    /// A polygon declared zero contours, so it has no outline.
    #[error("polygon {index} has no contours")]
    EmptyPolygon {
        /// Zero-based index of the polygon in the document.
        index: usize,
    },
}
