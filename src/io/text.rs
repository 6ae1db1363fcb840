//! Writer and parser for the `polyset` text format.

use std::fmt::{self, Write as _};
use std::str::{FromStr, SplitWhitespace};

use crate::error::ParseError;
use crate::polygon::{LineChain, Polygon, PolygonSet};
use crate::primitives::Point2;

/// Serialises a polygon set, keeping every vertex including duplicates.
///
/// # Example
///
/// ```
/// use polyset::{io::format_polyset, LineChain, Point2, PolygonSet};
///
/// let mut set = PolygonSet::new();
/// set.add_outline(LineChain::closed_from(vec![
///     Point2::new(0, 0),
///     Point2::new(10, 0),
///     Point2::new(0, 10),
/// ]));
///
/// assert_eq!(format_polyset(&set), "polyset 1\npoly 1\n3\n0 0\n10 0\n0 10\n\n");
/// ```
pub fn format_polyset(set: &PolygonSet) -> String {
    set.to_string()
}

/// Parses a polygon set. Every contour read is closed and keeps duplicate
/// vertices, so formatting the result reproduces the input document.
///
/// Trailing tokens after the last polygon are ignored.
pub fn parse_polyset(input: &str) -> Result<PolygonSet, ParseError> {
    PolySetParser::new(input).parse()
}

impl fmt::Display for PolygonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "polyset {}", self.outline_count())?;
        for polygon in self.polygons() {
            writeln!(f, "poly {}", polygon.contour_count())?;
            for contour in polygon.contours() {
                writeln!(f, "{}", contour.point_count())?;
                for p in contour.points() {
                    writeln!(f, "{p}")?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl FromStr for PolygonSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polyset(s)
    }
}

struct PolySetParser<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> PolySetParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    fn parse(&mut self) -> Result<PolygonSet, ParseError> {
        self.keyword("polyset")?;
        let polygon_count = self.count("polygon count")?;

        let mut set = PolygonSet::new();
        for index in 0..polygon_count {
            self.keyword("poly")?;
            let contour_count = self.count("contour count")?;
            if contour_count == 0 {
                return Err(ParseError::EmptyPolygon { index });
            }

            // Declared counts are untrusted, so nothing is preallocated from them.
            let mut contours = Vec::new();
            for _ in 0..contour_count {
                contours.push(self.contour()?);
            }
            set.push_polygon(Polygon::from_contours(contours));
        }
        Ok(set)
    }

    fn contour(&mut self) -> Result<LineChain, ParseError> {
        let vertex_count = self.count("vertex count")?;
        let mut contour = LineChain::from_points(Vec::new(), true);
        for _ in 0..vertex_count {
            let x = self.coordinate("x coordinate")?;
            let y = self.coordinate("y coordinate")?;
            contour.append_allowing_duplicate(Point2::new(x, y));
        }
        Ok(contour)
    }

    fn next_token(&mut self, context: &'static str) -> Result<&'a str, ParseError> {
        self.tokens
            .next()
            .ok_or(ParseError::UnexpectedEnd { context })
    }

    fn keyword(&mut self, expected: &'static str) -> Result<(), ParseError> {
        let token = self.next_token(expected)?;
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedKeyword {
                expected,
                found: token.to_string(),
            })
        }
    }

    fn count(&mut self, context: &'static str) -> Result<usize, ParseError> {
        let token = self.next_token(context)?;
        let value: i64 = token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            context,
        })?;
        usize::try_from(value).map_err(|_| ParseError::NegativeCount { context, value })
    }

    fn coordinate(&mut self, context: &'static str) -> Result<i32, ParseError> {
        let token = self.next_token(context)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            context,
        })
    }
}
