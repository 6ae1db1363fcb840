//! Integer 2D point type.

use super::Vec2;
use num_traits::clamp;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D point (or displacement) on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Rounds floating-point coordinates to the nearest grid point.
    ///
    /// Halves round away from zero and values outside the `i32` range are
    /// saturated.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
        }
    }

    /// Converts to a floating-point vector from the origin.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }

    /// Returns the point as an `[x, y]` pair of `f64`.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }

    /// Squared Euclidean distance, widened so it cannot overflow.
    #[inline]
    pub fn distance_squared(self, other: Self) -> i128 {
        let dx = other.x as i128 - self.x as i128;
        let dy = other.y as i128 - self.y as i128;
        dx * dx + dy * dy
    }
}

/// Twice the signed area of the triangle `(o, a, b)`.
///
/// Positive when `b` lies to the left of the directed line `o -> a`.
#[inline]
pub fn cross(o: Point2, a: Point2, b: Point2) -> i128 {
    let ax = a.x as i128 - o.x as i128;
    let ay = a.y as i128 - o.y as i128;
    let bx = b.x as i128 - o.x as i128;
    let by = b.y as i128 - o.y as i128;
    ax * by - ay * bx
}

#[inline]
pub(crate) fn round_coord(v: f64) -> i32 {
    clamp(v.round(), i32::MIN as f64, i32::MAX as f64) as i32
}

impl Add for Point2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl AddAssign for Point2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Point2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(i32, i32)> for Point2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point2::new(3, -4);
        let b = Point2::new(10, 20);
        assert_eq!(a + b, Point2::new(13, 16));
        assert_eq!(b - a, Point2::new(7, 24));
        assert_eq!(-a, Point2::new(-3, 4));

        let mut c = a;
        c += b;
        c -= Point2::new(1, 1);
        assert_eq!(c, Point2::new(12, 15));
    }

    #[test]
    fn test_cross_sign() {
        let o = Point2::origin();
        assert!(cross(o, Point2::new(10, 0), Point2::new(0, 10)) > 0);
        assert!(cross(o, Point2::new(0, 10), Point2::new(10, 0)) < 0);
        assert_eq!(cross(o, Point2::new(5, 5), Point2::new(10, 10)), 0);
    }

    #[test]
    fn test_cross_does_not_overflow() {
        let a = Point2::new(i32::MIN, i32::MIN);
        let b = Point2::new(i32::MAX, i32::MIN);
        let c = Point2::new(i32::MAX, i32::MAX);
        let expected = (u32::MAX as i128) * (u32::MAX as i128);
        assert_eq!(cross(a, b, c), expected);
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(Point2::from_f64(0.5, -0.5), Point2::new(1, -1));
        assert_eq!(Point2::from_f64(2.49, -2.51), Point2::new(2, -3));
        assert_eq!(Point2::from_f64(1e12, -1e12), Point2::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(Point2::new(0, 0).distance_squared(Point2::new(3, 4)), 25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(-7, 12).to_string(), "-7 12");
    }
}
