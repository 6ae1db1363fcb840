#![allow(dead_code)]

use polyset::{LineChain, Point2, PolygonSet};

pub fn chain(coords: &[(i32, i32)]) -> LineChain {
    LineChain::closed_from(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

/// 100x100 square with a notched pentagon hole and a triangle hole.
pub fn square_with_holes() -> PolygonSet {
    let mut set = PolygonSet::new();
    set.add_outline(chain(&[(100, 100), (0, 100), (0, 0), (100, 0)]));
    set.add_hole(
        chain(&[(10, 10), (10, 20), (15, 15), (20, 20), (20, 10)]),
        -1,
    );
    set.add_hole(chain(&[(40, 10), (40, 20), (60, 10)]), -1);
    set
}

pub fn square(x: i32, y: i32, size: i32) -> LineChain {
    chain(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

pub fn total_area2(set: &PolygonSet) -> i128 {
    set.polygons()
        .iter()
        .flat_map(|polygon| polygon.contours())
        .map(LineChain::signed_area2)
        .sum()
}
