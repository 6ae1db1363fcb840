mod common;

use common::{chain, square, square_with_holes, total_area2};
use polyset::{Point2, PolygonMode, PolygonSet};

#[test]
fn test_fracture_fixture() {
    let mut set = square_with_holes();
    set.fracture(PolygonMode::Fast);

    assert_eq!(set.outline_count(), 1);
    assert!(!set.has_holes());
    // The pentagon slit ends on the outline's left edge (new vertex); the
    // triangle slit ends on an existing pentagon corner, so one repeat merges.
    assert_eq!(set.vertex_count(0, None), 12 + 3 + 2);
    assert_eq!(total_area2(&set), 2 * 9825);

    assert!(set.contains(Point2::new(10, 90)));
    assert!(!set.contains(Point2::new(42, 12)));
}

#[test]
fn test_fracture_single_contour_is_unchanged() {
    let mut set = PolygonSet::new();
    set.add_outline(square(0, 0, 10));
    let mut simplified = set.clone();
    simplified.simplify(PolygonMode::Fast);

    set.fracture(PolygonMode::Fast);
    assert_eq!(set, simplified);
    assert_eq!(set.vertex_count(0, None), 4);
}

#[test]
fn test_fracture_keeps_polygons_apart() {
    let mut set = square_with_holes();
    set.add_outline(square(200, 0, 50));
    set.fracture(PolygonMode::StrictlySimple);
    assert_eq!(set.outline_count(), 2);
    assert!(!set.has_holes());
    assert_eq!(total_area2(&set), 2 * (9825 + 2500));
}

#[test]
fn test_chamfer_zero_is_simplified_input() {
    let mut set = square_with_holes();
    let mut simplified = set.clone();
    simplified.simplify(PolygonMode::Fast);

    let chamfered = set.chamfer_polygon(0, 0);
    assert_eq!(&chamfered, simplified.polygon(0));
    assert_eq!(square_with_holes().chamfer(0), simplified);
}

#[test]
fn test_chamfer_cuts_every_outline_corner() {
    let mut set = PolygonSet::new();
    set.add_outline(square(0, 0, 100));
    let chamfered = set.chamfer_polygon(10, 0);
    assert_eq!(chamfered.outline().point_count(), 8);
    assert_eq!(chamfered.outline().signed_area2(), 2 * (10_000 - 4 * 50));
}

#[test]
fn test_fillet_square() {
    let mut set = PolygonSet::new();
    set.add_outline(square(0, 0, 100));
    let filleted = set.fillet(10, 16);

    assert_eq!(filleted.outline_count(), 1);
    let outline = filleted.outline(0);
    assert!(outline.point_count() > 8);
    let bbox = filleted.bbox(0).unwrap();
    assert_eq!(bbox.min, Point2::new(0, 0));
    assert_eq!(bbox.max, Point2::new(100, 100));
    assert!(!filleted.contains(Point2::new(1, 1)));
    assert!(filleted.contains(Point2::new(5, 5)));
    assert!(set.contains(Point2::new(1, 1)));
}

#[test]
fn test_inflate_fixture() {
    let mut set = square_with_holes();
    set.inflate(2, 32);

    let bbox = set.bbox(0).unwrap();
    assert_eq!(bbox.min, Point2::new(-2, -2));
    assert_eq!(bbox.max, Point2::new(102, 102));
    assert!(set.has_holes());
    assert!(set.contains(Point2::new(11, 11)));
    assert!(!set.contains(Point2::new(13, 13)));
}

#[test]
fn test_deflate_fixture_keeps_holes_apart_from_outline() {
    let mut set = square_with_holes();
    set.inflate(-2, 32);

    let bbox = set.bbox(0).unwrap();
    assert_eq!(bbox.min, Point2::new(2, 2));
    assert_eq!(bbox.max, Point2::new(98, 98));
    assert!(!set.contains(Point2::new(9, 15)));
    assert!(set.contains(Point2::new(50, 50)));
}

#[test]
fn test_boolean_round_trip() {
    let mut a = PolygonSet::new();
    a.add_outline(square(0, 0, 20));
    let mut b = PolygonSet::new();
    b.add_outline(square(10, 10, 20));

    let union = PolygonSet::union_of(&a, &b, PolygonMode::Fast);
    let intersection = PolygonSet::intersection_of(&a, &b, PolygonMode::Fast);
    let difference = PolygonSet::difference_of(&a, &b, PolygonMode::Fast);

    assert_eq!(total_area2(&union), 2 * 700);
    assert_eq!(total_area2(&intersection), 2 * 100);
    assert_eq!(total_area2(&difference), 2 * 300);

    let mut rebuilt = difference;
    rebuilt.boolean_add(&intersection, PolygonMode::Fast);
    assert_eq!(total_area2(&rebuilt), 2 * 400);
}

#[test]
fn test_self_intersection_detection() {
    let mut set = square_with_holes();
    assert!(!set.is_self_intersecting());

    set.add_outline(chain(&[(200, 0), (210, 10), (210, 0), (200, 10)]));
    assert!(set.is_self_intersecting());

    set.delete_polygon(1);
    set.simplify(PolygonMode::Fast);
    assert!(!set.is_self_intersecting());
}

#[test]
fn test_translate_and_bbox() {
    let mut set = square_with_holes();
    set.translate(Point2::new(-50, 25));
    let bbox = set.bbox(5).unwrap();
    assert_eq!(bbox.min, Point2::new(-55, 20));
    assert_eq!(bbox.max, Point2::new(55, 130));
    assert!(!set.contains(Point2::new(-35, 37)));
}
