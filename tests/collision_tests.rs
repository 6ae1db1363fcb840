mod common;

use common::square_with_holes;
use polyset::polygon::OverlayBackend;
use polyset::{OffsetConfig, OffsetEngine, Point2, PolygonSet};

#[test]
fn test_point_on_edge() {
    let set = square_with_holes();
    assert!(set.point_on_edge(Point2::new(0, 50)));
    assert!(set.point_on_edge(Point2::new(0, 10)));
    assert!(set.point_on_edge(Point2::new(10, 11)));
    assert!(set.point_on_edge(Point2::new(50, 15)));
    assert!(!set.point_on_edge(Point2::new(1, 50)));
    assert!(!set.point_on_edge(Point2::new(15, 12)));
}

#[test]
fn test_contains() {
    let set = square_with_holes();
    assert!(set.contains(Point2::new(10, 90)));
    assert!(set.contains(Point2::new(15, 16)));
    assert!(set.contains(Point2::new(40, 25)));
    assert!(set.contains(Point2::new(50, 15)));
    assert!(set.contains(Point2::new(0, 0)));

    assert!(!set.contains(Point2::new(15, 12)));
    assert!(!set.contains(Point2::new(42, 12)));
    assert!(!set.contains(Point2::new(200, 200)));
    assert!(!set.contains(Point2::new(-1, 50)));
}

#[test]
fn test_collide_with_clearance() {
    let set = square_with_holes();
    assert!(set.collide(Point2::new(-1, 10), 5));
    assert!(set.collide(Point2::new(11, 11), 5));
    assert!(!set.collide(Point2::new(-10, 10), 5));
    assert!(!set.collide(Point2::new(-1, 10), 0));
    assert!(!set.collide(Point2::new(15, 12), 0));
}

#[test]
fn test_collide_leaves_set_untouched() {
    let set = square_with_holes();
    let before = set.clone();
    let _ = set.collide(Point2::new(-1, 10), 5);
    assert_eq!(set, before);
}

#[test]
fn test_collide_with_shared_engine() {
    let set = square_with_holes();
    let config = OffsetConfig::default().with_collide_arc_segments(16);
    let mut engine = OffsetEngine::new(OverlayBackend, config);

    assert!(set.collide_with(&mut engine, Point2::new(-3, 50), 4));
    assert!(set.collide_with(&mut engine, Point2::new(104, 50), 4));
    assert!(!set.collide_with(&mut engine, Point2::new(110, 50), 4));
    assert_eq!(engine.tolerance_cache().cached(), 1);
}

#[test]
fn test_has_holes() {
    let mut set = PolygonSet::new();
    set.new_outline();
    set.new_outline();
    set.new_outline();
    assert!(!set.has_holes());

    assert!(square_with_holes().has_holes());
}

#[test]
fn test_contains_in_single_polygon() {
    let mut set = square_with_holes();
    set.add_outline(common::square(200, 200, 10));
    assert!(set.contains(Point2::new(205, 205)));
    assert!(set.contains_in(Point2::new(205, 205), 1));
    assert!(!set.contains_in(Point2::new(205, 205), 0));
    assert!(set.contains_in(Point2::new(50, 50), -2));
}
