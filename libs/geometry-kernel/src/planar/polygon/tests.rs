use super::*;
use crate::angle::Angle;

fn square(min: f64, max: f64) -> Vec<Vec2> {
    vec![
        Vec2::new(min, min),
        Vec2::new(max, min),
        Vec2::new(max, max),
        Vec2::new(min, max),
    ]
}

#[test]
fn test_rejects_degenerate_rings() {
    assert!(Polygon::new(vec![Vec2::ZERO, Vec2::X]).is_err());
    assert!(!Polygon::undefined().is_defined());
}

#[test]
fn test_closing_vertex_is_dropped() {
    let mut ring = square(0.0, 1.0);
    ring.push(Vec2::ZERO);
    let polygon = Polygon::new(ring).unwrap();
    assert_eq!(polygon.vertex_count(), 4);
    assert_eq!(polygon.edge_at(3).unwrap(), (Vec2::new(0.0, 1.0), Vec2::ZERO));
    assert!(polygon.edge_at(4).is_err());
}

#[test]
fn test_contains_point_with_boundary_and_holes() {
    let polygon = Polygon::with_inner_rings(square(0.0, 4.0), vec![square(1.0, 2.0)]).unwrap();
    assert!(polygon.contains_point(Vec2::new(3.0, 3.0)).unwrap());
    assert!(polygon.contains_point(Vec2::new(4.0, 4.0)).unwrap());
    assert!(!polygon.contains_point(Vec2::new(1.5, 1.5)).unwrap());
    assert!(polygon.contains_point(Vec2::new(1.0, 1.5)).unwrap());
    assert!(!polygon.contains_point(Vec2::new(-0.1, 2.0)).unwrap());
}

#[test]
fn test_contains_point_concave() {
    let arrow = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(0.0, 4.0),
        Vec2::new(1.0, 2.0),
    ])
    .unwrap();
    assert!(arrow.contains_point(Vec2::new(2.0, 2.0)).unwrap());
    assert!(!arrow.contains_point(Vec2::new(0.5, 2.0)).unwrap());
}

#[test]
fn test_intersects() {
    let a = Polygon::new(square(0.0, 2.0)).unwrap();
    let overlapping = Polygon::new(square(1.0, 3.0)).unwrap();
    let inside = Polygon::new(square(0.5, 1.5)).unwrap();
    let touching = Polygon::new(square(2.0, 3.0)).unwrap();
    let apart = Polygon::new(square(5.0, 6.0)).unwrap();

    assert!(a.intersects(&overlapping).unwrap());
    assert!(a.intersects(&inside).unwrap());
    assert!(inside.intersects(&a).unwrap());
    assert!(a.intersects(&touching).unwrap());
    assert!(!a.intersects(&apart).unwrap());

    assert!(a.contains_polygon(&inside).unwrap());
    assert!(!a.contains_polygon(&overlapping).unwrap());
}

#[test]
fn test_apply_transformation() {
    let mut polygon = Polygon::new(square(0.0, 1.0)).unwrap();
    let t = Transformation::rotation(Angle::degrees(90.0)).unwrap();
    polygon.apply_transformation(&t).unwrap();
    let moved = polygon.vertex_at(1).unwrap();
    assert!(moved.distance(Vec2::new(0.0, 1.0)) < 1e-12);
}

#[test]
fn test_is_near() {
    let a = Polygon::new(square(0.0, 1.0)).unwrap();
    let b = Polygon::new(square(1e-10, 1.0)).unwrap();
    assert!(a.is_near(&b, 1e-9).unwrap());
    assert!(!a.is_near(&b, 1e-12).unwrap());
    assert!(a != b);
}
