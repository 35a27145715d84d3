use super::*;
use crate::error::ErrorKind;

fn unit_x() -> Segment {
    Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0))
}

#[test]
fn test_accessors() {
    let segment = Segment::new(Point::new(1.0, 1.0, 1.0), Point::new(1.0, 1.0, 4.0));
    assert_eq!(segment.length().unwrap(), 3.0);
    assert_eq!(segment.direction().unwrap(), Vec3::Z);
    assert_eq!(segment.center().unwrap(), Point::new(1.0, 1.0, 2.5));
    assert!(!segment.is_degenerate().unwrap());
    assert_eq!(
        segment.to_line().unwrap(),
        Line::new(Point::new(1.0, 1.0, 0.0), Vec3::NEG_Z).unwrap()
    );
}

#[test]
fn test_degenerate() {
    let point = Point::new(1.0, 2.0, 3.0);
    let segment = Segment::new(point, point);
    assert!(segment.is_degenerate().unwrap());
    assert_eq!(segment.length().unwrap(), 0.0);
    assert_eq!(
        segment.direction().unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert!(segment.contains(&point).unwrap());
    assert_eq!(segment.distance_to(&Point::new(1.0, 2.0, 5.0)).unwrap(), 2.0);
}

#[test]
fn test_equality_ignores_endpoint_order() {
    let reversed = Segment::new(Point::new(1.0, 0.0, 0.0), Point::origin());
    assert_eq!(unit_x(), reversed);
    assert!(unit_x() != Segment::new(Point::origin(), Point::new(2.0, 0.0, 0.0)));
    assert!(Segment::undefined() != Segment::undefined());
}

#[test]
fn test_contains_point() {
    let segment = unit_x();
    assert!(segment.contains(&Point::origin()).unwrap());
    assert!(segment.contains(&Point::new(0.5, 0.0, 0.0)).unwrap());
    assert!(segment.contains(&Point::new(1.0, 0.0, 0.0)).unwrap());
    assert!(!segment.contains(&Point::new(1.5, 0.0, 0.0)).unwrap());
    assert!(!segment.contains(&Point::new(-0.5, 0.0, 0.0)).unwrap());
    assert!(!segment.contains(&Point::new(0.5, 0.1, 0.0)).unwrap());
}

#[test]
fn test_distance_to_clamps() {
    let segment = unit_x();
    assert_eq!(segment.distance_to(&Point::new(0.5, 2.0, 0.0)).unwrap(), 2.0);
    assert_eq!(segment.distance_to(&Point::new(4.0, 0.0, 0.0)).unwrap(), 3.0);
    assert_eq!(segment.distance_to(&Point::new(-1.0, 0.0, 0.0)).unwrap(), 1.0);

    let cloud = PointSet::new(vec![Point::new(4.0, 0.0, 0.0), Point::new(0.5, 0.0, 0.5)]);
    assert_eq!(segment.distance_to_point_set(&cloud).unwrap(), 0.5);
}

#[test]
fn test_apply_transformation() {
    let mut segment = unit_x();
    segment
        .apply_transformation(&Transformation::translation(Vec3::Z).unwrap())
        .unwrap();
    assert_eq!(
        segment,
        Segment::new(Point::new(0.0, 0.0, 1.0), Point::new(1.0, 0.0, 1.0))
    );
}

#[test]
fn test_display() {
    assert_eq!(unit_x().to_string(), "Segment [[0, 0, 0], [1, 0, 0]]");
}
