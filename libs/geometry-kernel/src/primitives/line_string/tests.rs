use super::*;
use crate::core::vec3::Vec3;
use crate::error::ErrorKind;

fn path() -> LineString {
    LineString::new(vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(2.0, 2.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
    ])
}

#[test]
fn test_keeps_order_and_duplicates() {
    let path = path();
    assert_eq!(path.point_count(), 4);
    assert_eq!(path.point_at(3).unwrap(), Point::origin());
    assert_eq!(path.point_at(4).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(path.iter().count(), 4);
}

#[test]
fn test_empty_is_undefined() {
    let empty = LineString::empty();
    assert!(!empty.is_defined());
    assert!(empty != LineString::empty());
    assert_eq!(
        empty.point_closest_to(&Point::origin()).unwrap_err().kind(),
        ErrorKind::Undefined
    );
    assert!(!empty.is_near(&empty, 1.0).unwrap());
}

#[test]
fn test_from_segment() {
    let segment = Segment::new(Point::origin(), Point::new(0.0, 0.0, 1.0));
    let path = LineString::from_segment(&segment).unwrap();
    assert_eq!(path.points(), &[Point::origin(), Point::new(0.0, 0.0, 1.0)]);
    assert_eq!(
        LineString::from_segment(&Segment::undefined()).unwrap_err().kind(),
        ErrorKind::Undefined
    );
}

#[test]
fn test_point_closest_to() {
    let closest = path().point_closest_to(&Point::new(3.0, 3.0, 0.0)).unwrap();
    assert_eq!(closest, Point::new(2.0, 2.0, 0.0));
}

#[test]
fn test_is_near_is_order_sensitive() {
    let nudged = LineString::new(path().iter().map(|p| *p + Vec3::splat(1.0e-10)).collect());
    assert!(path().is_near(&nudged, 1.0e-9).unwrap());

    let reversed: LineString = path().iter().rev().copied().collect();
    assert!(!path().is_near(&reversed, 1.0e-9).unwrap());
}

#[test]
fn test_apply_transformation() {
    let mut path = path();
    path.apply_transformation(&Transformation::translation(Vec3::Z).unwrap())
        .unwrap();
    assert!(path.iter().all(|p| p.z() == 1.0));
}

#[test]
fn test_display() {
    let path = LineString::new(vec![Point::origin(), Point::new(1.0, 0.0, 0.0)]);
    assert_eq!(path.to_string(), "LineString [[0, 0, 0], [1, 0, 0]]");
}
