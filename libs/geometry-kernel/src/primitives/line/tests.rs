use super::*;
use crate::error::ErrorKind;

fn x_axis() -> Line {
    Line::new(Point::origin(), Vec3::X).unwrap()
}

#[test]
fn test_new_normalizes_direction() {
    let line = Line::new(Point::origin(), Vec3::new(0.0, 3.0, 4.0)).unwrap();
    assert!((line.direction().unwrap() - Vec3::new(0.0, 0.6, 0.8)).length() < 1.0e-15);

    let err = Line::new(Point::origin(), Vec3::ZERO).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_equality_ignores_sign_scale_and_origin() {
    let origin = Point::new(1.0, 2.0, 3.0);
    let direction = Vec3::new(1.0, -1.0, 0.5);
    let line = Line::new(origin, direction).unwrap();

    assert_eq!(line, Line::new(origin, -direction).unwrap());
    assert_eq!(line, Line::new(origin, direction * 2.0).unwrap());
    for k in [-3.0, 0.5, 7.0] {
        assert_eq!(line, Line::new(origin + direction * k, direction).unwrap());
    }
    assert!(line != Line::new(origin, Vec3::Z).unwrap());
    assert!(line != Line::new(Point::origin(), direction).unwrap());
}

#[test]
fn test_undefined_is_never_equal() {
    assert!(Line::undefined() != Line::undefined());
    assert!(!Line::undefined().is_defined());
    assert_eq!(
        Line::undefined().origin().unwrap_err().kind(),
        ErrorKind::Undefined
    );
}

#[test]
fn test_points_factory() {
    let line = Line::points(&Point::origin(), &Point::new(0.0, 0.0, 2.0)).unwrap();
    assert_eq!(line.direction().unwrap(), Vec3::Z);

    let err = Line::points(&Point::origin(), &Point::origin()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_contains_and_distance() {
    let line = x_axis();
    assert!(line.contains(&Point::new(-42.0, 0.0, 0.0)).unwrap());
    assert!(!line.contains(&Point::new(1.0, 1.0e-6, 0.0)).unwrap());
    assert_eq!(line.distance_to(&Point::new(3.0, 0.0, 2.0)).unwrap(), 2.0);

    let on_line = PointSet::new(vec![Point::origin(), Point::new(2.0, 0.0, 0.0)]);
    assert!(line.contains(&on_line).unwrap());
    assert!(!line.contains(&PointSet::empty()).unwrap());
}

#[test]
fn test_apply_transformation() {
    let mut line = x_axis();
    line.apply_transformation(&Transformation::translation(Vec3::Y).unwrap())
        .unwrap();
    assert!(line.contains(&Point::new(5.0, 1.0, 0.0)).unwrap());

    line.apply_transformation(&Transformation::scaling(Vec3::new(3.0, 1.0, 1.0)).unwrap())
        .unwrap();
    assert_eq!(line.direction().unwrap(), Vec3::X);
}

#[test]
fn test_display() {
    assert_eq!(
        x_axis().to_string(),
        "Line [origin: [0, 0, 0], direction: [1, 0, 0]]"
    );
}
