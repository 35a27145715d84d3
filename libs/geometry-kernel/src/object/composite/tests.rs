use super::*;
use crate::core::vec3::Vec3;
use crate::error::ErrorKind;
use crate::intersection::IntersectionType;
use crate::primitives::{Plane, Point, Segment, Sphere};

fn points(xs: &[f64]) -> Composite {
    Composite::new(
        xs.iter()
            .map(|x| Object::from(Point::new(*x, 0.0, 0.0)))
            .collect(),
    )
}

#[test]
fn test_definedness() {
    assert!(Composite::empty().is_defined());
    assert!(Composite::empty().is_empty().unwrap());
    assert!(!Composite::undefined().is_defined());
    assert_eq!(
        Composite::undefined().object_count().unwrap_err().kind(),
        ErrorKind::Undefined
    );
    let holding_undefined = Composite::new(vec![Object::from(Point::undefined())]);
    assert!(!holding_undefined.is_defined());
}

#[test]
fn test_access() {
    let composite = points(&[0.0, 1.0]);
    assert_eq!(composite.object_count().unwrap(), 2);
    assert_eq!(
        *composite.object_at(1).unwrap().as_variant::<Point>().unwrap(),
        Point::new(1.0, 0.0, 0.0)
    );
    assert_eq!(
        composite.object_at(2).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    let single = points(&[3.0]);
    assert!(single.is::<Point>());
    assert!(!composite.is::<Point>());
    assert_eq!(
        composite.as_variant::<Point>().unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_append_and_add() {
    let mut composite = points(&[0.0]);
    composite.append(&points(&[1.0, 2.0])).unwrap();
    assert_eq!(composite, points(&[0.0, 1.0, 2.0]));

    let sum = (points(&[0.0]) + points(&[1.0])).unwrap();
    assert_eq!(sum, points(&[0.0, 1.0]));
    assert_eq!(
        (points(&[0.0]) + Composite::undefined()).unwrap_err().kind(),
        ErrorKind::Undefined
    );
}

#[test]
fn test_intersects_any_member() {
    let plane = Object::from(Plane::new(Point::origin(), Vec3::X).unwrap());
    assert!(points(&[-1.0, 0.0]).intersects(&plane).unwrap());
    assert!(!points(&[-1.0, 1.0]).intersects(&plane).unwrap());
    assert!(points(&[0.0]).intersects(&Composite::from_object(Plane::new(Point::origin(), Vec3::X).unwrap())).unwrap());
}

#[test]
fn test_contains_requires_every_member() {
    let first = Object::from(Plane::new(Point::origin(), Vec3::Z).unwrap());
    let second = Object::from(Plane::new(Point::origin(), Vec3::Y).unwrap());
    let planes = Composite::new(vec![first, second]);

    assert!(planes.contains(&Object::from(Point::new(1.0, 0.0, 0.0))).unwrap());
    assert!(!planes.contains(&Object::from(Point::new(0.0, 1.0, 0.0))).unwrap());
    assert!(planes.contains(&points(&[-1.0, 2.0])).unwrap());
}

#[test]
fn test_intersection_collects_non_empty_results() {
    let spheres = Composite::new(vec![
        Object::from(Sphere::new(Point::origin(), 1.0).unwrap()),
        Object::from(Sphere::new(Point::new(0.0, 0.0, 10.0), 1.0).unwrap()),
        Object::from(Sphere::new(Point::new(3.0, 0.0, 0.0), 1.0).unwrap()),
    ]);
    let segment = Object::from(Segment::new(Point::new(-5.0, 0.0, 0.0), Point::new(5.0, 0.0, 0.0)));
    let hits = spheres.intersection_with(&segment).unwrap();
    assert_eq!(hits.kind().unwrap(), IntersectionType::PointSet);
    assert_eq!(hits.access_composite().unwrap().object_count().unwrap(), 2);

    let mixed = Composite::new(vec![
        Object::from(Sphere::new(Point::origin(), 1.0).unwrap()),
        Object::from(Plane::new(Point::new(3.0, 0.0, 0.0), Vec3::X).unwrap()),
    ]);
    assert!(mixed.intersection_with(&segment).unwrap().is_complex());
}

#[test]
fn test_apply_transformation_moves_every_member() {
    let mut composite = points(&[0.0, 1.0]);
    composite
        .apply_transformation(&Transformation::translation(Vec3::Y).unwrap())
        .unwrap();
    assert_eq!(
        *composite.object_at(1).unwrap().as_variant::<Point>().unwrap(),
        Point::new(1.0, 1.0, 0.0)
    );
}

#[test]
fn test_display() {
    assert_eq!(Composite::empty().to_string(), "Composite []");
    assert_eq!(points(&[0.0, 1.0]).to_string(), "Composite [[0, 0, 0], [1, 0, 0]]");
    assert_eq!(Composite::undefined().to_string(), "Undefined");
}
