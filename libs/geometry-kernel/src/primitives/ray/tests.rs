use super::*;
use crate::error::ErrorKind;

fn ray_along_x() -> Ray {
    Ray::new(Point::origin(), Vec3::new(2.0, 0.0, 0.0)).unwrap()
}

#[test]
fn test_new() {
    let ray = ray_along_x();
    assert_eq!(ray.direction().unwrap(), Vec3::X);
    assert_eq!(ray.origin().unwrap(), Point::origin());

    let err = Ray::new(Point::origin(), Vec3::ZERO).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(Ray::undefined() != Ray::undefined());
}

#[test]
fn test_contains_is_one_sided() {
    let ray = ray_along_x();
    assert!(ray.contains(&Point::origin()).unwrap());
    assert!(ray.contains(&Point::new(10.0, 0.0, 0.0)).unwrap());
    assert!(!ray.contains(&Point::new(-1.0, 0.0, 0.0)).unwrap());
    assert!(!ray.contains(&Point::new(1.0, 1.0, 0.0)).unwrap());

    let ahead = PointSet::new(vec![Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)]);
    assert!(ray.contains(&ahead).unwrap());
    let mixed = PointSet::new(vec![Point::new(1.0, 0.0, 0.0), Point::new(-2.0, 0.0, 0.0)]);
    assert!(!ray.contains(&mixed).unwrap());
    assert!(!ray.contains(&PointSet::empty()).unwrap());
}

#[test]
fn test_distance_to() {
    let ray = ray_along_x();
    assert_eq!(ray.distance_to(&Point::new(5.0, 3.0, 0.0)).unwrap(), 3.0);
    assert_eq!(ray.distance_to(&Point::new(-3.0, 4.0, 0.0)).unwrap(), 5.0);
}

#[test]
fn test_apply_transformation_renormalizes() {
    let mut ray = ray_along_x();
    ray.apply_transformation(&Transformation::scaling(Vec3::new(4.0, 1.0, 1.0)).unwrap())
        .unwrap();
    assert_eq!(ray.direction().unwrap(), Vec3::X);

    let err = ray
        .apply_transformation(&Transformation::undefined())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Undefined);
}
