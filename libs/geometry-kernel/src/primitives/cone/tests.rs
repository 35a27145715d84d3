use approx::assert_relative_eq;

use super::*;
use crate::error::ErrorKind;
use crate::intersection::IntersectionType;
use crate::primitives::LineString;
use crate::rotation::Quaternion;

fn right_cone() -> Cone {
    Cone::new(Point::origin(), Vec3::Z, Angle::degrees(45.0)).unwrap()
}

#[test]
fn test_new_validates_axis_and_angle() {
    assert_eq!(
        Cone::new(Point::origin(), Vec3::ZERO, Angle::degrees(10.0)).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Cone::new(Point::origin(), Vec3::Z, Angle::degrees(190.0)).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    let cone = Cone::new(Point::origin(), Vec3::new(0.0, 0.0, 5.0), Angle::degrees(10.0)).unwrap();
    assert_eq!(cone.axis().unwrap(), Vec3::Z);
    assert_eq!(Cone::undefined().apex().unwrap_err().kind(), ErrorKind::Undefined);
}

#[test]
fn test_rays_of_lateral_surface() {
    let cone = right_cone();
    assert_eq!(
        cone.rays_of_lateral_surface(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    let single = cone.rays_of_lateral_surface(1).unwrap();
    assert_eq!(single.len(), 1);

    let rays = cone.rays_of_lateral_surface(4).unwrap();
    assert_eq!(rays.len(), 4);
    for ray in &rays {
        assert_eq!(ray.origin().unwrap(), Point::origin());
        let direction = ray.direction().unwrap();
        assert_relative_eq!(vec3::angle_between(direction, Vec3::Z), 45f64.to_radians(), epsilon = 1.0e-12);
    }
    // evenly spread: consecutive generators are a quarter turn apart around the axis
    let flat = |ray: &Ray| {
        let d = ray.direction().unwrap();
        Vec3::new(d.x, d.y, 0.0)
    };
    assert_relative_eq!(
        vec3::angle_between(flat(&rays[0]), flat(&rays[1])),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1.0e-12
    );
    assert_relative_eq!(
        vec3::angle_between(flat(&rays[0]), flat(&rays[2])),
        std::f64::consts::PI,
        epsilon = 1.0e-9
    );
}

#[test]
fn test_contains_point() {
    let cone = right_cone();
    assert!(cone.contains(&Point::origin()).unwrap());
    assert!(cone.contains(&Point::new(0.0, 0.0, 3.0)).unwrap());
    assert!(cone.contains(&Point::new(1.0, 0.0, 1.0)).unwrap());
    assert!(!cone.contains(&Point::new(1.1, 0.0, 1.0)).unwrap());
    assert!(!cone.contains(&Point::new(0.0, 0.0, -1.0)).unwrap());

    let inside = PointSet::new(vec![Point::new(0.0, 0.0, 1.0), Point::new(0.2, 0.2, 2.0)]);
    assert!(cone.contains(&inside).unwrap());
    assert!(cone.contains(&PointSet::empty()).unwrap());
    assert!(!Sphere::unit(Point::origin()).contains(&PointSet::empty()).unwrap());
    let crossing = Segment::new(Point::new(0.0, 0.0, 1.0), Point::new(5.0, 0.0, 1.0));
    assert!(!cone.contains(&crossing).unwrap());
}

#[test]
fn test_contains_ray_and_sphere() {
    let cone = right_cone();
    let along = Ray::new(Point::new(0.0, 0.0, 1.0), Vec3::new(0.1, 0.0, 1.0)).unwrap();
    assert!(cone.contains(&along).unwrap());
    let outward = Ray::new(Point::new(0.0, 0.0, 1.0), Vec3::X).unwrap();
    assert!(!cone.contains(&outward).unwrap());

    // distance from (0, 0, 10) to the surface is 10·sin(45°) ≈ 7.07
    assert!(cone.contains(&Sphere::new(Point::new(0.0, 0.0, 10.0), 7.0).unwrap()).unwrap());
    assert!(!cone.contains(&Sphere::new(Point::new(0.0, 0.0, 10.0), 7.2).unwrap()).unwrap());

    let ellipsoid = Ellipsoid::new(Point::new(0.0, 0.0, 10.0), 1.0, 1.0, 1.0, Quaternion::unit()).unwrap();
    assert_eq!(
        cone.contains(&ellipsoid).unwrap_err().kind(),
        ErrorKind::NotImplemented
    );
}

#[test]
fn test_distance_to() {
    let cone = right_cone();
    assert_eq!(cone.distance_to(&Point::origin()).unwrap(), 0.0);
    assert_relative_eq!(cone.distance_to(&Point::new(0.0, 0.0, -2.0)).unwrap(), 2.0);
    assert_relative_eq!(
        cone.distance_to(&Point::new(0.0, 0.0, 2.0)).unwrap(),
        2.0f64.sqrt(),
        epsilon = 1.0e-12
    );
    assert_relative_eq!(cone.distance_to(&Point::new(1.0, 0.0, 1.0)).unwrap(), 0.0, epsilon = 1.0e-12);
}

#[test]
fn test_sphere_outline_through_ray_fan() {
    let cone = Cone::new(Point::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Angle::degrees(5.0)).unwrap();
    let sphere = Sphere::new(Point::origin(), 2.0).unwrap();

    assert!(cone.intersects_sphere(&sphere, 8).unwrap());
    let outline = cone.intersection_with_sphere(&sphere, false, 8).unwrap();
    assert_eq!(outline.kind().unwrap(), IntersectionType::LineString);
    assert_eq!(outline.access_composite().unwrap().object_count().unwrap(), 2);
    let near = outline
        .access_composite()
        .unwrap()
        .object_at(0)
        .unwrap()
        .as_variant::<LineString>()
        .unwrap()
        .clone();
    assert_eq!(near.point_count(), 8);
    assert!(near.iter().all(|p| sphere.contains(p).unwrap()));

    let visible = cone.intersection_with_sphere(&sphere, true, 8).unwrap();
    assert!(visible.is::<LineString>());

    let far_away = Sphere::new(Point::new(50.0, 0.0, 0.0), 1.0).unwrap();
    assert!(!cone.intersects_sphere(&far_away, 8).unwrap());
    assert!(cone.intersection_with_sphere(&far_away, false, 8).unwrap().is_empty());
}

#[test]
fn test_ellipsoid_outline_through_ray_fan() {
    let cone = Cone::new(Point::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Angle::degrees(5.0)).unwrap();
    let ellipsoid = Ellipsoid::new(Point::origin(), 3.0, 3.0, 1.0, Quaternion::unit()).unwrap();
    assert!(cone.intersects_ellipsoid(&ellipsoid, 6).unwrap());
    let visible = cone.intersection_with_ellipsoid(&ellipsoid, true, 6).unwrap();
    let near = visible.as_variant::<LineString>().unwrap();
    assert_eq!(near.point_count(), 6);
    assert!(near.iter().all(|p| p.z() > 0.0));
}

#[test]
fn test_equality_with_flipped_axis() {
    let cone = Cone::new(Point::origin(), Vec3::Z, Angle::radians(0.5)).unwrap();
    let flipped = Cone::new(Point::origin(), Vec3::NEG_Z, Angle::pi() - Angle::radians(0.5)).unwrap();
    assert_eq!(cone, flipped);
    assert!(cone != right_cone());
    assert!(Cone::undefined() != Cone::undefined());
}

#[test]
fn test_apply_transformation() {
    let mut cone = right_cone();
    cone.apply_transformation(&Transformation::translation(Vec3::X).unwrap())
        .unwrap();
    assert_eq!(cone.apex().unwrap(), Point::new(1.0, 0.0, 0.0));
    cone.apply_transformation(&Transformation::scaling(Vec3::new(1.0, 1.0, 3.0)).unwrap())
        .unwrap();
    assert_eq!(cone.axis().unwrap(), Vec3::Z);
}

#[test]
fn test_display() {
    assert!(right_cone()
        .to_string()
        .starts_with("Cone [apex: [0, 0, 0], axis: [0, 0, 1], angle: "));
    assert_eq!(Cone::undefined().to_string(), "Undefined");
}
