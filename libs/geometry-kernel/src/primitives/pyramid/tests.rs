use super::*;
use crate::core::vec3::Vec3;
use crate::error::ErrorKind;
use crate::intersection::IntersectionType;
use crate::primitives::LineString;
use crate::rotation::Quaternion;

fn square_base(half: f64) -> Polygon {
    let square = planar::Polygon::new(vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ])
    .unwrap();
    Polygon::new(square, Point::origin(), Vec3::X, Vec3::Y).unwrap()
}

fn pyramid(height: f64) -> Pyramid {
    Pyramid::new(square_base(1.0), Point::new(0.0, 0.0, height))
}

#[test]
fn test_accessors() {
    let pyramid = pyramid(1.0);
    assert_eq!(pyramid.apex().unwrap(), Point::new(0.0, 0.0, 1.0));
    assert_eq!(pyramid.base().unwrap().vertex_count().unwrap(), 4);
    assert_eq!(pyramid.lateral_face_count().unwrap(), 4);
    assert_eq!(Pyramid::undefined().apex().unwrap_err().kind(), ErrorKind::Undefined);
}

#[test]
fn test_lateral_face_spans_apex_and_edge() {
    let pyramid = pyramid(1.0);
    let face = pyramid.lateral_face_at(0).unwrap();
    assert_eq!(face.vertex_count().unwrap(), 3);
    assert!(face
        .vertex_at(0)
        .unwrap()
        .is_near(&Point::new(0.0, 0.0, 1.0), 1.0e-12)
        .unwrap());
    assert!(face
        .vertex_at(1)
        .unwrap()
        .is_near(&Point::new(-1.0, -1.0, 0.0), 1.0e-12)
        .unwrap());
    assert!(face
        .vertex_at(2)
        .unwrap()
        .is_near(&Point::new(1.0, -1.0, 0.0), 1.0e-12)
        .unwrap());
    assert_eq!(
        pyramid.lateral_face_at(4).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_rays_of_lateral_face_sweep_the_edge() {
    let pyramid = pyramid(1.0);
    let rays = pyramid.rays_of_lateral_face_at(0, 3).unwrap();
    assert_eq!(rays.len(), 3);

    let expected = [
        Vec3::new(-1.0, -1.0, -1.0).normalize(),
        Vec3::new(0.0, -1.0, -1.0).normalize(),
        Vec3::new(1.0, -1.0, -1.0).normalize(),
    ];
    for (ray, direction) in rays.iter().zip(expected) {
        assert_eq!(ray.origin().unwrap(), Point::new(0.0, 0.0, 1.0));
        assert!(vec3::is_near(ray.direction().unwrap(), direction, 1.0e-12));
    }

    let single = pyramid.rays_of_lateral_face_at(0, 1).unwrap();
    assert_eq!(single.len(), 1);
    assert!(vec3::is_near(single[0].direction().unwrap(), expected[0], 1.0e-12));
    assert_eq!(
        pyramid.rays_of_lateral_face_at(0, 0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_rays_of_lateral_faces_split_evenly() {
    let pyramid = pyramid(1.0);
    assert_eq!(
        pyramid.rays_of_lateral_faces(3).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(pyramid.rays_of_lateral_faces(4).unwrap().len(), 4);
    assert_eq!(pyramid.rays_of_lateral_faces(8).unwrap().len(), 8);
    assert_eq!(pyramid.rays_of_lateral_faces(10).unwrap().len(), 8);
}

#[test]
fn test_contains_point() {
    let pyramid = pyramid(1.0);
    assert!(pyramid.contains(&Point::new(0.0, 0.0, 1.0)).unwrap());
    assert!(pyramid.contains(&Point::new(0.0, 0.0, 0.5)).unwrap());
    assert!(pyramid.contains(&Point::new(0.4, 0.4, 0.5)).unwrap());
    assert!(!pyramid.contains(&Point::new(0.9, 0.0, 0.5)).unwrap());
    assert!(!pyramid.contains(&Point::new(0.0, 0.0, 2.0)).unwrap());

    let inside = PointSet::new(vec![Point::new(0.0, 0.0, 0.5), Point::new(0.1, -0.1, 0.8)]);
    assert!(pyramid.contains(&inside).unwrap());
    assert!(pyramid.contains(&PointSet::empty()).unwrap());

    let poking_out = Segment::new(Point::new(0.0, 0.0, 0.5), Point::new(0.9, 0.0, 0.5));
    assert!(!pyramid.contains(&poking_out).unwrap());
}

#[test]
fn test_contains_in_flat_pyramid_fails_numerically() {
    let flat = Pyramid::new(square_base(1.0), Point::origin());
    assert_eq!(
        flat.contains(&Point::new(0.5, 0.0, 0.0)).unwrap_err().kind(),
        ErrorKind::NumericFailure
    );
    assert!(!flat.contains(&Point::new(0.5, 0.0, 1.0)).unwrap());
}

#[test]
fn test_contains_ellipsoid_is_not_implemented() {
    let ellipsoid = Ellipsoid::new(Point::new(0.0, 0.0, 0.3), 0.1, 0.1, 0.1, Quaternion::unit()).unwrap();
    assert_eq!(
        pyramid(1.0).contains(&ellipsoid).unwrap_err().kind(),
        ErrorKind::NotImplemented
    );
}

#[test]
fn test_sphere_outline_through_ray_fan() {
    let pyramid = pyramid(10.0);
    let sphere = Sphere::new(Point::origin(), 2.0).unwrap();

    assert!(pyramid.intersects_sphere(&sphere, 8).unwrap());
    let outline = pyramid.intersection_with_sphere(&sphere, false, 8).unwrap();
    assert_eq!(outline.kind().unwrap(), IntersectionType::LineString);
    assert_eq!(outline.access_composite().unwrap().object_count().unwrap(), 2);

    let visible = pyramid.intersection_with_sphere(&sphere, true, 8).unwrap();
    let near = visible.as_variant::<LineString>().unwrap();
    assert_eq!(near.point_count(), 8);
    assert!(near.iter().all(|p| p.z() > 0.0));

    let far_away = Sphere::new(Point::new(50.0, 0.0, 0.0), 1.0).unwrap();
    assert!(!pyramid.intersects_sphere(&far_away, 8).unwrap());
    assert!(pyramid.intersection_with_sphere(&far_away, false, 8).unwrap().is_empty());
}

#[test]
fn test_ellipsoid_outline_through_ray_fan() {
    let pyramid = pyramid(10.0);
    let ellipsoid = Ellipsoid::new(Point::origin(), 3.0, 3.0, 1.0, Quaternion::unit()).unwrap();
    assert!(pyramid.intersects_ellipsoid(&ellipsoid, 4).unwrap());
    let visible = pyramid.intersection_with_ellipsoid(&ellipsoid, true, 4).unwrap();
    assert_eq!(visible.as_variant::<LineString>().unwrap().point_count(), 4);
}

#[test]
fn test_apply_transformation_moves_base_and_apex() {
    let mut pyramid = pyramid(1.0);
    pyramid
        .apply_transformation(&Transformation::translation(Vec3::new(0.0, 0.0, 1.0)).unwrap())
        .unwrap();
    assert_eq!(pyramid.apex().unwrap(), Point::new(0.0, 0.0, 2.0));
    assert_eq!(pyramid.base().unwrap().origin().unwrap(), Point::new(0.0, 0.0, 1.0));
    assert!(pyramid.contains(&Point::new(0.0, 0.0, 1.5)).unwrap());
    assert!(!pyramid.contains(&Point::new(0.9, 0.0, 1.5)).unwrap());
}

#[test]
fn test_equality_and_display() {
    let pyramid = pyramid(1.0);
    assert_eq!(pyramid, pyramid.clone());
    assert!(pyramid != Pyramid::new(square_base(1.0), Point::new(0.0, 0.0, 2.0)));
    assert!(Pyramid::undefined() != Pyramid::undefined());
    assert!(pyramid
        .to_string()
        .starts_with("Pyramid [apex: [0, 0, 1], base: Polygon ["));
    assert_eq!(Pyramid::undefined().to_string(), "Undefined");
}
