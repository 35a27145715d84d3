use approx::assert_relative_eq;
use geometry_kernel::core::vec2::Vec2;
use geometry_kernel::core::vec3;
use geometry_kernel::{
    planar, Angle, Composite, Cone, Contains, Cuboid, Intersection, IntersectionType,
    IntersectionWith, KernelConfig, Line, LineString, Object, Point, Polygon, Pyramid, Quaternion,
    RotationMatrix, RotationVector, Segment, Sphere, Transformable, Transformation,
    TransformationType, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_unit(rng: &mut StdRng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if v.length() > 0.1 {
            return v.normalize();
        }
    }
}

#[test]
fn cone_fan_has_one_ray_per_requested_sample() {
    let cone = Cone::new(Point::origin(), Vec3::Z, Angle::degrees(30.0)).unwrap();
    let rays = cone.rays_of_lateral_surface(4).unwrap();
    assert_eq!(rays.len(), 4);
    for ray in rays {
        assert_relative_eq!(
            vec3::angle_between(ray.direction().unwrap(), Vec3::Z),
            30f64.to_radians(),
            epsilon = 1.0e-12
        );
    }
}

#[test]
fn cube_boundary_is_inside() {
    let cube = Cuboid::cube(Point::origin(), 1.0).unwrap();
    let vertices = cube.vertices().unwrap();
    assert_eq!(vertices.len(), 8);
    for vertex in &vertices {
        assert_relative_eq!(
            vertex.distance_to(&Point::origin()).unwrap(),
            0.5 * 3f64.sqrt(),
            epsilon = 1.0e-12
        );
    }
    assert!(cube.contains(&Point::new(0.5, 0.0, 0.0)).unwrap());
    assert!(cube.contains(&Point::new(0.5, 0.5, 0.5)).unwrap());
    assert!(!cube.contains(&Point::new(0.51, 0.0, 0.0)).unwrap());
}

#[test]
fn translations_compose_into_a_translation() {
    let first = Transformation::translation(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    let second = Transformation::translation(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    let both = (first * second).unwrap();
    assert_eq!(both.kind(), TransformationType::Translation);
    assert_eq!(
        both.matrix().unwrap(),
        Transformation::translation(Vec3::new(1.0, 1.0, 0.0)).unwrap().matrix().unwrap()
    );
    assert!(both.is_rigid().unwrap());

    let rotation = Transformation::rotation_from_vector(&RotationVector::z(Angle::degrees(90.0)).unwrap()).unwrap();
    let mixed = (rotation * first).unwrap();
    assert_eq!(mixed.kind(), TransformationType::Affine);
    assert!(mixed.is_rigid().unwrap());

    let stretched = (Transformation::scaling(Vec3::new(2.0, 1.0, 1.0)).unwrap() * first).unwrap();
    assert!(!stretched.is_rigid().unwrap());
}

#[test]
fn transformation_type_lattice() {
    use TransformationType as T;
    let all = [
        T::Identity,
        T::Translation,
        T::Rotation,
        T::Scaling,
        T::Reflection,
        T::Shear,
        T::Affine,
    ];
    for &kind in &all {
        assert_eq!(T::compose(T::Identity, kind), kind);
        assert_eq!(T::compose(kind, T::Identity), kind);
        assert_eq!(T::compose(kind, kind), kind);
        assert_eq!(T::compose(kind, T::Undefined), T::Undefined);
        for &other in &all {
            assert_eq!(T::compose(kind, other), T::compose(other, kind));
        }
    }
    assert_eq!(T::compose(T::Rotation, T::Scaling), T::Affine);
}

#[test]
fn lines_equal_as_point_sets() {
    let origin = Point::new(1.0, 2.0, 3.0);
    let direction = Vec3::new(1.0, -2.0, 0.5);
    let line = Line::new(origin, direction).unwrap();
    assert_eq!(line, Line::new(origin, -direction).unwrap());
    assert_eq!(line, Line::new(origin, direction * 2.0).unwrap());
    assert_eq!(line, Line::new(origin + direction * 3.0, direction).unwrap());
    assert_eq!(line, Line::new(origin - direction * 0.5, -direction).unwrap());
    assert!(line != Line::new(origin, Vec3::X).unwrap());
}

#[test]
fn rotation_representations_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let tolerance = Angle::radians(1.0e-9);
    for _ in 0..200 {
        let axis = random_unit(&mut rng);
        let angle = Angle::radians(rng.random_range(0.0..std::f64::consts::PI));
        let vector = RotationVector::new(axis, angle).unwrap();

        let quaternion = Quaternion::from_rotation_vector(&vector).unwrap();
        let matrix = RotationMatrix::from_quaternion(&quaternion).unwrap();
        let back = Quaternion::from_rotation_matrix(&matrix).unwrap();
        assert!(quaternion.is_near(&back, tolerance).unwrap());

        let vector_back = RotationVector::from_quaternion(&quaternion).unwrap();
        assert!(vector.is_near(&vector_back, tolerance).unwrap());

        let probe = random_unit(&mut rng);
        let by_quaternion = (quaternion * probe).unwrap();
        let by_matrix = matrix.matrix() * probe;
        assert!(vec3::is_near(by_quaternion, by_matrix, 1.0e-12));
    }
}

#[test]
fn line_sphere_hit_count_follows_the_discriminant() {
    let sphere = Sphere::new(Point::origin(), 1.0).unwrap();
    let secant = Line::new(Point::new(-5.0, 0.0, 0.0), Vec3::X).unwrap();
    let tangent = Line::new(Point::new(-5.0, 1.0, 0.0), Vec3::X).unwrap();
    let miss = Line::new(Point::new(-5.0, 2.0, 0.0), Vec3::X).unwrap();

    assert_eq!(
        sphere.intersection_with(&secant).unwrap().kind().unwrap(),
        IntersectionType::PointSet
    );
    let touch = *sphere.intersection_with(&tangent).unwrap().as_variant::<Point>().unwrap();
    assert_eq!(touch, Point::new(0.0, 1.0, 0.0));
    assert_relative_eq!(touch.distance_to(&Point::origin()).unwrap(), 1.0, epsilon = 1.0e-9);
    assert!(sphere.intersection_with(&miss).unwrap().is_empty());
}

#[test]
fn intersection_union_is_associative_across_kinds() {
    let a = Intersection::point(Point::origin());
    let b = Intersection::segment(Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0)));
    let c = Intersection::line_string(LineString::new(vec![Point::origin(), Point::new(0.0, 1.0, 0.0)]));

    let left = ((a.clone() + b.clone()).unwrap() + c.clone()).unwrap();
    let right = (a.clone() + (b + c).unwrap()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left.kind().unwrap(), IntersectionType::Complex);
    assert_eq!((a.clone() + Intersection::empty()).unwrap(), a);
}

#[test]
fn pyramid_outline_lies_on_the_sphere() {
    let square = planar::Polygon::new(vec![
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ])
    .unwrap();
    let base = Polygon::new(square, Point::origin(), Vec3::X, Vec3::Y).unwrap();
    let pyramid = Pyramid::new(base, Point::new(0.0, 0.0, 10.0));
    let sphere = Sphere::new(Point::origin(), 2.0).unwrap();

    let config = KernelConfig::new(1.0e-9, 40).unwrap().with_only_in_sight(true);
    let outline = Object::from(pyramid)
        .intersection_with_config(&Object::from(sphere), &config)
        .unwrap();
    let near = outline.as_variant::<LineString>().unwrap();
    assert_eq!(near.point_count(), 40);
    for point in near {
        assert_relative_eq!(
            point.distance_to(&Point::origin()).unwrap(),
            2.0,
            epsilon = 1.0e-9
        );
    }
}

#[test]
fn composite_moves_as_a_whole() {
    let mut composite = Composite::new(vec![
        Object::from(Point::new(1.0, 0.0, 0.0)),
        Object::from(Segment::new(Point::origin(), Point::new(0.0, 1.0, 0.0))),
    ]);
    let quarter_turn = Transformation::rotation_around(
        Vec3::ZERO,
        &RotationVector::z(Angle::degrees(90.0)).unwrap(),
    )
    .unwrap();
    composite.apply_transformation(&quarter_turn).unwrap();

    let moved = composite.object_at(0).unwrap().as_variant::<Point>().unwrap();
    assert!(moved.is_near(&Point::new(0.0, 1.0, 0.0), 1.0e-12).unwrap());

    let segment = composite.object_at(1).unwrap().as_variant::<Segment>().unwrap();
    assert!(segment
        .second_point()
        .unwrap()
        .is_near(&Point::new(-1.0, 0.0, 0.0), 1.0e-12)
        .unwrap());
}

#[test]
fn undefined_values_never_compare_equal() {
    assert!(Point::undefined() != Point::undefined());
    assert!(Line::undefined() != Line::undefined());
    assert!(Segment::undefined() != Segment::undefined());
    assert!(Sphere::undefined() != Sphere::undefined());
    assert!(Cuboid::undefined() != Cuboid::undefined());
    assert!(Cone::undefined() != Cone::undefined());
    assert!(Pyramid::undefined() != Pyramid::undefined());
    assert!(Quaternion::undefined() != Quaternion::undefined());
    assert!(Transformation::undefined() != Transformation::undefined());
    assert!(Intersection::undefined() != Intersection::undefined());
}

fn largest_gap(outline: &LineString) -> f64 {
    outline
        .points()
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]).unwrap())
        .fold(0.0, f64::max)
}

#[test]
fn finer_cone_fans_trace_the_outline_more_closely() {
    let cone = Cone::new(Point::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Angle::degrees(8.0)).unwrap();
    let sphere = Sphere::new(Point::origin(), 2.0).unwrap();

    let mut previous = f64::INFINITY;
    for level in [4, 8, 16, 32, 64] {
        let outline = cone.intersection_with_sphere(&sphere, true, level).unwrap();
        let near = outline.as_variant::<LineString>().unwrap();
        assert_eq!(near.point_count(), level);
        let gap = largest_gap(near);
        assert!(gap <= previous + 1.0e-12, "gap {gap} grew past {previous} at {level} rays");
        previous = gap;
    }
}
