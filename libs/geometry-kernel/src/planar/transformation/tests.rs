use super::*;
use crate::error::ErrorKind;

#[test]
fn test_translation_and_rotation() {
    let t = Transformation::translation(Vec2::new(1.0, -1.0)).unwrap();
    assert_eq!(t.apply_to_point(Vec2::ZERO).unwrap(), Vec2::new(1.0, -1.0));
    assert_eq!(t.apply_to_vector(Vec2::X).unwrap(), Vec2::X);

    let r = Transformation::rotation(Angle::degrees(90.0)).unwrap();
    assert!(r.apply_to_point(Vec2::X).unwrap().distance(Vec2::Y) < 1e-12);
    assert!((r * Vec2::Y).unwrap().distance(-Vec2::X) < 1e-12);
}

#[test]
fn test_composition_types() {
    let t = Transformation::translation(Vec2::X).unwrap();
    let r = Transformation::rotation(Angle::degrees(30.0)).unwrap();
    assert_eq!((t * t).unwrap().kind(), TransformationType::Translation);
    assert_eq!((r * r).unwrap().kind(), TransformationType::Rotation);
    assert_eq!((t * r).unwrap().kind(), TransformationType::Affine);
    assert_eq!(
        (Transformation::identity() * r).unwrap().kind(),
        TransformationType::Rotation
    );
    assert!(!(t * r).unwrap().is_rigid());
    assert!(r.is_rigid());
}

#[test]
fn test_inverse() {
    let r = Transformation::rotation_around(Vec2::new(3.0, 0.0), Angle::degrees(45.0)).unwrap();
    let back = (r * r.inverse().unwrap()).unwrap();
    assert!(back.matrix().unwrap().abs_diff_eq(DMat3::IDENTITY, 1e-12));
}

#[test]
fn test_identity_inference_only() {
    assert!(Transformation::from_matrix(DMat3::IDENTITY)
        .unwrap()
        .is_identity()
        .unwrap());
    assert_eq!(
        Transformation::from_matrix(DMat3::from_angle(0.3))
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
    let undefined = Transformation::undefined();
    assert!(undefined != Transformation::undefined());
    assert_eq!(
        (undefined * Transformation::identity()).unwrap_err().kind(),
        ErrorKind::Undefined
    );
}
