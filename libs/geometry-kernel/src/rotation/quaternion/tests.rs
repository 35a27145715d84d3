//! Quaternion tests.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::error::ErrorKind;

fn about(axis: Vec3, degrees: f64) -> Quaternion {
    let rv = RotationVector::new(axis, Angle::degrees(degrees)).unwrap();
    Quaternion::from_rotation_vector(&rv).unwrap()
}

fn assert_vec_near(actual: Vec3, expected: Vec3) {
    assert!(
        actual.distance(expected) < 1e-12,
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn test_undefined_is_never_equal() {
    assert!(Quaternion::undefined() != Quaternion::undefined());
    assert!(Quaternion::undefined().x().is_err());
    assert_eq!(Quaternion::unit(), Quaternion::xyzs(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_equality_holds_up_to_sign() {
    let q = Quaternion::xyzs(0.0, 0.0, 0.6, 0.8);
    assert_eq!(q, -q);
    assert!(q != q.conjugate());
}

#[test]
fn test_formats() {
    let q = Quaternion::new(4.0, 1.0, 2.0, 3.0, QuaternionFormat::SXYZ);
    assert_eq!(q.to_array(QuaternionFormat::XYZS).unwrap(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q.to_string_in(QuaternionFormat::SXYZ), "[4, 1, 2, 3]");
    assert_eq!(q.to_string(), "[1, 2, 3, 4]");
}

#[test]
fn test_parse() {
    let q = Quaternion::parse("[0.0, 0.0, 0.0, 1.0]", QuaternionFormat::XYZS).unwrap();
    assert_eq!(q, Quaternion::unit());

    let err = Quaternion::parse("[1.0, 2.0, 3.0]", QuaternionFormat::XYZS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        Quaternion::parse("", QuaternionFormat::XYZS).unwrap_err().kind(),
        ErrorKind::Undefined
    );
}

// =============================================================================
// ROTATION
// =============================================================================

#[test]
fn test_rotate_vector_is_a_frame_rotation() {
    let q = about(Vec3::Z, 90.0);
    assert_vec_near((q * Vec3::X).unwrap(), -Vec3::Y);
    assert_vec_near((q.conjugate() * Vec3::X).unwrap(), Vec3::Y);
}

#[test]
fn test_rotate_vector_requires_unitary() {
    let err = (Quaternion::xyzs(0.0, 0.0, 0.0, 2.0) * Vec3::X).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotUnitary);
}

#[test]
fn test_product_composes_rotations() {
    let qx = about(Vec3::X, 90.0);
    let qz = about(Vec3::Z, 90.0);
    let v = Vec3::new(0.3, -1.2, 2.0);

    let composed = ((qx * qz) * v).unwrap();
    // the right operand applies first
    let sequential = (qx * (qz * v).unwrap()).unwrap();
    assert_vec_near(composed, sequential);
}

#[test]
fn test_dot_multiply_differs_by_cross_term() {
    let qx = about(Vec3::X, 90.0);
    let qy = about(Vec3::Y, 90.0);
    let cross = qx.cross_multiply(&qy).unwrap();
    let dot = qx.dot_multiply(&qy).unwrap();
    assert_abs_diff_eq!(cross.scalar_part(), dot.scalar_part(), epsilon = 1e-15);
    assert_abs_diff_eq!(cross.vector_part().z, -dot.vector_part().z, epsilon = 1e-15);
}

#[test]
fn test_division_and_inverse() {
    let q = about(Vec3::new(1.0, 1.0, 0.0).normalize(), 30.0);
    let identity = (q / q).unwrap();
    assert_abs_diff_eq!(identity.scalar_part().abs(), 1.0, epsilon = 1e-12);

    let err = (q / Quaternion::xyzs(0.0, 0.0, 0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_normalize_rejects_zero_norm() {
    let mut zero = Quaternion::xyzs(0.0, 0.0, 0.0, 0.0);
    assert!(zero.normalize().is_err());

    let mut q = Quaternion::xyzs(0.0, 0.0, 0.0, -2.0);
    q.normalize().unwrap();
    q.rectify();
    assert_eq!(q.to_array(QuaternionFormat::XYZS).unwrap(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_exp_inverts_log() {
    let q = about(Vec3::Y, 70.0) * 1.5;
    let back = q.log().unwrap().exp().unwrap();
    let [x, y, z, s] = back.to_array(QuaternionFormat::XYZS).unwrap();
    let [ex, ey, ez, es] = q.to_array(QuaternionFormat::XYZS).unwrap();
    assert_abs_diff_eq!(x, ex, epsilon = 1e-12);
    assert_abs_diff_eq!(y, ey, epsilon = 1e-12);
    assert_abs_diff_eq!(z, ez, epsilon = 1e-12);
    assert_abs_diff_eq!(s, es, epsilon = 1e-12);
}

#[test]
fn test_pow_scales_angle() {
    let q = about(Vec3::Z, 60.0);
    let half = q.pow(0.5).unwrap();
    let angle = Quaternion::unit().angular_difference_with(&half).unwrap();
    assert_abs_diff_eq!(angle.in_degrees(), 30.0, epsilon = 1e-9);
}

#[test]
fn test_angular_difference_and_is_near() {
    let q1 = about(Vec3::X, 10.0);
    let q2 = about(Vec3::X, 25.0);
    let difference = q1.angular_difference_with(&q2).unwrap();
    assert_abs_diff_eq!(difference.in_degrees(), 15.0, epsilon = 1e-9);

    assert!(q1.is_near(&q2, Angle::degrees(16.0)).unwrap());
    assert!(!q1.is_near(&q2, Angle::degrees(14.0)).unwrap());

    let err = Quaternion::xyzs(0.0, 0.0, 0.0, 2.0)
        .angular_difference_with(&q1)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotUnitary);
}

#[test]
fn test_shortest_rotation_maps_first_onto_second() {
    let from = Vec3::new(1.0, 2.0, -0.5);
    let to = Vec3::new(-3.0, 0.1, 1.0);
    let q = Quaternion::shortest_rotation(from, to).unwrap();
    assert_vec_near((q * from.normalize()).unwrap(), to.normalize());

    assert!(Quaternion::shortest_rotation(Vec3::ZERO, Vec3::X).is_err());
}

// =============================================================================
// INTERPOLATION
// =============================================================================

#[test]
fn test_interpolation_endpoints() {
    let q1 = about(Vec3::X, 20.0);
    let q2 = about(Vec3::Z, 140.0);
    assert!(Quaternion::slerp(&q1, &q2, 0.0)
        .unwrap()
        .is_near(&q1, Angle::radians(1e-6))
        .unwrap());
    assert!(Quaternion::slerp(&q1, &q2, 1.0)
        .unwrap()
        .is_near(&q2, Angle::radians(1e-6))
        .unwrap());
    assert!(Quaternion::nlerp(&q1, &q2, 1.0)
        .unwrap()
        .is_near(&q2, Angle::radians(1e-6))
        .unwrap());
}

#[test]
fn test_interpolation_rejects_out_of_range_ratio() {
    let q = Quaternion::unit();
    assert!(Quaternion::lerp(&q, &q, 1.5).is_err());
    assert!(Quaternion::slerp(&q, &q, -0.1).is_err());
}

#[test]
fn test_slerp_takes_the_short_path() {
    let q1 = about(Vec3::Z, 10.0);
    let q2 = -about(Vec3::Z, 30.0);
    let mid = Quaternion::slerp(&q1, &q2, 0.5).unwrap();
    let expected = about(Vec3::Z, 20.0);
    assert!(mid.is_near(&expected, Angle::radians(1e-6)).unwrap());
}

#[test]
fn test_matrix_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let q = Quaternion::xyzs(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
        .normalized()
        .unwrap();
        let m = RotationMatrix::from_quaternion(&q).unwrap();
        let back = Quaternion::from_rotation_matrix(&m).unwrap();
        assert!(back.is_near(&q, Angle::radians(1e-6)).unwrap());

        let v = Vec3::new(0.2, -0.7, 1.3);
        assert!((m * v).distance((q * v).unwrap()) < 1e-12);
    }
}
