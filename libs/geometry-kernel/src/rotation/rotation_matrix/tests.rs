use super::*;
use crate::error::ErrorKind;

fn assert_mat_near(a: &RotationMatrix, b: &RotationMatrix) {
    assert!(
        a.matrix().abs_diff_eq(b.matrix(), 1e-12),
        "{a} != {b}"
    );
}

#[test]
fn test_rejects_non_orthonormal_columns() {
    let err = RotationMatrix::columns(Vec3::X * 2.0, Vec3::Y, Vec3::Z).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let skew = Vec3::new(1.0, 1.0, 0.0).normalize();
    let err = RotationMatrix::columns(Vec3::X, skew, Vec3::Z).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_rows_and_columns_agree() {
    let by_rows = RotationMatrix::rows(Vec3::Y, -Vec3::X, Vec3::Z).unwrap();
    let by_cols = RotationMatrix::columns(-Vec3::Y, Vec3::X, Vec3::Z).unwrap();
    assert_eq!(by_rows, by_cols);
    assert_eq!(by_rows.row_at(0).unwrap(), Vec3::Y);
    assert_eq!(by_rows.column_at(1).unwrap(), Vec3::X);
    assert!(by_rows.row_at(3).is_err());
}

#[test]
fn test_elementary_rotations_match_rotation_vectors() {
    let angle = Angle::degrees(33.0);
    for (axis, m) in [
        (Vec3::X, RotationMatrix::rx(angle)),
        (Vec3::Y, RotationMatrix::ry(angle)),
        (Vec3::Z, RotationMatrix::rz(angle)),
    ] {
        let rv = RotationVector::new(axis, angle).unwrap();
        assert_mat_near(&m, &RotationMatrix::from_rotation_vector(&rv).unwrap());
        let q = Quaternion::from_rotation_vector(&rv).unwrap();
        assert_mat_near(&m, &RotationMatrix::from_quaternion(&q).unwrap());
    }
}

#[test]
fn test_from_quaternion_requires_unitary() {
    let err = RotationMatrix::from_quaternion(&Quaternion::xyzs(0.0, 0.0, 0.0, 3.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotUnitary);
}

#[test]
fn test_transpose_is_inverse() {
    let m = RotationMatrix::rx(Angle::degrees(20.0)) * RotationMatrix::rz(Angle::degrees(-75.0));
    let product = m * m.transposed();
    assert_mat_near(&product, &RotationMatrix::unit());
}

#[test]
fn test_undefined() {
    assert!(RotationMatrix::undefined() != RotationMatrix::undefined());
    assert_eq!(RotationMatrix::undefined().to_string(), "Undefined");
    assert!(RotationMatrix::undefined().column_at(0).is_err());
}
