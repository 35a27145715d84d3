//! Tests for the Vec3 helpers.

use super::*;

/// Ensures the undefined sentinel fails the defined check.
///
/// # Examples
/// ```
/// use geometry_kernel::core::vec3;
/// assert!(!vec3::is_defined(vec3::undefined()));
/// ```
#[test]
fn undefined_is_not_defined() {
    assert!(!is_defined(undefined()));
    assert!(!is_defined(Vec3::new(f64::INFINITY, 0.0, 0.0)));
    assert!(is_defined(Vec3::ZERO));
}

#[test]
fn angle_between_is_accurate_near_zero_and_pi() {
    let tiny = Vec3::new(1.0, 1.0e-10, 0.0);
    assert!((angle_between(Vec3::X, tiny) - 1.0e-10).abs() < 1.0e-15);
    assert!((angle_between(Vec3::X, -Vec3::X) - std::f64::consts::PI).abs() < 1.0e-15);
}

#[test]
fn outer_product_matches_definition() {
    let m = outer(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
    // column j = a * b[j]
    assert_eq!(m.x_axis, Vec3::new(4.0, 8.0, 12.0));
    assert_eq!(m.z_axis, Vec3::new(6.0, 12.0, 18.0));
    assert_eq!(m.row(1), Vec3::new(8.0, 10.0, 12.0));
}

#[test]
fn lexicographic_order() {
    let a = Vec3::new(0.0, 1.0, 2.0);
    let b = Vec3::new(0.0, 1.0, 3.0);
    assert_eq!(lexicographic_cmp(a, b), Ordering::Less);
    assert_eq!(lexicographic_cmp(b, a), Ordering::Greater);
    assert_eq!(lexicographic_cmp(a, a), Ordering::Equal);
}

#[test]
fn parallel_and_unit_checks() {
    assert!(is_parallel(Vec3::Z, -Vec3::Z));
    assert!(!is_parallel(Vec3::Z, Vec3::X));
    assert!(is_unit(Vec3::new(0.6, 0.8, 0.0)));
    assert!(!is_unit(Vec3::new(1.0, 1.0, 0.0)));
    assert!(is_zero(Vec3::splat(1.0e-12)));
}

#[test]
fn display_formats_components() {
    assert_eq!(display(Vec3::new(1.0, 2.5, -3.0)), "[1, 2.5, -3]");
    assert_eq!(display(undefined()), "Undefined");
}
