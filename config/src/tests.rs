//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between tolerances and
//! the helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

#[test]
fn test_discriminant_tolerance_tighter_than_epsilon() {
    assert!(
        QUADRIC_DISCRIMINANT_TOLERANCE < EPSILON_TOLERANCE,
        "QUADRIC_DISCRIMINANT_TOLERANCE should be tighter than EPSILON_TOLERANCE"
    );
}

// =============================================================================
// DISCRETIZATION TESTS
// =============================================================================

#[test]
fn test_default_discretization_level_covers_common_bases() {
    // A square pyramid needs at least one ray per lateral face.
    assert!(DEFAULT_DISCRETIZATION_LEVEL >= 4);
}

#[test]
fn test_eigen_sweeps_bounded() {
    assert!(EIGEN_MAX_SWEEPS > 0 && EIGEN_MAX_SWEEPS <= 1000);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON_TOLERANCE / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON_TOLERANCE * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON_TOLERANCE / 2.0));
    assert!(!approx_zero(EPSILON_TOLERANCE * 2.0));
}
