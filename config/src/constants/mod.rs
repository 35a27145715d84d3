//! Centralized numeric settings shared by the geometry kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometric predicates.
///
/// Applied to surface-membership tests, parallelism checks, unit-norm checks
/// and the ε-band of solid containment.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Discriminant tolerance for the segment/ellipsoid quadratic.
///
/// The quadratic coefficients are expressed in squared inverse lengths, so the
/// band around zero is much tighter than [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::{QUADRIC_DISCRIMINANT_TOLERANCE, EPSILON_TOLERANCE};
/// assert!(QUADRIC_DISCRIMINANT_TOLERANCE < EPSILON_TOLERANCE);
/// ```
pub const QUADRIC_DISCRIMINANT_TOLERANCE: f64 = 1.0e-25;

// =============================================================================
// DISCRETIZATION CONSTANTS
// =============================================================================

/// Default number of rays used to approximate a cone or pyramid lateral
/// surface.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DISCRETIZATION_LEVEL;
/// assert_eq!(DEFAULT_DISCRETIZATION_LEVEL, 40);
/// ```
pub const DEFAULT_DISCRETIZATION_LEVEL: usize = 40;

/// Upper bound on Jacobi sweeps for symmetric 3×3 eigen decompositions.
///
/// # Examples
/// ```
/// use config::constants::EIGEN_MAX_SWEEPS;
/// assert!(EIGEN_MAX_SWEEPS >= 10);
/// ```
pub const EIGEN_MAX_SWEEPS: usize = 64;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Number of rays used by discretized surface intersections.
    pub discretization_level: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and discretization level.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.discretization_level, 24);
    /// ```
    pub fn new(tolerance: f64, discretization_level: usize) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if discretization_level == 0 {
            return Err(ConfigError::InvalidDiscretizationLevel(discretization_level));
        }
        Ok(Self {
            tolerance,
            discretization_level,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            discretization_level: DEFAULT_DISCRETIZATION_LEVEL,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the discretization level cannot produce a single ray.
    InvalidDiscretizationLevel(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDiscretizationLevel(value) => {
                write!(f, "discretization_level must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within [`EPSILON_TOLERANCE`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a f64 value is approximately zero within [`EPSILON_TOLERANCE`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

#[cfg(test)]
mod tests;
