//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace tolerance so geometry components can
//! stay decoupled from literal constants, and carries the per-query knobs of
//! the discretized surface intersections.

use ::config::constants::{ConfigError, GlobalConfig};

pub use ::config::constants::{
    approx_equal, approx_zero, DEFAULT_DISCRETIZATION_LEVEL, EIGEN_MAX_SWEEPS,
    EPSILON_TOLERANCE as EPSILON, QUADRIC_DISCRIMINANT_TOLERANCE,
};

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use geometry_kernel::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// assert_eq!(cfg.discretization_level, 40);
/// assert!(!cfg.only_in_sight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Distance band for point tests against points, lines, rays, segments
    /// and planes made through `Object::*_with_config`.
    pub tolerance: f64,
    /// Number of rays used to approximate cone and pyramid lateral surfaces.
    pub discretization_level: usize,
    /// Keep only the hit nearest to each ray origin.
    pub only_in_sight: bool,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-8, 48).unwrap();
    /// assert_eq!(cfg.discretization_level, 48);
    /// ```
    pub fn new(tolerance: f64, discretization_level: usize) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(tolerance, discretization_level)
            .map(Self::from)
            .map_err(KernelConfigError)
    }

    /// Returns a copy with the `only_in_sight` filter set.
    ///
    /// # Examples
    /// ```
    /// use geometry_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::default().with_only_in_sight(true);
    /// assert!(cfg.only_in_sight);
    /// ```
    pub fn with_only_in_sight(mut self, only_in_sight: bool) -> Self {
        self.only_in_sight = only_in_sight;
        self
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            discretization_level: cfg.discretization_level,
            only_in_sight: false,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            discretization_level: DEFAULT_DISCRETIZATION_LEVEL,
            only_in_sight: false,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq)]
pub struct KernelConfigError(ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}
