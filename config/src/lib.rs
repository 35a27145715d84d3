//! # Config Crate
//!
//! Centralized configuration constants for the geometry kernel.
//! All tolerances and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_DISCRETIZATION_LEVEL};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1e-11;
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Use the default ray count when the caller gives none
//! let requested: Option<usize> = None;
//! let rays = requested.unwrap_or(DEFAULT_DISCRETIZATION_LEVEL);
//! assert_eq!(rays, 40);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig::new` rejects unusable values

pub mod constants;

#[cfg(test)]
mod tests;
