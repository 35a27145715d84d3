//! # Error Types
//!
//! Error types for geometry operations. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Every public entry point checks that its operands are defined first
//! - Errors include context for debugging

use std::fmt;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometry operations.
///
/// ## Example
///
/// ```rust
/// use geometry_kernel::{GeometryError, Sphere};
///
/// let sphere = Sphere::undefined();
/// match sphere.radius() {
///     Ok(radius) => println!("radius {radius}"),
///     Err(GeometryError::Undefined { what }) => eprintln!("{what} is undefined"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operand (or `self`) failed `is_defined()`.
    #[error("{what} is undefined")]
    Undefined {
        /// Name of the undefined value.
        what: String,
    },

    /// A downcast asked for a variant the value does not hold.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested variant.
        expected: String,
        /// Variant actually held.
        found: String,
    },

    /// An argument is outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A rotation axis is not unit-norm.
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),

    /// A quaternion expected to be unitary is not.
    #[error("Quaternion is not unitary: {0}")]
    NotUnitary(String),

    /// A catalogued pairing without an algorithm.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// A numeric routine produced an inconsistent result.
    #[error("Numeric failure: {0}")]
    NumericFailure(String),
}

/// Discriminant of [`GeometryError`], convenient for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`GeometryError::Undefined`].
    Undefined,
    /// See [`GeometryError::TypeMismatch`].
    TypeMismatch,
    /// See [`GeometryError::InvalidArgument`].
    InvalidArgument,
    /// See [`GeometryError::InvalidAxis`].
    InvalidAxis,
    /// See [`GeometryError::NotUnitary`].
    NotUnitary,
    /// See [`GeometryError::NotImplemented`].
    NotImplemented,
    /// See [`GeometryError::NumericFailure`].
    NumericFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl GeometryError {
    /// Builds an [`GeometryError::Undefined`] naming the offending value.
    ///
    /// ```
    /// use geometry_kernel::error::{ErrorKind, GeometryError};
    /// assert_eq!(GeometryError::undefined("Cone").kind(), ErrorKind::Undefined);
    /// ```
    pub fn undefined(what: impl Into<String>) -> Self {
        Self::Undefined { what: what.into() }
    }

    /// Builds a [`GeometryError::TypeMismatch`].
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Builds a [`GeometryError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Builds a [`GeometryError::InvalidAxis`].
    pub fn invalid_axis(message: impl Into<String>) -> Self {
        Self::InvalidAxis(message.into())
    }

    /// Builds a [`GeometryError::NotUnitary`].
    pub fn not_unitary(message: impl Into<String>) -> Self {
        Self::NotUnitary(message.into())
    }

    /// Builds a [`GeometryError::NotImplemented`].
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented(message.into())
    }

    /// Builds a [`GeometryError::NumericFailure`].
    pub fn numeric_failure(message: impl Into<String>) -> Self {
        Self::NumericFailure(message.into())
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Undefined { .. } => ErrorKind::Undefined,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidAxis(_) => ErrorKind::InvalidAxis,
            Self::NotUnitary(_) => ErrorKind::NotUnitary,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::NumericFailure(_) => ErrorKind::NumericFailure,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
///
/// ## Example
///
/// ```rust
/// use geometry_kernel::error::GeometryResult;
/// use geometry_kernel::{Point, Sphere};
///
/// fn unit_at_origin() -> GeometryResult<Sphere> {
///     Sphere::new(Point::origin(), 1.0)
/// }
/// # assert!(unit_at_origin().is_ok());
/// ```
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Returns `Err(Undefined)` naming `what` unless `defined` holds.
///
/// Used at the top of every public entry point.
#[inline]
pub(crate) fn ensure_defined(defined: bool, what: &str) -> GeometryResult<()> {
    if defined {
        Ok(())
    } else {
        Err(GeometryError::undefined(what))
    }
}

// =============================================================================
// TESTS
// =============================================================================
