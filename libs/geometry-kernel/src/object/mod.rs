//! # Objects
//!
//! The closed set of geometric primitives as a single sum type, plus the
//! capability traits every primitive implements.
//!
//! Per-pair algorithms live on the primitive types as implementations of
//! [`Intersects`], [`Contains`] and [`IntersectionWith`]. [`Object`] routes a
//! runtime pair to the matching implementation, and reports pairings without
//! an algorithm as [`GeometryError::NotImplemented`].
//!
//! ## Example
//!
//! ```rust
//! use geometry_kernel::{Object, Plane, Point, Segment, Vec3};
//!
//! let plane = Object::from(Plane::new(Point::origin(), Vec3::Z).unwrap());
//! let segment = Object::from(Segment::new(
//!     Point::new(0.0, 0.0, -1.0),
//!     Point::new(0.0, 0.0, 1.0),
//! ));
//!
//! let hit = segment.intersection_with(&plane).unwrap();
//! assert!(hit.is::<Point>());
//! assert!(plane.intersects(&segment).unwrap());
//! ```

pub mod composite;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::KernelConfig;
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::primitives::{
    Cone, Cuboid, Ellipsoid, Line, LineString, Plane, Point, PointSet, Polygon, Pyramid, Ray,
    Segment, Sphere,
};
use crate::transformation::Transformation;

pub use composite::Composite;

// =============================================================================
// CAPABILITY TRAITS
// =============================================================================

/// Boolean intersection test against `Rhs`.
pub trait Intersects<Rhs: ?Sized> {
    /// True when the two share at least one point.
    fn intersects(&self, other: &Rhs) -> GeometryResult<bool>;
}

/// Containment test against `Rhs`.
pub trait Contains<Rhs: ?Sized> {
    /// True when `other` lies entirely within `self`.
    fn contains(&self, other: &Rhs) -> GeometryResult<bool>;
}

/// Computes the intersection with `Rhs`.
pub trait IntersectionWith<Rhs: ?Sized> {
    /// The shared geometry, wrapped in an [`Intersection`].
    fn intersection_with(&self, other: &Rhs) -> GeometryResult<Intersection>;
}

/// In-place application of a [`Transformation`].
pub trait Transformable {
    /// Maps the object through `transformation`.
    ///
    /// Fails with `Undefined` when either side is undefined.
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()>;
}

/// A concrete primitive type that can be wrapped into, and borrowed back
/// from, an [`Object`].
pub trait ObjectVariant: Clone + Into<Object> {
    /// Variant name used in messages.
    const NAME: &'static str;

    /// Borrows the payload when `object` holds this variant.
    fn from_object(object: &Object) -> Option<&Self>;
}

// =============================================================================
// OBJECT
// =============================================================================

/// Any geometric primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Object {
    Point(Point),
    PointSet(PointSet),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    LineString(LineString),
    Polygon(Polygon),
    Plane(Plane),
    Sphere(Sphere),
    Ellipsoid(Ellipsoid),
    Cuboid(Cuboid),
    Pyramid(Pyramid),
    Cone(Cone),
    Composite(Composite),
}

macro_rules! object_variants {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Object::$variant(value)
                }
            }

            impl ObjectVariant for $variant {
                const NAME: &'static str = stringify!($variant);

                fn from_object(object: &Object) -> Option<&Self> {
                    match object {
                        Object::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*

        impl Object {
            /// Variant name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Object::$variant(_) => stringify!($variant),)*
                }
            }

            /// True when the wrapped primitive is defined.
            pub fn is_defined(&self) -> bool {
                match self {
                    $(Object::$variant(value) => value.is_defined(),)*
                }
            }
        }

        impl Transformable for Object {
            fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
                match self {
                    $(Object::$variant(value) => value.apply_transformation(transformation),)*
                }
            }
        }

        impl fmt::Display for Object {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Object::$variant(value) => fmt::Display::fmt(value, f),)*
                }
            }
        }
    };
}

object_variants!(
    Point, PointSet, Line, Ray, Segment, LineString, Polygon, Plane, Sphere, Ellipsoid, Cuboid,
    Pyramid, Cone, Composite,
);

/// Distance from `point` to the shapes tested by a plain distance band.
fn distance_to_point(shape: &Object, point: &Point) -> GeometryResult<Option<f64>> {
    let distance = match shape {
        Object::Point(a) => a.distance_to(point)?,
        Object::Line(a) => a.distance_to(point)?,
        Object::Ray(a) => a.distance_to(point)?,
        Object::Segment(a) => a.distance_to(point)?,
        Object::Plane(a) => a.distance_to(point)?,
        _ => return Ok(None),
    };
    Ok(Some(distance))
}

/// Point and non-empty point-set containment within `tolerance`, or `None`
/// when the pair is not tested by distance.
fn banded_contains(
    shape: &Object,
    other: &Object,
    tolerance: f64,
) -> GeometryResult<Option<bool>> {
    let points = match (shape, other) {
        (Object::Point(_), Object::PointSet(_)) => return Ok(None),
        (_, Object::Point(point)) => std::slice::from_ref(point),
        (_, Object::PointSet(set)) => set.points(),
        _ => return Ok(None),
    };
    if points.is_empty() {
        let banded = matches!(
            shape,
            Object::Line(_) | Object::Ray(_) | Object::Segment(_) | Object::Plane(_)
        );
        return Ok(banded.then_some(false));
    }
    for point in points {
        match distance_to_point(shape, point)? {
            Some(distance) if distance < tolerance => {}
            Some(_) => return Ok(Some(false)),
            None => return Ok(None),
        }
    }
    Ok(Some(true))
}

fn unsupported(operation: &str, left: &Object, right: &Object) -> GeometryError {
    GeometryError::not_implemented(format!(
        "{} {operation} {}",
        left.name(),
        right.name()
    ))
}

impl Object {
    /// True when this object holds a `T`.
    pub fn is<T: ObjectVariant>(&self) -> bool {
        T::from_object(self).is_some()
    }

    /// Borrows the payload as a `T`, or fails with `TypeMismatch`.
    pub fn as_variant<T: ObjectVariant>(&self) -> GeometryResult<&T> {
        T::from_object(self).ok_or_else(|| GeometryError::type_mismatch(T::NAME, self.name()))
    }

    /// Intersection test with the default configuration.
    pub fn intersects(&self, other: &Object) -> GeometryResult<bool> {
        self.intersects_with_config(other, &KernelConfig::default())
    }

    /// Intersection test; `config.discretization_level` drives the ray fans
    /// of cones and pyramids, and `config.tolerance` is the distance band
    /// for a point against a point, line, ray, segment or plane.
    pub fn intersects_with_config(
        &self,
        other: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), self.name())?;
        ensure_defined(other.is_defined(), other.name())?;

        if let (shape, Object::Point(point)) | (Object::Point(point), shape) = (self, other) {
            if let Some(distance) = distance_to_point(shape, point)? {
                return Ok(distance < config.tolerance);
            }
        }

        let level = config.discretization_level;
        use Object as O;
        match (self, other) {
            (O::Composite(a), b) => a.intersects_with_config(b, config),
            (a, O::Composite(b)) => b.intersects_with_config(a, config),

            (O::Line(a), O::Plane(b)) => a.intersects(b),
            (O::Line(a), O::Sphere(b)) => a.intersects(b),
            (O::Line(a), O::Ellipsoid(b)) => a.intersects(b),
            (O::Line(a), O::Cuboid(b)) => a.intersects(b),

            (O::Ray(a), O::Plane(b)) => a.intersects(b),
            (O::Ray(a), O::Sphere(b)) => a.intersects(b),
            (O::Ray(a), O::Ellipsoid(b)) => a.intersects(b),
            (O::Ray(a), O::Cuboid(b)) => a.intersects(b),

            (O::Segment(a), O::Plane(b)) => a.intersects(b),
            (O::Segment(a), O::Sphere(b)) => a.intersects(b),
            (O::Segment(a), O::Ellipsoid(b)) => a.intersects(b),
            (O::Segment(a), O::Cuboid(b)) => a.intersects(b),

            (O::Point(a), O::Sphere(b)) => b.intersects(a),
            (O::Point(a), O::Ellipsoid(b)) => b.intersects(a),
            (O::Point(a), O::Cuboid(b)) => b.intersects(a),
            (O::PointSet(a), O::Plane(b)) => b.intersects(a),
            (O::PointSet(a), O::Sphere(b)) => b.intersects(a),
            (O::PointSet(a), O::Ellipsoid(b)) => b.intersects(a),
            (O::PointSet(a), O::Cuboid(b)) => b.intersects(a),

            (O::Plane(a), O::PointSet(b)) => a.intersects(b),
            (O::Plane(a), O::Line(b)) => a.intersects(b),
            (O::Plane(a), O::Ray(b)) => a.intersects(b),
            (O::Plane(a), O::Segment(b)) => a.intersects(b),
            (O::Plane(a), O::Sphere(b)) => a.intersects(b),
            (O::Plane(a), O::Ellipsoid(b)) => a.intersects(b),
            (O::Plane(a), O::Cuboid(b)) => a.intersects(b),

            (O::Sphere(a), O::Point(b)) => a.intersects(b),
            (O::Sphere(a), O::PointSet(b)) => a.intersects(b),
            (O::Sphere(a), O::Line(b)) => a.intersects(b),
            (O::Sphere(a), O::Ray(b)) => a.intersects(b),
            (O::Sphere(a), O::Segment(b)) => a.intersects(b),
            (O::Sphere(a), O::Plane(b)) => a.intersects(b),
            (O::Sphere(a), O::Pyramid(b)) => b.intersects_sphere(a, level),
            (O::Sphere(a), O::Cone(b)) => b.intersects_sphere(a, level),

            (O::Ellipsoid(a), O::Point(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::PointSet(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::Line(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::Ray(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::Segment(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::Plane(b)) => a.intersects(b),
            (O::Ellipsoid(a), O::Pyramid(b)) => b.intersects_ellipsoid(a, level),
            (O::Ellipsoid(a), O::Cone(b)) => b.intersects_ellipsoid(a, level),

            (O::Cuboid(a), O::Point(b)) => a.intersects(b),
            (O::Cuboid(a), O::PointSet(b)) => a.intersects(b),
            (O::Cuboid(a), O::Line(b)) => a.intersects(b),
            (O::Cuboid(a), O::Ray(b)) => a.intersects(b),
            (O::Cuboid(a), O::Segment(b)) => a.intersects(b),
            (O::Cuboid(a), O::Plane(b)) => a.intersects(b),
            (O::Cuboid(a), O::Cuboid(b)) => a.intersects(b),

            (O::Pyramid(a), O::Sphere(b)) => a.intersects_sphere(b, level),
            (O::Pyramid(a), O::Ellipsoid(b)) => a.intersects_ellipsoid(b, level),
            (O::Cone(a), O::Sphere(b)) => a.intersects_sphere(b, level),
            (O::Cone(a), O::Ellipsoid(b)) => a.intersects_ellipsoid(b, level),

            (O::Polygon(a), O::Point(b)) => a.intersects(b),
            (O::Point(a), O::Polygon(b)) => b.intersects(a),
            (O::Polygon(a), O::Polygon(b)) => a.intersects(b),

            _ => Err(unsupported("intersects", self, other)),
        }
    }

    /// True when `other` lies entirely within this object.
    pub fn contains(&self, other: &Object) -> GeometryResult<bool> {
        self.contains_with_config(other, &KernelConfig::default())
    }

    /// Containment test; points and point sets are held by a point, line,
    /// ray, segment or plane when closer than `config.tolerance`.
    pub fn contains_with_config(
        &self,
        other: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), self.name())?;
        ensure_defined(other.is_defined(), other.name())?;

        if let Some(within) = banded_contains(self, other, config.tolerance)? {
            return Ok(within);
        }

        use Object as O;
        match (self, other) {
            (O::Composite(a), b) => a.contains_with_config(b, config),
            (a, O::Composite(b)) => {
                for object in b.objects() {
                    if !a.contains_with_config(object, config)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            (O::Plane(a), O::Line(b)) => a.contains(b),
            (O::Plane(a), O::Ray(b)) => a.contains(b),
            (O::Plane(a), O::Segment(b)) => a.contains(b),

            (O::Sphere(a), O::Point(b)) => a.contains(b),
            (O::Sphere(a), O::PointSet(b)) => a.contains(b),

            (O::Ellipsoid(a), O::Point(b)) => a.contains(b),
            (O::Ellipsoid(a), O::PointSet(b)) => a.contains(b),
            (O::Ellipsoid(a), O::Segment(b)) => a.contains(b),

            (O::Cuboid(a), O::Point(b)) => a.contains(b),
            (O::Cuboid(a), O::PointSet(b)) => a.contains(b),
            (O::Cuboid(a), O::Segment(b)) => a.contains(b),

            (O::Pyramid(a), O::Point(b)) => a.contains(b),
            (O::Pyramid(a), O::PointSet(b)) => a.contains(b),
            (O::Pyramid(a), O::Segment(b)) => a.contains(b),
            (O::Pyramid(a), O::Ellipsoid(b)) => a.contains(b),

            (O::Cone(a), O::Point(b)) => a.contains(b),
            (O::Cone(a), O::PointSet(b)) => a.contains(b),
            (O::Cone(a), O::Segment(b)) => a.contains(b),
            (O::Cone(a), O::Ray(b)) => a.contains(b),
            (O::Cone(a), O::Sphere(b)) => a.contains(b),
            (O::Cone(a), O::Ellipsoid(b)) => a.contains(b),

            (O::Polygon(a), O::Point(b)) => a.contains(b),

            _ => Err(unsupported("contains", self, other)),
        }
    }

    /// Intersection with the default configuration.
    pub fn intersection_with(&self, other: &Object) -> GeometryResult<Intersection> {
        self.intersection_with_config(other, &KernelConfig::default())
    }

    /// Intersection; `config.only_in_sight` applies to rays and ray fans, and
    /// `config.discretization_level` sizes the fans.
    pub fn intersection_with_config(
        &self,
        other: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<Intersection> {
        ensure_defined(self.is_defined(), self.name())?;
        ensure_defined(other.is_defined(), other.name())?;

        let sight = config.only_in_sight;
        let level = config.discretization_level;
        use Object as O;
        match (self, other) {
            (O::Composite(a), b) => a.intersection_with_config(b, config),
            (a, O::Composite(b)) => {
                let mut intersection = Intersection::empty();
                for object in b.objects() {
                    let partial = a.intersection_with_config(object, config)?;
                    if !partial.is_empty() {
                        intersection.append(&partial)?;
                    }
                }
                Ok(intersection)
            }

            (O::Line(a), O::Plane(b)) => a.intersection_with(b),
            (O::Line(a), O::Sphere(b)) => a.intersection_with(b),
            (O::Line(a), O::Ellipsoid(b)) => a.intersection_with(b),
            (O::Line(a), O::Cuboid(b)) => a.intersection_with(b),

            (O::Ray(a), O::Plane(b)) => a.intersection_with(b),
            (O::Ray(a), O::Sphere(b)) => b.intersection_with_ray(a, sight),
            (O::Ray(a), O::Ellipsoid(b)) => b.intersection_with_ray(a, sight),
            (O::Ray(a), O::Cuboid(b)) => a.intersection_with(b),

            (O::Segment(a), O::Plane(b)) => a.intersection_with(b),
            (O::Segment(a), O::Sphere(b)) => a.intersection_with(b),
            (O::Segment(a), O::Ellipsoid(b)) => a.intersection_with(b),
            (O::Segment(a), O::Cuboid(b)) => a.intersection_with(b),

            (O::Plane(a), O::Point(b)) => a.intersection_with(b),
            (O::Plane(a), O::PointSet(b)) => a.intersection_with(b),
            (O::Plane(a), O::Line(b)) => a.intersection_with(b),
            (O::Plane(a), O::Ray(b)) => a.intersection_with(b),
            (O::Plane(a), O::Segment(b)) => a.intersection_with(b),
            (O::Point(a), O::Plane(b)) => b.intersection_with(a),
            (O::PointSet(a), O::Plane(b)) => b.intersection_with(a),

            (O::Sphere(a), O::Line(b)) => a.intersection_with(b),
            (O::Sphere(a), O::Ray(b)) => a.intersection_with_ray(b, sight),
            (O::Sphere(a), O::Segment(b)) => a.intersection_with(b),
            (O::Sphere(a), O::Pyramid(b)) => b.intersection_with_sphere(a, sight, level),
            (O::Sphere(a), O::Cone(b)) => b.intersection_with_sphere(a, sight, level),

            (O::Ellipsoid(a), O::Line(b)) => a.intersection_with(b),
            (O::Ellipsoid(a), O::Ray(b)) => a.intersection_with_ray(b, sight),
            (O::Ellipsoid(a), O::Segment(b)) => a.intersection_with(b),
            (O::Ellipsoid(a), O::Pyramid(b)) => b.intersection_with_ellipsoid(a, sight, level),
            (O::Ellipsoid(a), O::Cone(b)) => b.intersection_with_ellipsoid(a, sight, level),

            (O::Cuboid(a), O::Line(b)) => a.intersection_with(b),
            (O::Cuboid(a), O::Ray(b)) => a.intersection_with(b),
            (O::Cuboid(a), O::Segment(b)) => a.intersection_with(b),

            (O::Pyramid(a), O::Sphere(b)) => a.intersection_with_sphere(b, sight, level),
            (O::Pyramid(a), O::Ellipsoid(b)) => a.intersection_with_ellipsoid(b, sight, level),
            (O::Cone(a), O::Sphere(b)) => a.intersection_with_sphere(b, sight, level),
            (O::Cone(a), O::Ellipsoid(b)) => a.intersection_with_ellipsoid(b, sight, level),

            (O::Polygon(a), O::Polygon(b)) => a.intersection_with(b),

            _ => Err(unsupported("intersection with", self, other)),
        }
    }
}
