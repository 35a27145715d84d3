//! # Intersection
//!
//! The result of intersecting two objects: undefined, empty, a single
//! primitive, or a complex mix. The payload is always a [`Composite`].
//!
//! ## Type inference
//!
//! | objects held                          | type             |
//! |---------------------------------------|------------------|
//! | none                                  | `Empty`          |
//! | one or more of a single variant       | that variant     |
//! | a composite, or mixed variants        | `Complex`        |
//!
//! ## Example
//!
//! ```rust
//! use geometry_kernel::{Intersection, IntersectionType, Point, Segment};
//!
//! let a = Intersection::point(Point::origin());
//! let b = Intersection::point(Point::new(1.0, 0.0, 0.0));
//!
//! assert_eq!((Intersection::empty() + a.clone()).unwrap(), a);
//! let both = (a + b).unwrap();
//! assert_eq!(both.kind().unwrap(), IntersectionType::Point);
//! assert!(!both.is::<Point>());
//!
//! let mixed = (both + Intersection::segment(Segment::new(
//!     Point::origin(),
//!     Point::new(0.0, 1.0, 0.0),
//! )))
//! .unwrap();
//! assert!(mixed.is_complex());
//! ```

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_defined, GeometryResult};
use crate::object::{Composite, Object, ObjectVariant};
use crate::primitives::{Line, LineString, Point, PointSet, Polygon, Ray, Segment};

/// Kind of an [`Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum IntersectionType {
    Undefined,
    Empty,
    Point,
    PointSet,
    Line,
    Ray,
    Segment,
    LineString,
    Polygon,
    Plane,
    Cuboid,
    Sphere,
    Ellipsoid,
    Pyramid,
    Cone,
    Complex,
}

impl IntersectionType {
    fn of_object(object: &Object) -> Self {
        match object {
            Object::Point(_) => Self::Point,
            Object::PointSet(_) => Self::PointSet,
            Object::Line(_) => Self::Line,
            Object::Ray(_) => Self::Ray,
            Object::Segment(_) => Self::Segment,
            Object::LineString(_) => Self::LineString,
            Object::Polygon(_) => Self::Polygon,
            Object::Plane(_) => Self::Plane,
            Object::Sphere(_) => Self::Sphere,
            Object::Ellipsoid(_) => Self::Ellipsoid,
            Object::Cuboid(_) => Self::Cuboid,
            Object::Pyramid(_) => Self::Pyramid,
            Object::Cone(_) => Self::Cone,
            Object::Composite(_) => Self::Complex,
        }
    }

    fn of_objects(objects: &[Object]) -> Self {
        let mut kinds = objects.iter().map(Self::of_object);
        let Some(first) = kinds.next() else {
            return Self::Empty;
        };
        if kinds.all(|kind| kind == first) {
            first
        } else {
            Self::Complex
        }
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Tagged intersection result.
///
/// Two undefined intersections never compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intersection {
    kind: IntersectionType,
    composite: Composite,
}

impl Intersection {
    fn from_composite(composite: Composite) -> Self {
        Self {
            kind: IntersectionType::of_objects(composite.objects()),
            composite,
        }
    }

    /// The undefined intersection.
    pub fn undefined() -> Self {
        Self {
            kind: IntersectionType::Undefined,
            composite: Composite::undefined(),
        }
    }

    /// The empty intersection.
    pub fn empty() -> Self {
        Self::from_composite(Composite::empty())
    }

    /// Single-object intersection; the type follows the variant.
    pub fn from_object(object: impl Into<Object>) -> Self {
        Self::from_composite(Composite::from_object(object))
    }

    /// A single point.
    pub fn point(point: Point) -> Self {
        Self::from_object(point)
    }

    /// A point set.
    pub fn point_set(point_set: PointSet) -> Self {
        Self::from_object(point_set)
    }

    /// A line.
    pub fn line(line: Line) -> Self {
        Self::from_object(line)
    }

    /// A ray.
    pub fn ray(ray: Ray) -> Self {
        Self::from_object(ray)
    }

    /// A segment.
    pub fn segment(segment: Segment) -> Self {
        Self::from_object(segment)
    }

    /// A line string.
    pub fn line_string(line_string: LineString) -> Self {
        Self::from_object(line_string)
    }

    /// A polygon.
    pub fn polygon(polygon: Polygon) -> Self {
        Self::from_object(polygon)
    }

    /// True unless undefined.
    pub fn is_defined(&self) -> bool {
        self.kind != IntersectionType::Undefined
    }

    /// True for the empty intersection.
    pub fn is_empty(&self) -> bool {
        self.kind == IntersectionType::Empty
    }

    /// True for a complex intersection.
    pub fn is_complex(&self) -> bool {
        self.kind == IntersectionType::Complex
    }

    /// The intersection type.
    pub fn kind(&self) -> GeometryResult<IntersectionType> {
        ensure_defined(self.is_defined(), "Intersection")?;
        Ok(self.kind)
    }

    /// True when exactly one `T` is held. Never fails.
    pub fn is<T: ObjectVariant>(&self) -> bool {
        self.is_defined() && self.composite.is::<T>()
    }

    /// The single held `T`, or `TypeMismatch`.
    pub fn as_variant<T: ObjectVariant>(&self) -> GeometryResult<&T> {
        ensure_defined(self.is_defined(), "Intersection")?;
        self.composite.as_variant::<T>()
    }

    /// The payload.
    pub fn access_composite(&self) -> GeometryResult<&Composite> {
        ensure_defined(self.is_defined(), "Intersection")?;
        Ok(&self.composite)
    }

    /// Appends the objects of `other` and recomputes the type (the `+=`
    /// operation).
    pub fn append(&mut self, other: &Intersection) -> GeometryResult<()> {
        ensure_defined(self.is_defined(), "Intersection")?;
        ensure_defined(other.is_defined(), "Intersection")?;
        self.composite.append(&other.composite)?;
        self.kind = IntersectionType::of_objects(self.composite.objects());
        Ok(())
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.kind == other.kind
            && self.composite == other.composite
    }
}

impl Add for Intersection {
    type Output = GeometryResult<Intersection>;

    fn add(mut self, rhs: Intersection) -> GeometryResult<Intersection> {
        self.append(&rhs)?;
        Ok(self)
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        write!(f, "{} Intersection: {}", self.kind, self.composite)
    }
}
