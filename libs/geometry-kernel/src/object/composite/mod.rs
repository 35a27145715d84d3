//! Ordered, heterogeneous collection of objects.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::config::KernelConfig;
use crate::error::{ensure_defined, GeometryError, GeometryResult};
use crate::intersection::Intersection;
use crate::object::{Contains, IntersectionWith, Intersects, Object, ObjectVariant, Transformable};
use crate::transformation::Transformation;

/// An ordered list of owned [`Object`]s.
///
/// A composite is defined when it was not built with
/// [`Composite::undefined`] and every object it holds is defined.
///
/// # Examples
/// ```
/// use geometry_kernel::{Composite, Object, Point};
///
/// let first = Composite::new(vec![Object::from(Point::origin())]);
/// let second = Composite::new(vec![Object::from(Point::new(1.0, 0.0, 0.0))]);
/// let both = (first + second).unwrap();
/// assert_eq!(both.object_count().unwrap(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Composite {
    defined: bool,
    objects: Vec<Object>,
}

impl Composite {
    /// Wraps `objects`.
    pub fn new(objects: Vec<Object>) -> Self {
        Self {
            defined: true,
            objects,
        }
    }

    /// A composite holding a single object.
    pub fn from_object(object: impl Into<Object>) -> Self {
        Self::new(vec![object.into()])
    }

    /// The undefined composite.
    pub fn undefined() -> Self {
        Self {
            defined: false,
            objects: Vec::new(),
        }
    }

    /// A defined composite without objects.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True when explicitly defined and every object is defined.
    pub fn is_defined(&self) -> bool {
        self.defined && self.objects.iter().all(Object::is_defined)
    }

    /// True when no objects are held.
    pub fn is_empty(&self) -> GeometryResult<bool> {
        ensure_defined(self.is_defined(), "Composite")?;
        Ok(self.objects.is_empty())
    }

    /// Number of objects.
    pub fn object_count(&self) -> GeometryResult<usize> {
        ensure_defined(self.is_defined(), "Composite")?;
        Ok(self.objects.len())
    }

    /// Object at `index`.
    pub fn object_at(&self, index: usize) -> GeometryResult<&Object> {
        ensure_defined(self.is_defined(), "Composite")?;
        self.objects.get(index).ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "object index [{index}] out of bounds [{}]",
                self.objects.len()
            ))
        })
    }

    /// All objects, in order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// True when exactly one object is held and it is a `T`.
    pub fn is<T: ObjectVariant>(&self) -> bool {
        self.is_defined() && self.objects.len() == 1 && self.objects[0].is::<T>()
    }

    /// Borrows the single held object as a `T`.
    pub fn as_variant<T: ObjectVariant>(&self) -> GeometryResult<&T> {
        ensure_defined(self.is_defined(), "Composite")?;
        match self.objects.as_slice() {
            [object] => object.as_variant::<T>(),
            _ => Err(GeometryError::type_mismatch(
                T::NAME,
                format!("Composite of {} objects", self.objects.len()),
            )),
        }
    }

    /// Appends the objects of `other` (the `+=` operation).
    pub fn append(&mut self, other: &Composite) -> GeometryResult<()> {
        ensure_defined(other.is_defined(), "Composite")?;
        ensure_defined(self.is_defined(), "Composite")?;
        self.objects.extend(other.objects.iter().cloned());
        Ok(())
    }

    /// Any object intersects `object`.
    pub fn intersects_with_config(
        &self,
        object: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<bool> {
        ensure_defined(object.is_defined(), object.name())?;
        ensure_defined(self.is_defined(), "Composite")?;
        for mine in &self.objects {
            if mine.intersects_with_config(object, config)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every held object contains `object`.
    pub fn contains_with_config(
        &self,
        object: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<bool> {
        ensure_defined(object.is_defined(), object.name())?;
        ensure_defined(self.is_defined(), "Composite")?;
        for mine in &self.objects {
            if !mine.contains_with_config(object, config)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Union of the non-empty per-object intersections, in object order.
    pub fn intersection_with_config(
        &self,
        object: &Object,
        config: &KernelConfig,
    ) -> GeometryResult<Intersection> {
        ensure_defined(object.is_defined(), object.name())?;
        ensure_defined(self.is_defined(), "Composite")?;
        let mut intersection = Intersection::empty();
        for mine in &self.objects {
            let partial = mine.intersection_with_config(object, config)?;
            if partial.is_defined() && !partial.is_empty() {
                intersection.append(&partial)?;
            }
        }
        Ok(intersection)
    }
}

impl Intersects<Object> for Composite {
    fn intersects(&self, other: &Object) -> GeometryResult<bool> {
        self.intersects_with_config(other, &KernelConfig::default())
    }
}

impl Intersects<Composite> for Composite {
    fn intersects(&self, other: &Composite) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Composite")?;
        for object in &other.objects {
            if self.intersects(object)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Contains<Object> for Composite {
    fn contains(&self, other: &Object) -> GeometryResult<bool> {
        self.contains_with_config(other, &KernelConfig::default())
    }
}

impl Contains<Composite> for Composite {
    fn contains(&self, other: &Composite) -> GeometryResult<bool> {
        ensure_defined(other.is_defined(), "Composite")?;
        for object in &other.objects {
            if !self.contains(object)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl IntersectionWith<Object> for Composite {
    fn intersection_with(&self, other: &Object) -> GeometryResult<Intersection> {
        self.intersection_with_config(other, &KernelConfig::default())
    }
}

impl IntersectionWith<Composite> for Composite {
    fn intersection_with(&self, other: &Composite) -> GeometryResult<Intersection> {
        ensure_defined(other.is_defined(), "Composite")?;
        ensure_defined(self.is_defined(), "Composite")?;
        let mut intersection = Intersection::empty();
        for object in &other.objects {
            let partial = self.intersection_with(object)?;
            if !partial.is_empty() {
                intersection.append(&partial)?;
            }
        }
        Ok(intersection)
    }
}

impl Transformable for Composite {
    fn apply_transformation(&mut self, transformation: &Transformation) -> GeometryResult<()> {
        ensure_defined(transformation.is_defined(), "Transformation")?;
        ensure_defined(self.is_defined(), "Composite")?;
        if transformation.is_identity()? {
            return Ok(());
        }
        for object in &mut self.objects {
            object.apply_transformation(transformation)?;
        }
        Ok(())
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.objects == other.objects
    }
}

impl Add for Composite {
    type Output = GeometryResult<Composite>;

    fn add(mut self, rhs: Composite) -> GeometryResult<Composite> {
        self.append(&rhs)?;
        Ok(self)
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }
        if self.objects.is_empty() {
            return f.write_str("Composite []");
        }
        let objects: Vec<String> = self.objects.iter().map(ToString::to_string).collect();
        write!(f, "Composite [{}]", objects.join(", "))
    }
}

#[cfg(test)]
mod tests;
