//! Geometric primitives.
//!
//! Every primitive has an undefined state, a `Display` form, an equality that
//! compares shapes rather than representations, and implements the
//! [`Intersects`](crate::object::Intersects),
//! [`Contains`](crate::object::Contains),
//! [`IntersectionWith`](crate::object::IntersectionWith) and
//! [`Transformable`](crate::object::Transformable) pairs that make sense for
//! it.

pub mod cone;
pub mod cuboid;
pub mod ellipsoid;
pub mod line;
pub mod line_string;
pub mod plane;
pub mod point;
pub mod point_set;
pub mod polygon;
pub mod pyramid;
pub mod ray;
pub mod segment;
pub mod sphere;

pub use cone::Cone;
pub use cuboid::Cuboid;
pub use ellipsoid::Ellipsoid;
pub use line::Line;
pub use line_string::LineString;
pub use plane::Plane;
pub use point::Point;
pub use point_set::PointSet;
pub use polygon::Polygon;
pub use pyramid::Pyramid;
pub use ray::Ray;
pub use segment::Segment;
pub use sphere::Sphere;
