//! # phys2d
//!
//! 2D geometric collision-detection kernel: circle, convex polygon, and
//! polyline shape primitives, each carrying a mutable position/rotation
//! [Transform](crate::transform::Transform), a cached axis-aligned bounding
//! box for cheap broad-phase rejection, and exact pairwise overlap tests
//! (separating-axis theorem, segment-segment intersection, circle-vs-polygon
//! Voronoi-region scans, ray-casting point containment).
//!
//! All operations are synchronous and single-threaded: a transform mutation
//! rebuilds the shape's world-space geometry and AABB before returning, so
//! queries never observe stale cached state. Shapes are exclusively owned;
//! intersection queries are read-only.
//!
//! ```
//! use phys2d::{points, shape::Shape, transform::Transform, core::math::Vector2};
//!
//! let circle = Shape::circle(Transform::new(Vector2::new(1.9, 0.0), 0.0), 1.0);
//! let mut other = Shape::circle(Transform::identity(), 1.0);
//! assert!(circle.intersects(&other));
//!
//! other.set_position(Vector2::new(-0.3, 0.0));
//! assert!(!circle.intersects(&other));
//!
//! let square = Shape::polygon(
//!     Transform::identity(),
//!     points![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)],
//! );
//! assert!(square.contains_point(Vector2::new(0.0, 0.0)));
//! assert!(square.intersects(&other));
//! ```

#[macro_use]
mod macros;

pub mod core;
pub mod shape;
pub mod transform;
pub mod world;

pub use crate::core::math::Vector2;
pub use crate::shape::{Aabb, LineSegment, PointSet, Shape, ShapeKind};
pub use crate::transform::Transform;
pub use crate::world::{Body, MovementTarget, Settings, World};
