//! Scene aggregation: a flat collection of static shapes and dynamic bodies
//! for host queries. Bodies are thin data holders carrying a shape, a mass,
//! and a pending movement target; no impulse or penetration resolution happens
//! here.

use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::core::{math::Vector2, traits::Real};
use crate::shape::Shape;
use crate::transform::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host-facing tunables. The kernel itself runs no solver iterations; the
/// count is carried as data for hosts that step bodies incrementally.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    pub solver_iterations: usize,
}

impl Settings {
    pub const MIN_SOLVER_ITERATIONS: usize = 1;
    pub const MAX_SOLVER_ITERATIONS: usize = 64;

    /// Create settings with a solver iteration count in `1..=64`. Out of
    /// range counts are a caller bug and fail fast.
    pub fn new(solver_iterations: usize) -> Self {
        assert!(
            (Self::MIN_SOLVER_ITERATIONS..=Self::MAX_SOLVER_ITERATIONS)
                .contains(&solver_iterations),
            "solver_iterations must be in 1..=64, got {}",
            solver_iterations
        );

        Settings { solver_iterations }
    }
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            solver_iterations: 5,
        }
    }
}

/// Pending movement request for a body: a heading to move along, a distance,
/// and a rotation offset, applied and cleared by
/// [`World::solve_body_targets`].
#[derive(Debug, Copy, Clone)]
pub struct MovementTarget<T = f64> {
    pub heading: Vector2<T>,
    pub distance: T,
    pub angle_offset: T,
}

impl<T> MovementTarget<T>
where
    T: Real,
{
    #[inline]
    pub fn new(heading: Vector2<T>, distance: T, angle_offset: T) -> Self {
        MovementTarget {
            heading,
            distance,
            angle_offset,
        }
    }

    /// Restore the idle state: up heading, no distance, no rotation offset.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T> Default for MovementTarget<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        MovementTarget {
            heading: Vector2::up(),
            distance: T::zero(),
            angle_offset: T::zero(),
        }
    }
}

/// Dynamic body: a shape plus a mass and transform snapshots for host-side
/// interpolation. Purely a data holder, the kernel performs no integration.
#[derive(Debug, Clone)]
pub struct Body<T = f64> {
    shape: Shape<T>,
    mass: T,
    target: Option<MovementTarget<T>>,
    initial_transform: Transform<T>,
    last_transform: Transform<T>,
}

impl<T> Body<T>
where
    T: Real,
{
    /// Create a body around a shape. `mass` must be positive; violating that
    /// is a caller bug and fails fast.
    pub fn new(shape: Shape<T>, mass: T) -> Self {
        assert!(mass > T::zero(), "body mass must be positive, got {:?}", mass);

        let initial_transform = *shape.transform();

        Body {
            shape,
            mass,
            target: None,
            initial_transform,
            last_transform: initial_transform,
        }
    }

    #[inline]
    pub fn shape(&self) -> &Shape<T> {
        &self.shape
    }

    #[inline]
    pub fn mass(&self) -> T {
        self.mass
    }

    #[inline]
    pub fn target(&self) -> Option<&MovementTarget<T>> {
        self.target.as_ref()
    }

    /// Queue a movement target to be applied by the next
    /// [`World::solve_body_targets`] call, replacing any pending one.
    #[inline]
    pub fn set_target(&mut self, target: MovementTarget<T>) {
        self.target = Some(target);
    }

    /// Move the body's shape back to the transform it was created with and
    /// clear the interpolation snapshot.
    pub fn reset(&mut self) {
        self.shape.set_transform_to(&self.initial_transform);
        self.last_transform = *self.shape.transform();
    }

    /// Transform interpolated between the last solved step and the current
    /// one, for hosts rendering between simulation steps.
    #[inline]
    pub fn lerped_transform(&self, t: T) -> Transform<T> {
        Transform::lerp(&self.last_transform, self.shape.transform(), t)
    }

    /// Apply the pending target, if any: offset the position along the
    /// heading by the distance, add the angle offset to the rotation, then
    /// clear the target. The shape recomputes synchronously.
    fn solve_target(&mut self) {
        let Some(target) = self.target.take() else {
            return;
        };

        self.last_transform = *self.shape.transform();

        let new_position =
            self.shape.transform().position() + target.heading.scale(target.distance);
        let new_rotation = self.shape.transform().rotation() + target.angle_offset;

        self.shape.set_transform(new_position, new_rotation);
    }
}

/// Flat scene of static shapes and dynamic bodies.
#[derive(Debug, Clone, Default)]
pub struct World<T = f64> {
    settings: Settings,
    shapes: Vec<Shape<T>>,
    bodies: Vec<Body<T>>,
}

impl<T> World<T>
where
    T: Real,
{
    #[inline]
    pub fn new(settings: Settings) -> Self {
        World {
            settings,
            shapes: Vec::new(),
            bodies: Vec::new(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Add a static shape, returning its index for later lookup.
    pub fn add_shape(&mut self, shape: Shape<T>) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Add a dynamic body, returning its index for later lookup.
    pub fn add_body(&mut self, body: Body<T>) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    #[inline]
    pub fn bodies(&self) -> &[Body<T>] {
        &self.bodies
    }

    #[inline]
    pub fn body_mut(&mut self, index: usize) -> &mut Body<T> {
        &mut self.bodies[index]
    }

    /// Apply every body's pending movement target as a transform set and
    /// clear it. Each affected shape's world geometry and AABB are rebuilt
    /// before this returns.
    pub fn solve_body_targets(&mut self) {
        for body in self.bodies.iter_mut() {
            body.solve_target();
        }
    }

    /// Build a spatial index over the AABBs of every shape in the scene
    /// (static shapes first, then body shapes, in insertion order) for
    /// host-side broad-phase queries. Returns `None` when the scene is empty.
    pub fn spatial_index(&self) -> Option<StaticAABB2DIndex<T>> {
        let count = self.shapes.len() + self.bodies.len();
        if count == 0 {
            return None;
        }

        let mut builder = StaticAABB2DIndexBuilder::new(count);
        let all_aabbs = self
            .shapes
            .iter()
            .map(|s| s.aabb())
            .chain(self.bodies.iter().map(|b| b.shape().aabb()));

        for aabb in all_aabbs {
            let min = aabb.min();
            let max = aabb.max();
            builder.add(min.x, min.y, max.x, max.y);
        }

        builder.build().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        assert_eq!(Settings::default().solver_iterations, 5);
    }

    #[test]
    #[should_panic]
    fn out_of_range_solver_iterations_rejected() {
        let _ = Settings::new(65);
    }
}
