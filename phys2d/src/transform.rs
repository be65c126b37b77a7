use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rigid 2D placement of a shape: a position and a rotation in degrees.
///
/// `Transform` is a plain value type. Shapes own exactly one and all geometry
/// mutation goes through [`Shape::set_transform`](crate::shape::Shape::set_transform)
/// (and its wrappers), which replaces the owned transform and synchronously
/// rebuilds the shape's world geometry before returning, so readers never
/// observe a transform inconsistent with the derived geometry.
///
/// Inputs are not range checked: any finite position and rotation is accepted
/// (rotations are not normalized into `[0, 360)`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Transform<T = f64> {
    position: Vector2<T>,
    /// Rotation in degrees, counter clockwise.
    rotation: T,
}

impl<T> Transform<T>
where
    T: Real,
{
    /// Create a transform from a position and a rotation in degrees.
    #[inline]
    pub fn new(position: Vector2<T>, rotation: T) -> Self {
        Transform { position, rotation }
    }

    /// Transform at the origin with zero rotation.
    #[inline]
    pub fn identity() -> Self {
        Transform::new(Vector2::zero(), T::zero())
    }

    #[inline]
    pub fn position(&self) -> Vector2<T> {
        self.position
    }

    /// Rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> T {
        self.rotation
    }

    /// Replace both position and rotation. There is no partial-update window:
    /// both fields change together.
    #[inline]
    pub fn set(&mut self, position: Vector2<T>, rotation: T) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Replace the position, preserving the current rotation.
    #[inline]
    pub fn set_position(&mut self, position: Vector2<T>) {
        self.position = position;
    }

    /// Replace the rotation (degrees), preserving the current position.
    #[inline]
    pub fn set_rotation(&mut self, rotation: T) {
        self.rotation = rotation;
    }

    /// Apply this transform to a local-space point: rotate by the rotation,
    /// then translate by the position, in that order.
    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        point.rotate(self.rotation) + self.position
    }

    /// Linearly interpolate between two transforms at parametric `t`.
    ///
    /// The rotation is interpolated as a plain scalar: no shortest-arc
    /// normalization is performed across the +/-180 degree boundary, so
    /// lerping from 350 to 10 degrees sweeps backwards through 180. Callers
    /// interpolating orientations near the wrap boundary must normalize
    /// rotations themselves.
    #[inline]
    pub fn lerp(a: &Self, b: &Self, t: T) -> Self {
        Transform::new(
            a.position.lerp(b.position, t),
            a.rotation + (b.rotation - a.rotation) * t,
        )
    }
}
