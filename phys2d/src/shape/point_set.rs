use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
use crate::shape::Aabb;
use crate::transform::Transform;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of 2D points, the authoring representation for polygon
/// rings and polyline chains.
///
/// Shapes keep two copies: a local-space set fixed at construction and a
/// world-space set rebuilt from it on every transform change via
/// [`PointSet::transform`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet<T = f64> {
    points: Vec<Vector2<T>>,
}

impl<T> PointSet<T>
where
    T: Real,
{
    /// Create a new empty `PointSet`.
    #[inline]
    pub fn new() -> Self {
        PointSet { points: Vec::new() }
    }

    /// Create a `PointSet` from an existing list of points.
    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        PointSet { points }
    }

    /// Generate the corner points of a regular polygon with `num_points`
    /// corners on a circle of `radius`, starting from the up heading rotated
    /// by `point_rotation` degrees.
    ///
    /// The corner angle rotation is applied before each point is pushed, so
    /// the first emitted point already sits one corner past the start heading.
    /// This matches the authoring data existing content pipelines were built
    /// against and is pinned by tests; pass `point_rotation` offset by
    /// `-360 / num_points` to land the first corner exactly on a heading.
    pub fn regular_polygon(point_rotation: T, num_points: usize, radius: T) -> Self {
        let mut points = Vec::with_capacity(num_points);

        let corner_angle = T::full_circle_degrees() / T::from(num_points).unwrap();
        let mut p = Vector2::up().scale(radius).rotate(point_rotation);

        for _ in 0..num_points {
            p = p.rotate(corner_angle);
            points.push(p);
        }

        PointSet { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<T>> + '_ {
        self.points.iter()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Replace the contents of this set with the points of `other`, reusing
    /// the existing allocation.
    #[inline]
    pub fn clone_from_set(&mut self, other: &Self) {
        self.points.clear();
        self.points.extend_from_slice(&other.points);
    }

    /// Apply a rigid transform to every point in place: rotate by the
    /// transform's rotation, then translate by its position, in that order.
    ///
    /// The rotation pass is skipped when the rotation is fuzzy zero and the
    /// translation pass when the position is exactly zero; pure
    /// micro-optimizations, the result is unchanged.
    pub fn transform(&mut self, transform: &Transform<T>) {
        let rotation = transform.rotation();
        let position = transform.position();

        let should_rotate = !rotation.fuzzy_eq_zero();
        let should_offset = position != Vector2::zero();

        for p in self.points.iter_mut() {
            if should_rotate {
                *p = p.rotate(rotation);
            }

            if should_offset {
                *p = *p + position;
            }
        }
    }

    /// Compute the tight axis-aligned bounding box of the points.
    ///
    /// Degenerate spans (all points sharing an axis value, e.g. a horizontal
    /// polyline) are padded by the fuzzy epsilon on that axis so the result
    /// always satisfies the positive-size invariant of [`Aabb`].
    ///
    /// Panics if the set is empty.
    pub fn calculate_aabb(&self) -> Aabb<T> {
        assert!(
            !self.points.is_empty(),
            "cannot calculate an Aabb of an empty point set"
        );

        let mut min = vec2(Real::max_value(), Real::max_value());
        let mut max = vec2(Real::min_value(), Real::min_value());

        for p in self.points.iter() {
            min.x = num_traits::real::Real::min(min.x, p.x);
            min.y = num_traits::real::Real::min(min.y, p.y);
            max.x = num_traits::real::Real::max(max.x, p.x);
            max.y = num_traits::real::Real::max(max.y, p.y);
        }

        let eps = T::fuzzy_epsilon();
        if (max.x - min.x).fuzzy_eq_zero() {
            min.x = min.x - eps;
            max.x = max.x + eps;
        }
        if (max.y - min.y).fuzzy_eq_zero() {
            min.y = min.y - eps;
            max.y = max.y + eps;
        }

        Aabb::from_min_max(min, max)
    }
}

impl<T> Index<usize> for PointSet<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for PointSet<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<T> Extend<Vector2<T>> for PointSet<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = Vector2<T>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> FromIterator<Vector2<T>> for PointSet<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a Vector2<T>;
    type IntoIter = std::slice::Iter<'a, Vector2<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
