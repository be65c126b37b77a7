use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use phys2d::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Convert a rotation in degrees to the unit heading vector it points along.
///
/// Zero degrees is up (+Y), positive angles rotate counter clockwise.
///
/// # Examples
///
/// ```
/// # use phys2d::core::math::*;
/// # use phys2d::core::traits::*;
/// assert!(to_heading(0.0).fuzzy_eq_eps(Vector2::new(0.0, 1.0), 1e-12));
/// assert!(to_heading(90.0).fuzzy_eq_eps(Vector2::new(-1.0, 0.0), 1e-12));
/// ```
#[inline]
pub fn to_heading<T>(angle_degrees: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::up().rotate(angle_degrees)
}
