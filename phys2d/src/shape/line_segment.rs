use crate::core::{
    math::{seg_seg_intr, SegSegIntr, Vector2},
    traits::Real,
};

/// Line segment between two endpoints, used standalone and as the edge
/// representation of polygons (closed ring) and polylines (open chain).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment<T = f64> {
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
}

impl<T> LineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        LineSegment { p1, p2 }
    }

    /// Direction vector from `p1` to `p2` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> T {
        self.direction().length()
    }

    /// Returns `true` when the two segments touch or cross, including
    /// endpoint touches and collinear overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        matches!(
            seg_seg_intr(self.p1, self.p2, other.p1, other.p2),
            SegSegIntr::TrueIntersect { .. } | SegSegIntr::Overlapping
        )
    }

    /// Nearest point on this segment to `point`: the projection of the point
    /// onto the segment direction, clamped to the segment span.
    pub fn nearest_point(&self, point: Vector2<T>) -> Vector2<T> {
        let direction = self.direction();
        let length = direction.length();

        if length.fuzzy_eq_zero() {
            // degenerate segment, both endpoints coincide
            return self.p1;
        }

        let unit = direction.scale(T::one() / length);
        let d = (point - self.p1).dot(unit);
        let d = num_traits::clamp(d, T::zero(), length);

        self.p1 + unit.scale(d)
    }

    /// Euclidean distance from `point` to the nearest point on this segment.
    #[inline]
    pub fn distance(&self, point: Vector2<T>) -> T {
        self.nearest_point(point).distance(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_fuzzy_eq;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn nearest_point_projects_and_clamps() {
        let seg = LineSegment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        assert!(seg.nearest_point(vec2(5.0, 3.0)).fuzzy_eq(vec2(5.0, 0.0)));
        // beyond either end clamps to the endpoint
        assert!(seg.nearest_point(vec2(-4.0, 1.0)).fuzzy_eq(vec2(0.0, 0.0)));
        assert!(seg.nearest_point(vec2(25.0, -2.0)).fuzzy_eq(vec2(10.0, 0.0)));
    }

    #[test]
    fn distance_to_point() {
        let seg = LineSegment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        assert_fuzzy_eq!(seg.distance(vec2(5.0, 0.4)), 0.4);
        assert_fuzzy_eq!(seg.distance(vec2(13.0, 4.0)), 5.0);
        assert_fuzzy_eq!(seg.distance(vec2(7.0, 0.0)), 0.0);
    }

    #[test]
    fn degenerate_segment_nearest_point() {
        let seg = LineSegment::new(vec2(2.0, 2.0), vec2(2.0, 2.0));
        assert!(seg.nearest_point(vec2(5.0, 6.0)).fuzzy_eq(vec2(2.0, 2.0)));
        assert_fuzzy_eq!(seg.distance(vec2(5.0, 6.0)), 5.0);
    }
}
