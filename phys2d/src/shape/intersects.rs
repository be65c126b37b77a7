//! Pairwise exact intersection tests between shape geometries.
//!
//! Every function first rejects via the shapes' AABBs (broad phase) before
//! running the exact test (narrow phase). The functions operate on the
//! world-space geometry snapshots owned by [Shape](crate::shape::Shape), which
//! are always consistent with the current transform.

use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
use crate::shape::{Aabb, LineSegment, PointSet};

/// Circle vs circle: intersecting iff the center distance is strictly less
/// than the sum of the radii.
pub fn circle_circle_intr<T>(
    aabb1: &Aabb<T>,
    center1: Vector2<T>,
    radius1: T,
    aabb2: &Aabb<T>,
    center2: Vector2<T>,
    radius2: T,
) -> bool
where
    T: Real,
{
    if !aabb1.intersects(aabb2) {
        return false;
    }

    center1.distance(center2) < radius1 + radius2
}

/// Circle vs convex polygon, scanning every edge of the polygon and testing
/// the Voronoi region the circle center falls in.
///
/// Immediately true when the center is within `radius` of a vertex or of an
/// in-range edge projection. Early false when the center is provably outside
/// on an edge's outward normal side (valid only because the polygon is
/// convex). Otherwise an `inside` flag is tracked across vertices and the
/// vertex nearest the center decides, with the wrap-around seam resolved by
/// also consulting the final edge's flag.
pub fn circle_polygon_intr<T>(
    circle_aabb: &Aabb<T>,
    circle_center: Vector2<T>,
    radius: T,
    polygon_aabb: &Aabb<T>,
    polygon_points: &PointSet<T>,
) -> bool
where
    T: Real,
{
    if !circle_aabb.intersects(polygon_aabb) {
        return false;
    }

    let count = polygon_points.len();
    let radius_squared = radius * radius;
    let mut vertex = polygon_points[count - 1];

    let mut nearest_distance: T = Real::max_value();
    let mut nearest_is_inside = false;
    let mut nearest_vertex = 0;
    let mut last_is_inside = false;

    for i in 0..count {
        let next_vertex = polygon_points[i];
        let mut axis = circle_center - vertex;

        // squared distance from the vertex, minus the squared radius
        let distance = axis.length_squared() - radius_squared;
        if distance <= T::zero() {
            return true;
        }

        let mut is_inside = false;
        let edge = next_vertex - vertex;
        let edge_length_squared = edge.length_squared();

        if !edge_length_squared.fuzzy_eq_zero() {
            let dot = edge.dot(axis);

            if dot >= T::zero() && dot <= edge_length_squared {
                // center projects onto this edge's span
                let projection = vertex + edge.scale(dot / edge_length_squared);

                axis = projection - circle_center;
                if axis.length_squared() <= radius_squared {
                    return true;
                }

                // outside the radius on this edge's outward side means the
                // circle cannot reach any part of a convex polygon
                if edge.x > T::zero() {
                    if axis.y > T::zero() {
                        return false;
                    }
                } else if edge.x < T::zero() {
                    if axis.y < T::zero() {
                        return false;
                    }
                } else if edge.y > T::zero() {
                    if axis.x < T::zero() {
                        return false;
                    }
                } else if axis.x > T::zero() {
                    return false;
                }

                is_inside = true;
            }
        }

        if distance < nearest_distance {
            nearest_distance = distance;
            nearest_is_inside = is_inside || last_is_inside;
            nearest_vertex = i;
        }

        vertex = next_vertex;
        last_is_inside = is_inside;
    }

    if nearest_vertex == 0 {
        // wrap-around seam: the nearest vertex sits between the last edge and
        // the first, so the last edge's inside flag also applies
        return nearest_is_inside || last_is_inside;
    }

    nearest_is_inside
}

/// Circle vs polyline: intersecting iff any segment passes strictly within
/// `radius` of the circle center.
pub fn circle_polyline_intr<T>(
    circle_aabb: &Aabb<T>,
    circle_center: Vector2<T>,
    radius: T,
    polyline_aabb: &Aabb<T>,
    polyline_segments: &[LineSegment<T>],
) -> bool
where
    T: Real,
{
    if !circle_aabb.intersects(polyline_aabb) {
        return false;
    }

    polyline_segments
        .iter()
        .any(|s| s.distance(circle_center) < radius)
}

/// Convex polygon vs convex polygon via the separating-axis theorem.
///
/// Candidate axes are the edges of each polygon rotated 90 degrees; the
/// polygons are disjoint iff their projections onto some candidate axis do
/// not overlap.
pub fn polygon_polygon_intr<T>(
    aabb1: &Aabb<T>,
    points1: &PointSet<T>,
    aabb2: &Aabb<T>,
    points2: &PointSet<T>,
) -> bool
where
    T: Real,
{
    if !aabb1.intersects(aabb2) {
        return false;
    }

    if find_separating_axis(points1, points2) {
        return false;
    }

    if find_separating_axis(points2, points1) {
        return false;
    }

    true
}

fn find_separating_axis<T>(a: &PointSet<T>, b: &PointSet<T>) -> bool
where
    T: Real,
{
    let mut prev = a.len() - 1;

    for i in 0..a.len() {
        let edge = a[i] - a[prev];

        // rotate 90 degrees (either direction works) to get the candidate
        // separating axis
        let axis = vec2(edge.y, -edge.x);

        let (a_min, a_max) = projection_extents(a, axis);
        let (b_min, b_max) = projection_extents(b, axis);

        if a_max < b_min || b_max < a_min {
            return true;
        }

        prev = i;
    }

    false
}

/// Gather the extents of all `points` projected onto `axis` (not normalized,
/// only interval overlap is compared so scale cancels out).
fn projection_extents<T>(points: &PointSet<T>, axis: Vector2<T>) -> (T, T)
where
    T: Real,
{
    let mut min = axis.dot(points[0]);
    let mut max = min;

    for p in points.iter() {
        let d = axis.dot(*p);
        if d < min {
            min = d;
        } else if d > max {
            max = d;
        }
    }

    (min, max)
}

/// Polygon vs polyline: intersecting iff any polyline vertex lies inside the
/// polygon or any polyline segment crosses a polygon edge.
pub fn polygon_polyline_intr<T>(
    polygon_aabb: &Aabb<T>,
    polygon_edges: &[LineSegment<T>],
    polyline_aabb: &Aabb<T>,
    polyline_points: &PointSet<T>,
    polyline_segments: &[LineSegment<T>],
) -> bool
where
    T: Real,
{
    if !polyline_aabb.intersects(polygon_aabb) {
        return false;
    }

    for p in polyline_points.iter() {
        if polygon_contains_point(polygon_aabb, polygon_edges, *p) {
            return true;
        }
    }

    for s in polyline_segments.iter() {
        if polygon_segment_intr(polygon_aabb, polygon_edges, s) {
            return true;
        }
    }

    false
}

/// Polyline vs polyline: intersecting iff any segment of one intersects any
/// segment of the other.
pub fn polyline_polyline_intr<T>(
    aabb1: &Aabb<T>,
    segments1: &[LineSegment<T>],
    aabb2: &Aabb<T>,
    segments2: &[LineSegment<T>],
) -> bool
where
    T: Real,
{
    if !aabb1.intersects(aabb2) {
        return false;
    }

    for s1 in segments1.iter() {
        for s2 in segments2.iter() {
            if s1.intersects(s2) {
                return true;
            }
        }
    }

    false
}

/// Ray-casting point containment: cast a ray from `point` along +X to beyond
/// the polygon's AABB and count edge crossings, odd count means inside.
pub fn polygon_contains_point<T>(
    polygon_aabb: &Aabb<T>,
    polygon_edges: &[LineSegment<T>],
    point: Vector2<T>,
) -> bool
where
    T: Real,
{
    if !polygon_aabb.contains(point) {
        return false;
    }

    let ray = LineSegment::new(point, vec2(polygon_aabb.max().x + T::epsilon(), point.y));

    count_edge_intersections(polygon_edges, &ray) % 2 == 1
}

/// Polygon vs a single segment: true when the segment crosses any polygon
/// edge. Segments with neither endpoint inside the polygon's AABB containment
/// span are rejected up front.
pub fn polygon_segment_intr<T>(
    polygon_aabb: &Aabb<T>,
    polygon_edges: &[LineSegment<T>],
    segment: &LineSegment<T>,
) -> bool
where
    T: Real,
{
    if !polygon_aabb.contains(segment.p1) && !polygon_aabb.contains(segment.p2) {
        return false;
    }

    count_edge_intersections(polygon_edges, segment) > 0
}

fn count_edge_intersections<T>(edges: &[LineSegment<T>], segment: &LineSegment<T>) -> usize
where
    T: Real,
{
    edges.iter().filter(|e| e.intersects(segment)).count()
}
