//! Shape primitives (circle, polygon, polyline) with an owned transform, a
//! cached AABB, and exact pairwise intersection dispatch.

mod aabb;
mod line_segment;
mod point_set;

pub mod intersects;

pub use aabb::Aabb;
pub use line_segment::LineSegment;
pub use point_set::PointSet;

use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
use crate::transform::Transform;
use intersects::{
    circle_circle_intr, circle_polygon_intr, circle_polyline_intr, polygon_contains_point,
    polygon_polygon_intr, polygon_polyline_intr, polyline_polyline_intr,
};

/// Circle geometry data: just the radius, the center is the owning shape's
/// transform position.
#[derive(Debug, Clone)]
pub struct Circle<T = f64> {
    radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }
}

/// Convex polygon geometry data: a closed ring of points with local-space
/// authoring data fixed at construction and world-space data rebuilt on every
/// transform change.
#[derive(Debug, Clone)]
pub struct Polygon<T = f64> {
    local_points: PointSet<T>,
    local_edges: Vec<LineSegment<T>>,
    world_points: PointSet<T>,
    world_edges: Vec<LineSegment<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Authoring-space ring, fixed at construction.
    #[inline]
    pub fn local_points(&self) -> &PointSet<T> {
        &self.local_points
    }

    /// Authoring-space edges including the wraparound closing edge.
    #[inline]
    pub fn local_edges(&self) -> &[LineSegment<T>] {
        &self.local_edges
    }

    /// Current world-space ring.
    #[inline]
    pub fn world_points(&self) -> &PointSet<T> {
        &self.world_points
    }

    /// Current world-space edges including the wraparound closing edge.
    #[inline]
    pub fn world_edges(&self) -> &[LineSegment<T>] {
        &self.world_edges
    }
}

/// Polyline geometry data: an open chain of points, same layout as
/// [Polygon] but without the wraparound closing edge.
#[derive(Debug, Clone)]
pub struct Polyline<T = f64> {
    local_points: PointSet<T>,
    local_segments: Vec<LineSegment<T>>,
    world_points: PointSet<T>,
    world_segments: Vec<LineSegment<T>>,
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Authoring-space chain, fixed at construction.
    #[inline]
    pub fn local_points(&self) -> &PointSet<T> {
        &self.local_points
    }

    /// Authoring-space segments (open, no closing edge).
    #[inline]
    pub fn local_segments(&self) -> &[LineSegment<T>] {
        &self.local_segments
    }

    /// Current world-space chain.
    #[inline]
    pub fn world_points(&self) -> &PointSet<T> {
        &self.world_points
    }

    /// Current world-space segments (open, no closing edge).
    #[inline]
    pub fn world_segments(&self) -> &[LineSegment<T>] {
        &self.world_segments
    }
}

/// Closed set of shape variants.
///
/// Intersection dispatch matches exhaustively over ordered pairs of this enum;
/// adding a variant is a compile-time obligation to implement its pairing with
/// every existing variant.
#[derive(Debug, Clone)]
pub enum ShapeKind<T = f64> {
    Circle(Circle<T>),
    Polygon(Polygon<T>),
    Polyline(Polyline<T>),
}

/// A collision shape: one geometry variant plus an exclusively owned
/// [Transform] and a cached [Aabb].
///
/// All geometry mutation goes through [`Shape::set_transform`] (or its
/// wrappers), which synchronously rebuilds the world-space points/edges and
/// the AABB before returning. The cached state is therefore never stale:
/// `world = rotate(local, rotation) + position` holds for every read.
#[derive(Debug, Clone)]
pub struct Shape<T = f64> {
    transform: Transform<T>,
    aabb: Aabb<T>,
    kind: ShapeKind<T>,
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Create a circle shape.
    ///
    /// `radius` must be positive; violating that is a caller bug and fails
    /// fast.
    pub fn circle(transform: Transform<T>, radius: T) -> Self {
        assert!(
            radius > T::zero(),
            "circle radius must be positive, got {:?}",
            radius
        );

        let mut kind = ShapeKind::Circle(Circle { radius });
        let aabb = recompute_world(&transform, &mut kind);

        Shape {
            transform,
            aabb,
            kind,
        }
    }

    /// Create a polygon shape from a local-space ring of at least 3 points.
    ///
    /// The ring must be convex (collinear runs are tolerated) and wound
    /// counter clockwise: the polygon-polygon separating-axis test and the
    /// circle-polygon edge scan are only correct for convex rings, and the
    /// edge scan's outward-side rejection additionally relies on the winding
    /// direction. Both requirements are enforced here rather than silently
    /// producing wrong query results. Violations fail fast.
    pub fn polygon(transform: Transform<T>, local_points: PointSet<T>) -> Self {
        assert!(
            local_points.len() >= 3,
            "polygon requires at least 3 points, got {}",
            local_points.len()
        );
        assert!(
            is_convex_ccw(&local_points),
            "polygon ring must be convex, non-degenerate, and wound counter clockwise"
        );

        let mut local_edges = Vec::new();
        fill_closed_edges(&local_points, &mut local_edges);

        let mut kind = ShapeKind::Polygon(Polygon {
            local_points,
            local_edges,
            world_points: PointSet::new(),
            world_edges: Vec::new(),
        });
        let aabb = recompute_world(&transform, &mut kind);

        Shape {
            transform,
            aabb,
            kind,
        }
    }

    /// Create a polyline shape from a local-space chain of at least 2 points.
    pub fn polyline(transform: Transform<T>, local_points: PointSet<T>) -> Self {
        assert!(
            local_points.len() >= 2,
            "polyline requires at least 2 points, got {}",
            local_points.len()
        );

        let mut local_segments = Vec::new();
        fill_open_segments(&local_points, &mut local_segments);

        let mut kind = ShapeKind::Polyline(Polyline {
            local_points,
            local_segments,
            world_points: PointSet::new(),
            world_segments: Vec::new(),
        });
        let aabb = recompute_world(&transform, &mut kind);

        Shape {
            transform,
            aabb,
            kind,
        }
    }

    /// Current placement of the shape.
    #[inline]
    pub fn transform(&self) -> &Transform<T> {
        &self.transform
    }

    /// Cached bounding box of the current world-space geometry, for host-side
    /// broad-phase culling or spatial indexing.
    #[inline]
    pub fn aabb(&self) -> &Aabb<T> {
        &self.aabb
    }

    /// The shape's geometry variant with its world-space snapshots.
    #[inline]
    pub fn kind(&self) -> &ShapeKind<T> {
        &self.kind
    }

    /// Replace the shape's position and rotation and synchronously rebuild
    /// world geometry and AABB before returning.
    pub fn set_transform(&mut self, position: Vector2<T>, rotation: T) {
        self.transform.set(position, rotation);
        self.aabb = recompute_world(&self.transform, &mut self.kind);
    }

    /// Replace only the position, preserving the current rotation.
    #[inline]
    pub fn set_position(&mut self, position: Vector2<T>) {
        let rotation = self.transform.rotation();
        self.set_transform(position, rotation);
    }

    /// Replace only the rotation (degrees), preserving the current position.
    #[inline]
    pub fn set_rotation(&mut self, rotation: T) {
        let position = self.transform.position();
        self.set_transform(position, rotation);
    }

    /// Copy position and rotation from an existing transform.
    #[inline]
    pub fn set_transform_to(&mut self, transform: &Transform<T>) {
        self.set_transform(transform.position(), transform.rotation());
    }

    /// Read-only snapshot of the current world-space edges for an external
    /// renderer. Empty for circles.
    pub fn world_edges(&self) -> &[LineSegment<T>] {
        match &self.kind {
            ShapeKind::Circle(_) => &[],
            ShapeKind::Polygon(p) => p.world_edges(),
            ShapeKind::Polyline(p) => p.world_segments(),
        }
    }

    /// Read-only snapshot of the current world-space points for an external
    /// renderer. `None` for circles (the transform position and radius fully
    /// describe them).
    pub fn world_points(&self) -> Option<&PointSet<T>> {
        match &self.kind {
            ShapeKind::Circle(_) => None,
            ShapeKind::Polygon(p) => Some(p.world_points()),
            ShapeKind::Polyline(p) => Some(p.world_points()),
        }
    }

    /// Exact overlap test against another shape, preceded by AABB rejection.
    ///
    /// Dispatches over all 9 ordered variant pairs; the match is exhaustive
    /// with no wildcard arm so a new variant cannot be added without
    /// implementing its pairings.
    pub fn intersects(&self, other: &Self) -> bool {
        use ShapeKind as K;

        match (&self.kind, &other.kind) {
            (K::Circle(a), K::Circle(b)) => circle_circle_intr(
                &self.aabb,
                self.transform.position(),
                a.radius,
                &other.aabb,
                other.transform.position(),
                b.radius,
            ),
            (K::Circle(a), K::Polygon(b)) => circle_polygon_intr(
                &self.aabb,
                self.transform.position(),
                a.radius,
                &other.aabb,
                b.world_points(),
            ),
            (K::Circle(a), K::Polyline(b)) => circle_polyline_intr(
                &self.aabb,
                self.transform.position(),
                a.radius,
                &other.aabb,
                b.world_segments(),
            ),
            (K::Polygon(a), K::Circle(b)) => circle_polygon_intr(
                &other.aabb,
                other.transform.position(),
                b.radius,
                &self.aabb,
                a.world_points(),
            ),
            (K::Polygon(a), K::Polygon(b)) => {
                polygon_polygon_intr(&self.aabb, a.world_points(), &other.aabb, b.world_points())
            }
            (K::Polygon(a), K::Polyline(b)) => polygon_polyline_intr(
                &self.aabb,
                a.world_edges(),
                &other.aabb,
                b.world_points(),
                b.world_segments(),
            ),
            (K::Polyline(a), K::Circle(b)) => circle_polyline_intr(
                &other.aabb,
                other.transform.position(),
                b.radius,
                &self.aabb,
                a.world_segments(),
            ),
            (K::Polyline(a), K::Polygon(b)) => polygon_polyline_intr(
                &other.aabb,
                b.world_edges(),
                &self.aabb,
                a.world_points(),
                a.world_segments(),
            ),
            (K::Polyline(a), K::Polyline(b)) => polyline_polyline_intr(
                &self.aabb,
                a.world_segments(),
                &other.aabb,
                b.world_segments(),
            ),
        }
    }

    /// Point containment. Polygons use an AABB reject followed by an
    /// odd-crossing ray cast; circles test the center distance against the
    /// radius (inclusive); polylines have no interior and always return
    /// false.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        match &self.kind {
            ShapeKind::Circle(c) => self.transform.position().distance(point) <= c.radius,
            ShapeKind::Polygon(p) => polygon_contains_point(&self.aabb, p.world_edges(), point),
            ShapeKind::Polyline(_) => false,
        }
    }
}

/// Rebuild the variant's world-space data from its local data and the given
/// transform, returning the new tight AABB. Total and synchronous: after this
/// returns, every derived field reflects `transform`.
fn recompute_world<T>(transform: &Transform<T>, kind: &mut ShapeKind<T>) -> Aabb<T>
where
    T: Real,
{
    match kind {
        ShapeKind::Circle(c) => {
            let diameter = c.radius * T::two();
            Aabb::new(transform.position(), vec2(diameter, diameter))
        }
        ShapeKind::Polygon(p) => {
            p.world_points.clone_from_set(&p.local_points);
            p.world_points.transform(transform);
            fill_closed_edges(&p.world_points, &mut p.world_edges);
            p.world_points.calculate_aabb()
        }
        ShapeKind::Polyline(p) => {
            p.world_points.clone_from_set(&p.local_points);
            p.world_points.transform(transform);
            fill_open_segments(&p.world_points, &mut p.world_segments);
            p.world_points.calculate_aabb()
        }
    }
}

/// Fill `edges` with the adjacent point pairs of a closed ring, including the
/// wraparound edge from the last point back to the first.
fn fill_closed_edges<T>(points: &PointSet<T>, edges: &mut Vec<LineSegment<T>>)
where
    T: Real,
{
    edges.clear();

    for i in 0..points.len() {
        let start = points[i];
        let end = points[(i + 1) % points.len()];
        edges.push(LineSegment::new(start, end));
    }
}

/// Fill `segments` with the adjacent point pairs of an open chain (no
/// wraparound).
fn fill_open_segments<T>(points: &PointSet<T>, segments: &mut Vec<LineSegment<T>>)
where
    T: Real,
{
    segments.clear();

    for i in 0..points.len() - 1 {
        segments.push(LineSegment::new(points[i], points[i + 1]));
    }
}

/// A ring is accepted when every turning vertex turns left (perp dot products
/// of consecutive edges all positive, zeros from collinear runs tolerated)
/// and at least one vertex actually turns: convex and wound counter
/// clockwise.
fn is_convex_ccw<T>(points: &PointSet<T>) -> bool
where
    T: Real,
{
    let n = points.len();
    let mut turns = false;

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];

        let cross = (b - a).perp_dot(c - b);
        if cross.fuzzy_eq_zero() {
            continue;
        }

        if cross < T::zero() {
            return false;
        }

        turns = true;
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::points;

    fn unit_square() -> PointSet<f64> {
        points![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]
    }

    #[test]
    fn convexity_and_winding_check() {
        assert!(is_convex_ccw(&unit_square()));
        // clockwise winding is rejected
        assert!(!is_convex_ccw(&points![
            (-0.5, -0.5),
            (-0.5, 0.5),
            (0.5, 0.5),
            (0.5, -0.5)
        ]));
        // collinear midpoint on an edge is tolerated
        assert!(is_convex_ccw(&points![
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (0.0, 1.0)
        ]));
        // dart shape turns both ways
        assert!(!is_convex_ccw(&points![
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.5),
            (1.0, 2.0)
        ]));
        // fully collinear ring has no turning vertex
        assert!(!is_convex_ccw(&points![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    #[should_panic]
    fn concave_polygon_is_rejected() {
        let _ = Shape::polygon(
            Transform::identity(),
            points![(0.0, 0.0), (2.0, 0.0), (1.0, 0.5), (1.0, 2.0)],
        );
    }

    #[test]
    #[should_panic]
    fn non_positive_radius_is_rejected() {
        let _ = Shape::circle(Transform::identity(), 0.0);
    }

    #[test]
    #[should_panic]
    fn too_few_polyline_points_is_rejected() {
        let _ = Shape::polyline(Transform::identity(), points![(0.0, 0.0)]);
    }

    #[test]
    fn polygon_edges_wrap_and_polyline_segments_do_not() {
        let polygon = Shape::polygon(Transform::identity(), unit_square());
        let polyline = Shape::polyline(Transform::identity(), unit_square());

        assert_eq!(polygon.world_edges().len(), 4);
        assert_eq!(polyline.world_edges().len(), 3);

        let closing = polygon.world_edges()[3];
        assert!(closing.p1.fuzzy_eq(vec2(-0.5, 0.5)));
        assert!(closing.p2.fuzzy_eq(vec2(-0.5, -0.5)));
    }

    #[test]
    fn circle_aabb_is_tight() {
        let shape = Shape::circle(Transform::new(vec2(3.0, -1.0), 0.0), 2.5);
        assert!(shape.aabb().center().fuzzy_eq(vec2(3.0, -1.0)));
        assert!(shape.aabb().size().fuzzy_eq(vec2(5.0, 5.0)));
    }

    #[test]
    fn set_transform_rebuilds_world_geometry() {
        let mut shape = Shape::polygon(Transform::identity(), unit_square());
        shape.set_transform(vec2(10.0, 0.0), 90.0);

        let eps = 1e-9;
        let world = shape.world_points().unwrap();
        // (-0.5, -0.5) rotated 90 degrees is (0.5, -0.5), then translated
        assert!(world[0].fuzzy_eq_eps(vec2(10.5, -0.5), eps));
        assert!(shape.aabb().center().fuzzy_eq_eps(vec2(10.0, 0.0), eps));
        assert!(shape.aabb().size().fuzzy_eq_eps(vec2(1.0, 1.0), eps));
    }

    #[test]
    fn contains_point_per_variant() {
        let polygon = Shape::polygon(Transform::identity(), unit_square());
        assert!(polygon.contains_point(vec2(0.0, 0.0)));
        assert!(!polygon.contains_point(vec2(10.0, 10.0)));

        let circle = Shape::circle(Transform::identity(), 1.0);
        assert!(circle.contains_point(vec2(0.5, 0.5)));
        assert!(!circle.contains_point(vec2(1.5, 0.0)));

        let polyline = Shape::polyline(Transform::identity(), unit_square());
        assert!(!polyline.contains_point(vec2(0.0, 0.0)));
    }
}
