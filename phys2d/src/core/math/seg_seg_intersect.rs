use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// No intersect (parallel and not collinear, or collinear but disjoint).
    NoIntersect,
    /// There is a true intersect between the line segments.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// There is an intersect between the lines but one or both of the segments must be extended.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments are collinear and overlap by some amount (including a single
    /// touching point when they line up end to end).
    Overlapping,
}

/// Finds the intersect between two line segments `p1->p2` and `q1->q2`.
///
/// Uses the parametric equation `P(t) = p + t * (p2 - p1)` for both segments
/// and solves for the parametric values from perpendicular dot product ratios.
/// All comparisons against zero use fuzzy tolerances since cross products of
/// near-parallel directions are dominated by floating point cancellation.
///
/// Collinear segments are tested for 1-D overlap along the shared line using
/// dot product range checks of each segment's start/end against the span of
/// the other.
///
/// # Examples
///
/// ```
/// # use phys2d::core::math::*;
/// # use phys2d::core::traits::*;
/// // classic X crossing meeting at (0.5, 0.5)
/// let result = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 1.0),
///     Vector2::new(1.0, 0.0),
/// );
/// if let SegSegIntr::TrueIntersect { seg1_t, seg2_t } = result {
///     assert!(seg1_t.fuzzy_eq(0.5));
///     assert!(seg2_t.fuzzy_eq(0.5));
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
/// ```
pub fn seg_seg_intr<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    q1: Vector2<T>,
    q2: Vector2<T>,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let r = p2 - p1;
    let s = q2 - q1;
    let r_cross_s = r.perp_dot(s);
    let qp = q1 - p1;
    let qp_cross_r = qp.perp_dot(r);

    if r_cross_s.fuzzy_eq_zero() {
        if !qp_cross_r.fuzzy_eq_zero() {
            // parallel and not collinear
            return NoIntersect;
        }

        // collinear, overlapping iff the 1-D projections onto the shared line
        // overlap: some endpoint of one segment must fall within the span of
        // the other
        let r_dot_r = r.dot(r);
        let s_dot_s = s.dot(s);
        let q1_along_p = qp.dot(r);
        let q2_along_p = (q2 - p1).dot(r);
        let p1_along_q = (p1 - q1).dot(s);

        let in_span = |d: T, span: T| d >= T::zero() && d <= span;

        if in_span(q1_along_p, r_dot_r)
            || in_span(q2_along_p, r_dot_r)
            || in_span(p1_along_q, s_dot_s)
        {
            return Overlapping;
        }

        return NoIntersect;
    }

    // t = (q - p) x s / (r x s), u = (q - p) x r / (r x s)
    let seg1_t = qp.perp_dot(s) / r_cross_s;
    let seg2_t = qp_cross_r / r_cross_s;

    // inclusive range acceptance so endpoint touches count as intersects
    if seg1_t >= T::zero() && seg1_t <= T::one() && seg2_t >= T::zero() && seg2_t <= T::one() {
        return TrueIntersect { seg1_t, seg2_t };
    }

    FalseIntersect { seg1_t, seg2_t }
}
