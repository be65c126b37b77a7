/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Internal macro used for implementing collection macros. Used for extracting macro repetition
/// count for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [PointSet](crate::shape::PointSet) from a list of `(x, y)` tuples.
///
/// # Examples
///
/// ```
/// # use phys2d::points;
/// # use phys2d::core::math::Vector2;
/// let square = points![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
/// assert_eq!(square.len(), 4);
/// assert_eq!(square[2], Vector2::new(0.5, 0.5));
/// ```
#[macro_export]
macro_rules! points {
    ($( ($x:expr, $y:expr) ),* $(,)?) => {
        {
            let size = 0usize $(+ $crate::replace_expr!(($x) 1usize))*;
            let mut points = Vec::with_capacity(size);
            $(
                points.push($crate::core::math::Vector2::new($x, $y));
            )*
            $crate::shape::PointSet::from_points(points)
        }
    };
}
