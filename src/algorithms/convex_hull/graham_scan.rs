use super::{degenerate_hull, distinct, lowest_point_index};
use crate::data::{Hull, Point};
use crate::HullScalar;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All results are valid hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// Points are sorted by polar angle around the lowest point, nearest first
/// along each ray, and then swept with a stack that only keeps strict
/// counter-clockwise turns. Produces exactly the same hull as
/// [`jarvis_march`](super::jarvis_march).
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Vertices run counter-clockwise from the lowest point.
///
/// # Examples
///
/// ```rust
/// # use hullsketch::algorithms::convex_hull::graham_scan;
/// # use hullsketch::data::Point;
/// let colinear = vec![Point::new([2, 2]), Point::new([0, 0]), Point::new([1, 1])];
/// assert_eq!(
///   graham_scan(&colinear).vertices(),
///   &[Point::new([0, 0]), Point::new([2, 2])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Hull<T>
where
  T: HullScalar,
{
  let mut pts = distinct(pts);
  if let Some(hull) = degenerate_hull(&pts) {
    return hull;
  }
  let pivot = match lowest_point_index(&pts) {
    Some(idx) => pts.swap_remove(idx),
    None => return Hull::empty(),
  };

  // Every other point lies in the upper half-plane of the pivot, so angles
  // fall in [0, π) and ties along a ray go nearest first.
  pts.sort_unstable_by(|a, b| {
    pivot
      .ccw_cmp_around(a, b)
      .then_with(|| pivot.cmp_distance_to(a, b))
  });

  let mut stack: Vec<Point<T>> = Vec::with_capacity(pts.len() + 1);
  let mut rest = pts.into_iter();
  stack.push(pivot);
  stack.extend(rest.next());
  for pt in rest {
    // The pivot is never popped.
    while stack.len() >= 2 {
      let n = stack.len();
      if stack[n - 2].orient(&stack[n - 1], &pt).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }
  Hull::new_unchecked(stack)
}
