use std::cmp::Ordering;

use super::{degenerate_hull, distinct, lowest_point_index};
use crate::data::{Hull, Point};
use crate::{HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All results are valid hulls.
//    No points are outside the resulting hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm, also known as Jarvis march, for finding
/// the smallest convex polygon which contains all the given points.
///
/// Duplicate points are ignored. Fewer than three distinct points, or
/// colinear input, give a degenerate [`Hull`].
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Vertices run counter-clockwise from the lowest point.
///
/// # Time complexity
/// $O(n h)$ where h is the number of hull vertices.
///
/// # Examples
///
/// ```rust
/// # use hullsketch::algorithms::convex_hull::jarvis_march;
/// # use hullsketch::data::{HullShape, Point};
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(jarvis_march(&empty_set).shape(), HullShape::Empty);
///
/// let dups = vec![Point::new([0, 0])].repeat(3);
/// assert_eq!(jarvis_march(&dups).vertices(), &[Point::new([0, 0])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T>]) -> Hull<T>
where
  T: HullScalar,
{
  let pts = distinct(pts);
  if let Some(hull) = degenerate_hull(&pts) {
    return hull;
  }
  let start = match lowest_point_index(&pts) {
    Some(start) => start,
    None => return Hull::empty(),
  };

  let mut vertices = Vec::new();
  let mut current = start;
  loop {
    vertices.push(pts[current].clone());
    let mut next = if current == 0 { 1 } else { 0 };
    for candidate in 0..pts.len() {
      if candidate == current || candidate == next {
        continue;
      }
      let here = &pts[current];
      match here.orient(&pts[next], &pts[candidate]) {
        Orientation::ClockWise => next = candidate,
        // Skip past points on the interior of the edge.
        Orientation::CoLinear
          if here.cmp_distance_to(&pts[candidate], &pts[next]) == Ordering::Greater =>
        {
          next = candidate
        }
        _ => {}
      }
    }
    if next == start {
      break;
    }
    current = next;
  }
  Hull::new_unchecked(vertices)
}
