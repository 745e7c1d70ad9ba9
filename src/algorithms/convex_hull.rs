//! Convex hulls of point sets.
//!
//! Both algorithms share one output convention: vertices run
//! counter-clockwise from the lowest point (minimum y, then minimum x), and
//! points on the interior of an edge are left out. Inputs with fewer than
//! three distinct points, or with every point on one line, give a degenerate
//! [`Hull`]: empty, a single point, or a segment listing the lowest endpoint
//! first.
pub mod gift_wrapping;
pub mod graham_scan;

#[doc(inline)]
pub use gift_wrapping::convex_hull as jarvis_march;
#[doc(inline)]
pub use graham_scan::convex_hull as graham_scan;

use crate::data::{Hull, Point};
use crate::HullScalar;

// Sorted copy of the input without duplicates.
fn distinct<T: HullScalar>(pts: &[Point<T>]) -> Vec<Point<T>> {
  let mut pts = pts.to_vec();
  pts.sort_unstable();
  pts.dedup();
  pts
}

// Index of the lowest point. Always a hull vertex.
// O(n)
fn lowest_point_index<T: HullScalar>(pts: &[Point<T>]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp_lowest(b))
    .map(|(index, _)| index)
}

// Hulls of fewer than three distinct points. Expects deduplicated input.
fn degenerate_hull<T: HullScalar>(pts: &[Point<T>]) -> Option<Hull<T>> {
  match pts {
    [] => Some(Hull::empty()),
    [p] => Some(Hull::new_unchecked(vec![p.clone()])),
    [p, q] if p.cmp_lowest(q).is_le() => Some(Hull::new_unchecked(vec![p.clone(), q.clone()])),
    [p, q] => Some(Hull::new_unchecked(vec![q.clone(), p.clone()])),
    _ => None,
  }
}
