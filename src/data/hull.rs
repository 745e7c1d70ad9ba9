use claims::debug_assert_ok;
use std::collections::BTreeSet;

use super::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// How many distinct vertices a hull has, and what that makes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HullShape {
  Empty,
  Point,
  /// Two vertices. The input had at least two distinct points, all colinear.
  Segment,
  Polygon,
}

/// Convex hull of a point set.
///
/// Vertices are listed counter-clockwise starting from the lowest vertex
/// (minimum y, then minimum x). Colinear points on an edge are not vertices.
/// Hulls with fewer than three vertices are degenerate: see [`HullShape`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull<T> {
  vertices: Vec<Point<T>>,
}

impl<T> Hull<T> {
  pub fn empty() -> Hull<T> {
    Hull {
      vertices: Vec::new(),
    }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.vertices.iter()
  }

  pub fn shape(&self) -> HullShape {
    match self.vertices.len() {
      0 => HullShape::Empty,
      1 => HullShape::Point,
      2 => HullShape::Segment,
      _ => HullShape::Polygon,
    }
  }

  pub fn is_degenerate(&self) -> bool {
    self.shape() != HullShape::Polygon
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }
}

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(1)$ Assume that the vertices already form a valid hull.
  ///
  /// The vertices have to be distinct and, if there are three or more, wind
  /// strictly counter-clockwise around a convex polygon.
  pub(crate) fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull { vertices };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n^2)$ Check that the vertices are distinct and, for polygons, that
  /// every other vertex lies strictly to the left of every edge.
  pub fn validate(&self) -> Result<(), Error> {
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      if !seen.insert(pt) {
        return Err(Error::DuplicatePoints);
      }
    }
    if self.is_degenerate() {
      return Ok(());
    }
    match strictly_convex(&self.vertices) {
      Ok(()) => Ok(()),
      Err(err) => {
        let reversed: Vec<Point<T>> = self.vertices.iter().rev().cloned().collect();
        if strictly_convex(&reversed).is_ok() {
          Err(Error::ClockWiseViolation)
        } else {
          Err(err)
        }
      }
    }
  }

  /// $O(n)$ Where `pt` lies relative to the hull.
  ///
  /// Points of a segment hull are on its boundary, and so is the single
  /// vertex of a point hull.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [p] if p == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        let within = |i: usize| {
          let (lo, hi) = if a[i] <= b[i] { (&a[i], &b[i]) } else { (&b[i], &a[i]) };
          lo <= &pt[i] && &pt[i] <= hi
        };
        if a.orient(b, pt).is_colinear() && within(0) && within(1) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      vertices => {
        let mut on_edge = false;
        let n = vertices.len();
        for i in 0..n {
          match vertices[i].orient(&vertices[(i + 1) % n], pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  pub fn contains_vertex(&self, pt: &Point<T>) -> bool {
    self.vertices.contains(pt)
  }

  /// Same cycle of vertices, rotated so the lowest vertex comes first.
  #[must_use]
  pub fn rotated_to_lowest(&self) -> Hull<T> {
    let mut vertices = self.vertices.clone();
    let lowest = vertices
      .iter()
      .enumerate()
      .min_by(|(_, a), (_, b)| a.cmp_lowest(b))
      .map(|(idx, _)| idx)
      .unwrap_or(0);
    vertices.rotate_left(lowest);
    Hull { vertices }
  }

  /// Compare vertex sets, ignoring order.
  pub fn same_vertex_set(&self, other: &Hull<T>) -> bool {
    let mine: BTreeSet<&Point<T>> = self.iter().collect();
    let theirs: BTreeSet<&Point<T>> = other.iter().collect();
    mine == theirs
  }
}

fn strictly_convex<T: HullScalar>(vertices: &[Point<T>]) -> Result<(), Error> {
  let n = vertices.len();
  for i in 0..n {
    let a = &vertices[i];
    let b = &vertices[(i + 1) % n];
    for (j, c) in vertices.iter().enumerate() {
      if j == i || j == (i + 1) % n {
        continue;
      }
      match a.orient(b, c) {
        Orientation::CounterClockWise => {}
        Orientation::ClockWise => return Err(Error::ConvexViolation),
        Orientation::CoLinear => return Err(Error::CoLinearViolation),
      }
    }
  }
  Ok(())
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}
