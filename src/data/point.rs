use ordered_float::NotNan;
use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// A point in the plane.
///
/// Equality, ordering and hashing are structural: two points with equal
/// coordinates are the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    let [x, y] = self.array.clone();
    Point { array: [f(x), f(y)] }
  }
}

impl Point<NotNan<f64>> {
  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [f64; 2]) -> Point<NotNan<f64>> {
    let [x, y] = array;
    Point::new([
      NotNan::new(x).expect("x coordinate is NaN"),
      NotNan::new(y).expect("y coordinate is NaN"),
    ])
  }
}

impl<T: HullScalar> Point<T> {
  /// Orientation of the turn `self -> q -> r`.
  pub fn orient(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Exact squared distance. Never overflows.
  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T::Distance {
    T::squared_distance(&self.array, &rhs.array)
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .cmp(&self.squared_euclidean_distance(q))
  }

  /// Order by y-coordinate, then by x-coordinate. The minimum of a point set
  /// under this order is always a vertex of its convex hull.
  pub fn cmp_lowest(&self, other: &Point<T>) -> Ordering {
    self
      .y_coord()
      .cmp(other.y_coord())
      .then_with(|| self.x_coord().cmp(other.x_coord()))
  }

  /// Compare the counter-clockwise angles of `p` and `q` around `self`,
  /// measured from the positive x-axis in `[0, 2π)`.
  ///
  /// `self` itself sorts before every other point. Points on the same ray
  /// compare equal; use [`Point::cmp_distance_to`] to break the tie.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullsketch::data::Point;
  /// # use std::cmp::Ordering;
  /// let origin = Point::new([0, 0]);
  /// let east = Point::new([5, 0]);
  /// let north = Point::new([0, 1]);
  /// let south = Point::new([0, -1]);
  /// assert_eq!(origin.ccw_cmp_around(&east, &north), Ordering::Less);
  /// assert_eq!(origin.ccw_cmp_around(&south, &north), Ordering::Greater);
  /// assert_eq!(origin.ccw_cmp_around(&east, &Point::new([1, 0])), Ordering::Equal);
  /// ```
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    match (p == self, q == self) {
      (true, true) => return Ordering::Equal,
      (true, false) => return Ordering::Less,
      (false, true) => return Ordering::Greater,
      (false, false) => {}
    }
    // Angles in [π, 2π) lie strictly below self, or level with it on the left.
    let lower_half = |pt: &Point<T>| match pt.y_coord().cmp(self.y_coord()) {
      Ordering::Less => true,
      Ordering::Equal => pt.x_coord() < self.x_coord(),
      Ordering::Greater => false,
    };
    lower_half(p)
      .cmp(&lower_half(q))
      .then_with(|| match self.orient(p, q) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => Ordering::Equal,
      })
  }

  /// Polar angle in `[0, 2π)` and euclidean distance of `p` as seen from
  /// `self`. Both are rounded; comparisons should prefer
  /// [`Point::ccw_cmp_around`] and [`Point::cmp_distance_to`].
  pub fn polar_angle_and_distance(&self, p: &Point<T>) -> (f64, f64) {
    let dx = p.x_coord().to_f64() - self.x_coord().to_f64();
    let dy = p.y_coord().to_f64() - self.y_coord().to_f64();
    let mut angle = dy.atan2(dx);
    if angle < 0.0 {
      angle += TAU;
    }
    (angle, dx.hypot(dy))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}
