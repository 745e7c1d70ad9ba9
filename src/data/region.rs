use rand::distributions::uniform::SampleUniform;
use rand::distributions::Distribution;
use rand::Rng;

use super::Point;

/// Axis-aligned rectangle, bounds included. Used as the editable area.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region<T> {
  min: Point<T>,
  max: Point<T>,
}

impl<T> Region<T>
where
  T: Clone + Ord,
{
  /// Rectangle spanned by two opposite corners, given in any order.
  pub fn new(a: Point<T>, b: Point<T>) -> Region<T> {
    let [ax, ay] = a.array;
    let [bx, by] = b.array;
    let (min_x, max_x) = if ax <= bx { (ax, bx) } else { (bx, ax) };
    let (min_y, max_y) = if ay <= by { (ay, by) } else { (by, ay) };
    Region {
      min: Point::new([min_x, min_y]),
      max: Point::new([max_x, max_y]),
    }
  }

  pub fn min(&self) -> &Point<T> {
    &self.min
  }

  pub fn max(&self) -> &Point<T> {
    &self.max
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    (0..2).all(|i| self.min[i] <= pt[i] && pt[i] <= self.max[i])
  }

  /// Nearest point inside the region.
  pub fn clamp(&self, pt: Point<T>) -> Point<T> {
    let [x, y] = pt.array;
    Point::new([
      x.clamp(self.min[0].clone(), self.max[0].clone()),
      y.clamp(self.min[1].clone(), self.max[1].clone()),
    ])
  }

  pub fn intersection(&self, other: &Region<T>) -> Option<Region<T>> {
    let min_x = std::cmp::max(&self.min[0], &other.min[0]);
    let min_y = std::cmp::max(&self.min[1], &other.min[1]);
    let max_x = std::cmp::min(&self.max[0], &other.max[0]);
    let max_y = std::cmp::min(&self.max[1], &other.max[1]);
    if min_x > max_x || min_y > max_y {
      return None;
    }
    Some(Region {
      min: Point::new([min_x.clone(), min_y.clone()]),
      max: Point::new([max_x.clone(), max_y.clone()]),
    })
  }
}

// Uniform sampling of points inside the region.
impl<T> Distribution<Point<T>> for Region<T>
where
  T: SampleUniform + Clone + PartialOrd,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point::new([
      rng.gen_range(self.min[0].clone()..=self.max[0].clone()),
      rng.gen_range(self.min[1].clone()..=self.max[1].clone()),
    ])
  }
}
