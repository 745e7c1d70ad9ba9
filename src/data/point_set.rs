use log::{debug, trace};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Distribution;
use rand::Rng;
use std::collections::BTreeSet;

use super::{Point, Region};
use crate::config::MAX_GENERATED_POINTS;
use crate::HullScalar;

/// Read-only copy of a point set, sorted and free of duplicates.
///
/// Hull algorithms only ever see snapshots, never the live set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot<T>(Vec<Point<T>>);

impl<T> Snapshot<T> {
  pub fn as_slice(&self) -> &[Point<T>] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.0.iter()
  }
}

impl<T: Ord> From<Vec<Point<T>>> for Snapshot<T> {
  fn from(mut pts: Vec<Point<T>>) -> Snapshot<T> {
    pts.sort_unstable();
    pts.dedup();
    Snapshot(pts)
  }
}

impl<T: Ord> FromIterator<Point<T>> for Snapshot<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Snapshot<T> {
    Snapshot::from(iter.into_iter().collect::<Vec<_>>())
  }
}

/// The points under edit.
///
/// Every member lies inside the set's [`Region`]. Mutators are idempotent:
/// adding a present point or removing an absent one changes nothing. Each
/// mutation that does change the set bumps [`PointSet::revision`].
#[derive(Debug, Clone)]
pub struct PointSet<T> {
  points: BTreeSet<Point<T>>,
  region: Region<T>,
  revision: u64,
}

impl<T> PointSet<T>
where
  T: HullScalar,
{
  pub fn new(region: Region<T>) -> PointSet<T> {
    PointSet {
      points: BTreeSet::new(),
      region,
      revision: 0,
    }
  }

  pub fn region(&self) -> &Region<T> {
    &self.region
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.points.contains(pt)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.points.iter()
  }

  /// Counter that changes whenever the membership changes.
  pub fn revision(&self) -> u64 {
    self.revision
  }

  fn bump(&mut self) {
    self.revision = self.revision.wrapping_add(1);
  }

  /// Insert a point. Returns `false` if it was already present or lies
  /// outside the editable region.
  pub fn add_point(&mut self, pt: Point<T>) -> bool {
    if !self.region.contains(&pt) {
      trace!("Rejected point outside the editable region: {:?}", pt);
      return false;
    }
    trace!("Add point {:?}", pt);
    let added = self.points.insert(pt);
    if added {
      self.bump();
    }
    added
  }

  /// Nearest point within `tolerance` of `center`, if any. Ties go to the
  /// smallest point.
  pub fn find_point_containing(&self, center: &Point<T>, tolerance: &T) -> Option<&Point<T>> {
    let radius = squared_radius(tolerance)?;
    self
      .points
      .iter()
      .map(|pt| (center.squared_euclidean_distance(pt), pt))
      .filter(|(dist, _)| dist <= &radius)
      .min_by(|a, b| a.0.cmp(&b.0))
      .map(|(_, pt)| pt)
  }

  /// Remove every point within `tolerance` of `center`. A negative tolerance
  /// matches nothing. Returns the number of removed points.
  pub fn remove_points_containing(&mut self, center: &Point<T>, tolerance: &T) -> usize {
    let radius = match squared_radius(tolerance) {
      Some(radius) => radius,
      None => return 0,
    };
    let before = self.points.len();
    self
      .points
      .retain(|pt| center.squared_euclidean_distance(pt) > radius);
    let removed = before - self.points.len();
    if removed > 0 {
      trace!("Removed {} point(s) around {:?}", removed, center);
      self.bump();
    }
    removed
  }

  /// Move `from` to `to`, clamping the destination into the region. Moving
  /// onto an existing point merges the two. Returns the new position, or
  /// `None` if `from` is not in the set.
  pub fn move_point(&mut self, from: &Point<T>, to: Point<T>) -> Option<Point<T>> {
    if !self.points.contains(from) {
      return None;
    }
    let to = self.region.clamp(to);
    if &to != from {
      trace!("Move point {:?} -> {:?}", from, to);
      self.points.remove(from);
      self.points.insert(to.clone());
      self.bump();
    }
    Some(to)
  }

  /// Remove every point.
  pub fn clear(&mut self) {
    if !self.points.is_empty() {
      self.points.clear();
      self.bump();
    }
  }

  /// Sorted copy of the current members.
  pub fn snapshot(&self) -> Snapshot<T> {
    // BTreeSet iteration is already sorted and unique.
    Snapshot(self.points.iter().cloned().collect())
  }
}

impl<T> PointSet<T>
where
  T: HullScalar + SampleUniform,
{
  /// Add one uniformly random point from the editable region.
  pub fn add_random_point<R>(&mut self, rng: &mut R) -> bool
  where
    R: Rng + ?Sized,
  {
    let pt = self.region.sample(rng);
    self.add_point(pt)
  }

  /// Draw `count` points uniformly from the part of `region` that overlaps the
  /// editable region. Non-positive counts draw nothing, and counts above
  /// [`MAX_GENERATED_POINTS`] draw that many. Draws that hit an existing
  /// point are lost, so the return value (number of new points) may be less
  /// than `count`.
  pub fn generate_random_points<R>(&mut self, count: i64, region: &Region<T>, rng: &mut R) -> usize
  where
    R: Rng + ?Sized,
  {
    let count = match usize::try_from(count) {
      Ok(count) if count > MAX_GENERATED_POINTS => {
        debug!("Capping request for {} random points at {}", count, MAX_GENERATED_POINTS);
        MAX_GENERATED_POINTS
      }
      Ok(count) if count > 0 => count,
      _ => {
        debug!("Ignoring request for {} random points", count);
        return 0;
      }
    };
    let area = match self.region.intersection(region) {
      Some(area) => area,
      None => {
        debug!("Requested region does not overlap the editable region");
        return 0;
      }
    };
    let mut added = 0;
    for pt in area.sample_iter(&mut *rng).take(count) {
      if self.add_point(pt) {
        added += 1;
      }
    }
    debug!("Generated {} of {} requested random points", added, count);
    added
  }

  /// Parse a user-typed point count and generate that many points inside the
  /// editable region. Text that is not an integer counts as zero.
  pub fn generate_random_points_from_input<R>(&mut self, input: &str, rng: &mut R) -> usize
  where
    R: Rng + ?Sized,
  {
    let count = input.trim().parse::<i64>().unwrap_or(0);
    let region = self.region.clone();
    self.generate_random_points(count, &region, rng)
  }
}

// Squared hit radius, or None for negative tolerances.
fn squared_radius<T: HullScalar>(tolerance: &T) -> Option<T::Distance> {
  let zero = T::from_constant(0);
  if tolerance < &zero {
    return None;
  }
  Some(T::squared_distance(
    &[zero.clone(), zero.clone()],
    &[tolerance.clone(), zero],
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn board() -> PointSet<i32> {
    PointSet::new(Region::new(Point::new([0, 0]), Point::new([100, 100])))
  }

  #[test]
  fn add_is_idempotent() {
    let mut set = board();
    assert!(set.add_point(Point::new([1, 1])));
    let rev = set.revision();
    assert!(!set.add_point(Point::new([1, 1])));
    assert_eq!(set.revision(), rev);
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn add_outside_region_is_rejected() {
    let mut set = board();
    assert!(!set.add_point(Point::new([101, 0])));
    assert!(!set.add_point(Point::new([0, -1])));
    assert!(set.is_empty());
    assert_eq!(set.revision(), 0);
  }

  #[test]
  fn remove_within_tolerance() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    set.add_point(Point::new([13, 14]));
    set.add_point(Point::new([20, 20]));
    // (13,14) is exactly 5 away from (10,10).
    assert_eq!(set.remove_points_containing(&Point::new([10, 10]), &5), 2);
    assert_eq!(set.snapshot().as_slice(), &[Point::new([20, 20])]);
  }

  #[test]
  fn remove_nothing_is_noop() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    let rev = set.revision();
    assert_eq!(set.remove_points_containing(&Point::new([50, 50]), &4), 0);
    assert_eq!(set.remove_points_containing(&Point::new([10, 10]), &-1), 0);
    assert_eq!(set.revision(), rev);
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn zero_tolerance_hits_exact_point() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    set.add_point(Point::new([10, 11]));
    assert_eq!(set.remove_points_containing(&Point::new([10, 10]), &0), 1);
    assert!(set.contains(&Point::new([10, 11])));
  }

  #[test]
  fn find_nearest() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    set.add_point(Point::new([12, 10]));
    assert_eq!(
      set.find_point_containing(&Point::new([12, 11]), &4),
      Some(&Point::new([12, 10]))
    );
    assert_eq!(
      set.find_point_containing(&Point::new([11, 10]), &4),
      Some(&Point::new([10, 10]))
    );
    assert_eq!(set.find_point_containing(&Point::new([50, 50]), &4), None);
  }

  #[test]
  fn move_clamps_and_merges() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    set.add_point(Point::new([20, 20]));
    assert_eq!(
      set.move_point(&Point::new([10, 10]), Point::new([-5, 500])),
      Some(Point::new([0, 100]))
    );
    assert!(set.contains(&Point::new([0, 100])));
    assert_eq!(
      set.move_point(&Point::new([0, 100]), Point::new([20, 20])),
      Some(Point::new([20, 20]))
    );
    assert_eq!(set.len(), 1);
    assert_eq!(set.move_point(&Point::new([1, 1]), Point::new([2, 2])), None);
  }

  #[test]
  fn move_in_place_keeps_revision() {
    let mut set = board();
    set.add_point(Point::new([10, 10]));
    let rev = set.revision();
    set.move_point(&Point::new([10, 10]), Point::new([10, 10]));
    assert_eq!(set.revision(), rev);
  }

  #[test]
  fn clear_bumps_once() {
    let mut set = board();
    set.clear();
    assert_eq!(set.revision(), 0);
    set.add_point(Point::new([1, 2]));
    set.add_point(Point::new([2, 1]));
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.revision(), 3);
  }

  #[test]
  fn non_positive_counts_insert_nothing() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(1);
    let region = set.region().clone();
    assert_eq!(set.generate_random_points(0, &region, &mut rng), 0);
    assert_eq!(set.generate_random_points(-10, &region, &mut rng), 0);
    assert_eq!(set.generate_random_points_from_input("abc", &mut rng), 0);
    assert_eq!(set.generate_random_points_from_input("-3", &mut rng), 0);
    assert!(set.is_empty());
  }

  #[test]
  fn generate_from_input() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(2);
    let added = set.generate_random_points_from_input(" 25 ", &mut rng);
    assert!(added > 0 && added <= 25);
    assert_eq!(set.len(), added);
  }

  #[test]
  fn generate_outside_region() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(3);
    let far = Region::new(Point::new([200, 200]), Point::new([300, 300]));
    assert_eq!(set.generate_random_points(10, &far, &mut rng), 0);
  }

  #[test]
  fn generate_saturates_small_region() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(4);
    let tiny = Region::new(Point::new([-10, -10]), Point::new([1, 1]));
    set.generate_random_points(1000, &tiny, &mut rng);
    // Only the 2x2 corner overlaps the editable region.
    assert!(set.len() <= 4);
    assert!(set.iter().all(|pt| tiny.contains(pt)));
  }

  #[test]
  fn huge_counts_are_capped() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(6);
    let added = set.generate_random_points_from_input("9000000000000", &mut rng);
    assert!(added > 0 && added <= 101 * 101);
    assert_eq!(set.len(), added);

    let wide = Region::new(Point::new([0, 0]), Point::new([1_000_000, 1_000_000]));
    let mut set = PointSet::new(wide.clone());
    let added = set.generate_random_points(i64::MAX, &wide, &mut rng);
    assert!(added <= MAX_GENERATED_POINTS);
    assert!(added > MAX_GENERATED_POINTS / 2);
  }

  #[test]
  fn random_point_is_inside() {
    let mut set = board();
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(set.add_random_point(&mut rng));
    assert!(set.iter().all(|pt| set.region().contains(pt)));
  }

  #[test]
  fn snapshot_from_vec_dedups() {
    let snapshot = Snapshot::from(vec![
      Point::new([1, 1]),
      Point::new([0, 0]),
      Point::new([1, 1]),
    ]);
    assert_eq!(snapshot.as_slice(), &[Point::new([0, 0]), Point::new([1, 1])]);
  }

  #[proptest]
  fn members_stay_inside_region(
    #[strategy(proptest::collection::vec(point_in(-20..120), 0..50))] pts: Vec<Point<i32>>,
  ) {
    let mut set = board();
    for pt in pts.iter() {
      set.add_point(pt.clone());
    }
    for pair in pts.windows(2) {
      set.move_point(&pair[0], pair[1].clone());
    }
    prop_assert!(set.iter().all(|pt| set.region().contains(pt)));
  }
}
