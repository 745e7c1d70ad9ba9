//! Keeps the displayed hull in sync with the point set.
use log::debug;

use crate::algorithms::Algorithm;
use crate::data::{Hull, Snapshot};
use crate::{Error, HullScalar};

/// Algorithm selection plus the last computed hull.
///
/// The hull is recomputed lazily, from scratch, the next time it is asked for
/// after either the snapshot contents or the algorithm changed.
#[derive(Debug, Clone)]
pub struct HullSession<T> {
  algorithm: Algorithm,
  snapshot: Option<Snapshot<T>>,
  // None when stale.
  hull: Option<Hull<T>>,
}

impl<T> Default for HullSession<T> {
  fn default() -> Self {
    HullSession {
      algorithm: Algorithm::None,
      snapshot: None,
      hull: None,
    }
  }
}

impl<T> HullSession<T>
where
  T: HullScalar,
{
  pub fn new(algorithm: Algorithm) -> HullSession<T> {
    HullSession {
      algorithm,
      ..HullSession::default()
    }
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn set_algorithm(&mut self, algorithm: Algorithm) {
    if self.algorithm != algorithm {
      debug!("Switching hull algorithm: {} -> {}", self.algorithm, algorithm);
      self.algorithm = algorithm;
      self.hull = None;
    }
  }

  /// Turn `algorithm` off if it is active, otherwise make it the active one.
  /// Returns the new selection.
  pub fn toggle_algorithm(&mut self, algorithm: Algorithm) -> Algorithm {
    let next = if self.algorithm == algorithm {
      Algorithm::None
    } else {
      algorithm
    };
    self.set_algorithm(next);
    next
  }

  /// Supply the latest contents of the point set. The hull only goes stale
  /// if the contents differ from the previous snapshot.
  pub fn on_point_set_changed(&mut self, snapshot: Snapshot<T>) {
    if self.snapshot.as_ref() != Some(&snapshot) {
      self.snapshot = Some(snapshot);
      self.hull = None;
    }
  }

  pub fn snapshot(&self) -> Option<&Snapshot<T>> {
    self.snapshot.as_ref()
  }

  /// True if the next [`HullSession::current_hull`] call will recompute.
  pub fn is_dirty(&self) -> bool {
    self.hull.is_none()
  }

  /// The hull of the latest snapshot under the active algorithm.
  ///
  /// # Errors
  /// Returns [`Error::NotInitialized`] if no snapshot has been supplied yet.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullsketch::algorithms::Algorithm;
  /// # use hullsketch::data::{Point, Snapshot};
  /// # use hullsketch::session::HullSession;
  /// # use hullsketch::Error;
  /// let mut session: HullSession<i32> = HullSession::new(Algorithm::GrahamScan);
  /// assert_eq!(session.current_hull().err(), Some(Error::NotInitialized));
  ///
  /// let snapshot: Snapshot<i32> = vec![Point::new([0, 0]), Point::new([5, 5])].into();
  /// session.on_point_set_changed(snapshot);
  /// assert_eq!(session.current_hull().map(|hull| hull.len()), Ok(2));
  /// ```
  pub fn current_hull(&mut self) -> Result<&Hull<T>, Error> {
    let snapshot = self.snapshot.as_ref().ok_or(Error::NotInitialized)?;
    let algorithm = self.algorithm;
    Ok(self.hull.get_or_insert_with(|| {
      let hull = algorithm.convex_hull(snapshot.as_slice());
      debug!(
        "Recomputed hull with {}: {} point(s) -> {} vertices",
        algorithm,
        snapshot.len(),
        hull.len()
      );
      hull
    }))
  }

  /// Per-frame poll. Recomputes the hull if it is stale and reports whether
  /// it did.
  pub fn tick(&mut self) -> Result<bool, Error> {
    let stale = self.is_dirty();
    self.current_hull()?;
    Ok(stale)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;

  use claims::{assert_err, assert_ok};

  fn snapshot(coords: &[[i32; 2]]) -> Snapshot<i32> {
    coords.iter().map(|&c| Point::new(c)).collect()
  }

  const SQUARE: [[i32; 2]; 5] = [[0, 0], [4, 0], [4, 4], [0, 4], [2, 2]];

  #[test]
  fn not_initialized() {
    let mut session: HullSession<i32> = HullSession::new(Algorithm::JarvisMarch);
    assert_eq!(session.current_hull().err(), Some(Error::NotInitialized));
    assert_err!(session.tick());
    assert!(session.is_dirty());
  }

  #[test]
  fn empty_snapshot_is_initialized() {
    let mut session: HullSession<i32> = HullSession::new(Algorithm::GrahamScan);
    session.on_point_set_changed(Snapshot::default());
    assert_eq!(session.current_hull(), Ok(&Hull::empty()));
  }

  #[test]
  fn no_algorithm_gives_empty_hull() {
    let mut session = HullSession::default();
    session.on_point_set_changed(snapshot(&SQUARE));
    assert_eq!(session.algorithm(), Algorithm::None);
    assert_eq!(session.current_hull(), Ok(&Hull::empty()));
  }

  #[test]
  fn recomputes_only_when_stale() {
    let mut session = HullSession::new(Algorithm::GrahamScan);
    session.on_point_set_changed(snapshot(&SQUARE));
    assert_eq!(session.tick(), Ok(true));
    assert_eq!(session.tick(), Ok(false));

    // Same contents, different order.
    session.on_point_set_changed(snapshot(&[[2, 2], [0, 4], [4, 4], [4, 0], [0, 0]]));
    assert!(!session.is_dirty());

    session.on_point_set_changed(snapshot(&[[0, 0], [4, 0], [4, 4], [0, 4]]));
    assert!(session.is_dirty());
    assert_eq!(session.tick(), Ok(true));
  }

  #[test]
  fn switching_algorithm_recomputes() {
    let mut session = HullSession::new(Algorithm::GrahamScan);
    session.on_point_set_changed(snapshot(&SQUARE));
    let graham = assert_ok!(session.current_hull()).clone();
    session.set_algorithm(Algorithm::JarvisMarch);
    assert!(session.is_dirty());
    assert_eq!(session.current_hull(), Ok(&graham));
    session.set_algorithm(Algorithm::JarvisMarch);
    assert!(!session.is_dirty());
  }

  #[test]
  fn mutation_is_reflected() {
    let mut session = HullSession::new(Algorithm::JarvisMarch);
    session.on_point_set_changed(snapshot(&SQUARE));
    assert_eq!(assert_ok!(session.current_hull()).len(), 4);
    session.on_point_set_changed(snapshot(&[[0, 0], [4, 0], [0, 4], [2, 2]]));
    let hull = assert_ok!(session.current_hull());
    assert!(!hull.contains_vertex(&Point::new([4, 4])));
    assert_eq!(hull.len(), 3);
  }

  #[test]
  fn toggling() {
    let mut session: HullSession<i32> = HullSession::default();
    assert_eq!(session.toggle_algorithm(Algorithm::GrahamScan), Algorithm::GrahamScan);
    assert_eq!(session.toggle_algorithm(Algorithm::JarvisMarch), Algorithm::JarvisMarch);
    assert_eq!(session.toggle_algorithm(Algorithm::JarvisMarch), Algorithm::None);
    assert_eq!(session.algorithm(), Algorithm::None);
  }
}
