//! The interface the interactive shell talks to.
//!
//! [`HullEditor`] owns the [`PointSet`] under edit, the [`HullSession`] and the
//! [`Config`]. Edits go straight to the point set; the session only receives
//! a new snapshot when a hull is requested and the set changed since the last
//! request.
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::algorithms::Algorithm;
use crate::config::Config;
use crate::data::{Hull, Point, PointSet, Region};
use crate::session::HullSession;
use crate::{Error, HullScalar};

#[derive(Debug, Clone)]
pub struct HullEditor<T> {
  points: PointSet<T>,
  session: HullSession<T>,
  config: Config<T>,
  // Revision of `points` last handed to the session.
  synced_revision: Option<u64>,
}

impl<T> HullEditor<T>
where
  T: HullScalar,
{
  pub fn new(config: Config<T>) -> HullEditor<T> {
    HullEditor {
      points: PointSet::new(config.region.clone()),
      session: HullSession::default(),
      config,
      synced_revision: None,
    }
  }

  pub fn config(&self) -> &Config<T> {
    &self.config
  }

  pub fn points(&self) -> &PointSet<T> {
    &self.points
  }

  pub fn session(&self) -> &HullSession<T> {
    &self.session
  }

  pub fn add_point(&mut self, pt: Point<T>) -> bool {
    self.points.add_point(pt)
  }

  /// Point under the cursor, using the configured hit tolerance.
  pub fn point_at(&self, cursor: &Point<T>) -> Option<&Point<T>> {
    self
      .points
      .find_point_containing(cursor, &self.config.hit_tolerance)
  }

  pub fn find_point_containing(&self, center: &Point<T>, tolerance: &T) -> Option<&Point<T>> {
    self.points.find_point_containing(center, tolerance)
  }

  pub fn remove_points_containing(&mut self, center: &Point<T>, tolerance: &T) -> usize {
    self.points.remove_points_containing(center, tolerance)
  }

  pub fn move_point(&mut self, from: &Point<T>, to: Point<T>) -> Option<Point<T>> {
    self.points.move_point(from, to)
  }

  pub fn clear(&mut self) {
    self.points.clear()
  }

  pub fn active_algorithm(&self) -> Algorithm {
    self.session.algorithm()
  }

  pub fn set_active_algorithm(&mut self, algorithm: Algorithm) {
    self.session.set_algorithm(algorithm)
  }

  pub fn toggle_algorithm(&mut self, algorithm: Algorithm) -> Algorithm {
    self.session.toggle_algorithm(algorithm)
  }

  fn sync(&mut self) {
    let revision = self.points.revision();
    if self.synced_revision != Some(revision) {
      self.session.on_point_set_changed(self.points.snapshot());
      self.synced_revision = Some(revision);
    }
  }

  /// Hull of the current points under the active algorithm. Recomputed only
  /// if the points or the algorithm changed since the last call.
  pub fn current_hull(&mut self) -> Result<&Hull<T>, Error> {
    self.sync();
    self.session.current_hull()
  }

  /// Per-frame poll. Returns `true` if the hull was recomputed.
  pub fn tick(&mut self) -> Result<bool, Error> {
    self.sync();
    self.session.tick()
  }
}

impl<T> HullEditor<T>
where
  T: HullScalar + SampleUniform,
{
  pub fn add_random_point<R>(&mut self, rng: &mut R) -> bool
  where
    R: Rng + ?Sized,
  {
    self.points.add_random_point(rng)
  }

  pub fn generate_random_points<R>(&mut self, count: i64, region: &Region<T>, rng: &mut R) -> usize
  where
    R: Rng + ?Sized,
  {
    self.points.generate_random_points(count, region, rng)
  }

  pub fn generate_random_points_from_input<R>(&mut self, input: &str, rng: &mut R) -> usize
  where
    R: Rng + ?Sized,
  {
    self.points.generate_random_points_from_input(input, rng)
  }
}

impl Default for HullEditor<i32> {
  fn default() -> HullEditor<i32> {
    HullEditor::new(Config::default())
  }
}
