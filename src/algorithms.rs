pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::{graham_scan, jarvis_march};

use crate::data::{Hull, Point};
use crate::HullScalar;

/// Which hull algorithm is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Algorithm {
  /// No hull is shown.
  #[default]
  None,
  JarvisMarch,
  GrahamScan,
}

impl Algorithm {
  /// Run the selected algorithm. [`Algorithm::None`] yields the empty hull.
  pub fn convex_hull<T>(self, pts: &[Point<T>]) -> Hull<T>
  where
    T: HullScalar,
  {
    match self {
      Algorithm::None => Hull::empty(),
      Algorithm::JarvisMarch => jarvis_march(pts),
      Algorithm::GrahamScan => graham_scan(pts),
    }
  }
}

impl std::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Algorithm::None => write!(f, "none"),
      Algorithm::JarvisMarch => write!(f, "Jarvis march"),
      Algorithm::GrahamScan => write!(f, "Graham scan"),
    }
  }
}
