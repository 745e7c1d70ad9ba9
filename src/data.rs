mod hull;
pub(crate) mod point;
mod point_set;
mod region;

pub use hull::{Hull, HullShape};
pub use point::Point;
pub use point_set::{PointSet, Snapshot};
pub use region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
