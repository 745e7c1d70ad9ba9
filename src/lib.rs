// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hull core for an interactive point-set editor.
//!
//! The shell owns windows, widgets and input devices. This crate owns the
//! points under edit, the two hull algorithms ([Jarvis march] and [Graham
//! scan]) and a small [session](session::HullSession) that keeps the last hull
//! in sync with the points.
//!
//! ```rust
//! # use hullsketch::algorithms::convex_hull::{graham_scan, jarvis_march};
//! # use hullsketch::data::Point;
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = graham_scan(&pts);
//! assert_eq!(hull.vertices(), &pts[..4]);
//! assert_eq!(jarvis_march(&pts), hull);
//! ```
//!
//! [Jarvis march]: algorithms::convex_hull::jarvis_march
//! [Graham scan]: algorithms::convex_hull::graham_scan
use num_bigint::BigInt;
use num_traits::{Float, ToPrimitive};
use ordered_float::NotNan;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

pub mod algorithms;
pub mod config;
pub mod data;
pub mod editor;
mod orientation;
pub mod session;

pub use orientation::Orientation;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A hull was requested before any point set was supplied.
  NotInitialized,
  DuplicatePoints,
  /// Two consecutive hull edges turn clockwise.
  ConvexViolation,
  /// Two consecutive hull edges are colinear.
  CoLinearViolation,
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NotInitialized => write!(f, "No point set has been supplied yet"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::CoLinearViolation => write!(f, "Colinear violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types the hull algorithms can run on.
///
/// Every implementation answers orientation and distance questions exactly.
/// Fixed-precision integers are widened before multiplying and `BigInt` never
/// overflows. Floats use adaptive-precision predicates when that is exact and
/// big integers otherwise. Infinite float coordinates act as `±2^1024`.
pub trait HullScalar: Debug + Clone + Ord + Hash {
  /// Type of squared distances. Wide enough to never overflow.
  type Distance: Debug + Clone + Ord;

  fn from_constant(val: i8) -> Self;
  fn squared_distance(p: &[Self; 2], q: &[Self; 2]) -> Self::Distance;
  /// `Greater` iff `p -> q -> r` is a counter-clockwise turn.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Lossy conversion used for angles and rendering.
  fn to_f64(&self) -> f64;
}

macro_rules! fixed_precision {
  ( $ty:ty, $wide:ty, $uwide:ty ) => {
    impl HullScalar for $ty {
      type Distance = $uwide;

      fn from_constant(val: i8) -> Self {
        <$ty>::from(val)
      }

      fn squared_distance(p: &[Self; 2], q: &[Self; 2]) -> $uwide {
        // |a - b| fits in the unsigned wide type, and so does the sum of two squares.
        let dx = (<$wide>::from(p[0]) - <$wide>::from(q[0])).unsigned_abs();
        let dy = (<$wide>::from(p[1]) - <$wide>::from(q[1])).unsigned_abs();
        dx * dx + dy * dy
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        let ux = <$wide>::from(q[0]) - <$wide>::from(p[0]);
        let uy = <$wide>::from(q[1]) - <$wide>::from(p[1]);
        let vx = <$wide>::from(r[0]) - <$wide>::from(p[0]);
        let vy = <$wide>::from(r[1]) - <$wide>::from(p[1]);
        (ux * vy).cmp(&(uy * vx))
      }

      fn to_f64(&self) -> f64 {
        f64::from(*self)
      }
    }
  };
}

fixed_precision!(i8, i32, u32);
fixed_precision!(i16, i64, u64);
fixed_precision!(i32, i128, u128);

impl HullScalar for BigInt {
  type Distance = BigInt;

  fn from_constant(val: i8) -> Self {
    BigInt::from(val)
  }

  fn squared_distance(p: &[Self; 2], q: &[Self; 2]) -> BigInt {
    let dx = &p[0] - &q[0];
    let dy = &p[1] - &q[1];
    &dx * &dx + &dy * &dy
  }

  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    let slope1 = (&q[0] - &p[0]) * (&r[1] - &p[1]);
    let slope2 = (&q[1] - &p[1]) * (&r[0] - &p[0]);
    slope1.cmp(&slope2)
  }

  fn to_f64(&self) -> f64 {
    ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
  }
}

impl HullScalar for NotNan<f64> {
  // Squared distances are taken over the exact binary values of the
  // coordinates, so they never round, overflow or turn into NaN.
  type Distance = BigInt;

  fn from_constant(val: i8) -> Self {
    NotNan::from(val)
  }

  fn squared_distance(p: &[Self; 2], q: &[Self; 2]) -> BigInt {
    BigInt::squared_distance(&exact_float_point(p), &exact_float_point(q))
  }

  // Inside `FAST_FLOAT_RANGE` no intermediate product of the adaptive
  // predicate can overflow or underflow, so `geometry_predicates` computes the
  // orientation exactly. Anything else falls back to big integers.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    let fast = [p, q, r]
      .iter()
      .flat_map(|pt| pt.iter())
      .all(|c| in_fast_float_range(c.into_inner()));
    if !fast {
      return BigInt::cmp_slope(
        &exact_float_point(p),
        &exact_float_point(q),
        &exact_float_point(r),
      );
    }
    let orient = geometry_predicates::predicates::orient2d(
      [p[0].into_inner(), p[1].into_inner()],
      [q[0].into_inner(), q[1].into_inner()],
      [r[0].into_inner(), r[1].into_inner()],
    );
    if orient > 0.0 {
      Ordering::Greater
    } else if orient < 0.0 {
      Ordering::Less
    } else {
      Ordering::Equal
    }
  }

  fn to_f64(&self) -> f64 {
    self.into_inner()
  }
}

// Non-zero magnitudes for which orient2d stays exact.
const FAST_FLOAT_RANGE: (f64, f64) = (1e-100, 1e100);

fn in_fast_float_range(val: f64) -> bool {
  let magnitude = val.abs();
  magnitude == 0.0 || (FAST_FLOAT_RANGE.0..=FAST_FLOAT_RANGE.1).contains(&magnitude)
}

// Every finite f64 is an integer multiple of 2^-1075, so scaling by 2^1075
// maps it to a big integer without loss. Infinities land on ±2^1024, just
// beyond the largest finite value, which keeps the order of `NotNan`.
fn exact_float(val: NotNan<f64>) -> BigInt {
  let (mantissa, exponent, sign) = Float::integer_decode(val.into_inner());
  let shift = usize::try_from(i32::from(exponent) + 1075).unwrap_or(0);
  let magnitude = BigInt::from(mantissa) << shift;
  if sign < 0 {
    -magnitude
  } else {
    magnitude
  }
}

fn exact_float_point(pt: &[NotNan<f64>; 2]) -> [BigInt; 2] {
  [exact_float(pt[0]), exact_float(pt[1])]
}
