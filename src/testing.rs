// This module contains strategies for:
//  * points
//  * point sets
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PointSet, Region};

use core::ops::Range;
use num_bigint::BigInt;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = ();
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any::<[T; 2]>().prop_map(Point::new)
  }
}

pub fn any_point<T>() -> impl Strategy<Value = Point<T>>
where
  T: Arbitrary,
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  any::<Point<T>>()
}

// Small coordinates produce lots of colinear and duplicate points.
pub fn point_in(range: Range<i32>) -> impl Strategy<Value = Point<i32>> {
  (range.clone(), range).prop_map(|(x, y)| Point::new([x, y]))
}

// Arbitrary isn't defined for BigInt.
pub fn any_point_big() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<i64>>().prop_map(|pt| pt.cast(BigInt::from))
}

// Arbitrary isn't defined for NotNan. Every other float is fair game,
// infinities and subnormals included.
pub fn any_point_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  any::<[f64; 2]>().prop_filter_map("Check for NaN", |[x, y]| {
    Some(Point::new([NotNan::new(x).ok()?, NotNan::new(y).ok()?]))
  })
}

///////////////////////////////////////////////////////////////////////////////
// Point sets

/// A point set over `region` filled with points drawn from `range`. Points
/// outside the region are rejected by the set, just like user clicks.
pub fn point_set_in(
  region: Region<i32>,
  range: Range<i32>,
  size: Range<usize>,
) -> impl Strategy<Value = PointSet<i32>> {
  vec(point_in(range), size).prop_map(move |pts| {
    let mut set = PointSet::new(region.clone());
    for pt in pts {
      set.add_point(pt);
    }
    set
  })
}
