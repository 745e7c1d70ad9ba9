//! Layout constants and editor configuration.
//!
//! The shell draws a square window with a control panel on the left and the
//! editable canvas on the right. Points are drawn as small discs, so the
//! editable area keeps half a disc of margin from every edge.

use crate::data::{Point, Region};

/// Side length of the square window, in pixels.
pub const WINDOW_SIZE: i32 = 1000;

/// Width of the control panel on the left edge of the window.
pub const LEFT_PANEL_SIZE: i32 = 320;

/// Diameter of a rendered point. Also the diameter of its hit area.
pub const POINT_DIAMETER: i32 = 8;

/// Most points a single random-generation request draws. Larger requests are
/// cut down to this many draws.
pub const MAX_GENERATED_POINTS: usize = 100_000;

/// Settings the editor is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config<T> {
  /// Every point of the set lies in this region.
  pub region: Region<T>,
  /// Clicks within this distance of a point hit it.
  pub hit_tolerance: T,
}

impl<T> Config<T> {
  pub fn new(region: Region<T>, hit_tolerance: T) -> Config<T> {
    Config {
      region,
      hit_tolerance,
    }
  }
}

impl Default for Config<i32> {
  /// The canvas right of the control panel, inset by half a point.
  fn default() -> Config<i32> {
    let margin = POINT_DIAMETER / 2;
    Config {
      region: Region::new(
        Point::new([LEFT_PANEL_SIZE + margin, margin]),
        Point::new([WINDOW_SIZE - margin - 1, WINDOW_SIZE - margin - 1]),
      ),
      hit_tolerance: margin,
    }
  }
}
