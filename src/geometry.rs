//! .
//!
//! The origin of the coordinate system is in the top-left corner. All
//! coordinates are whole pixels; disc geometry is allowed to overhang the
//! canvas and is clipped at paint time.

use {
  euclid::{Point2D, Vector2D},
  num_traits::clamp
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Absolute pixel coordinate. May lie outside the canvas.
pub type Point = Point2D<i32, PixelSpace>;
/// Offset between two pixel coordinates.
pub type Offset = Vector2D<i32, PixelSpace>;

/// Nominal per-channel range is `0..=255`; intermediate arithmetic is allowed
/// to leave it, and values are only clamped on [`Color::quantize`].
pub const CHANNEL_MAX: i32 = 255;

/// An RGB color with fractional channels.
///
/// [`Color::unblend`] is the exact algebraic inverse of [`Color::blend`];
/// both stay fractional and never clamp.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
  pub r: f64,
  pub g: f64,
  pub b: f64
}

impl Color {
  pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

  pub fn new(r: f64, g: f64, b: f64) -> Self {
    Color { r, g, b }
  }

  /// Average `other` into `self`, per channel.
  pub fn blend(self, other: Color) -> Color {
    Color {
      r: (self.r + other.r) / 2.0,
      g: (self.g + other.g) / 2.0,
      b: (self.b + other.b) / 2.0
    }
  }

  /// Exact inverse of [`Color::blend`]: `other.blend(c).unblend(c) == other`.
  /// The result may leave the nominal channel range.
  pub fn unblend(self, other: Color) -> Color {
    Color {
      r: 2.0 * self.r - other.r,
      g: 2.0 * self.g - other.g,
      b: 2.0 * self.b - other.b
    }
  }

  /// The externally visible integer value of each channel: floored, and
  /// clamped to `0..=CHANNEL_MAX`.
  pub fn quantize(self) -> [i32; 3] {
    [self.r, self.g, self.b]
      .map(|ch| clamp(ch.floor(), 0.0, CHANNEL_MAX as f64) as i32)
  }

  /// Total absolute difference of quantized channels.
  pub fn diff(self, other: Color) -> i32 {
    let [a, b] = [self.quantize(), other.quantize()];
    (0..3).map(|k| (a[k] - b[k]).abs()).sum()
  }
}

impl From<[u8; 3]> for Color {
  fn from(ch: [u8; 3]) -> Self {
    Color::new(ch[0] as f64, ch[1] as f64, ch[2] as f64)
  }
}
