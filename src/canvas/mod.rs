//! The blendable pixel grid that discs are painted onto.
//!
//! Storage is fractional and [`Canvas::unpaint`] inverts [`Canvas::paint`]
//! exactly. Everything reading the canvas from outside (error metrics, image
//! export) goes through the quantized view, the way a display surface floors
//! and clamps the channels.

use {
  crate::geometry::{Color, Point},
  anyhow::{Result, bail},
  itertools::iproduct
};

#[cfg(test)] mod tests;

/// Owned 2D grid of [`Color`], row-major.
pub struct Canvas {
  width: u32,
  height: u32,
  pixels: Vec<Color>
}

impl Canvas {
  /// Fresh all-black canvas.
  pub fn new(width: u32, height: u32) -> Result<Self> {
    if width == 0 || height == 0 {
      bail!("canvas dimensions must be positive, got {}x{}", width, height);
    }
    Ok(Self {
      width,
      height,
      pixels: vec![Color::BLACK; (width * height) as usize]
    })
  }

  /// Reset every pixel to `color`.
  pub fn fill(&mut self, color: Color) {
    self.pixels.fill(color);
  }

  pub fn width(&self) -> u32 { self.width }
  pub fn height(&self) -> u32 { self.height }

  pub fn in_bounds(&self, x: i32, y: i32) -> bool {
    x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
  }

  fn index(&self, x: i32, y: i32) -> usize {
    y as usize * self.width as usize + x as usize
  }

  /// Fractional pixel value. Coordinates must be in bounds.
  pub fn get(&self, x: i32, y: i32) -> Color {
    self.pixels[self.index(x, y)]
  }

  /// The externally visible (floored, clamped) pixel value.
  pub fn get_quantized(&self, x: i32, y: i32) -> [i32; 3] {
    self.get(x, y).quantize()
  }

  /// Blend `color` into the pixel by averaging.
  pub fn paint(&mut self, x: i32, y: i32, color: Color) {
    let i = self.index(x, y);
    self.pixels[i] = self.pixels[i].blend(color);
  }

  /// Exact inverse of [`Canvas::paint`] with the same color.
  pub fn unpaint(&mut self, x: i32, y: i32, color: Color) {
    let i = self.index(x, y);
    self.pixels[i] = self.pixels[i].unblend(color);
  }

  /// Paint a filled disc, clipping silently at the edges.
  pub fn put_disc(&mut self, center: Point, radius: i32, color: Color) {
    for (dy, dx) in disc_offsets(radius) {
      let (tx, ty) = (center.x + dx, center.y + dy);
      if !self.in_bounds(tx, ty) { continue; }
      self.paint(tx, ty, color);
    }
  }

  /// Erase a filled disc painted by [`Canvas::put_disc`] with the same
  /// center, radius and color.
  pub fn remove_disc(&mut self, center: Point, radius: i32, color: Color) {
    for (dy, dx) in disc_offsets(radius) {
      let (tx, ty) = (center.x + dx, center.y + dy);
      if !self.in_bounds(tx, ty) { continue; }
      self.unpaint(tx, ty, color);
    }
  }

  /// Total absolute difference of quantized channels against `other`.
  /// Both canvases must share dimensions.
  pub fn total_error(&self, other: &Canvas) -> u64 {
    use rayon::prelude::*;

    assert_eq!(
      (self.width, self.height),
      (other.width, other.height),
      "canvas dimensions differ"
    );
    self.pixels.par_chunks(self.width as usize)
      .zip(other.pixels.par_chunks(other.width as usize))
      .map(|(row_a, row_b)| row_a.iter()
        .zip(row_b)
        .map(|(a, b)| a.diff(*b) as u64)
        .sum::<u64>()
      )
      .sum()
  }

  /// Mean absolute channel error against `other`, for progress display.
  pub fn mean_error(&self, other: &Canvas) -> f64 {
    self.total_error(other) as f64 / (self.width as f64 * self.height as f64 * 3.0)
  }
}

#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
impl Canvas {
  /// Snapshot an image into a canvas.
  pub fn from_image(image: &image::RgbImage) -> Result<Self> {
    let mut canvas = Canvas::new(image.width(), image.height())?;
    for (x, y, pixel) in image.enumerate_pixels() {
      let i = canvas.index(x as i32, y as i32);
      canvas.pixels[i] = pixel.0.into();
    }
    Ok(canvas)
  }

  /// Quantized view of the canvas as an image.
  pub fn to_image(&self) -> image::RgbImage {
    image::RgbImage::from_fn(self.width, self.height, |x, y| {
      let ch = self.get_quantized(x as i32, y as i32);
      image::Rgb(ch.map(|v| v as u8))
    })
  }
}

/// `(dy, dx)` offsets of a filled disc of the given radius.
fn disc_offsets(radius: i32) -> impl Iterator<Item = (i32, i32)> {
  iproduct!(-radius..=radius, -radius..=radius)
    .filter(move |(dy, dx)| dx * dx + dy * dy <= radius * radius)
}
