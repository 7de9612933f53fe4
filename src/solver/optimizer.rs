//! The disc search at a fixed center.
//!
//! Painting blends by averaging, so the painted pixel hits its target exactly
//! when the disc color equals the virtual value `2·target − canvas`. Per
//! radius, the optimal disc color minimizes the total absolute deviation from
//! those virtual values, a weighted-median problem solved per channel with one
//! histogram sweep instead of re-scoring all 256 candidates per pixel.

use {
  super::{Disc, SolverConfig, neighborhood::Neighborhood},
  crate::{
    canvas::Canvas,
    geometry::{Color, Point, CHANNEL_MAX}
  }
};

/// Re-centers virtual values at zero: `2·target − canvas ∈ [-255, 510]`.
const BIAS: i32 = CHANNEL_MAX;
const BINS: usize = (3 * (CHANNEL_MAX + 1) + 1) as usize;

/// Cumulative per-channel histograms of the virtual values of all covered
/// pixels, plus `base`, the absolute error of leaving them unpainted.
pub(crate) struct Histogram {
  bins: [Vec<u32>; 3],
  base: [f64; 3]
}

impl Histogram {
  pub(crate) fn new() -> Self {
    Self {
      bins: [vec![0; BINS], vec![0; BINS], vec![0; BINS]],
      base: [0.0; 3]
    }
  }

  pub(crate) fn add(&mut self, target: [i32; 3], canvas: [i32; 3]) {
    for k in 0..3 {
      let virt = 2 * target[k] - canvas[k];
      self.bins[k][(virt + BIAS) as usize] += 1;
      self.base[k] += (target[k] - canvas[k]).abs() as f64;
    }
  }

  /// Per channel, the disc value minimizing total absolute deviation, and
  /// the summed error reduction it achieves.
  ///
  /// The split sweeps candidate values low to high while left/right counts
  /// and weighted sums update incrementally; cost of value `j` is
  /// `Σ m[v]·|v − j| / 2`. Ties break toward the first minimizing value.
  pub(crate) fn optimal_color(&self) -> ([i32; 3], f64) {
    let mut value = [0i32; 3];
    let mut total = 0.0;

    for k in 0..3 {
      let bins = &self.bins[k];
      let (mut left_cnt, mut right_cnt) = (0i64, 0i64);
      let (mut left_val, mut right_val) = (0.0f64, 0.0f64);
      for (key, &count) in bins.iter().enumerate() {
        let v = key as i32 - BIAS;
        if v >= 0 {
          left_cnt += count as i64;
          left_val += count as f64 * (v + 1) as f64 / 2.0;
        } else {
          right_cnt += count as i64;
          right_val += count as f64 * -v as f64 / 2.0;
        }
      }

      let mut best = f64::NEG_INFINITY;
      for j in 0..=CHANNEL_MAX {
        left_val -= left_cnt as f64 / 2.0;
        left_cnt -= bins[(j + BIAS) as usize] as i64;

        let score = self.base[k] - left_val - right_val;
        if score > best {
          best = score;
          value[k] = j;
        }

        right_cnt += bins[(j + BIAS) as usize] as i64;
        right_val += right_cnt as f64 / 2.0;
      }
      total += best;
    }
    (value, total)
  }
}

/// Find the disc at `center` with the highest total error reduction.
///
/// Radii are scanned cumulatively from zero; offsets outside the canvas do
/// not enter the histograms, so discs clip freely at the edges. The sweep
/// aborts after `max_stagnation` radii without improvement and is capped at
/// `radius_limit`. Returns a zero-score, zero-radius disc when no radius
/// reduces the error at all.
pub(crate) fn find_best_disc(
  center: Point,
  target: &Canvas,
  canvas: &Canvas,
  neighborhood: &Neighborhood,
  config: &SolverConfig
) -> Disc {
  let mut histogram = Histogram::new();
  let mut best = Disc { center, color: Color::BLACK, radius: 0, score: 0.0 };
  let mut stagnation = 0;

  for radius in 0..=config.radius_limit.min(neighborhood.max_radius()) {
    for offset in neighborhood.ring(radius) {
      let (tx, ty) = (center.x + offset.x, center.y + offset.y);
      if !canvas.in_bounds(tx, ty) { continue; }
      histogram.add(target.get_quantized(tx, ty), canvas.get_quantized(tx, ty));
    }

    let (value, score) = histogram.optimal_color();
    if score > best.score {
      best = Disc {
        center,
        color: Color::new(value[0] as f64, value[1] as f64, value[2] as f64),
        radius,
        score
      };
      stagnation = 0;
    } else {
      stagnation += 1;
      if stagnation == config.max_stagnation { break; }
    }
  }
  best
}
