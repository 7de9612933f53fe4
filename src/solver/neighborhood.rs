use {
  crate::geometry::Offset,
  anyhow::{Result, bail},
  itertools::iproduct
};

/// Nudges offsets lying exactly on an integer distance down into that ring
/// instead of the next one.
const DIST_EPSILON: f64 = 1e-7;

/// Offsets around a center, bucketed by rounded Euclidean distance.
///
/// Ring `r` holds every offset with `ceil(|dx, dy| - ε) == r`; the union of
/// rings `0..=r` is exactly the filled lattice disc `dx² + dy² ≤ r²`, each
/// offset in exactly one bucket. Built once, immutable afterwards.
pub struct Neighborhood {
  rings: Vec<Vec<Offset>>
}

impl Neighborhood {
  pub fn build(max_radius: i32) -> Result<Self> {
    if max_radius < 0 {
      bail!("neighborhood radius must be non-negative, got {}", max_radius);
    }
    let mut rings = vec![vec![]; max_radius as usize + 1];
    for (dy, dx) in iproduct!(-max_radius..=max_radius, -max_radius..=max_radius) {
      let dist = (((dx * dx + dy * dy) as f64).sqrt() - DIST_EPSILON).ceil() as i32;
      if dist > max_radius { continue; }
      rings[dist as usize].push(Offset::new(dx, dy));
    }
    Ok(Self { rings })
  }

  pub fn max_radius(&self) -> i32 {
    self.rings.len() as i32 - 1
  }

  /// Offsets whose rounded distance is exactly `radius` (not `≤`).
  pub fn ring(&self, radius: i32) -> &[Offset] {
    &self.rings[radius as usize]
  }
}
