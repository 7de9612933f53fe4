use {
  super::*,
  crate::geometry::{Color, Point},
  anyhow::Result,
  rand::{Rng, SeedableRng}
};

fn random_color(rng: &mut rand_pcg::Pcg64) -> Color {
  Color::new(
    rng.gen_range(0..256) as f64,
    rng.gen_range(0..256) as f64,
    rng.gen_range(0..256) as f64
  )
}

#[test] fn rejects_degenerate_dimensions() {
  assert!(Canvas::new(0, 4).is_err());
  assert!(Canvas::new(4, 0).is_err());
  assert!(Canvas::new(1, 1).is_ok());
}

#[test] fn unpaint_reverts_paint_exactly() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
  let mut canvas = Canvas::new(6, 6)?;

  // arbitrary prior state, fractional after a few blends
  for _ in 0..4 {
    let center = Point::new(rng.gen_range(0..6), rng.gen_range(0..6));
    canvas.put_disc(center, rng.gen_range(0..3), random_color(&mut rng));
  }
  let before: Vec<Color> = (0..6)
    .flat_map(|y| (0..6).map(move |x| (x, y)))
    .map(|(x, y)| canvas.get(x, y))
    .collect();

  let color = random_color(&mut rng);
  canvas.put_disc(Point::new(2, 3), 4, color);
  canvas.remove_disc(Point::new(2, 3), 4, color);

  for (i, (x, y)) in (0..6).flat_map(|y| (0..6).map(move |x| (x, y))).enumerate() {
    assert_eq!(canvas.get(x, y), before[i], "pixel ({}, {}) not restored", x, y);
  }
  Ok(())
}

#[test] fn disc_overhanging_corner_clips() -> Result<()> {
  let mut canvas = Canvas::new(5, 5)?;
  canvas.put_disc(Point::new(0, 0), 2, Color::new(200.0, 200.0, 200.0));

  for y in 0..5 {
    for x in 0..5 {
      let covered = x * x + y * y <= 4;
      assert_eq!(
        canvas.get(x, y) != Color::BLACK,
        covered,
        "pixel ({}, {})", x, y
      );
    }
  }
  Ok(())
}

#[test] fn off_board_disc_paints_nothing() -> Result<()> {
  let mut canvas = Canvas::new(3, 3)?;
  canvas.put_disc(Point::new(-10, -10), 4, Color::new(255.0, 255.0, 255.0));
  for y in 0..3 {
    for x in 0..3 {
      assert_eq!(canvas.get(x, y), Color::BLACK);
    }
  }
  Ok(())
}

#[test] fn quantized_read_clamps_out_of_range() -> Result<()> {
  let mut canvas = Canvas::new(1, 1)?;

  // unpainting an unpainted pixel drives it negative
  canvas.unpaint(0, 0, Color::new(100.0, 40.0, 0.0));
  assert_eq!(canvas.get(0, 0), Color::new(-100.0, -40.0, 0.0));
  assert_eq!(canvas.get_quantized(0, 0), [0, 0, 0]);

  canvas.fill(Color::new(300.0, 255.9, 12.3));
  assert_eq!(canvas.get_quantized(0, 0), [255, 255, 12]);
  Ok(())
}

#[test] fn total_error_counts_quantized_channels() -> Result<()> {
  let mut a = Canvas::new(2, 1)?;
  let b = Canvas::new(2, 1)?;
  a.fill(Color::new(10.0, 0.0, 1.5));

  assert_eq!(a.total_error(&b), 2 * (10 + 0 + 1));
  assert!((a.mean_error(&b) - 22.0 / 6.0).abs() < 1e-12);
  Ok(())
}
