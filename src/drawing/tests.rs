use {
  super::*,
  crate::{
    geometry::Color,
    solver::{Solver, SolverConfig}
  },
  std::time::Duration
};

fn small_solver(steps: usize) -> Result<Solver> {
  let mut target = Canvas::new(12, 12)?;
  target.fill(Color::new(200.0, 80.0, 30.0));
  let config = SolverConfig {
    step_budget: Duration::from_millis(20),
    ..Default::default()
  };
  let mut solver = Solver::new(target, config)?;
  for _ in 0..steps {
    solver.step_forward();
  }
  Ok(solver)
}

#[test] fn replay_reaches_the_live_canvas() -> Result<()> {
  let solver = small_solver(5)?;

  let mut frames = 0;
  replay_frames(solver.history(), solver.cursor(), 12, 12, |i, canvas| {
    frames += 1;
    if i + 1 == solver.cursor() {
      for y in 0..12 {
        for x in 0..12 {
          assert_eq!(canvas.get(x, y), solver.canvas().get(x, y));
        }
      }
    }
  })?;
  assert_eq!(frames, 5);
  Ok(())
}

#[test] fn replay_honors_the_cursor() -> Result<()> {
  let solver = small_solver(5)?;

  // only the first three discs exist as far as a cursor of 3 is concerned
  let mut frames = 0;
  replay_frames(solver.history(), 3, 12, 12, |_, _| frames += 1)?;
  assert_eq!(frames, 3);

  // a cursor beyond the history clamps
  frames = 0;
  replay_frames(solver.history(), 99, 12, 12, |_, _| frames += 1)?;
  assert_eq!(frames, 5);
  Ok(())
}

#[test] fn gif_encodes_in_memory() -> Result<()> {
  let solver = small_solver(3)?;

  let mut buffer = vec![];
  encode_gif(
    solver.history(),
    solver.cursor(),
    12,
    12,
    &mut buffer,
    GifConfig::default()
  )?;
  assert!(buffer.starts_with(b"GIF89a"));
  Ok(())
}

#[test] fn empty_history_still_encodes_the_blank_frame() -> Result<()> {
  let mut buffer = vec![];
  encode_gif(&[], 0, 4, 4, &mut buffer, GifConfig::default())?;
  assert!(buffer.starts_with(b"GIF89a"));
  Ok(())
}

#[test] #[ignore] fn export_files() -> Result<()> {
  let solver = small_solver(40)?;

  std::fs::create_dir_all("test")?;
  save_png(solver.canvas(), "test/test_export.png")?;
  save_gif(
    solver.history(),
    solver.cursor(),
    solver.canvas().width(),
    solver.canvas().height(),
    "test/test_export.gif",
    GifConfig::default()
  )?;
  Ok(())
}
