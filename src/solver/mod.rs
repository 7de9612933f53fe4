//! Greedy disc discovery with a replayable history.
//!
//! The solver owns the target snapshot, the working canvas, and the list of
//! placed discs. Stepping forward below the frontier replays a recorded disc;
//! at the frontier it discovers a new one with a time-boxed random-restart
//! search. Stepping backward applies the exact inverse blend. Both operations
//! do one unit of work and are meant to be driven on an external cadence.

use {
  crate::{
    canvas::Canvas,
    geometry::{Color, Point}
  },
  anyhow::Result,
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  std::time::{Duration, Instant}
};

pub mod neighborhood;
pub use neighborhood::Neighborhood;

mod optimizer;

/// One committed or candidate paint action.
#[derive(Debug, Copy, Clone)]
pub struct Disc {
  pub center: Point,
  pub color: Color,
  pub radius: i32,
  /// Total error reduction achieved at discovery time. Ranking-only; carries
  /// no meaning once the disc is committed.
  pub score: f64
}

impl Disc {
  /// Commits as a no-op: radius zero at an off-board center covers nothing.
  fn sentinel() -> Self {
    Disc {
      center: Point::new(-1, -1),
      color: Color::BLACK,
      radius: 0,
      score: 0.0
    }
  }
}

/// Search tuning. The defaults are inherited tuning constants, not
/// invariants; every knob is safe to change independently.
#[derive(Copy, Clone, Debug)]
pub struct SolverConfig {
  /// Neighborhood build extent.
  pub max_radius: i32,
  /// Radius sweep cap, clamped to `max_radius`. Kept well below the
  /// neighborhood extent by default as a cost/quality tradeoff.
  pub radius_limit: i32,
  /// Consecutive non-improving radii before a sweep aborts.
  pub max_stagnation: u32,
  /// Random-restart trials per discovery step.
  pub trials_per_step: u32,
  /// Shared wall-clock budget for one discovery step. Checked between
  /// trials; a step can overrun by at most one trial.
  pub step_budget: Duration,
  /// Initial per-pixel error required to accept a sampled center. Relaxes
  /// by one per rejection, so sampling terminates even on a converged
  /// canvas.
  pub accept_threshold: i32,
  pub seed: u64
}

impl Default for SolverConfig {
  fn default() -> Self {
    SolverConfig {
      max_radius: 500,
      radius_limit: 200,
      max_stagnation: 5,
      trials_per_step: 21,
      step_budget: Duration::from_millis(500),
      accept_threshold: 20,
      seed: 0
    }
  }
}

pub struct Solver {
  target: Canvas,
  canvas: Canvas,
  neighborhood: Neighborhood,
  config: SolverConfig,
  history: Vec<Disc>,
  cursor: usize,
  busy: bool,
  rng: Pcg64,
  progress: Option<Box<dyn FnMut(usize)>>
}

impl Solver {
  /// Snapshots `target` and allocates a blank canvas of the same dimensions.
  pub fn new(target: Canvas, config: SolverConfig) -> Result<Self> {
    Ok(Self {
      canvas: Canvas::new(target.width(), target.height())?,
      neighborhood: Neighborhood::build(config.max_radius)?,
      config,
      history: vec![],
      cursor: 0,
      busy: false,
      rng: Pcg64::seed_from_u64(config.seed),
      progress: None,
      target
    })
  }

  /// Install a sink receiving the cursor after every successful step.
  pub fn with_progress(mut self, sink: impl FnMut(usize) + 'static) -> Self {
    self.progress = Some(Box::new(sink));
    self
  }

  pub fn cursor(&self) -> usize { self.cursor }
  pub fn history(&self) -> &[Disc] { &self.history }
  pub fn canvas(&self) -> &Canvas { &self.canvas }
  pub fn target(&self) -> &Canvas { &self.target }
  pub fn config(&self) -> &SolverConfig { &self.config }
  pub fn into_canvas(self) -> Canvas { self.canvas }

  /// Advance by one disc: replay below the frontier, otherwise discover and
  /// commit a new one. A call while a step is in progress is dropped (not
  /// queued) and returns `false`.
  pub fn step_forward(&mut self) -> bool {
    if self.busy { return false; }
    self.busy = true;

    if self.cursor < self.history.len() {
      let disc = self.history[self.cursor];
      self.canvas.put_disc(disc.center, disc.radius, disc.color);
    } else {
      let disc = self.discover();
      self.canvas.put_disc(disc.center, disc.radius, disc.color);
      self.history.push(disc);
    }
    self.cursor += 1;

    self.notify();
    self.busy = false;
    true
  }

  /// Undo the disc below the cursor with the exact inverse blend. Returns
  /// `false` when there is nothing to undo, or while a step is in progress;
  /// neither case mutates anything.
  pub fn step_backward(&mut self) -> bool {
    if self.cursor == 0 || self.busy { return false; }
    self.busy = true;

    self.cursor -= 1;
    let disc = self.history[self.cursor];
    self.canvas.remove_disc(disc.center, disc.radius, disc.color);

    self.notify();
    self.busy = false;
    true
  }

  /// Time-boxed random-restart search for the next disc. Keeps the strictly
  /// best-scoring candidate, so a fully converged canvas yields the no-op
  /// sentinel rather than a zero-gain paint.
  fn discover(&mut self) -> Disc {
    let deadline = Instant::now() + self.config.step_budget;
    let mut best = Disc::sentinel();

    for _ in 0..self.config.trials_per_step {
      let center = self.sample_center();
      let disc = optimizer::find_best_disc(
        center,
        &self.target,
        &self.canvas,
        &self.neighborhood,
        &self.config
      );
      if disc.score > best.score {
        best = disc;
      }
      if Instant::now() >= deadline { break; }
    }
    best
  }

  /// Uniform random center, rejecting pixels that already sit close to the
  /// target. The threshold relaxes by one per rejection.
  fn sample_center(&mut self) -> Point {
    let mut threshold = self.config.accept_threshold;
    loop {
      let x = self.rng.gen_range(0..self.canvas.width() as i32);
      let y = self.rng.gen_range(0..self.canvas.height() as i32);
      if self.target.get(x, y).diff(self.canvas.get(x, y)) >= threshold {
        return Point::new(x, y);
      }
      threshold -= 1;
    }
  }

  fn notify(&mut self) {
    if let Some(sink) = self.progress.as_mut() {
      sink(self.cursor);
    }
  }
}
