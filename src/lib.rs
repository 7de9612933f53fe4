//! Approximate a raster image with semi-transparent discs.
//!
//! The crate is split into three main modules: [`canvas`] for the blendable
//! pixel grid, [`solver`] for discovering the disc sequence, and [`drawing`]
//! for exporting it (requires `drawing` feature).
//!
//! Each solver step either discovers one new disc (the center, radius and
//! color with the highest total error reduction against the target, found by a
//! time-boxed random-restart search) or replays/undoes a previously recorded
//! one. Painting blends by per-channel averaging, `new = (old + color) / 2`,
//! which has the exact inverse `old = 2 * new - color`; rewinding the history
//! therefore restores the canvas bit for bit.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   circlemix::{
//! #     canvas::Canvas,
//! #     solver::{Solver, SolverConfig}
//! #   },
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! let target = Canvas::from_image(&image::open("in.png")?.to_rgb8())?;
//! let mut solver = Solver::new(target, SolverConfig::default())?;
//!
//! // One disc per step; drive it as long as you like.
//! for _ in 0..1000 {
//!   solver.step_forward();
//! }
//!
//! solver.canvas().to_image().save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//! The search is deterministic for a fixed [`solver::SolverConfig::seed`], and
//! the recorded history replays both forward and backward:
//! ```no_run
//! # use circlemix::{canvas::Canvas, solver::{Solver, SolverConfig}};
//! # let mut solver = Solver::new(Canvas::new(4, 4).unwrap(), SolverConfig::default()).unwrap();
//! while solver.step_backward() {} // unwind to the blank canvas
//! while solver.cursor() < solver.history().len() {
//!   solver.step_forward(); // replay, no re-discovery
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(rustdoc::private_intra_doc_links)]

pub mod geometry;
pub mod canvas;
pub mod solver;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
