//! Export of a committed disc sequence.
//!
//! Everything here works from the history and cursor alone: frames are
//! reproduced by replaying discs onto a fresh canvas, never by peeking at the
//! solver. A history can therefore be exported while the solver keeps running,
//! or long after it is gone.

use {
  crate::{canvas::Canvas, solver::Disc},
  anyhow::Result,
  image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame
  },
  std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Duration
  }
};

#[cfg(test)] mod tests;

/// Replay `history[0..cursor)` onto a fresh black canvas, handing
/// `(index, canvas)` to `sink` after each disc.
pub fn replay_frames(
  history: &[Disc],
  cursor: usize,
  width: u32,
  height: u32,
  mut sink: impl FnMut(usize, &Canvas)
) -> Result<()> {
  let cursor = cursor.min(history.len());
  let mut canvas = Canvas::new(width, height)?;
  for (i, disc) in history[..cursor].iter().enumerate() {
    canvas.put_disc(disc.center, disc.radius, disc.color);
    sink(i, &canvas);
  }
  Ok(())
}

#[derive(Copy, Clone, Debug)]
pub struct GifConfig {
  /// Delay of the blank opening frame and every intermediate frame.
  pub frame_delay: Duration,
  /// Hold on the finished picture before the animation loops.
  pub final_delay: Duration
}

impl Default for GifConfig {
  fn default() -> Self {
    GifConfig {
      frame_delay: Duration::from_millis(100),
      final_delay: Duration::from_secs(3)
    }
  }
}

/// Encode the construction animation as a looping GIF.
///
/// A frame is emitted each time the integer completion percentage advances,
/// so the output stays near a hundred frames regardless of disc count.
pub fn encode_gif<W: Write>(
  history: &[Disc],
  cursor: usize,
  width: u32,
  height: u32,
  writer: W,
  config: GifConfig
) -> Result<()> {
  let cursor = cursor.min(history.len());
  let mut encoder = GifEncoder::new(writer);
  encoder.set_repeat(Repeat::Infinite)?;

  let mut canvas = Canvas::new(width, height)?;
  push_frame(&mut encoder, &canvas, config.frame_delay)?;

  let mut prev_percent = 0;
  for (i, disc) in history[..cursor].iter().enumerate() {
    canvas.put_disc(disc.center, disc.radius, disc.color);
    let percent = (i + 1) * 100 / cursor;
    if percent > prev_percent {
      prev_percent = percent;
      let delay = if i + 1 == cursor { config.final_delay } else { config.frame_delay };
      push_frame(&mut encoder, &canvas, delay)?;
    }
  }
  Ok(())
}

fn push_frame<W: Write>(
  encoder: &mut GifEncoder<W>,
  canvas: &Canvas,
  delay: Duration
) -> Result<()> {
  let rgba = image::DynamicImage::ImageRgb8(canvas.to_image()).to_rgba8();
  let frame = Frame::from_parts(rgba, 0, 0, Delay::from_saturating_duration(delay));
  encoder.encode_frame(frame)?;
  Ok(())
}

/// Write the animation to a file.
pub fn save_gif(
  history: &[Disc],
  cursor: usize,
  width: u32,
  height: u32,
  path: impl AsRef<Path>,
  config: GifConfig
) -> Result<()> {
  let file = BufWriter::new(File::create(path)?);
  encode_gif(history, cursor, width, height, file, config)
}

/// Write the quantized canvas as a PNG.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
  canvas.to_image().save(path.as_ref())?;
  Ok(())
}
