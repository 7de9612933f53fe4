use {
  circlemix::{
    canvas::Canvas,
    drawing::{self, GifConfig},
    solver::{Solver, SolverConfig}
  },
  anyhow::Result,
  image::imageops::FilterType
};

/// Longest side of the working canvas; larger inputs are downscaled.
const MAX_SIZE: u32 = 550;

fn main() -> Result<()> {
  let mut args = std::env::args().skip(1);
  let (input, count, output) = match (args.next(), args.next(), args.next()) {
    (Some(input), Some(count), Some(output)) => (input, count.parse::<usize>()?, output),
    _ => {
      eprintln!("usage: circlemix <input image> <disc count> <output.png> [output.gif]");
      std::process::exit(2);
    }
  };
  let gif_output = args.next();

  let image = image::open(&input)?;
  let image = if image.width().max(image.height()) > MAX_SIZE {
    image.resize(MAX_SIZE, MAX_SIZE, FilterType::Triangle)
  } else {
    image
  };
  let target = Canvas::from_image(&image.to_rgb8())?;
  println!("{}x{}, {} discs", target.width(), target.height(), count);

  let mut solver = Solver::new(target, SolverConfig::default())?;
  for i in 0..count {
    solver.step_forward();
    if (i + 1) % 50 == 0 {
      println!(
        "disc #{}: mean error {:.3}",
        i + 1,
        solver.canvas().mean_error(solver.target())
      );
    }
  }

  drawing::save_png(solver.canvas(), &output)?;
  println!("wrote {}", output);

  if let Some(path) = gif_output {
    drawing::save_gif(
      solver.history(),
      solver.cursor(),
      solver.canvas().width(),
      solver.canvas().height(),
      &path,
      GifConfig::default()
    )?;
    println!("wrote {}", path);
  }
  Ok(())
}
