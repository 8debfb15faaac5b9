use std::fmt;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use conway::{
    resize_console, Buffer, CellColor, ColorOptions, Config, EpisodeController, GlyphShape,
    Renderer, Step,
};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Runs episodes of the Game of Life in the terminal, reseeding the grid
/// each time it settles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 32)]
    rows: usize,
    #[arg(long, default_value_t = 64)]
    cols: usize,
    /// Probability that a cell starts alive.
    #[arg(short, long = "probability", default_value_t = 0.4)]
    p: f64,
    /// Zero-loss steps needed before an episode counts as converged.
    #[arg(short = 'k', long = "window", default_value_t = 3)]
    k: usize,
    /// Number of episodes to run before exiting.
    #[arg(long, default_value_t = 5)]
    episodes: usize,
    /// Frames drawn per second.
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,
    #[arg(long)]
    seed: Option<u64>,
    /// Which buffer to draw: `visible` or `hidden`.
    #[arg(long, default_value = "visible")]
    buffer: Buffer,
    /// Glyph shape: `circle` or `square`.
    #[arg(long, default_value = "circle")]
    shape: GlyphShape,
}

/// Per-tick history line shown above the grid.
#[derive(Debug, Clone, Copy)]
struct Hist {
    gen: usize,
    born: usize,
    killed: usize,
    survived: usize,
    loss: f64,
}

impl Hist {
    fn new(gen: usize, step: &Step) -> Self {
        Hist {
            gen,
            born: step.stats.born,
            killed: step.stats.killed,
            survived: step.stats.survived,
            loss: step.loss,
        }
    }
}

impl fmt::Display for Hist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gen: {} born: {} killed: {} survived: {} loss: {:.5}",
            self.gen, self.born, self.killed, self.survived, self.loss
        )
    }
}

fn random_colors<R: Rng + ?Sized>(rng: &mut R, shape: GlyphShape) -> ColorOptions {
    ColorOptions {
        alive: CellColor::VIVID.choose(rng).copied().unwrap_or(CellColor::Red),
        shape,
        ..ColorOptions::default()
    }
}

/// Reseeding probabilities for later episodes, uniform in [0.2, 0.8] to one decimal.
fn probability_schedule<R: Rng + ?Sized>(rng: &mut R, episodes: usize) -> Vec<f64> {
    (0..episodes)
        .map(|_| (rng.random_range(0.2..=0.8_f64) * 10.0).round() / 10.0)
        .collect()
}

fn fps(frames: u32) {
    thread::sleep(Duration::from_secs_f64(1.0 / f64::from(frames)));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::default()
        .with_shape(args.rows, args.cols)
        .with_probability(args.p)
        .with_window(args.k);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut env = EpisodeController::new(config)
        .context("invalid simulation parameters")?
        .with_renderer(Renderer::Console);

    if let Err(err) = resize_console(env.shape()) {
        log::warn!("could not resize terminal: {err}");
    }

    let mut rng = rand::rng();
    let mut p_dist = probability_schedule(&mut rng, args.episodes);
    let mut colors = random_colors(&mut rng, args.shape);
    let mut gen = 0;
    let mut t = 0;

    while gen < args.episodes {
        let step = env.step(t);
        let hist = Hist::new(gen + 1, &step);
        let caption = hist.to_string();
        env.render(Some(t), Some(&caption), args.buffer, &colors)
            .context("failed to draw frame")?;
        fps(args.fps);
        if step.done {
            let next_p = p_dist.pop();
            log::info!("episode {} converged at step {t}, reseeding with p={next_p:?}", gen + 1);
            env.reset(next_p)?;
            colors = random_colors(&mut rng, args.shape);
            gen += 1;
        }
        t += 1;
    }
    Ok(())
}
