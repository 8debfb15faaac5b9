//! Episode controller: drives an automaton and decides when a run has
//! stabilised.
//!
//! The stability loss of a step is the absolute change in alive density
//! between the new generation and the one before it. The controller counts
//! zero-loss steps and, at every multiple of `k`, reports `done` if the count
//! for the window just closed equals `k`. The window check happens before the
//! current step's loss is counted, so `done` is always false at `t = 0`.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::automaton::{Automaton, GenerationStats};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::grid::{Buffer, CellState, Grid, Shape};
use crate::palette::ColorOptions;
use crate::render::{Frame, Renderer};

/// Controller state for the current episode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeState {
    /// Zero-loss steps seen in the current window.
    pub flag: usize,
    pub done: bool,
    pub k: usize,
}

/// Result of one episodic step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub stats: GenerationStats,
    pub loss: f64,
    pub done: bool,
}

/// `|mean(visible) - mean(hidden)|` over the flattened buffers.
pub fn criterion(grid: &Grid) -> f64 {
    (grid.density(Buffer::Visible) - grid.density(Buffer::Hidden)).abs()
}

#[derive(Debug)]
pub struct EpisodeController {
    automaton: Automaton,
    config: Config,
    state: EpisodeState,
    rng: StdRng,
    renderer: Option<Renderer>,
}

impl EpisodeController {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let automaton = Automaton::new(config.shape, config.p, &mut rng)?;
        Ok(Self::assemble(automaton, config, rng))
    }

    /// Controller around an existing automaton. Later resets reuse its shape
    /// and seeding probability.
    pub fn from_automaton(automaton: Automaton, k: usize) -> Result<Self> {
        let config = Config {
            shape: automaton.shape(),
            p: automaton.p(),
            k,
            seed: None,
        };
        config.validate()?;
        Ok(Self::assemble(automaton, config, StdRng::from_os_rng()))
    }

    fn assemble(automaton: Automaton, config: Config, rng: StdRng) -> Self {
        EpisodeController {
            automaton,
            state: EpisodeState { flag: 0, done: false, k: config.k },
            config,
            rng,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn shape(&self) -> Shape {
        self.automaton.shape()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// Both buffers, (visible, hidden).
    pub fn grids(&self) -> (&[Vec<CellState>], &[Vec<CellState>]) {
        let grid = self.automaton.grid();
        (grid.visible(), grid.hidden())
    }

    /// Stability loss of the last advance.
    pub fn loss(&self) -> f64 {
        criterion(self.automaton.grid())
    }

    /// Advances one generation and updates the convergence window for step `t`.
    pub fn step(&mut self, t: usize) -> Step {
        let stats = self.automaton.advance();
        let loss = self.loss();
        let k = self.state.k;

        if t % k == 0 {
            self.state.done = self.state.flag == k;
            self.state.flag = 0;
            if self.state.done {
                log::debug!("episode converged at step {t} after {k} zero-loss steps");
            }
        }
        if loss == 0.0 {
            self.state.flag += 1;
        }

        Step { stats, loss, done: self.state.done }
    }

    /// Advances one generation without episode bookkeeping.
    pub fn advance(&mut self) -> GenerationStats {
        self.automaton.advance()
    }

    /// Starts a new episode on a freshly seeded automaton. `p` defaults to
    /// the configured seeding probability.
    pub fn reset(&mut self, p: Option<f64>) -> Result<&mut Self> {
        let p = p.unwrap_or(self.config.p);
        self.automaton = self.automaton.reset(p, &mut self.rng)?;
        self.state.flag = 0;
        self.state.done = false;
        log::debug!("episode reset: shape={} p={p}", self.automaton.shape());
        Ok(self)
    }

    /// Renders `buffer` through the configured renderer.
    pub fn render(
        &mut self,
        step: Option<usize>,
        caption: Option<&str>,
        buffer: Buffer,
        colors: &ColorOptions,
    ) -> Result<()> {
        let renderer = self.renderer.as_mut().ok_or(Error::RenderingUnavailable)?;
        let frame = Frame { cells: self.automaton.grid().buffer(buffer), step, caption };
        renderer.render(&frame, colors)
    }
}
