//! Construction parameters for an episode controller.

use crate::error::{Error, Result};
use crate::grid::Shape;

/// Seeding probability used when none is given: one alive cell in eight.
pub const DEFAULT_PROBABILITY: f64 = 0.125;

/// Default convergence window, in steps.
pub const DEFAULT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub shape: Shape,
    /// Per-cell probability of starting alive.
    pub p: f64,
    /// Convergence window length.
    pub k: usize,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shape: Shape::new(16, 32),
            p: DEFAULT_PROBABILITY,
            k: DEFAULT_WINDOW,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_shape(mut self, rows: usize, cols: usize) -> Self {
        self.shape = Shape::new(rows, cols);
        self
    }

    pub fn with_probability(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    pub fn with_window(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks shape, probability and window, in that order.
    pub fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        check_probability(self.p)?;
        if self.k == 0 {
            return Err(Error::InvalidWindow(self.k));
        }
        Ok(())
    }
}

pub(crate) fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidProbability(p))
    }
}
