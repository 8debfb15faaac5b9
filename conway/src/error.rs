//! Error types for automaton construction, episode control and rendering.

use thiserror::Error;

/// Errors surfaced by the automaton and the episode controller.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid shape below the minimum playable size.
    #[error("a grid must satisfy rows + cols >= 6 with no empty dimension, not {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// Seeding probability outside `[0, 1]`.
    #[error("seeding probability must lie in [0, 1], not {0}")]
    InvalidProbability(f64),

    /// Convergence window of zero steps.
    #[error("convergence window must be a positive number of steps, not {0}")]
    InvalidWindow(usize),

    /// Text pattern that cannot be turned into a grid.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// `render` was called on a controller built without a renderer.
    #[error("no renderer configured for this environment")]
    RenderingUnavailable,

    /// Renderer output failed.
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
