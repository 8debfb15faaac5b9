//! Conway's Game of Life on a toroidal grid, with an episode controller that
//! watches for convergence so callers can reset stable runs.
//!
//! ```no_run
//! use conway::{Config, EpisodeController};
//!
//! let mut env = EpisodeController::new(Config::default().with_shape(32, 64))?;
//! let mut t = 0;
//! loop {
//!     let step = env.step(t);
//!     if step.done {
//!         env.reset(Some(0.4))?;
//!     }
//!     t += 1;
//! #   if t > 100 { break; }
//! }
//! # Ok::<(), conway::Error>(())
//! ```

pub mod automaton;
pub mod batch;
pub mod config;
pub mod env;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod palette;
pub mod render;

pub use automaton::{Automaton, GenerationStats, Transition};
pub use batch::CellBatch;
pub use config::Config;
pub use env::{criterion, EpisodeController, EpisodeState, Step};
pub use error::{Error, Result};
pub use grid::{Buffer, CellState, Grid, Shape};
pub use neighbors::{scan, Neighbor, NeighborReport};
pub use palette::{CellColor, ColorOptions, GlyphShape};
pub use render::{resize_console, Frame, Renderer};
