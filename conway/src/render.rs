//! Renderer variants consuming a read-only grid snapshot.

use std::fmt;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType, SetSize};
use crossterm::{execute, queue};

use crate::error::Result;
use crate::grid::{CellState, Shape};
use crate::palette::ColorOptions;

/// Minimum terminal width, in cells, when fitting the console to a grid.
const MIN_CONSOLE_COLS: usize = 32;

/// What a renderer receives: one borrowed buffer plus optional annotations.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub cells: &'a [Vec<CellState>],
    pub step: Option<usize>,
    pub caption: Option<&'a str>,
}

impl Frame<'_> {
    /// Text rendering: an optional `Steps:` line, an optional caption line,
    /// then one line of glyphs per grid row.
    pub fn to_text(&self, colors: &ColorOptions) -> String {
        let alive = colors.alive_glyph();
        let dead = colors.dead_glyph();
        let mut out = String::new();
        if let Some(step) = self.step {
            out.push_str(&format!("\tSteps: {step}\n"));
        }
        if let Some(caption) = self.caption {
            out.push('\t');
            out.push_str(caption);
            out.push('\n');
        }
        for row in self.cells {
            for cell in row {
                out.push_str(if cell.is_alive() { alive } else { dead });
            }
            out.push('\n');
        }
        out
    }
}

/// Closed set of rendering strategies, picked once at configuration time.
pub enum Renderer {
    /// Clears the terminal and redraws the frame on stdout.
    Console,
    /// Keeps every rendered frame in memory.
    Capture(Vec<String>),
    /// Hands the frame to a caller-supplied callback.
    Custom(Box<dyn FnMut(&Frame<'_>, &ColorOptions) + Send>),
}

impl Renderer {
    pub fn capture() -> Self {
        Renderer::Capture(Vec::new())
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: FnMut(&Frame<'_>, &ColorOptions) + Send + 'static,
    {
        Renderer::Custom(Box::new(f))
    }

    pub fn render(&mut self, frame: &Frame<'_>, colors: &ColorOptions) -> Result<()> {
        match self {
            Renderer::Console => {
                let text = frame.to_text(colors);
                let mut stdout = io::stdout().lock();
                queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
                for line in text.lines() {
                    queue!(stdout, Print(line), Print("\r\n"))?;
                }
                stdout.flush()?;
            }
            Renderer::Capture(frames) => frames.push(frame.to_text(colors)),
            Renderer::Custom(f) => f(frame, colors),
        }
        Ok(())
    }

    /// Frames kept by a `Capture` renderer; empty for the other variants.
    pub fn frames(&self) -> &[String] {
        match self {
            Renderer::Capture(frames) => frames.as_slice(),
            _ => &[],
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Console => f.write_str("Console"),
            Renderer::Capture(frames) => f.debug_tuple("Capture").field(&frames.len()).finish(),
            Renderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Resizes the terminal so a grid of `shape` fits, two columns per glyph.
pub fn resize_console(shape: Shape) -> Result<()> {
    let cols = shape.cols.max(MIN_CONSOLE_COLS) * 2;
    let rows = shape.rows + 3;
    let clamp = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    execute!(io::stdout(), SetSize(clamp(cols), clamp(rows)))?;
    Ok(())
}
