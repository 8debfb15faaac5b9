//! Fixed glyph tables for text rendering.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellColor {
    Blue,
    Red,
    Green,
    Purple,
    White,
    Black,
    Yellow,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GlyphShape {
    #[default]
    Circle,
    Square,
}

const CIRCLES: [&str; 7] = ["🔵", "🔴", "🟢", "🟣", "⚪", "⚫", "🟡"];
const SQUARES: [&str; 7] = ["🟦", "🟥", "🟩", "🟪", "⬜", "⬛", "🟨"];

impl CellColor {
    pub const ALL: [CellColor; 7] = [
        CellColor::Blue,
        CellColor::Red,
        CellColor::Green,
        CellColor::Purple,
        CellColor::White,
        CellColor::Black,
        CellColor::Yellow,
    ];

    /// Colors that stay visible on a dark terminal background.
    pub const VIVID: [CellColor; 6] = [
        CellColor::Blue,
        CellColor::Red,
        CellColor::Green,
        CellColor::Purple,
        CellColor::White,
        CellColor::Yellow,
    ];

    pub fn glyph(self, shape: GlyphShape) -> &'static str {
        let table = match shape {
            GlyphShape::Circle => &CIRCLES,
            GlyphShape::Square => &SQUARES,
        };
        table[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            CellColor::Blue => "blue",
            CellColor::Red => "red",
            CellColor::Green => "green",
            CellColor::Purple => "purple",
            CellColor::White => "white",
            CellColor::Black => "black",
            CellColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown cell color `{s}`"))
    }
}

impl FromStr for GlyphShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" | "round" => Ok(GlyphShape::Circle),
            "square" | "block" => Ok(GlyphShape::Square),
            other => Err(format!("unknown glyph shape `{other}`")),
        }
    }
}

/// Palette choice for one render call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ColorOptions {
    pub alive: CellColor,
    pub dead: CellColor,
    pub shape: GlyphShape,
}

impl Default for ColorOptions {
    fn default() -> Self {
        ColorOptions {
            alive: CellColor::Red,
            dead: CellColor::Black,
            shape: GlyphShape::Circle,
        }
    }
}

impl ColorOptions {
    pub fn alive_glyph(&self) -> &'static str {
        self.alive.glyph(self.shape)
    }

    pub fn dead_glyph(&self) -> &'static str {
        self.dead.glyph(self.shape)
    }
}
