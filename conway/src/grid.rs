use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::config::check_probability;
use crate::error::{Error, Result};
use crate::grid::CellState::{Alive, Dead};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// A shape is playable when neither side is empty and `rows + cols >= 6`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.rows + self.cols < 6 {
            return Err(Error::InvalidShape { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Selects one of the two generation buffers.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Buffer {
    /// The current generation.
    #[default]
    Visible,
    /// The generation before it, reused as scratch by the next advance.
    Hidden,
}

impl FromStr for Buffer {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "visible" | "root" => Ok(Buffer::Visible),
            "hidden" => Ok(Buffer::Hidden),
            other => Err(format!("unknown buffer `{other}`, expected `visible` or `hidden`")),
        }
    }
}

/// Two equally shaped cell buffers: `visible` holds the current generation,
/// `hidden` receives the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    shape: Shape,
    visible: Vec<Vec<CellState>>,
    hidden: Vec<Vec<CellState>>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(shape: Shape) -> Result<Self> {
        shape.validate()?;
        Ok(Grid {
            shape,
            visible: vec![vec![Dead; shape.cols]; shape.rows],
            hidden: vec![vec![Dead; shape.cols]; shape.rows],
        })
    }

    /// A grid whose visible cells are independently alive with probability `p`.
    pub fn seeded<R: Rng + ?Sized>(shape: Shape, p: f64, rng: &mut R) -> Result<Self> {
        check_probability(p)?;
        let mut grid = Grid::new(shape)?;
        for row in grid.visible.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(p) { Alive } else { Dead };
            }
        }
        Ok(grid)
    }

    /// Builds the visible buffer from text rows, `#` alive and `.` dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut grid = Grid::new(Shape::new(rows.len(), cols))?;
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidPattern(format!(
                    "row {row_index} has width {}, expected {cols}",
                    row.len()
                )));
            }
            for (col_index, byte) in row.bytes().enumerate() {
                grid.visible[row_index][col_index] = match byte {
                    b'#' => Alive,
                    b'.' => Dead,
                    other => {
                        return Err(Error::InvalidPattern(format!(
                            "unexpected `{}` at ({row_index}, {col_index})",
                            other as char
                        )))
                    }
                };
            }
        }
        Ok(grid)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn size(&self) -> usize {
        self.shape.size()
    }

    pub fn buffer(&self, buffer: Buffer) -> &[Vec<CellState>] {
        match buffer {
            Buffer::Visible => &self.visible,
            Buffer::Hidden => &self.hidden,
        }
    }

    pub fn visible(&self) -> &[Vec<CellState>] {
        &self.visible
    }

    pub fn hidden(&self) -> &[Vec<CellState>] {
        &self.hidden
    }

    /// State of a visible cell.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.visible[row][col]
    }

    /// Row `index` of the (visible, hidden) buffers.
    pub fn row(&self, index: usize) -> (&[CellState], &[CellState]) {
        (&self.visible[index], &self.hidden[index])
    }

    /// Row-major 0/1 copies of (visible, hidden).
    pub fn flatten(&self) -> (Vec<u8>, Vec<u8>) {
        let flat = |buffer: &[Vec<CellState>]| {
            buffer.iter().flatten().map(|cell| cell.as_u8()).collect::<Vec<_>>()
        };
        (flat(&self.visible), flat(&self.hidden))
    }

    pub fn alive(&self, buffer: Buffer) -> usize {
        self.buffer(buffer).iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of alive cells in `buffer`.
    pub fn density(&self, buffer: Buffer) -> f64 {
        self.alive(buffer) as f64 / self.size() as f64
    }

    pub(crate) fn set_hidden(&mut self, row: usize, col: usize, state: CellState) {
        self.hidden[row][col] = state;
    }

    /// Exchanges the buffers in place; the freshly written `hidden` becomes `visible`.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.visible, &mut self.hidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_dead_and_evenly_shaped() {
        let grid = Grid::new(Shape::new(4, 7)).unwrap();
        assert_eq!(grid.size(), 28);
        assert_eq!(grid.visible().len(), 4);
        assert_eq!(grid.hidden().len(), 4);
        assert!(grid.visible().iter().all(|row| row.len() == 7));
        assert!(grid.hidden().iter().all(|row| row.len() == 7));
        assert_eq!(grid.alive(Buffer::Visible), 0);
    }

    #[test]
    fn shape_minimum_is_enforced() {
        assert!(Grid::new(Shape::new(3, 3)).is_ok());
        assert!(Grid::new(Shape::new(1, 5)).is_ok());
        assert!(matches!(
            Grid::new(Shape::new(2, 3)),
            Err(Error::InvalidShape { rows: 2, cols: 3 })
        ));
        assert!(Grid::new(Shape::new(0, 10)).is_err());
    }

    #[test]
    fn seeding_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = Shape::new(6, 6);
        let empty = Grid::seeded(shape, 0.0, &mut rng).unwrap();
        assert_eq!(empty.alive(Buffer::Visible), 0);
        let full = Grid::seeded(shape, 1.0, &mut rng).unwrap();
        assert_eq!(full.alive(Buffer::Visible), 36);
        assert_eq!(full.alive(Buffer::Hidden), 0);
    }

    #[test]
    fn seeding_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = Grid::seeded(Shape::new(6, 6), 1.01, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidProbability(_)));
    }

    #[test]
    fn from_rows_reads_pattern() {
        let grid = Grid::from_rows(&["#..", "...", "..#"]).unwrap();
        assert_eq!(grid.shape(), Shape::new(3, 3));
        assert_eq!(grid.get(0, 0), Alive);
        assert_eq!(grid.get(2, 2), Alive);
        assert_eq!(grid.get(1, 1), Dead);
        assert_eq!(grid.alive(Buffer::Visible), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_and_unknown() {
        assert!(matches!(
            Grid::from_rows(&["#..", "..", "..."]),
            Err(Error::InvalidPattern(_))
        ));
        assert!(matches!(
            Grid::from_rows(&["#x.", "...", "..."]),
            Err(Error::InvalidPattern(_))
        ));
        assert!(matches!(Grid::from_rows(&[]), Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn swap_exchanges_whole_buffers() {
        let mut grid = Grid::from_rows(&["#..", "...", "..."]).unwrap();
        grid.set_hidden(1, 1, Alive);
        grid.swap();
        assert_eq!(grid.row(0).0, &[Dead, Dead, Dead]);
        assert_eq!(grid.row(0).1, &[Alive, Dead, Dead]);
        assert_eq!(grid.get(1, 1), Alive);
    }

    #[test]
    fn flatten_is_row_major() {
        let grid = Grid::from_rows(&["#...", "...#", "....", "...."]).unwrap();
        let (visible, hidden) = grid.flatten();
        assert_eq!(visible.len(), 16);
        assert_eq!(visible[0], 1);
        assert_eq!(visible[7], 1);
        assert_eq!(visible.iter().map(|&v| v as usize).sum::<usize>(), 2);
        assert!(hidden.iter().all(|&v| v == 0));
    }

    #[test]
    fn buffer_names_parse() {
        assert_eq!("visible".parse::<Buffer>(), Ok(Buffer::Visible));
        assert_eq!("root".parse::<Buffer>(), Ok(Buffer::Visible));
        assert_eq!("Hidden".parse::<Buffer>(), Ok(Buffer::Hidden));
        assert!("other".parse::<Buffer>().is_err());
    }
}
