//! Toroidal neighborhood scan.
//!
//! Every cell has exactly eight neighbors: coordinates past an edge wrap to
//! the opposite edge. Scans read the visible buffer only, so all cells of a
//! generation observe the same prior snapshot.

use crate::grid::{CellState, Grid};

/// Row-major offsets of the Moore neighborhood, centre excluded.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub state: CellState,
    /// Wrapped `(row, col)` of the neighbor.
    pub loc: (usize, usize),
}

/// The eight neighbors of one coordinate and how many of them are alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborReport {
    pub neighbors: [Neighbor; 8],
    pub alive_count: u8,
}

impl NeighborReport {
    pub fn alive_cells(&self) -> impl Iterator<Item = &Neighbor> {
        self.neighbors.iter().filter(|n| n.state.is_alive())
    }

    pub fn dead_cells(&self) -> impl Iterator<Item = &Neighbor> {
        self.neighbors.iter().filter(|n| !n.state.is_alive())
    }
}

/// Scans the neighborhood of `(row, col)`.
///
/// Callers must pass a coordinate inside the grid.
pub fn scan(row: usize, col: usize, grid: &Grid) -> NeighborReport {
    let shape = grid.shape();
    let mut alive_count = 0;
    let neighbors = OFFSETS.map(|(dr, dc)| {
        let loc = (wrap(row, dr, shape.rows), wrap(col, dc, shape.cols));
        let state = grid.get(loc.0, loc.1);
        alive_count += state.as_u8();
        Neighbor { state, loc }
    });
    NeighborReport { neighbors, alive_count }
}

fn wrap(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_reports_eight_neighbors() {
        let grid = Grid::from_rows(&["....", "....", "....", "...."]).unwrap();
        let report = scan(1, 1, &grid);
        assert_eq!(report.neighbors.len(), 8);
        assert_eq!(report.alive_count, 0);
        assert_eq!(report.dead_cells().count(), 8);
    }

    #[test]
    fn corner_wraps_to_opposite_corner() {
        let grid = Grid::from_rows(&["...", "...", "..#"]).unwrap();
        let report = scan(0, 0, &grid);
        assert_eq!(report.alive_count, 1);
        let alive: Vec<_> = report.alive_cells().map(|n| n.loc).collect();
        assert_eq!(alive, vec![(2, 2)]);
        assert_eq!(report.neighbors[0].loc, (2, 2));
    }

    #[test]
    fn wrapped_locations_stay_in_bounds() {
        let grid = Grid::from_rows(&["#....", ".....", "....."]).unwrap();
        let report = scan(2, 4, &grid);
        for neighbor in &report.neighbors {
            assert!(neighbor.loc.0 < 3 && neighbor.loc.1 < 5);
        }
        // (2, 4) + (1, 1) wraps to (0, 0)
        assert_eq!(report.neighbors[7].loc, (0, 0));
        assert_eq!(report.alive_count, 1);
    }

    #[test]
    fn counts_full_neighborhood() {
        let grid = Grid::from_rows(&["###", "###", "###"]).unwrap();
        assert_eq!(scan(1, 1, &grid).alive_count, 8);
    }

    #[test]
    fn reads_only_visible_buffer() {
        let mut grid = Grid::from_rows(&["...", "...", "..."]).unwrap();
        grid.set_hidden(0, 1, CellState::Alive);
        assert_eq!(scan(1, 1, &grid).alive_count, 0);
    }
}
