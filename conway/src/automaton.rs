//! Generation advance.
//!
//! * A live cell dies if it has fewer than two live neighbors.
//! * A live cell with two or three live neighbors lives on to the next generation.
//! * A live cell with more than three live neighbors dies.
//! * A dead cell will be brought back to live if it has exactly three live neighbors.

use rand::Rng;

use crate::error::Result;
use crate::grid::CellState::{Alive, Dead};
use crate::grid::{Buffer, CellState, Grid, Shape};
use crate::neighbors;

/// Which rule branch decided a cell's next state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    Born,
    Killed,
    Survived,
}

/// Per-generation transition counts. `born + killed + survived` always equals
/// the grid size.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct GenerationStats {
    pub born: usize,
    pub killed: usize,
    pub survived: usize,
}

impl GenerationStats {
    pub fn record(&mut self, transition: Transition) {
        match transition {
            Transition::Born => self.born += 1,
            Transition::Killed => self.killed += 1,
            Transition::Survived => self.survived += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.born + self.killed + self.survived
    }
}

/// Next state of a cell given its current state and alive neighbor count.
///
/// Branches are tried in order: out of the 2..=3 band kills (already dead
/// cells included), exactly three on a dead cell gives birth, anything else
/// keeps the current state.
pub fn rule(state: CellState, alive_neighbors: u8) -> (CellState, Transition) {
    match (state, alive_neighbors) {
        (_, n) if !(2..=3).contains(&n) => (Dead, Transition::Killed),
        (Dead, 3) => (Alive, Transition::Born),
        (state, _) => (state, Transition::Survived),
    }
}

/// A double-buffered automaton on a toroidal grid.
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    p: f64,
}

impl Automaton {
    /// Seeds a new automaton with per-cell alive probability `p`.
    pub fn new<R: Rng + ?Sized>(shape: Shape, p: f64, rng: &mut R) -> Result<Self> {
        let grid = Grid::seeded(shape, p, rng)?;
        Ok(Automaton { grid, p })
    }

    /// Wraps an existing grid, e.g. one built from a text pattern.
    pub fn from_grid(grid: Grid) -> Self {
        let p = grid.density(Buffer::Visible);
        Automaton { grid, p }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shape(&self) -> Shape {
        self.grid.shape()
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Seeding probability this automaton was created with.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell reads its neighbors from `visible` and writes its next
    /// state to `hidden`; the buffers are swapped once all cells are done.
    pub fn advance(&mut self) -> GenerationStats {
        let shape = self.grid.shape();
        let mut stats = GenerationStats::default();

        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let alive = neighbors::scan(row, col, &self.grid).alive_count;
                let (next, transition) = rule(self.grid.get(row, col), alive);
                self.grid.set_hidden(row, col, next);
                stats.record(transition);
            }
        }

        self.grid.swap();
        log::trace!(
            "generation advanced: born={} killed={} survived={}",
            stats.born,
            stats.killed,
            stats.survived
        );
        stats
    }

    /// A freshly seeded automaton of the same shape.
    pub fn reset<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> Result<Self> {
        Automaton::new(self.shape(), p, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pattern(rows: &[&str]) -> Automaton {
        Automaton::from_grid(Grid::from_rows(rows).unwrap())
    }

    #[test]
    fn rule_branches() {
        assert_eq!(rule(Alive, 1), (Dead, Transition::Killed));
        assert_eq!(rule(Alive, 4), (Dead, Transition::Killed));
        assert_eq!(rule(Dead, 0), (Dead, Transition::Killed));
        assert_eq!(rule(Dead, 3), (Alive, Transition::Born));
        assert_eq!(rule(Alive, 3), (Alive, Transition::Survived));
        assert_eq!(rule(Alive, 2), (Alive, Transition::Survived));
        assert_eq!(rule(Dead, 2), (Dead, Transition::Survived));
    }

    #[test]
    fn all_dead_grid_kills_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut automaton = Automaton::new(Shape::new(6, 6), 0.0, &mut rng).unwrap();
        let stats = automaton.advance();
        assert_eq!(stats, GenerationStats { born: 0, killed: 36, survived: 0 });
        assert_eq!(automaton.grid().alive(Buffer::Visible), 0);
    }

    #[test]
    fn block_is_still_life() {
        let mut automaton = pattern(&[
            "......",
            "......",
            "..##..",
            "..##..",
            "......",
            "......",
        ]);
        let before = automaton.grid().visible().to_vec();
        let stats = automaton.advance();
        assert_eq!(automaton.grid().visible(), &before[..]);
        // 4 block cells plus the 8 edge-adjacent dead cells with two neighbors
        assert_eq!(stats, GenerationStats { born: 0, killed: 24, survived: 12 });
    }

    #[test]
    fn blinker_oscillates() {
        let mut automaton = pattern(&[".....", ".....", ".###.", ".....", "....."]);
        let stats = automaton.advance();
        assert_eq!(stats.born, 2);
        assert_eq!(stats.total(), 25);
        let expected = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
        assert_eq!(automaton.grid().visible(), expected.visible());

        automaton.advance();
        let horizontal = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
        assert_eq!(automaton.grid().visible(), horizontal.visible());
    }

    #[test]
    fn previous_generation_moves_to_hidden() {
        let mut automaton = pattern(&[".....", ".....", ".###.", ".....", "....."]);
        let before = automaton.grid().visible().to_vec();
        automaton.advance();
        assert_eq!(automaton.grid().hidden(), &before[..]);
    }

    #[test]
    fn advance_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = Automaton::new(Shape::new(12, 9), 0.4, &mut rng).unwrap();
        let mut b = a.clone();
        for _ in 0..5 {
            assert_eq!(a.advance(), b.advance());
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn conservation_over_random_runs() {
        let mut rng = StdRng::seed_from_u64(3);
        for (rows, cols) in [(3, 3), (6, 6), (7, 13), (1, 8)] {
            let mut automaton = Automaton::new(Shape::new(rows, cols), 0.5, &mut rng).unwrap();
            for _ in 0..10 {
                assert_eq!(automaton.advance().total(), rows * cols);
            }
        }
    }

    #[test]
    fn glider_wraps_around_torus() {
        let mut automaton = pattern(&[".#....", "..#...", "###...", "......", "......", "......"]);
        // a glider returns to its shape shifted by (1, 1) every 4 generations
        for _ in 0..24 {
            automaton.advance();
        }
        let start = Grid::from_rows(&[".#....", "..#...", "###...", "......", "......", "......"]).unwrap();
        assert_eq!(automaton.grid().visible(), start.visible());
    }

    #[test]
    fn reset_keeps_shape_and_validates() {
        let mut rng = StdRng::seed_from_u64(5);
        let automaton = Automaton::new(Shape::new(4, 8), 0.3, &mut rng).unwrap();
        let fresh = automaton.reset(1.0, &mut rng).unwrap();
        assert_eq!(fresh.shape(), Shape::new(4, 8));
        assert_eq!(fresh.grid().alive(Buffer::Visible), 32);
        assert!(matches!(automaton.reset(-0.5, &mut rng), Err(Error::InvalidProbability(_))));
    }
}
