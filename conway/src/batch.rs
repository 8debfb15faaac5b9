use rayon::prelude::*;

use crate::automaton::{Automaton, GenerationStats};

/// Independent automata advanced together. Members share nothing, so a
/// batch advance runs one member per worker.
#[derive(Debug, Clone, Default)]
pub struct CellBatch {
    cells: Vec<Automaton>,
}

impl CellBatch {
    pub fn new(cells: Vec<Automaton>) -> Self {
        CellBatch { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Automaton> {
        self.cells.get(index)
    }

    /// Looks a member up by its id, `cell_<index>`.
    pub fn get_by_id(&self, id: &str) -> Option<&Automaton> {
        let index = id.strip_prefix("cell_")?.parse().ok()?;
        self.get(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.cells.len()).map(|i| format!("cell_{i}"))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Automaton> {
        self.cells.iter()
    }

    /// Advances every member one generation; stats come back in member order.
    pub fn advance_all(&mut self) -> Vec<GenerationStats> {
        self.cells.par_iter_mut().map(Automaton::advance).collect()
    }
}

impl<'a> IntoIterator for &'a CellBatch {
    type Item = &'a Automaton;
    type IntoIter = std::slice::Iter<'a, Automaton>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Automaton> for CellBatch {
    fn from_iter<I: IntoIterator<Item = Automaton>>(iter: I) -> Self {
        CellBatch::new(iter.into_iter().collect())
    }
}
