use ahash::AHashSet;

use crate::board::{Board, Symbol};
use crate::grid::Grid;

use super::cell_state::CellState;
use super::symbol_set::SymbolSet;

/// The mutable solving state: one `CellState` per cell plus failure
/// bookkeeping. A clone is a fully independent copy; the `Grid` and the
/// source board travel separately and are shared by every clone.
#[derive(Clone)]
pub(crate) struct Markup {
    cells: Vec<CellState>,
    open_count: usize,
    failed: AHashSet<usize>,
}

impl Markup {
    /// Computes candidates for every blank cell of `board`: the alphabet
    /// minus the symbols placed in the cell's row, column, and block.
    pub fn from_board(board: &Board) -> Markup {
        let grid = board.grid();
        let alphabet = board.alphabet();
        let mut open_count = 0;
        let mut failed = AHashSet::new();
        let cells = (0..board.cell_count())
            .map(|index| match board.get(index) {
                Some(symbol) => CellState::Filled(symbol),
                None => {
                    let mut candidates = SymbolSet::with_all(alphabet.len());
                    for &group in &grid.groups_of(index) {
                        for neighbor in grid.group_indices(group) {
                            if let Some(symbol) = board.get(neighbor) {
                                candidates.remove(symbol);
                            }
                        }
                    }
                    if candidates.is_empty() {
                        failed.insert(index);
                    }
                    open_count += 1;
                    CellState::Open(candidates)
                }
            })
            .collect();
        Markup {
            cells,
            open_count,
            failed,
        }
    }

    pub fn cell(&self, index: usize) -> &CellState {
        &self.cells[index]
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn failed(&self) -> impl Iterator<Item = usize> + '_ {
        self.failed.iter().copied()
    }

    pub fn record_failed(&mut self, index: usize) {
        self.failed.insert(index);
    }

    /// Solved means no open cells and no recorded contradictions
    pub fn is_solved(&self) -> bool {
        self.open_count == 0 && self.failed.is_empty()
    }

    /// Fills a cell and prunes its neighborhood
    pub fn place(&mut self, grid: Grid, index: usize, symbol: Symbol) {
        if self.cells[index].is_open() {
            self.open_count -= 1;
        }
        self.cells[index] = CellState::Filled(symbol);
        self.reduce(grid, symbol, index);
    }

    /// Removes `symbol` from the candidates of every other open cell
    /// sharing a row, column, or block with `origin`. A cell pruned to
    /// nothing is recorded as failed on the spot.
    fn reduce(&mut self, grid: Grid, symbol: Symbol, origin: usize) {
        for &group in &grid.groups_of(origin) {
            for index in grid.group_indices(group) {
                if index == origin {
                    continue;
                }
                if let Some(candidates) = self.cells[index].open_mut() {
                    if candidates.remove(symbol) && candidates.is_empty() {
                        self.failed.insert(index);
                    }
                }
            }
        }
    }
}
