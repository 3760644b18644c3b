//! Solve boards by candidate propagation and backtracking search
//!
//! Propagation alternates two rules until neither places anything: a
//! *naked single* fills a cell whose candidate set has one member left,
//! a *hidden single* fills a cell holding the only remaining candidate
//! for some value in one of its groups. When both stall the solver
//! guesses: it clones its whole state, commits one candidate in the
//! clone, and recurses. Contradictions stay recorded state and never
//! cross the solver boundary as errors.

mod cell_state;
mod markup;
mod search;
mod symbol_set;

use log::debug;

use crate::board::{Board, Symbol, EMPTY};
use crate::error::InvalidAssignment;
use crate::validate;

use self::markup::Markup;

#[derive(Clone)]
pub struct Solver<'a> {
    puzzle: &'a Board,
    markup: Markup,
    start_indices: Vec<usize>,
    depth: u32,
    used_search: bool,
}

impl<'a> Solver<'a> {
    /// Wraps a board without touching it; the board stays the immutable
    /// record of the given cells. Duplicates among the givens surface as
    /// recorded failures, so `solve` on such a board returns `false`.
    pub fn new(puzzle: &'a Board) -> Solver<'a> {
        let mut markup = Markup::from_board(puzzle);
        for index in validate::check(puzzle).failed_indices() {
            markup.record_failed(index);
        }
        let start_indices = (0..puzzle.cell_count())
            .filter(|&index| !puzzle.is_blank(index))
            .collect();
        Solver {
            puzzle,
            markup,
            start_indices,
            depth: 0,
            used_search: false,
        }
    }

    /// Runs propagation and search to completion. `false` means this
    /// state has a contradiction or exhausted every guess; the puzzle
    /// itself may still be well-formed (check the validator to tell).
    pub fn solve(&mut self) -> bool {
        while self.markup.open_count() > 0 {
            if self.markup.has_failures() {
                return false;
            }
            let placed = self.place_naked_singles();
            if placed > 0 {
                debug!("placed {} naked singles", placed);
                continue;
            }
            let placed = self.place_hidden_singles();
            if placed > 0 {
                debug!("placed {} hidden singles", placed);
                continue;
            }
            if !search::backtrack(self) {
                return false;
            }
        }
        self.markup.is_solved()
    }

    /// Fills every open cell whose candidate set is down to one member
    fn place_naked_singles(&mut self) -> usize {
        let grid = self.puzzle.grid();
        let mut placed = 0;
        for index in 0..self.markup.cell_count() {
            let single = self
                .markup
                .cell(index)
                .open()
                .and_then(|candidates| candidates.single_value());
            if let Some(symbol) = single {
                self.markup.place(grid, index, symbol);
                placed += 1;
            }
        }
        placed
    }

    /// Fills a cell when one of its groups admits a candidate value in
    /// that cell alone
    fn place_hidden_singles(&mut self) -> usize {
        let grid = self.puzzle.grid();
        let mut placed = 0;
        for index in 0..self.markup.cell_count() {
            let candidates: Vec<Symbol> = match self.markup.cell(index).open() {
                Some(candidates) => candidates.iter().collect(),
                None => continue,
            };
            'candidates: for symbol in candidates {
                for &group in &grid.groups_of(index) {
                    let holders = grid
                        .group_indices(group)
                        .filter(|&other| {
                            self.markup
                                .cell(other)
                                .open()
                                .map_or(false, |candidates| candidates.contains(symbol))
                        })
                        .count();
                    if holders == 1 {
                        self.markup.place(grid, index, symbol);
                        placed += 1;
                        break 'candidates;
                    }
                }
            }
        }
        placed
    }

    /// Places a value from outside the solving loop, with full candidate
    /// upkeep. Only alphabet symbols are accepted here; clearing cells
    /// is what `reset` is for.
    pub fn set(&mut self, index: usize, value: char) -> Result<(), InvalidAssignment> {
        if index >= self.markup.cell_count() {
            return Err(InvalidAssignment::IndexOutOfRange {
                index,
                cell_count: self.markup.cell_count(),
            });
        }
        let symbol = self
            .puzzle
            .alphabet()
            .lookup(value)
            .ok_or(InvalidAssignment::ValueNotAllowed { value })?;
        self.markup.place(self.puzzle.grid(), index, symbol);
        Ok(())
    }

    /// Returns every non-start cell to blank and recomputes candidates
    pub fn reset(&mut self) {
        self.markup = Markup::from_board(self.puzzle);
        for index in validate::check(self.puzzle).failed_indices() {
            self.markup.record_failed(index);
        }
        self.used_search = false;
    }

    /// Solved and contradiction-free
    pub fn is_solved(&self) -> bool {
        self.markup.is_solved()
    }

    /// Whether the last `solve` had to fall back to backtracking
    pub fn used_search(&self) -> bool {
        self.used_search
    }

    pub fn board(&self) -> &'a Board {
        self.puzzle
    }

    /// Cells given in the original puzzle, in ascending order
    pub fn start_indices(&self) -> &[usize] {
        &self.start_indices
    }

    /// Cells whose candidate set was pruned to nothing
    pub fn failed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.markup.failed()
    }

    /// Flat view of the working state, `EMPTY` for open cells.
    /// Candidate sets are never exposed.
    pub fn values(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.markup.cell_count()).map(move |index| {
            self.markup
                .cell(index)
                .filled()
                .map_or(EMPTY, Symbol::as_char)
        })
    }

    /// The working state as a plain board
    pub fn to_board(&self) -> Board {
        let values: Vec<char> = self.values().collect();
        let grid = self.puzzle.grid();
        Board::new(&values, grid.block_width(), grid.block_height())
            .expect("solver state is a well-formed board")
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use crate::board::{Board, EMPTY};

    #[test]
    fn naked_single_fills_the_last_gap() {
        let values: Vec<char> = "1230341221434321".chars().collect();
        let board = Board::new(&values, 2, 2).unwrap();
        let mut solver = Solver::new(&board);
        assert_eq!(1, solver.place_naked_singles());
        assert!(solver.is_solved());
    }

    #[test]
    fn hidden_single_fires_when_naked_cannot() {
        let mut board = Board::empty(3, 3).unwrap();
        // '1' is excluded from every cell of block 0 except cell 0, but
        // cell 0 still has a wide-open candidate set
        board.set(12, '1').unwrap(); // row 1
        board.set(24, '1').unwrap(); // row 2
        board.set(28, '1').unwrap(); // col 1
        board.set(38, '1').unwrap(); // col 2
        let mut solver = Solver::new(&board);
        assert_eq!(0, solver.place_naked_singles());
        assert!(solver.place_hidden_singles() >= 1);
        assert_eq!(Some('1'), solver.values().next());
    }

    #[test]
    fn duplicate_givens_fail_immediately() {
        let mut board = Board::empty(3, 3).unwrap();
        board.set(0, '5').unwrap();
        board.set(1, '5').unwrap();
        let mut solver = Solver::new(&board);
        assert!(!solver.solve());
        assert!(solver.failed_indices().count() > 0);
    }

    #[test]
    fn set_validates_and_feeds_candidates() {
        let board = Board::empty(2, 2).unwrap();
        let mut solver = Solver::new(&board);
        assert!(solver.set(16, '1').is_err());
        assert!(solver.set(0, '5').is_err());
        assert!(solver.set(0, EMPTY).is_err());
        solver.set(0, '1').unwrap();
        assert_eq!(Some('1'), solver.values().next());
        assert!(solver.solve());
        assert!(solver.is_solved());
    }

    #[test]
    fn reset_restores_the_givens() {
        let mut board = Board::empty(2, 2).unwrap();
        board.set(0, '1').unwrap();
        let board = board;
        let mut solver = Solver::new(&board);
        assert!(solver.solve());
        assert_eq!(0, solver.values().filter(|&v| v == EMPTY).count());
        solver.reset();
        let values: String = solver.values().collect();
        assert_eq!("1000000000000000", values);
        assert_eq!(&[0_usize][..], solver.start_indices());
        assert!(!solver.used_search());
    }
}
