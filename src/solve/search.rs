use log::debug;

use crate::board::Symbol;

use super::Solver;

/// Guesses candidates of one cell on cloned solver states. The first
/// clone to reach a solved state is copied back into the parent, one
/// differing cell at a time; clones that fail are dropped.
pub(super) fn backtrack(solver: &mut Solver<'_>) -> bool {
    solver.used_search = true;
    debug!("backtracking (depth={})", solver.depth);
    let index = guess_cell(solver);
    let candidates: Vec<Symbol> = solver
        .markup
        .cell(index)
        .open()
        .expect("guess cell is open")
        .iter()
        .collect();
    for symbol in candidates {
        debug!(
            "guessing {} at cell {} (depth={})",
            symbol,
            index,
            solver.depth + 1
        );
        let mut branch = solver.clone();
        branch.depth += 1;
        let grid = branch.puzzle.grid();
        branch.markup.place(grid, index, symbol);
        if branch.solve() {
            adopt(solver, &branch);
            return true;
        }
        debug!("guess failed");
    }
    false
}

/// The first open cell with the fewest candidates, scanning in index
/// order. Two is as small as candidate sets get here (one-member sets
/// were spent as naked singles), so the scan stops early on a two.
fn guess_cell(solver: &Solver<'_>) -> usize {
    let mut best: Option<(usize, usize)> = None;
    for index in 0..solver.markup.cell_count() {
        if let Some(candidates) = solver.markup.cell(index).open() {
            let len = candidates.len();
            if best.map_or(true, |(_, best_len)| len < best_len) {
                best = Some((index, len));
                if len == 2 {
                    break;
                }
            }
        }
    }
    let (index, _) = best.expect("no open cells to guess");
    index
}

/// Copies every cell the solved branch filled back into the parent,
/// with normal candidate upkeep
fn adopt(solver: &mut Solver<'_>, branch: &Solver<'_>) {
    let grid = solver.puzzle.grid();
    for index in 0..solver.markup.cell_count() {
        if solver.markup.cell(index).is_open() {
            let symbol = branch
                .markup
                .cell(index)
                .filled()
                .expect("solved branch has no open cells");
            solver.markup.place(grid, index, symbol);
        }
    }
}
