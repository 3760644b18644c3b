//! Duplicate detection across rows, columns, and blocks

use ahash::{AHashMap, AHashSet};

use crate::board::Board;
use crate::error::InvalidAssignment;
use crate::grid::{GroupId, GroupKind};

/// Outcome of one full validation pass. A duplicated value marks every
/// cell holding it, first occurrence included, plus the group itself.
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    failed_indices: AHashSet<usize>,
    failed_groups: AHashSet<GroupId>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.failed_indices.is_empty()
    }

    pub fn failed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.failed_indices.iter().copied()
    }

    pub fn failed_groups(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.failed_groups.iter().copied()
    }

    pub fn is_cell_failed(&self, index: usize) -> bool {
        self.failed_indices.contains(&index)
    }

    pub fn is_group_failed(&self, group: GroupId) -> bool {
        self.failed_groups.contains(&group)
    }
}

/// Scans every group of every kind for duplicate placed values.
/// Blank cells contribute nothing.
pub fn check(board: &Board) -> ValidationResult {
    let mut result = ValidationResult::default();
    let grid = board.grid();
    for &kind in &GroupKind::ALL {
        for group in grid.groups(kind) {
            let mut seen: AHashMap<_, _> = AHashMap::new();
            let mut group_failed = false;
            for index in grid.group_indices(group) {
                let symbol = match board.get(index) {
                    Some(symbol) => symbol,
                    None => continue,
                };
                match seen.get(&symbol) {
                    Some(&first) => {
                        result.failed_indices.insert(first);
                        result.failed_indices.insert(index);
                        group_failed = true;
                    }
                    None => {
                        seen.insert(symbol, index);
                    }
                }
            }
            if group_failed {
                result.failed_groups.insert(group);
            }
        }
    }
    result
}

/// A board paired with its latest validation result
pub struct Validator {
    board: Board,
    result: ValidationResult,
}

impl Validator {
    pub fn new(board: Board) -> Validator {
        let result = check(&board);
        Validator { board, result }
    }

    /// Recomputes the result from scratch
    pub fn validate(&mut self) -> &ValidationResult {
        self.result = check(&self.board);
        &self.result
    }

    /// `true` while no group holds a duplicate
    pub fn status(&self) -> bool {
        self.result.is_valid()
    }

    /// Places or clears a cell and re-validates. The result is refreshed
    /// even when the assignment is rejected.
    pub fn set(&mut self, index: usize, value: char) -> Result<(), InvalidAssignment> {
        let outcome = self.board.set(index, value);
        self.validate();
        outcome
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutations made through the returned reference are not observed
    /// until the next `validate` or `set` call.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::Validator;
    use crate::board::{Board, EMPTY};
    use crate::grid::GroupId;

    fn classic_blank() -> Board {
        Board::empty(3, 3).unwrap()
    }

    #[test]
    fn duplicate_marks_all_occurrences_and_the_group() {
        let mut board = classic_blank();
        board.set(0, '5').unwrap();
        board.set(1, '5').unwrap();
        let validator = Validator::new(board);
        let mut failed: Vec<_> = validator.result().failed_indices().collect();
        failed.sort_unstable();
        assert_eq!(vec![0, 1], failed);
        assert!(validator.result().is_group_failed(GroupId::row(0)));
        assert!(validator.result().is_group_failed(GroupId::block(0)));
        assert!(!validator.result().is_group_failed(GroupId::col(0)));
        assert!(!validator.status());
    }

    #[test]
    fn single_occurrence_is_never_flagged() {
        let mut board = classic_blank();
        board.set(0, '5').unwrap();
        board.set(10, '5').unwrap(); // same block, different row and col
        board.set(2, '7').unwrap();
        let validator = Validator::new(board);
        let mut failed: Vec<_> = validator.result().failed_indices().collect();
        failed.sort_unstable();
        assert_eq!(vec![0, 10], failed);
        assert!(!validator.result().is_cell_failed(2));
    }

    #[test]
    fn triple_occurrence_marks_every_index() {
        let mut board = classic_blank();
        for &index in &[3, 4, 5] {
            board.set(index, '1').unwrap();
        }
        let validator = Validator::new(board);
        let mut failed: Vec<_> = validator.result().failed_indices().collect();
        failed.sort_unstable();
        assert_eq!(vec![3, 4, 5], failed);
    }

    #[test]
    fn column_duplicates_are_found() {
        let mut board = classic_blank();
        board.set(4, '9').unwrap();
        board.set(76, '9').unwrap(); // rows 0 and 8, both col 4
        let validator = Validator::new(board);
        assert!(validator.result().is_group_failed(GroupId::col(4)));
        assert!(!validator.result().is_group_failed(GroupId::row(0)));
    }

    #[test]
    fn set_revalidates_even_when_rejected() {
        let mut validator = Validator::new(classic_blank());
        validator.board_mut().set(0, '5').unwrap();
        validator.board_mut().set(1, '5').unwrap();
        // direct board mutations are not seen yet
        assert!(validator.status());
        assert!(validator.set(81, '5').is_err());
        // the rejected call still triggered a fresh validation
        assert!(!validator.status());
        assert!(validator.result().is_cell_failed(0));
    }

    #[test]
    fn clearing_a_duplicate_restores_validity() {
        let mut validator = Validator::new(classic_blank());
        validator.set(0, '5').unwrap();
        validator.set(1, '5').unwrap();
        assert!(!validator.status());
        validator.set(1, EMPTY).unwrap();
        assert!(validator.status());
        assert_eq!(0, validator.result().failed_groups().count());
    }
}
