//! Index arithmetic for boards with configurable block dimensions
//!
//! A board is a flat sequence of `size²` cells. `Grid` converts between
//! flat cell indices and (row, column, block) coordinates and enumerates
//! the cell indices of every group, without ever touching cell contents.
//! It is `Copy` and carries no tables, so solver clones share it for free.

mod group;

pub use self::group::{GroupId, GroupKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    block_width: usize,
    block_height: usize,
    size: usize,
}

impl Grid {
    /// Dimensions must be non-zero; the alphabet limit is checked where
    /// boards are built.
    pub fn new(block_width: usize, block_height: usize) -> Grid {
        assert!(block_width > 0 && block_height > 0);
        Grid {
            block_width,
            block_height,
            size: block_width * block_height,
        }
    }

    pub fn block_width(self) -> usize {
        self.block_width
    }

    pub fn block_height(self) -> usize {
        self.block_height
    }

    /// Side length of the board, also the number of groups per kind
    pub fn size(self) -> usize {
        self.size
    }

    pub fn cell_count(self) -> usize {
        self.size * self.size
    }

    pub fn row_at(self, index: usize) -> usize {
        assert!(index < self.cell_count());
        index / self.size
    }

    pub fn col_at(self, index: usize) -> usize {
        assert!(index < self.cell_count());
        index % self.size
    }

    pub fn block_at(self, index: usize) -> usize {
        self.block_of(self.row_at(index), self.col_at(index))
    }

    /// Blocks are numbered row-major over `block_height` block-rows of
    /// `block_width` block-columns each. The block *width* strides
    /// columns while the block *height* strides block-rows; for
    /// non-square blocks the two must not be swapped.
    fn block_of(self, row: usize, col: usize) -> usize {
        col / self.block_width + self.block_height * (row / self.block_height)
    }

    pub fn index_in_row(self, row: usize, position: usize) -> usize {
        row * self.size + position
    }

    pub fn index_in_col(self, col: usize, position: usize) -> usize {
        position * self.size + col
    }

    pub fn index_in_block(self, block: usize, position: usize) -> usize {
        let block_row = block / self.block_height;
        let row_in_block = position / self.block_width;
        let row = block_row * self.block_height + row_in_block;

        let block_col = block % self.block_height;
        let col_in_block = position % self.block_width;
        let col = block_col * self.block_width + col_in_block;

        row * self.size + col
    }

    pub fn index_in(self, group: GroupId, position: usize) -> usize {
        match group.kind() {
            GroupKind::Row => self.index_in_row(group.index(), position),
            GroupKind::Col => self.index_in_col(group.index(), position),
            GroupKind::Block => self.index_in_block(group.index(), position),
        }
    }

    /// The three groups containing a cell, one per kind
    pub fn groups_of(self, index: usize) -> [GroupId; 3] {
        [
            GroupId::row(self.row_at(index)),
            GroupId::col(self.col_at(index)),
            GroupId::block(self.block_at(index)),
        ]
    }

    pub fn groups(self, kind: GroupKind) -> impl Iterator<Item = GroupId> {
        (0..self.size).map(move |index| GroupId::new(kind, index))
    }

    /// Cell indices of a group in position order
    pub fn group_indices(self, group: GroupId) -> impl Iterator<Item = usize> {
        (0..self.size).map(move |position| self.index_in(group, position))
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GroupId, GroupKind};

    #[test]
    fn row_col_block_of_classic() {
        let grid = Grid::new(3, 3);
        assert_eq!(0, grid.row_at(8));
        assert_eq!(1, grid.row_at(9));
        assert_eq!(4, grid.col_at(40));
        assert_eq!(0, grid.block_at(20));
        assert_eq!(4, grid.block_at(40));
        assert_eq!(8, grid.block_at(80));
    }

    #[test]
    fn block_of_rectangular() {
        // 3x2 blocks on a 6x6 board: two block-columns, three block-rows
        let grid = Grid::new(3, 2);
        assert_eq!(0, grid.block_at(2));
        assert_eq!(1, grid.block_at(3));
        assert_eq!(0, grid.block_at(8));
        assert_eq!(2, grid.block_at(12));
        assert_eq!(3, grid.block_at(17));
        assert_eq!(5, grid.block_at(35));
    }

    #[test]
    fn group_indices_cover_rectangular_block() {
        let grid = Grid::new(3, 2);
        let indices: Vec<_> = grid.group_indices(GroupId::block(1)).collect();
        assert_eq!(vec![3, 4, 5, 9, 10, 11], indices);
        let indices: Vec<_> = grid.group_indices(GroupId::col(4)).collect();
        assert_eq!(vec![4, 10, 16, 22, 28, 34], indices);
    }

    #[test]
    fn index_round_trips() {
        for &(block_width, block_height) in &[(1, 1), (2, 2), (3, 3), (2, 3), (3, 2), (4, 3)] {
            let grid = Grid::new(block_width, block_height);
            for index in 0..grid.cell_count() {
                for &kind in &GroupKind::ALL {
                    let group = match kind {
                        GroupKind::Row => GroupId::row(grid.row_at(index)),
                        GroupKind::Col => GroupId::col(grid.col_at(index)),
                        GroupKind::Block => GroupId::block(grid.block_at(index)),
                    };
                    let position = grid
                        .group_indices(group)
                        .position(|i| i == index)
                        .unwrap_or_else(|| panic!("{:?} misses cell {}", group, index));
                    assert_eq!(index, grid.index_in(group, position));
                }
            }
        }
    }

    #[test]
    fn groups_partition_the_board() {
        let grid = Grid::new(3, 2);
        for &kind in &GroupKind::ALL {
            let mut seen = vec![0; grid.cell_count()];
            for group in grid.groups(kind) {
                for index in grid.group_indices(group) {
                    seen[index] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1));
        }
    }
}
