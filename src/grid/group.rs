//! Rows, columns, and blocks of a board

use std::fmt;
use std::fmt::Debug;

use self::GroupKind::{Block, Col, Row};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKind {
    Row,
    Col,
    Block,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [Row, Col, Block];

    pub fn label(self) -> &'static str {
        match self {
            Row => "row",
            Col => "col",
            Block => "block",
        }
    }
}

/// A row, column, or block and its index within that family
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId {
    kind: GroupKind,
    index: usize,
}

impl GroupId {
    pub fn new(kind: GroupKind, index: usize) -> GroupId {
        GroupId { kind, index }
    }

    pub fn row(index: usize) -> GroupId {
        GroupId::new(Row, index)
    }

    pub fn col(index: usize) -> GroupId {
        GroupId::new(Col, index)
    }

    pub fn block(index: usize) -> GroupId {
        GroupId::new(Block, index)
    }

    pub fn kind(self) -> GroupKind {
        self.kind
    }

    /// The index of the group within its family
    pub fn index(self) -> usize {
        self.index
    }
}

impl Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.index)
    }
}
