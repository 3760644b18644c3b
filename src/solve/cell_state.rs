use crate::board::Symbol;

use super::symbol_set::SymbolSet;

use self::CellState::{Filled, Open};

/// A solver cell: a placed symbol, or the candidates still allowed
#[derive(Clone, Debug)]
pub(crate) enum CellState {
    Filled(Symbol),
    Open(SymbolSet),
}

impl CellState {
    pub fn is_open(&self) -> bool {
        matches!(self, Open(_))
    }

    pub fn filled(&self) -> Option<Symbol> {
        match *self {
            Filled(symbol) => Some(symbol),
            Open(_) => None,
        }
    }

    pub fn open(&self) -> Option<&SymbolSet> {
        match self {
            Open(candidates) => Some(candidates),
            Filled(_) => None,
        }
    }

    pub fn open_mut(&mut self) -> Option<&mut SymbolSet> {
        match self {
            Open(candidates) => Some(candidates),
            Filled(_) => None,
        }
    }
}
