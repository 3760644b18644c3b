use std::io;

use thiserror::Error;

/// The board cannot be built with the requested dimensions.
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigurationError {
    #[error("board has {found} cells, expected {expected}")]
    BadLength { found: usize, expected: usize },
    #[error("blocks of {block_width}x{block_height} need {size} symbols, only {max} exist")]
    AlphabetTooLarge {
        block_width: usize,
        block_height: usize,
        size: usize,
        max: usize,
    },
    #[error("block dimensions {block_width}x{block_height} are not allowed")]
    BadBlockSize {
        block_width: usize,
        block_height: usize,
    },
}

/// An input value is neither a symbol of the board's alphabet nor the
/// empty marker.
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[error("illegal symbol {symbol:?} at cell {index}")]
pub struct IllegalSymbolError {
    pub symbol: char,
    pub index: usize,
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum BuildBoardError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    IllegalSymbol(#[from] IllegalSymbolError),
}

/// A rejected `set` call. The board is left unchanged.
#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum InvalidAssignment {
    #[error("cell index {index} out of range for {cell_count} cells")]
    IndexOutOfRange { index: usize, cell_count: usize },
    #[error("value {value:?} is not in the alphabet")]
    ValueNotAllowed { value: char },
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseBoardError {
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
    #[error(transparent)]
    Build(#[from] BuildBoardError),
}

#[derive(Error, Debug)]
pub enum BoardFromFileError {
    #[error("error reading board file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseBoardError),
}
