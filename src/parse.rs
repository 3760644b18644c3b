//! Parse boards from text
//!
//! The text form is the flat cell sequence in row-major order: alphabet
//! symbols for placed cells, `0` or `.` for blanks. Whitespace and the
//! grid decorations drawn by the board display (`|`, `+`, `-`) are
//! ignored, so a rendered board parses back with the same dimensions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::board::{Board, EMPTY};
use crate::error::{BoardFromFileError, ParseBoardError};

pub fn parse_board(
    s: &str,
    block_width: usize,
    block_height: usize,
) -> Result<Board, ParseBoardError> {
    let mut values = Vec::new();
    for (offset, character) in s.char_indices() {
        match character {
            '.' => values.push(EMPTY),
            '0'..='9' | 'A'..='C' => values.push(character),
            '|' | '+' | '-' => {}
            c if c.is_whitespace() => {}
            _ => return Err(ParseBoardError::UnexpectedCharacter { character, offset }),
        }
    }
    let board = Board::new(&values, block_width, block_height)?;
    Ok(board)
}

pub fn board_from_file<P: AsRef<Path>>(
    path: P,
    block_width: usize,
    block_height: usize,
) -> Result<Board, BoardFromFileError> {
    let mut file = File::open(path)?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)?;
    let board = parse_board(&buf, block_width, block_height)?;
    Ok(board)
}
