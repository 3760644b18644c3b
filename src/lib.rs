//! Solve and validate square- and rectangular-block sudoku puzzles

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

pub mod board;
pub mod error;
pub mod grid;
pub mod parse;
pub mod solve;
pub mod validate;
