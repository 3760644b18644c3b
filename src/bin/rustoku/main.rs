#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;

use rustoku::board::Board;
use rustoku::parse;
use rustoku::solve::Solver;
use rustoku::validate::Validator;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let board = parse::board_from_file(
        options.input(),
        options.block_width(),
        options.block_height(),
    )?;
    print!("{}", board);
    if options.validate_only() {
        report_validation(board);
    } else {
        solve_board(&board);
    }
    Ok(())
}

fn report_validation(board: Board) {
    let validator = Validator::new(board);
    if validator.status() {
        println!("Board is valid");
        return;
    }
    let result = validator.result();
    println!("Board is invalid");
    println!(
        "failed cells: {}",
        result.failed_indices().sorted().join(", ")
    );
    println!(
        "failed groups: {}",
        result
            .failed_groups()
            .sorted()
            .map(|group| format!("{:?}", group))
            .join(", ")
    );
}

fn solve_board(board: &Board) {
    if !Validator::new(board.clone()).status() {
        // an invalid board can never be solved; tell the two cases apart
        report_validation(board.clone());
        return;
    }
    let mut solver = Solver::new(board);
    if solver.solve() {
        print!("{}", solver.to_board());
        if solver.used_search() {
            println!("Solved with backtracking search");
        } else {
            println!("Solved by propagation alone");
        }
    } else {
        println!("Board is valid but could not be solved");
    }
}
