use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

const DEFAULT_BLOCK_SIZE: &str = "3";

#[derive(Clone)]
pub(crate) struct Options {
    input: PathBuf,
    block_width: usize,
    block_height: usize,
    validate_only: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            input: matches.value_of("input").unwrap().into(),
            block_width: matches
                .value_of("block_width")
                .unwrap()
                .parse()
                .expect("invalid block width"),
            block_height: matches
                .value_of("block_height")
                .unwrap()
                .parse()
                .expect("invalid block height"),
            validate_only: matches.is_present("validate"),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn block_width(&self) -> usize {
        self.block_width
    }

    pub fn block_height(&self) -> usize {
        self.block_height
    }

    pub fn validate_only(&self) -> bool {
        self.validate_only
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Rustoku")
        .help_message("Solve and validate sudoku boards")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .required(true)
                .help("read a board from a file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("block_width")
                .short("W")
                .long("block-width")
                .takes_value(true)
                .value_name("CELLS")
                .default_value(DEFAULT_BLOCK_SIZE)
                .help("width of one block"),
        )
        .arg(
            Arg::with_name("block_height")
                .short("H")
                .long("block-height")
                .takes_value(true)
                .value_name("CELLS")
                .default_value(DEFAULT_BLOCK_SIZE)
                .help("height of one block"),
        )
        .arg(
            Arg::with_name("validate")
                .long("validate")
                .help("validate the board without solving it"),
        )
}
