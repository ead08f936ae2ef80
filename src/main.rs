//! `mtree` - runs a command script from stdin against an M-way tree of
//! integer keys and prints the results to stdout.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use mwaytree::driver;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match driver::run::<i64, _, _>(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
