//! Command-line boundary for the kumiko solver.
//!
//! Takes an 81-digit puzzle line (`0` for unknown cells), validates it,
//! and prints the line with every cell propagation could determine
//! filled in. Validation failures go to stderr with a non-zero exit
//! status; an incompletely solved puzzle is not a failure.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kumiko_core::parse_and_validate;
use kumiko_solver::{DEFAULT_MAX_ROUNDS, Outcome, Solver};
use log::{debug, info};

#[derive(Debug, Parser)]
#[command(version, about, max_term_width = 100)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a puzzle line and fill in what propagation can determine.
    Solve {
        /// 81 digits in row-major order, 0 for unknown cells.
        line: String,
        /// Maximum propagation rounds before returning the grid as-is.
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },
    /// Produce a hint for a partially filled puzzle.
    Hint {
        /// 81 digits in row-major order, 0 for unknown cells.
        line: String,
    },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Solve { line, max_rounds } => solve(&line, max_rounds),
        Command::Hint { .. } => {
            eprintln!("hint is not yet implemented");
            ExitCode::FAILURE
        }
    }
}

fn solve(line: &str, max_rounds: usize) -> ExitCode {
    let mut grid = match parse_and_validate(line) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = Solver::new(max_rounds).solve(&mut grid);
    match outcome {
        Outcome::Solved { rounds } => info!("solved in {rounds} rounds"),
        Outcome::Partial { rounds, placed } => {
            info!("placed {placed} cells in {rounds} rounds, then stalled");
        }
        Outcome::Stuck => debug!("no cell could be determined"),
    }

    println!("{grid}");
    ExitCode::SUCCESS
}
