//! Command-line harness for the numtrack sudoku solver.
//!
//! Loads a numbered puzzle from the puzzle directory, prints it, solves it,
//! and prints the result. A repeat count reruns the solver on a fresh copy of
//! the puzzle each time, which is handy for rough benchmarking; per-run
//! timing and search statistics go to the log (enable with `RUST_LOG=debug`).

use std::{process, time::Instant};

use clap::Parser;
use log::{debug, info};
use numtrack_solver::BacktrackSolver;

use crate::loader::PuzzleLibrary;

mod loader;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Identifier of the puzzle to solve; resolves to `<puzzle-dir>/<id>.csv`.
    puzzle: u32,

    /// Number of solver runs; the puzzle is reloaded between runs.
    #[arg(short = 'n', long = "runs", value_name = "COUNT", default_value_t = 1)]
    runs: usize,

    /// Directory containing the puzzle files.
    #[arg(long, value_name = "DIR", default_value = "puzzles")]
    puzzle_dir: String,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.runs == 0 {
        eprintln!("--runs must be at least 1");
        process::exit(1);
    }

    let mut library = PuzzleLibrary::new(&args.puzzle_dir);
    let path = library.path_for(args.puzzle);
    if !path.exists() {
        eprintln!("puzzle {} does not exist", args.puzzle);
        process::exit(1);
    }

    let mut grid = match library.load(args.puzzle) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("failed to load puzzle {}: {err}", args.puzzle);
            process::exit(1);
        }
    };

    println!("{grid}");
    println!();

    info!("solving puzzle {} ({} run(s))", args.puzzle, args.runs);
    let solver = BacktrackSolver::new();
    let mut solved = false;
    for run in 0..args.runs {
        if run > 0 {
            // Reload the initial state; the previous run left the grid
            // solved (or restored, when unsatisfiable). Cached, so this is a
            // copy rather than a file read.
            grid = match library.load(args.puzzle) {
                Ok(grid) => grid,
                Err(err) => {
                    eprintln!("failed to reload puzzle {}: {err}", args.puzzle);
                    process::exit(1);
                }
            };
        }
        let start = Instant::now();
        let (run_solved, stats) = solver.solve(&mut grid);
        debug!(
            "run {}: solved={} placements={} backtracks={} elapsed={:.2?}",
            run + 1,
            run_solved,
            stats.placements(),
            stats.backtracks(),
            start.elapsed(),
        );
        solved = run_solved;
    }
    info!("done solving");

    println!();
    if solved {
        println!("{grid}");
    } else {
        println!("no solution");
    }
}
