/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Amaze.

Amaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Amaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Amaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 7x9 maze with a reproducible layout, and display its solution:
//!
//! ```text
//! $ amaze generate -r 7 -c 9 --seed 4 --solve
//! ```
//!
//! Solve a maze stored in a file and print the result in JSON format:
//!
//! ```text
//! $ amaze solve maze.txt --json
//! ```
//!
//! Run the cellular automaton for 50 generations from a saved grid:
//!
//! ```text
//! $ amaze life glider.txt -g 50
//! ```

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::config::{
    COPYRIGHT_NOTICE, DEFAULT_COLS, DEFAULT_LIFE_COLS, DEFAULT_LIFE_ROWS, DEFAULT_ROWS,
};
use crate::generator;
use crate::grid::{CellType, Grid};
use crate::life::Life;
use crate::path::overlay_path;
use crate::saver::life::SaverLife;
use crate::saver::maze::SaverMaze;
use crate::solver::{self, Solution, SolveStatus};

/// Exit code for malformed input and I/O errors.
const EXIT_ERROR: u8 = 1;

/// Exit code when the maze has no solution.
const EXIT_UNREACHABLE: u8 = 2;

/// Generate and solve mazes, and run the Game of Life.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random maze
    Generate {
        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Number of columns
        #[arg(short, long, default_value_t = DEFAULT_COLS)]
        cols: usize,

        /// Place the entry and the exit at random boundary cells
        #[arg(long, default_value_t = false)]
        random_exit: bool,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,

        /// Save the maze to this file (JSON format if the name ends with `.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also solve the maze and display the path
        #[arg(long, default_value_t = false)]
        solve: bool,
    },

    /// Solve a maze stored in a file
    Solve {
        /// Maze file (JSON format if the name ends with `.json`)
        file: PathBuf,

        /// Print the solution in JSON format
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also display the distance of each cell from the entry
        #[arg(long, default_value_t = false)]
        distances: bool,
    },

    /// Run the cellular automaton
    Life {
        /// Initial grid. A random grid is used if not provided
        file: Option<PathBuf>,

        /// Number of rows of the random grid
        #[arg(short, long, default_value_t = DEFAULT_LIFE_ROWS)]
        rows: usize,

        /// Number of columns of the random grid
        #[arg(short, long, default_value_t = DEFAULT_LIFE_COLS)]
        cols: usize,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of generations
        #[arg(short, long, default_value_t = 100)]
        generations: usize,

        /// Save the last generation to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    match args.command {
        Command::Generate {
            rows,
            cols,
            random_exit,
            seed,
            output,
            solve,
        } => generate(rows, cols, random_exit, seed, output, solve),
        Command::Solve {
            file,
            json,
            distances,
        } => solve(file, json, distances),
        Command::Life {
            file,
            rows,
            cols,
            seed,
            generations,
            output,
        } => life(file, rows, cols, seed, generations, output),
    }
}

/// Return a seeded random number generator, or a random one.
fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            debug!("Seed = {s}");
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Generate, display, and optionally save and solve a maze.
fn generate(
    rows: usize,
    cols: usize,
    random_exit: bool,
    seed: Option<u64>,
    output: Option<PathBuf>,
    solve: bool,
) -> u8 {
    let mut rng: StdRng = new_rng(seed);
    let grid: Grid<CellType> = match generator::generate_maze(rows, cols, random_exit, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };

    if let Some(file) = output {
        if let Err(e) = SaverMaze::new(file.clone()).save_maze(&grid) {
            eprintln!("Error: cannot save the maze to {}: {e}", file.display());
            return EXIT_ERROR;
        }
        info!("Maze saved to {}", file.display());
    }

    if !solve {
        print!("{grid}");
        return 0;
    }
    match solver::solve_maze(&grid) {
        Ok(solution) => report(&grid, &solution, false),
        Err(e) => {
            print!("{grid}");
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Load and solve a maze.
fn solve(file: PathBuf, json: bool, distances: bool) -> u8 {
    let grid: Grid<CellType> = match SaverMaze::new(file.clone()).get_maze() {
        Ok(Some(g)) => g,
        Ok(None) => {
            eprintln!("Error: {}: no such file", file.display());
            return EXIT_ERROR;
        }
        Err(e) => {
            eprintln!("Error: {}: {e}", file.display());
            return EXIT_ERROR;
        }
    };

    let solution: Solution = match solver::solve_maze(&grid) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}: {e}", file.display());
            return EXIT_ERROR;
        }
    };

    if json {
        match serde_json::to_string_pretty(&solution) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return EXIT_ERROR;
            }
        }
        return exit_code(&solution);
    }
    report(&grid, &solution, distances)
}

/// Display the solution.
fn report(grid: &Grid<CellType>, solution: &Solution, distances: bool) -> u8 {
    print!("{}", overlay_path(grid, &solution.path));
    if distances {
        println!();
        print!("{}", solution.distances);
    }
    match solution.status {
        SolveStatus::Solved => println!(
            "Path from {} to {}: {} cells",
            solution.entry,
            solution.exit,
            solution.path.len()
        ),
        SolveStatus::Unreachable => println!(
            "The exit {} cannot be reached from {}",
            solution.exit, solution.entry
        ),
    }
    exit_code(solution)
}

fn exit_code(solution: &Solution) -> u8 {
    match solution.status {
        SolveStatus::Solved => 0,
        SolveStatus::Unreachable => EXIT_UNREACHABLE,
    }
}

/// Run the automaton until the grid stops changing or the maximum number of generations.
fn life(
    file: Option<PathBuf>,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    generations: usize,
    output: Option<PathBuf>,
) -> u8 {
    let mut life: Life = match file {
        Some(f) => match SaverLife::new(f.clone()).get_grid() {
            Ok(grid) => Life::from_grid(grid, Some(generations)),
            Err(e) => {
                eprintln!("Error: {}: {e}", f.display());
                return EXIT_ERROR;
            }
        },
        None => match Life::random(rows, cols, Some(generations), &mut new_rng(seed)) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error: {e}");
                return EXIT_ERROR;
            }
        },
    };

    while !life.is_max_generations_exceeded() {
        life.step();
        if !life.is_changing() {
            info!("Stable grid after {} generations", life.generations());
            break;
        }
    }

    print!("{}", life.current());
    println!(
        "Generation {}: {} live cells",
        life.generations(),
        life.live_cells()
    );

    if let Some(f) = output {
        if let Err(e) = SaverLife::new(f.clone()).save_grid(life.current()) {
            eprintln!("Error: cannot save the grid to {}: {e}", f.display());
            return EXIT_ERROR;
        }
        info!("Grid saved to {}", f.display());
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let args: Args = Args::try_parse_from(["amaze", "generate"]).unwrap();
        match args.command {
            Command::Generate {
                rows,
                cols,
                random_exit,
                seed,
                ..
            } => {
                assert_eq!((rows, cols), (DEFAULT_ROWS, DEFAULT_COLS));
                assert!(!random_exit);
                assert_eq!(seed, None);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn global_debug_flag() {
        let args: Args =
            Args::try_parse_from(["amaze", "solve", "maze.txt", "--json", "-d"]).unwrap();
        assert!(args.debug);
        assert!(matches!(args.command, Command::Solve { json: true, .. }));
    }

    #[test]
    fn solve_requires_a_file() {
        assert!(Args::try_parse_from(["amaze", "solve"]).is_err());
    }
}
