/*
generator.rs

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

//! Generate random mazes.
//!
//! A maze is a [`Grid`] of [`CellType`] cells. It is built in two steps:
//!
//! * [`binary_tree::carve`] opens the rooms and the passages between them. The rooms form a
//!   spanning tree, so there is exactly one route between any two rooms.
//! * [`exits`] places the two markers on the boundary: at fixed positions next to the top-right
//!   and bottom-left corners, or at random boundary cells.
//!
//! The random number generator is provided by the caller so that generation is reproducible with
//! a seeded generator such as [`rand::rngs::StdRng`].

pub mod binary_tree;
pub mod exits;

use log::{Level, debug, log_enabled};
use rand::Rng;
use std::error::Error;
use std::fmt;

use crate::config::MIN_MAZE_SIZE;
use crate::grid::{CellType, Coord, Grid, GridError, cell_count};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The grid cannot hold a room surrounded by walls.
    TooSmall { rows: usize, cols: usize },

    /// The grid would hold too many cells.
    TooLarge(GridError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::TooSmall { rows, cols } => write!(
                f,
                "a {rows}x{cols} maze is too small: the minimum size is {MIN_MAZE_SIZE}x{MIN_MAZE_SIZE}"
            ),
            GenerateError::TooLarge(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GenerateError {}

/// Generate and return a maze.
///
/// When `random_exit` is `false`, the entry is at `(0, cols - 2)` and the exit at
/// `(rows - 1, 1)`. Such a maze always has a solution.
/// When `random_exit` is `true`, the markers are distinct random boundary cells. They might be
/// walled in, in which case the maze has no solution.
///
/// # Errors
///
/// The method returns an error if `rows` or `cols` is less than three, or if the grid would
/// exceed [`crate::config::MAX_CELLS`] cells.
pub fn generate_maze<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    random_exit: bool,
    rng: &mut R,
) -> Result<Grid<CellType>, GenerateError> {
    if rows < MIN_MAZE_SIZE || cols < MIN_MAZE_SIZE {
        return Err(GenerateError::TooSmall { rows, cols });
    }
    cell_count(rows, cols).map_err(GenerateError::TooLarge)?;
    debug!("Generating a {rows}x{cols} maze (random exits = {random_exit})");

    let mut grid: Grid<CellType> = binary_tree::carve(rows, cols, rng);

    let (entry, exit): (Coord, Coord) = if random_exit {
        exits::random_exits(rows, cols, rng)
    } else {
        exits::default_exits(rows, cols)
    };
    exits::stamp(&mut grid, entry, exit);
    debug!("Entry = {entry}  Exit = {exit}");

    if log_enabled!(Level::Debug) {
        for line in grid.to_string().lines() {
            debug!("{line}");
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_small_grids() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_maze(2, 9, false, &mut rng),
            Err(GenerateError::TooSmall { rows: 2, cols: 9 })
        );
        assert_eq!(
            generate_maze(9, 1, true, &mut rng),
            Err(GenerateError::TooSmall { rows: 9, cols: 1 })
        );
        assert!(generate_maze(3, 3, false, &mut rng).is_ok());
    }

    #[test]
    fn rejects_huge_grids() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_maze(usize::MAX, 3, false, &mut rng),
            Err(GenerateError::TooLarge(GridError::TooLarge {
                rows: usize::MAX,
                cols: 3
            }))
        );
        assert!(generate_maze(100_001, 100_001, false, &mut rng).is_err());
    }

    #[test]
    fn exactly_two_markers() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        for random_exit in [false, true] {
            for _ in 0..50 {
                let grid: Grid<CellType> = generate_maze(11, 13, random_exit, &mut rng).unwrap();
                assert_eq!(grid.find(CellType::Marker).len(), 2);
            }
        }
    }

    #[test]
    fn default_markers_for_5x5() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let grid: Grid<CellType> = generate_maze(5, 5, false, &mut rng).unwrap();
        assert_eq!(
            grid.find(CellType::Marker),
            vec![Coord::new(0, 3), Coord::new(4, 1)]
        );
    }

    #[test]
    fn same_seed_same_maze() {
        let mut rng1: StdRng = StdRng::seed_from_u64(2025);
        let mut rng2: StdRng = StdRng::seed_from_u64(2025);
        assert_eq!(
            generate_maze(21, 31, true, &mut rng1),
            generate_maze(21, 31, true, &mut rng2)
        );
    }

    #[test]
    fn error_message() {
        let e: GenerateError = GenerateError::TooSmall { rows: 1, cols: 1 };
        assert_eq!(
            e.to_string(),
            "a 1x1 maze is too small: the minimum size is 3x3"
        );
    }
}
