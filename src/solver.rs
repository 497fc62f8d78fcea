/*
solver.rs

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

//! Solve mazes.
//!
//! [`solve_maze`] works on a copy of the provided grid and goes through the following states:
//!
//! * The grid is rejected, with a [`SolveError`], when it does not contain exactly two markers,
//!   or when the entry is a boundary cell walled in on every side.
//! * [`flood::flood`] labels the cells with their distance from the entry.
//! * If the exit did not get a label, the maze is [`SolveStatus::Unreachable`]. The distance
//!   field is still returned.
//! * Otherwise the maze is [`SolveStatus::Solved`] and [`backtrace::backtrace`] rebuilds the
//!   shortest path from the entry to the exit.
//!
//! The first marker in row-major order is the entry, the second one is the exit.

pub mod backtrace;
pub mod flood;

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::Display;

use crate::grid::{CellType, Coord, Grid, Label};
use crate::path::Path;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SolveError {
    /// The grid does not have exactly two markers.
    MarkerCount(usize),

    /// The entry is on the boundary and all its neighbors are walls.
    EncircledEntry(Coord),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::MarkerCount(n) => {
                write!(f, "the maze has {n} markers instead of 2")
            }
            SolveError::EncircledEntry(c) => {
                write!(f, "the entry {c} is surrounded by walls")
            }
        }
    }
}

impl Error for SolveError {}

/// Outcome of a solve that was not rejected.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum SolveStatus {
    #[strum(serialize = "solved")]
    Solved,
    #[strum(serialize = "unreachable")]
    Unreachable,
}

/// Solution object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub status: SolveStatus,

    pub entry: Coord,

    pub exit: Coord,

    /// Number of flood steps.
    pub steps: usize,

    /// Distance field. Cells that the flood did not reach stay [`Label::Open`].
    pub distances: Grid<Label>,

    /// Path from the entry to the exit. Empty when the exit cannot be reached.
    pub path: Path,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// Whether the cell is on the grid boundary with walls on all its in-bounds sides.
pub fn is_encircled(grid: &Grid<CellType>, coord: Coord) -> bool {
    grid.is_boundary(coord) && grid.neighbors4(coord).all(|n| grid[n].is_wall())
}

/// Solve the maze.
///
/// The provided grid is not modified.
///
/// # Errors
///
/// The method returns an error if the grid does not have exactly two markers, or if the entry is
/// walled in. An unreachable exit is not an error: see [`SolveStatus::Unreachable`].
///
/// # Panics
///
/// The method panics if the path cannot be rebuilt although the exit has a distance label. This
/// indicates a bug in the flood.
pub fn solve_maze(grid: &Grid<CellType>) -> Result<Solution, SolveError> {
    let markers: Vec<Coord> = grid.find(CellType::Marker);
    if markers.len() != 2 {
        debug!("Rejected: {} markers", markers.len());
        return Err(SolveError::MarkerCount(markers.len()));
    }
    let (entry, exit): (Coord, Coord) = (markers[0], markers[1]);

    if is_encircled(grid, entry) {
        debug!("Rejected: entry {entry} is encircled");
        return Err(SolveError::EncircledEntry(entry));
    }

    let f: flood::Flood = flood::flood(grid, entry, exit);

    if log_enabled!(Level::Debug) {
        for line in f.labels.to_string().lines() {
            debug!("{line}");
        }
    }

    if f.labels[exit].distance().is_none() {
        debug!("Exit {exit} cannot be reached from {entry}");
        return Ok(Solution {
            status: SolveStatus::Unreachable,
            entry,
            exit,
            steps: f.steps,
            distances: f.labels,
            path: Path::default(),
        });
    }

    let path: Path = match backtrace::backtrace(&f.labels, exit) {
        Some(p) => p,
        None => panic!("Bug: cannot rebuild the path from {exit} although the exit is labelled"),
    };
    debug!("Path length = {}", path.len());

    Ok(Solution {
        status: SolveStatus::Solved,
        entry,
        exit,
        steps: f.steps,
        distances: f.labels,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rows: &[&str]) -> Grid<CellType> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| CellType::from_symbol(c).unwrap()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_wrong_marker_count() {
        assert_eq!(
            solve_maze(&parse(&["■■■", "■ ■", "■■■"])).unwrap_err(),
            SolveError::MarkerCount(0)
        );
        assert_eq!(
            solve_maze(&parse(&["■X■", "■ ■", "■■■"])).unwrap_err(),
            SolveError::MarkerCount(1)
        );
        assert_eq!(
            solve_maze(&parse(&["■X■", "X X", "■■■"])).unwrap_err(),
            SolveError::MarkerCount(3)
        );
    }

    #[test]
    fn rejects_encircled_entry() {
        let grid: Grid<CellType> = parse(&["X■■", "■  ", "■■X"]);
        assert_eq!(
            solve_maze(&grid).unwrap_err(),
            SolveError::EncircledEntry(Coord::new(0, 0))
        );
    }

    #[test]
    fn inner_entry_is_not_encircled() {
        let grid: Grid<CellType> = parse(&["■■■", "■X■", "■■■"]);
        assert!(!is_encircled(&grid, Coord::new(1, 1)));
    }

    #[test]
    fn adjacent_markers_behind_a_wall_are_unreachable() {
        // The entry opens on the room, but the exit is on the other side of a wall
        let grid: Grid<CellType> = parse(&["■X■", "■ ■", "■■X"]);
        let solution: Solution = solve_maze(&grid).unwrap();
        assert_eq!(solution.status, SolveStatus::Unreachable);
        assert!(solution.path.is_empty());
        assert_eq!(solution.distances[Coord::new(1, 1)], Label::Distance(2));
    }

    #[test]
    fn solves_a_corridor() {
        let grid: Grid<CellType> = parse(&["■X■■■", "■   ■", "■■■X■"]);
        let solution: Solution = solve_maze(&grid).unwrap();
        assert!(solution.is_solved());
        assert_eq!(
            solution.path.get(),
            &vec![
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 3)
            ]
        );
        assert_eq!(
            solution.distances[solution.exit],
            Label::Distance(solution.path.len())
        );
    }

    #[test]
    fn input_grid_is_untouched() {
        let grid: Grid<CellType> = parse(&["■X■■■", "■   ■", "■■■X■"]);
        let copy: Grid<CellType> = grid.clone();
        let _ = solve_maze(&grid);
        assert_eq!(grid, copy);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SolveError::MarkerCount(3).to_string(),
            "the maze has 3 markers instead of 2"
        );
        assert_eq!(
            SolveError::EncircledEntry(Coord::new(0, 4)).to_string(),
            "the entry (0, 4) is surrounded by walls"
        );
        assert_eq!(SolveStatus::Unreachable.to_string(), "unreachable");
    }
}
