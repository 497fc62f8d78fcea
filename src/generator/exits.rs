/*
exits.rs

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

//! Place the entry and exit markers on the maze boundary.

use log::debug;
use rand::Rng;

use crate::grid::{CellType, Coord, Grid};

/// Return the default entry and exit: the top row next to the top-right corner, and the bottom
/// row next to the bottom-left corner.
pub fn default_exits(rows: usize, cols: usize) -> (Coord, Coord) {
    (Coord::new(0, cols - 2), Coord::new(rows - 1, 1))
}

/// Return a random cell on the grid boundary.
///
/// A row is drawn first. On the first and last rows any column can be selected, on the other
/// rows only the first or the last column.
pub fn random_boundary_cell<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Coord {
    let row: usize = rng.random_range(0..rows);
    let col: usize = if row == 0 || row == rows - 1 {
        rng.random_range(0..cols)
    } else if rng.random_bool(0.5) {
        0
    } else {
        cols - 1
    };
    Coord::new(row, col)
}

/// Return a random entry and exit.
///
/// The two cells are drawn independently. When they coincide, the exit is drawn again.
pub fn random_exits<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> (Coord, Coord) {
    let entry: Coord = random_boundary_cell(rows, cols, rng);
    let mut exit: Coord = random_boundary_cell(rows, cols, rng);
    while exit == entry {
        debug!("Exit {exit} is the same cell as the entry: drawing again");
        exit = random_boundary_cell(rows, cols, rng);
    }
    (entry, exit)
}

/// Stamp the markers, overwriting the previous state of the cells.
pub fn stamp(grid: &mut Grid<CellType>, entry: Coord, exit: Coord) {
    grid.set(entry, CellType::Marker);
    grid.set(exit, CellType::Marker);
}
