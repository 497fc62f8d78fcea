/*
config.rs

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

//! Build-time configuration and defaults.

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Default maze dimensions.
pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 15;

/// Largest number of cells in a grid, for mazes, automaton grids, and loaded files.
pub const MAX_CELLS: usize = 1 << 24;

/// Smallest maze that can hold one room surrounded by walls.
pub const MIN_MAZE_SIZE: usize = 3;

/// Default size of the cellular automaton grid.
pub const DEFAULT_LIFE_ROWS: usize = 24;
pub const DEFAULT_LIFE_COLS: usize = 80;

// Maze symbols, for the console and for the text file format
pub const WALL_SYMBOL: char = '■';
pub const OPEN_SYMBOL: char = ' ';
pub const MARKER_SYMBOL: char = 'X';
pub const PATH_SYMBOL: char = '*';

/// Open cell not reached by the solver.
pub const UNREACHED_SYMBOL: char = '.';

// Cellular automaton symbols
pub const ALIVE_SYMBOL: char = '■';
pub const DEAD_SYMBOL: char = '·';
