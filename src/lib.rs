/*
lib.rs

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

//! Maze generation and solving, with a small cellular automaton.
//!
//! The maze engine is split in three steps that exchange [`grid::Grid`] objects by value:
//!
//! * [`generator::generate_maze`] builds a maze with an entry and an exit marker.
//! * [`solver::solve_maze`] labels a copy of the maze with the distance from the entry and
//!   rebuilds the shortest path to the exit.
//! * [`path::overlay_path`] stamps the path on a copy of the maze for display.
//!
//! [`life`] advances a Game of Life grid by one generation at a time.
//! [`saver`] loads and saves mazes and automaton grids.

pub mod cli_options;
pub mod config;
pub mod generator;
pub mod grid;
pub mod life;
pub mod path;
pub mod saver;
pub mod solver;
