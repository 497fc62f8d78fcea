/*
saver.rs

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

//! Load and save mazes and automaton grids.
//!
//! * [`maze`] stores a maze as a text file, one row per line with the console symbols, or as a
//!   JSON serialization of the [`crate::grid::Grid`] object when the file name ends with `.json`.
//! * [`life`] stores an automaton grid as rows of whitespace-separated `0` and `1` values.

pub mod life;
pub mod maze;
