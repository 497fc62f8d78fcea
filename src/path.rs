/*
path.rs

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

//! Path through the maze, and its overlay on the symbolic grid.

use serde::{Deserialize, Serialize};

use crate::grid::{CellType, Coord, Grid};

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    /// Path as an ordered list of cells, from the entry to the exit.
    path: Vec<Coord>,
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
        }
    }

    /// Add a cell to the end of the path.
    pub fn push(&mut self, coord: Coord) {
        self.path.push(coord);
    }

    /// Reverse the order of the cells.
    pub fn reverse(&mut self) {
        self.path.reverse();
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Coord> {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Whether every cell is orthogonally adjacent to the next one.
    pub fn is_connected(&self) -> bool {
        self.path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

/// Return a copy of the grid with every cell of the path stamped as [`CellType::Path`].
///
/// The source grid is not modified. Coordinates outside the grid are ignored.
pub fn overlay_path(grid: &Grid<CellType>, path: &Path) -> Grid<CellType> {
    let mut overlay: Grid<CellType> = grid.clone();
    for coord in path.get() {
        overlay.set(*coord, CellType::Path);
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(cells: &[(usize, usize)]) -> Path {
        let mut path: Path = Path::new(cells.len());
        for (row, col) in cells {
            path.push(Coord::new(*row, *col));
        }
        path
    }

    fn sample() -> Path {
        path_of(&[(0, 1), (1, 1), (1, 2)])
    }

    #[test]
    fn push_and_reverse() {
        let mut path: Path = Path::new(4);
        assert!(path.is_empty());
        path.push(Coord::new(0, 0));
        path.push(Coord::new(0, 1));
        assert_eq!(path.len(), 2);
        path.reverse();
        assert_eq!(path.get_first(), Some(Coord::new(0, 1)));
        assert_eq!(path.get_last(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn connectivity() {
        assert!(sample().is_connected());
        let broken: Path = path_of(&[(0, 0), (1, 1)]);
        assert!(!broken.is_connected());
    }

    #[test]
    fn overlay_leaves_source_untouched() {
        let mut grid: Grid<CellType> = Grid::create(3, 3);
        grid.set(Coord::new(1, 1), CellType::Open);
        let overlay: Grid<CellType> = overlay_path(&grid, &sample());
        assert_eq!(grid.get(Coord::new(1, 1)), Some(CellType::Open));
        assert_eq!(overlay.get(Coord::new(1, 1)), Some(CellType::Path));
        assert_eq!(overlay.get(Coord::new(0, 1)), Some(CellType::Path));
        assert_eq!(overlay.get(Coord::new(2, 2)), Some(CellType::Wall));
    }

    #[test]
    fn overlay_is_idempotent() {
        let grid: Grid<CellType> = Grid::create(3, 3);
        let once: Grid<CellType> = overlay_path(&grid, &sample());
        let twice: Grid<CellType> = overlay_path(&once, &sample());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_overlay_is_a_copy() {
        let grid: Grid<CellType> = Grid::create(3, 4);
        assert_eq!(overlay_path(&grid, &Path::default()), grid);
    }

    #[test]
    fn serialized_as_cell_list() {
        let json: String = serde_json::to_string(&sample()).unwrap();
        let path: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, sample());
    }
}
