/*
grid.rs

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

//! Rectangular cell matrix shared by the maze engine and the cellular automaton.
//!
//! A [`Grid`] is created with fixed dimensions that never change afterward.
//! The cell type is generic:
//!
//! * [`CellType`] is the symbolic maze representation (walls, open cells, markers, and path).
//! * [`Label`] is the working representation used by the solver to store the distance from the
//!   entry.
//! * `bool` is used by the cellular automaton for live and dead cells.
//!
//! Grids have value semantics: every phase that needs to modify a grid works on its own clone.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config;

/// Orthogonal offsets in enumeration order: up, down, left, right.
///
/// The order is significant: the path reconstruction takes the first matching neighbor.
static OFFSETS4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal and diagonal offsets.
static OFFSETS8: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Cell coordinates.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two coordinates are orthogonally adjacent.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Symbolic state of a maze cell.
///
/// - A `Wall` cell is impassable.
/// - An `Open` cell is passable.
/// - A `Marker` cell is the entry or the exit of the maze. It is passable.
/// - A `Path` cell is a cell of the solution, stamped for display.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    #[default]
    Wall,
    Open,
    Marker,
    Path,
}

impl CellType {
    /// Return the symbol used for console rendering and for the text file format.
    pub fn symbol(self) -> char {
        match self {
            CellType::Wall => config::WALL_SYMBOL,
            CellType::Open => config::OPEN_SYMBOL,
            CellType::Marker => config::MARKER_SYMBOL,
            CellType::Path => config::PATH_SYMBOL,
        }
    }

    /// Return the cell type for the given symbol, or None if the symbol is unknown.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            config::WALL_SYMBOL => Some(CellType::Wall),
            config::OPEN_SYMBOL => Some(CellType::Open),
            config::MARKER_SYMBOL => Some(CellType::Marker),
            config::PATH_SYMBOL => Some(CellType::Path),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == CellType::Wall
    }
}

/// State of a cell in the distance field computed by the solver.
///
/// `Open` is an open or marker cell that the flood has not reached (yet).
/// `Distance(n)` stores the number of hops from the entry, plus one: the entry is labelled `1`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Label {
    #[default]
    Wall,
    Open,
    Distance(usize),
}

impl Label {
    /// Return the distance label of the cell, if any.
    pub fn distance(self) -> Option<usize> {
        match self {
            Label::Distance(d) => Some(d),
            _ => None,
        }
    }
}

/// Console representation of a cell.
pub trait Symbol {
    fn symbol(&self) -> char;
}

impl Symbol for CellType {
    fn symbol(&self) -> char {
        CellType::symbol(*self)
    }
}

impl Symbol for Label {
    fn symbol(&self) -> char {
        match self {
            Label::Wall => config::WALL_SYMBOL,
            Label::Open => config::UNREACHED_SYMBOL,
            Label::Distance(d) => char::from_digit((d % 10) as u32, 10).unwrap_or('?'),
        }
    }
}

impl Symbol for bool {
    fn symbol(&self) -> char {
        if *self {
            config::ALIVE_SYMBOL
        } else {
            config::DEAD_SYMBOL
        }
    }
}

/// Errors raised when building a grid from external data.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,

    /// A row does not have the same length as the first row.
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The text representation contains an unknown symbol.
    UnknownSymbol { row: usize, col: usize, symbol: char },

    /// The stored dimensions do not match the number of cells.
    SizeMismatch { rows: usize, cols: usize, cells: usize },

    /// The grid would hold more than [`config::MAX_CELLS`] cells.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "the grid is empty"),
            GridError::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells instead of {expected}: the grid is not rectangular"
            ),
            GridError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol {symbol:?} at ({row}, {col})")
            }
            GridError::SizeMismatch { rows, cols, cells } => {
                write!(f, "{cells} cells do not fill a {rows}x{cols} grid")
            }
            GridError::TooLarge { rows, cols } => write!(
                f,
                "a {rows}x{cols} grid is too large: the maximum is {} cells",
                config::MAX_CELLS
            ),
        }
    }
}

impl Error for GridError {}

/// Fixed-size matrix of cells, stored in row-major order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl Grid<CellType> {
    /// Create a maze grid with all the cells set to [`CellType::Wall`].
    pub fn create(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, CellType::Wall)
    }
}

/// Return the number of cells of a `rows` by `cols` grid.
///
/// # Errors
///
/// The function returns an error if the product overflows or exceeds [`config::MAX_CELLS`].
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    match rows.checked_mul(cols) {
        Some(n) if n <= config::MAX_CELLS => Ok(n),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

impl<T: Copy> Grid<T> {
    /// Create a [`Grid`] object with all the cells set to `value`.
    ///
    /// The dimensions must come from an existing grid or have gone through [`cell_count`].
    /// Use [`Grid::try_filled`] for dimensions provided by the user.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Create a [`Grid`] object with all the cells set to `value`.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid would be too large.
    pub fn try_filled(rows: usize, cols: usize, value: T) -> Result<Self, GridError> {
        let n: usize = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![value; n],
        })
    }

    /// Create a [`Grid`] object from a list of rows.
    ///
    /// # Errors
    ///
    /// The method returns an error if there are no cells or if the rows do not have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols: usize = rows.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let num_rows: usize = rows.len();
        let mut cells: Vec<T> = Vec::with_capacity(num_rows * cols);
        for (i, r) in rows.into_iter().enumerate() {
            if r.len() != cols {
                return Err(GridError::NotRectangular {
                    row: i,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            rows: num_rows,
            cols,
            cells,
        })
    }

    /// Verify that the dimensions match the cell storage.
    ///
    /// Only deserialized grids can fail this check.
    pub fn check(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::Empty);
        }
        if self.cells.len() != cell_count(self.rows, self.cols)? {
            return Err(GridError::SizeMismatch {
                rows: self.rows,
                cols: self.cols,
                cells: self.cells.len(),
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinates are inside the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Whether the cell is on the first or last row or column.
    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0 || coord.col == 0 || coord.row + 1 == self.rows || coord.col + 1 == self.cols
    }

    /// Return the cell at the given coordinates, or None if the coordinates are out of the grid.
    pub fn get(&self, coord: Coord) -> Option<T> {
        if self.in_bounds(coord.row, coord.col) {
            Some(self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// Set the cell at the given coordinates.
    ///
    /// Coordinates out of the grid are ignored.
    pub fn set(&mut self, coord: Coord, value: T) {
        if self.in_bounds(coord.row, coord.col) {
            let i: usize = coord.row * self.cols + coord.col;
            self.cells[i] = value;
        }
    }

    /// Return the cells of the given row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Move from `coord` by the given offset, staying inside the grid.
    fn offset(&self, coord: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        let row: usize = coord.row.checked_add_signed(d_row)?;
        let col: usize = coord.col.checked_add_signed(d_col)?;
        if self.in_bounds(row, col) {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Return the orthogonal neighbors of the cell that are inside the grid.
    ///
    /// The neighbors are enumerated in a fixed order: up, down, left, right.
    pub fn neighbors4(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        OFFSETS4
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(coord, dr, dc))
    }

    /// Return the orthogonal and diagonal neighbors of the cell that are inside the grid.
    pub fn neighbors8(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        OFFSETS8
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(coord, dr, dc))
    }

    /// Build a new grid by converting every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: Fn(T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|c| f(*c)).collect(),
        }
    }

    /// Iterate over the grid in row-major order.
    ///
    /// # Example:
    ///
    /// ```
    /// use amaze::grid::{CellType, Grid};
    ///
    /// let grid: Grid<CellType> = Grid::create(3, 3);
    /// for (coord, cell) in grid.iter().filter(|(_, c)| *c == CellType::Wall) {
    ///     println!("{coord} -> {cell:?}");
    /// }
    /// ```
    pub fn iter(&self) -> GridIterator<'_, T> {
        GridIterator {
            grid: self,
            index: 0,
        }
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Return the coordinates of all the cells equal to `value`, in row-major order.
    pub fn find(&self, value: T) -> Vec<Coord> {
        self.iter()
            .filter(|(_, c)| *c == value)
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[coord.row * self.cols + coord.col]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        &mut self.cells[coord.row * self.cols + coord.col]
    }
}

impl<T: Copy + Symbol> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.row(row).iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Iterator for the grid.
pub struct GridIterator<'a, T> {
    grid: &'a Grid<T>,
    index: usize,
}

/// Iterator implementation.
impl<T: Copy> Iterator for GridIterator<'_, T> {
    type Item = (Coord, T);

    fn next(&mut self) -> Option<Self::Item> {
        let cell: T = *self.grid.cells.get(self.index)?;
        let coord: Coord = Coord::new(self.index / self.grid.cols, self.index % self.grid.cols);
        self.index += 1;
        Some((coord, cell))
    }
}
