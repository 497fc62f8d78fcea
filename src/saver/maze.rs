/*
maze.rs

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

//! Save and restore mazes.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

use crate::grid::{CellType, Grid, GridError};

/// Build a maze from its text representation.
///
/// Each line is a row of symbols. Empty lines are ignored.
///
/// # Errors
///
/// The function returns an error for unknown symbols and for rows of different lengths.
pub fn parse_maze(text: &str) -> Result<Grid<CellType>, GridError> {
    let mut rows: Vec<Vec<CellType>> = Vec::new();
    for line in text.lines() {
        let line: &str = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let row_index: usize = rows.len();
        let row: Vec<CellType> = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                CellType::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    row: row_index,
                    col,
                    symbol,
                })
            })
            .collect::<Result<Vec<CellType>, GridError>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Object to save and restore a maze.
pub struct SaverMaze {
    /// Path to the maze file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Maze file: {save_file:?}");
        Self { save_file }
    }

    /// Whether the file uses the JSON format.
    fn is_json(&self) -> bool {
        self.save_file
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
    }

    /// Retrieve the maze from the file.
    ///
    /// Return the maze or None if the file does not exist.
    pub fn get_maze(&self) -> Result<Option<Grid<CellType>>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let mut reader: BufReader<File> = BufReader::new(file);

        let grid: Grid<CellType> = if self.is_json() {
            let grid: Grid<CellType> = serde_json::from_reader(reader)?;
            grid.check()?;
            grid
        } else {
            let mut text: String = String::new();
            reader.read_to_string(&mut text)?;
            parse_maze(&text)?
        };
        debug!("Loaded a {}x{} maze", grid.rows(), grid.cols());
        Ok(Some(grid))
    }

    /// Save the provided maze.
    pub fn save_maze(&self, grid: &Grid<CellType>) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        if self.is_json() {
            serde_json::to_writer(&mut writer, grid)?;
        } else {
            write!(writer, "{grid}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Delete the maze file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
