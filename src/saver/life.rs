/*
life.rs

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

//! Save and restore automaton grids.
//!
//! The file has one line per row. Each line lists the cells as `0` (dead) or `1` (alive),
//! separated by whitespace.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::grid::Grid;

/// Build a grid from its text representation.
///
/// # Errors
///
/// The function returns an error if a value is not `0` or `1`, or if the rows do not have the
/// same length.
pub fn parse_life<R: BufRead>(reader: R) -> Result<Grid<bool>, Box<dyn Error>> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line: String = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<bool> = line
            .split_whitespace()
            .map(|v| match v {
                "0" => Ok(false),
                "1" => Ok(true),
                _ => Err(format!("line {}: invalid cell value {v:?}", i + 1)),
            })
            .collect::<Result<Vec<bool>, String>>()?;
        rows.push(row);
    }
    Ok(Grid::from_rows(rows)?)
}

/// Write the grid in its text representation.
pub fn write_life<W: Write>(writer: &mut W, grid: &Grid<bool>) -> std::io::Result<()> {
    for row in 0..grid.rows() {
        let line: Vec<&str> = grid
            .row(row)
            .iter()
            .map(|alive| if *alive { "1" } else { "0" })
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Object to save and restore an automaton grid.
pub struct SaverLife {
    /// Path to the grid file.
    save_file: PathBuf,
}

impl SaverLife {
    /// Create a [`SaverLife`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Automaton file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the grid from the file.
    pub fn get_grid(&self) -> Result<Grid<bool>, Box<dyn Error>> {
        let file: File = File::open(&self.save_file)?;
        parse_life(BufReader::new(file))
    }

    /// Save the provided grid.
    pub fn save_grid(&self, grid: &Grid<bool>) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        write_life(&mut writer, grid)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;
    use std::env;

    #[test]
    fn parse_rows() {
        let grid: Grid<bool> = parse_life("0 1 0\n1 1 0\n\n".as_bytes()).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Coord::new(0, 1)), Some(true));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(false));
    }

    #[test]
    fn parse_rejects_bad_values() {
        let e = parse_life("0 2 0\n".as_bytes()).unwrap_err();
        assert_eq!(e.to_string(), "line 1: invalid cell value \"2\"");
        assert!(parse_life("0 1\n0\n".as_bytes()).is_err());
    }

    #[test]
    fn write_rows() {
        let grid: Grid<bool> = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let mut out: Vec<u8> = Vec::new();
        write_life(&mut out, &grid).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 0\n0 1\n");
    }

    #[test]
    fn file_round_trip() {
        let mut p: PathBuf = env::temp_dir();
        p.push(format!("amaze-{}-life.txt", std::process::id()));
        let grid: Grid<bool> =
            Grid::from_rows(vec![vec![true, false, true], vec![false, true, false]]).unwrap();
        let saver: SaverLife = SaverLife::new(p.clone());
        saver.save_grid(&grid).unwrap();
        assert_eq!(saver.get_grid().unwrap(), grid);
        let _ = std::fs::remove_file(p);
    }
}
