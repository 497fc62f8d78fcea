/*
flood.rs

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

//! Breadth-first distance labelling.
//!
//! The entry gets the label `1`. At step `k`, every open neighbor of a cell labelled `k` that
//! has no label yet gets the label `k + 1`. A label never changes once it is set, and walls are
//! never labelled.

use log::debug;

use crate::grid::{CellType, Coord, Grid, Label};

/// Result of the flood.
#[derive(Debug, Clone)]
pub struct Flood {
    /// Distance field.
    pub labels: Grid<Label>,

    /// Number of steps performed.
    pub steps: usize,
}

/// Build the working distance field: walls stay walls, the entry gets the label `1`, and every
/// other cell is open and unlabelled.
pub fn initial_labels(grid: &Grid<CellType>, entry: Coord) -> Grid<Label> {
    let mut labels: Grid<Label> = grid.map(|c| match c {
        CellType::Wall => Label::Wall,
        CellType::Open | CellType::Marker | CellType::Path => Label::Open,
    });
    labels.set(entry, Label::Distance(1));
    labels
}

/// Label the cells from the entry until the exit is reached.
///
/// The flood stops when the exit gets a label, when a step does not label any cell, or after
/// `rows × cols` steps.
pub fn flood(grid: &Grid<CellType>, entry: Coord, exit: Coord) -> Flood {
    let mut labels: Grid<Label> = initial_labels(grid, entry);
    let max_steps: usize = grid.rows() * grid.cols();
    let mut frontier: Vec<Coord> = vec![entry];
    let mut k: usize = 1;

    while labels[exit] == Label::Open && k <= max_steps {
        let mut next: Vec<Coord> = Vec::new();
        for cell in &frontier {
            for n in grid.neighbors4(*cell) {
                if labels[n] == Label::Open {
                    labels[n] = Label::Distance(k + 1);
                    next.push(n);
                }
            }
        }
        if next.is_empty() {
            debug!("Flood: no cell labelled at step {k}");
            break;
        }
        frontier = next;
        k += 1;
    }

    debug!(
        "Flood: {} steps, exit label = {:?}",
        k - 1,
        labels[exit].distance()
    );
    Flood {
        labels,
        steps: k - 1,
    }
}
