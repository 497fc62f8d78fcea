/*
backtrace.rs

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

//! Rebuild the shortest path from the distance field.

use log::debug;

use crate::grid::{Coord, Grid, Label};
use crate::path::Path;

/// Walk back from the exit to the entry by following decreasing labels, and return the path from
/// the entry to the exit.
///
/// At each step, the first neighbor (up, down, left, right) with a label one less than the
/// current label is selected.
///
/// Return None if the exit has no label, or if a cell has no neighbor with the previous label.
/// That last case can only happen with a corrupted distance field.
pub fn backtrace(labels: &Grid<Label>, exit: Coord) -> Option<Path> {
    let mut current: Coord = exit;
    let mut value: usize = labels.get(exit)?.distance()?;
    let mut path: Path = Path::new(value);

    path.push(current);
    while value > 1 {
        value -= 1;
        current = match labels
            .neighbors4(current)
            .find(|n| labels[*n] == Label::Distance(value))
        {
            Some(c) => c,
            None => {
                debug!("Backtrace: no neighbor of {current} has the label {value}");
                return None;
            }
        };
        path.push(current);
    }
    path.reverse();
    Some(path)
}
