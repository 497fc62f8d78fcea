/*
binary_tree.rs

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

//! Carve a maze with the binary tree algorithm.
//!
//! Rooms are the cells at odd row and odd column indexes.
//! Every room opens a passage toward the room above it or toward the room on its right.
//! Only directions leading to an existing room are candidates, and one candidate is drawn at
//! random.
//! Because every room except the top-right one carves exactly one passage, and each passage
//! leads up or right, the rooms form a spanning tree.

use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;
use strum_macros::Display;

use crate::grid::{CellType, Coord, Grid};

/// Carving direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Direction {
    #[strum(serialize = "up")]
    Up,
    #[strum(serialize = "right")]
    Right,
}

impl Direction {
    /// Return the wall cell between the room and the neighbor room in this direction, or None
    /// if there is no room in that direction.
    pub fn passage(self, room: Coord, cols: usize) -> Option<Coord> {
        match self {
            Direction::Up => {
                if room.row >= 3 {
                    Some(Coord::new(room.row - 1, room.col))
                } else {
                    None
                }
            }
            Direction::Right => {
                if room.col + 2 < cols {
                    Some(Coord::new(room.row, room.col + 1))
                } else {
                    None
                }
            }
        }
    }
}

/// Whether the cell is a room.
pub fn is_room(coord: Coord) -> bool {
    coord.row % 2 == 1 && coord.col % 2 == 1
}

/// Return the rooms of a grid of the given size, in row-major order.
pub fn rooms(rows: usize, cols: usize) -> Vec<Coord> {
    (1..rows)
        .step_by(2)
        .flat_map(|row| (1..cols).step_by(2).map(move |col| Coord::new(row, col)))
        .collect()
}

/// Return the directions in which the room can carve a passage.
pub fn candidates(room: Coord, cols: usize) -> Vec<(Direction, Coord)> {
    [Direction::Up, Direction::Right]
        .iter()
        .filter_map(|d| d.passage(room, cols).map(|p| (*d, p)))
        .collect()
}

/// Build a grid of the given size and carve the maze.
///
/// Markers are not placed. See [`super::exits`].
pub fn carve<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid<CellType> {
    let mut grid: Grid<CellType> = Grid::create(rows, cols);
    let rooms: Vec<Coord> = rooms(rows, cols);

    for room in &rooms {
        grid.set(*room, CellType::Open);
    }

    let mut passages: usize = 0;
    for room in &rooms {
        // The top-right room has no candidate: the other rooms carve into it
        if let Some((direction, passage)) = candidates(*room, cols).choose(rng) {
            grid.set(*passage, CellType::Open);
            passages += 1;
            trace!("Room {room}: carving {direction} through {passage}");
        }
    }
    debug!("Carved {passages} passages between {} rooms", rooms.len());
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rooms_are_on_odd_lattice() {
        let r: Vec<Coord> = rooms(5, 6);
        assert_eq!(
            r,
            vec![
                Coord::new(1, 1),
                Coord::new(1, 3),
                Coord::new(1, 5),
                Coord::new(3, 1),
                Coord::new(3, 3),
                Coord::new(3, 5)
            ]
        );
        assert!(r.iter().all(|c| is_room(*c)));
    }

    #[test]
    fn top_right_room_has_no_candidate() {
        assert!(candidates(Coord::new(1, 5), 7).is_empty());
    }

    #[test]
    fn top_row_rooms_can_only_go_right() {
        assert_eq!(
            candidates(Coord::new(1, 1), 7),
            vec![(Direction::Right, Coord::new(1, 2))]
        );
    }

    #[test]
    fn last_column_rooms_can_only_go_up() {
        assert_eq!(
            candidates(Coord::new(3, 5), 7),
            vec![(Direction::Up, Coord::new(2, 5))]
        );
    }

    #[test]
    fn inner_room_has_both_candidates() {
        let c: Vec<(Direction, Coord)> = candidates(Coord::new(3, 3), 7);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn carving_opens_one_passage_per_room_but_one() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let grid: Grid<CellType> = carve(9, 11, &mut rng);
        let num_rooms: usize = rooms(9, 11).len();
        let open: usize = grid.find(CellType::Open).len();

        // A spanning tree over n rooms has n - 1 passages
        assert_eq!(open, num_rooms + num_rooms - 1);
    }

    #[test]
    fn border_stays_closed() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let grid: Grid<CellType> = carve(9, 9, &mut rng);
        for (coord, cell) in grid.iter() {
            if grid.is_boundary(coord) {
                assert_eq!(cell, CellType::Wall, "{coord} should be a wall");
            }
        }
    }

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
