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

//! Cellular automaton ("Game of Life").
//!
//! A live cell survives with two or three live neighbors, a dead cell comes to life with exactly
//! three live neighbors, and all the other cells die or stay dead.
//! Neighbors are the eight orthogonal and diagonal cells; the grid does not wrap around.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid, GridError};

/// Compute the next generation from a read-only snapshot of the current one.
pub fn next_generation(grid: &Grid<bool>) -> Grid<bool> {
    let mut next: Grid<bool> = grid.clone();
    for (coord, alive) in grid.iter() {
        let n: usize = live_neighbors(grid, coord);
        next.set(coord, if alive { n == 2 || n == 3 } else { n == 3 });
    }
    next
}

/// Count the live neighbors of a cell.
pub fn live_neighbors(grid: &Grid<bool>, coord: Coord) -> usize {
    grid.neighbors8(coord).filter(|n| grid[*n]).count()
}

/// Automaton object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Life {
    /// Previous generation. All cells are dead before the first step.
    prev_generation: Grid<bool>,

    /// Current generation.
    curr_generation: Grid<bool>,

    /// Maximum number of generations, or None for no limit.
    max_generations: Option<usize>,

    /// Current number of generations. The initial grid is the first generation.
    generations: usize,
}

impl Life {
    /// Create a [`Life`] object from the given initial generation.
    pub fn from_grid(grid: Grid<bool>, max_generations: Option<usize>) -> Self {
        Self {
            prev_generation: Grid::filled(grid.rows(), grid.cols(), false),
            curr_generation: grid,
            max_generations,
            generations: 1,
        }
    }

    /// Create a [`Life`] object with all the cells dead.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid would be too large.
    pub fn new(
        rows: usize,
        cols: usize,
        max_generations: Option<usize>,
    ) -> Result<Self, GridError> {
        Ok(Self::from_grid(
            Grid::try_filled(rows, cols, false)?,
            max_generations,
        ))
    }

    /// Create a [`Life`] object where each cell is alive with a probability of one half.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid would be too large.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        max_generations: Option<usize>,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid: Grid<bool> = Grid::try_filled(rows, cols, false)?;
        for row in 0..rows {
            for col in 0..cols {
                grid.set(Coord::new(row, col), rng.random_bool(0.5));
            }
        }
        Ok(Self::from_grid(grid, max_generations))
    }

    /// Move to the next generation.
    pub fn step(&mut self) {
        let next: Grid<bool> = next_generation(&self.curr_generation);
        self.prev_generation = std::mem::replace(&mut self.curr_generation, next);
        self.generations += 1;
        debug!(
            "Generation {}: {} live cells",
            self.generations,
            self.live_cells()
        );
    }

    /// Whether the number of generations reached the maximum.
    ///
    /// Without maximum, the method always returns `false`.
    pub fn is_max_generations_exceeded(&self) -> bool {
        match self.max_generations {
            Some(max) => self.generations >= max,
            None => false,
        }
    }

    /// Whether the last step changed the grid.
    pub fn is_changing(&self) -> bool {
        self.prev_generation != self.curr_generation
    }

    /// Return the current generation.
    pub fn current(&self) -> &Grid<bool> {
        &self.curr_generation
    }

    /// Return the previous generation.
    pub fn previous(&self) -> &Grid<bool> {
        &self.prev_generation
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Return the number of live cells in the current generation.
    pub fn live_cells(&self) -> usize {
        self.curr_generation.iter().filter(|(_, alive)| *alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(rows: &[&[u8]]) -> Grid<bool> {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|v| *v == 1).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal: Grid<bool> = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        let vertical: Grid<bool> = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        assert_eq!(next_generation(&horizontal), vertical);
        assert_eq!(next_generation(&vertical), horizontal);
    }

    #[test]
    fn block_is_still() {
        let block: Grid<bool> = grid(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]);
        let mut life: Life = Life::from_grid(block.clone(), None);
        assert!(life.is_changing());
        life.step();
        assert!(!life.is_changing());
        assert_eq!(life.current(), &block);
        assert_eq!(life.generations(), 2);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut life: Life = Life::from_grid(grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]), None);
        life.step();
        assert_eq!(life.live_cells(), 0);
    }

    #[test]
    fn neighbors_include_diagonals() {
        let g: Grid<bool> = grid(&[&[1, 0, 1], &[0, 0, 0], &[1, 0, 1]]);
        assert_eq!(live_neighbors(&g, Coord::new(1, 1)), 4);
        assert_eq!(live_neighbors(&g, Coord::new(0, 1)), 2);
    }

    #[test]
    fn max_generations() {
        let mut life: Life = Life::new(3, 3, Some(3)).unwrap();
        assert!(!life.is_max_generations_exceeded());
        life.step();
        life.step();
        assert!(life.is_max_generations_exceeded());

        let unlimited: Life = Life::new(3, 3, None).unwrap();
        assert!(!unlimited.is_max_generations_exceeded());
    }

    #[test]
    fn huge_grid_is_rejected() {
        let mut rng: StdRng = StdRng::seed_from_u64(9);
        assert!(Life::random(usize::MAX, 2, None, &mut rng).is_err());
        assert!(Life::new(1 << 16, 1 << 16, None).is_err());
    }

    #[test]
    fn step_keeps_previous_generation() {
        let start: Grid<bool> = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        let mut life: Life = Life::from_grid(start.clone(), None);
        life.step();
        assert_eq!(life.previous(), &start);
    }

    #[test]
    fn random_population_is_reproducible() {
        let mut rng1: StdRng = StdRng::seed_from_u64(9);
        let mut rng2: StdRng = StdRng::seed_from_u64(9);
        let a: Life = Life::random(10, 20, None, &mut rng1).unwrap();
        let b: Life = Life::random(10, 20, None, &mut rng2).unwrap();
        assert_eq!(a.current(), b.current());
        assert!(a.live_cells() > 0);
    }
}
