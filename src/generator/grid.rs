/*
grid.rs

Copyright 2025 Gridline contributors

This file is part of Gridline.

Gridline is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridline is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridline. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid bounds and 4-neighbor adjacency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell position on the grid.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Pos {
    /// Column, from the left.
    pub x: usize,

    /// Row, from the top.
    pub y: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Pos {
    /// Create a [`Pos`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to the other position.
    pub fn manhattan(&self, other: Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the other position is orthogonally adjacent.
    pub fn is_adjacent(&self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

/// Square playing grid.
///
/// The grid carries no cell state. It only answers bounds and adjacency
/// questions for the search and the validators.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Create a [`Grid`] object with `size` cells per side.
    ///
    /// The grid must have at least one cell.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "the grid needs at least one cell per side");
        Self { size }
    }

    /// Number of cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether the position is on the grid.
    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Return the orthogonal in-bounds neighbors of the given position.
    pub fn neighbors4(&self, pos: Pos) -> Vec<Pos> {
        let mut neighbors: Vec<Pos> = Vec::with_capacity(4);

        if pos.x >= 1 {
            neighbors.push(Pos::new(pos.x - 1, pos.y));
        }
        if pos.y >= 1 {
            neighbors.push(Pos::new(pos.x, pos.y - 1));
        }
        if pos.x + 1 < self.size {
            neighbors.push(Pos::new(pos.x + 1, pos.y));
        }
        if pos.y + 1 < self.size {
            neighbors.push(Pos::new(pos.x, pos.y + 1));
        }
        neighbors
    }

    /// The four corner cells. On a 1x1 grid all four are the same cell.
    pub fn corners(&self) -> [Pos; 4] {
        let last: usize = self.size - 1;
        [
            Pos::new(0, 0),
            Pos::new(last, 0),
            Pos::new(0, last),
            Pos::new(last, last),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let grid: Grid = Grid::new(3);

        assert!(grid.is_in_bounds(Pos::new(0, 0)));
        assert!(grid.is_in_bounds(Pos::new(2, 2)));
        assert!(!grid.is_in_bounds(Pos::new(3, 0)));
        assert!(!grid.is_in_bounds(Pos::new(0, 3)));
    }

    #[test]
    fn neighbor_counts() {
        let grid: Grid = Grid::new(3);

        assert_eq!(grid.neighbors4(Pos::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors4(Pos::new(1, 0)).len(), 3);
        assert_eq!(grid.neighbors4(Pos::new(1, 1)).len(), 4);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let grid: Grid = Grid::new(4);
        let center: Pos = Pos::new(2, 1);

        for neighbor in grid.neighbors4(center) {
            assert!(center.is_adjacent(neighbor));
            assert!(grid.is_in_bounds(neighbor));
        }
    }

    #[test]
    fn single_cell_grid() {
        let grid: Grid = Grid::new(1);

        assert_eq!(grid.num_cells(), 1);
        assert!(grid.neighbors4(Pos::new(0, 0)).is_empty());
        assert_eq!(grid.corners(), [Pos::new(0, 0); 4]);
    }

    #[test]
    fn adjacency() {
        assert!(Pos::new(1, 1).is_adjacent(Pos::new(1, 2)));
        assert!(Pos::new(1, 1).is_adjacent(Pos::new(0, 1)));
        assert!(!Pos::new(1, 1).is_adjacent(Pos::new(2, 2)));
        assert!(!Pos::new(1, 1).is_adjacent(Pos::new(1, 1)));
    }
}
