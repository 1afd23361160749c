/*
path.rs

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

//! Ordered path over grid cells.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::Pos;

/// Path object.
///
/// The path is only ever mutated from its tail (push, pop, truncate), so the
/// visited set stays an exact mirror of the cell list.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Pos>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Pos>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_cells(cells: &[Pos]) -> Self {
        Self {
            path: cells.to_vec(),
            visited: cells.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, pos: Pos) {
        self.path.push(pos);
        self.visited.insert(pos);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(pos) = self.path.pop() {
            self.visited.remove(&pos);
        }
    }

    /// Shorten the path to `len` cells, dropping the tail.
    pub fn truncate(&mut self, len: usize) {
        while self.path.len() > len {
            self.pop();
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, pos: Pos) -> bool {
        self.visited.contains(&pos)
    }

    /// Return the path cells in order.
    pub fn get(&self) -> &[Pos] {
        &self.path
    }

    /// Return the position of the given cell in the path.
    pub fn position_of(&self, pos: Pos) -> Option<usize> {
        self.path.iter().position(|p| *p == pos)
    }

    /// Return the first cell in the path.
    pub fn first(&self) -> Option<Pos> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Pos> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_contains() {
        let mut path: Path = Path::new(4);

        path.push(Pos::new(0, 0));
        path.push(Pos::new(1, 0));

        assert_eq!(path.len(), 2);
        assert!(path.contains(Pos::new(1, 0)));
        assert!(!path.contains(Pos::new(0, 1)));
        assert_eq!(path.first(), Some(Pos::new(0, 0)));
        assert_eq!(path.last(), Some(Pos::new(1, 0)));
    }

    #[test]
    fn pop_unmarks_the_cell() {
        let mut path: Path = Path::new(4);

        path.push(Pos::new(0, 0));
        path.push(Pos::new(1, 0));
        path.pop();

        assert_eq!(path.len(), 1);
        assert!(!path.contains(Pos::new(1, 0)));
        assert!(path.contains(Pos::new(0, 0)));
    }

    #[test]
    fn truncate_unmarks_the_tail() {
        let cells: Vec<Pos> = vec![
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(0, 1),
        ];
        let mut path: Path = Path::from_cells(&cells);

        path.truncate(2);

        assert_eq!(path.len(), 2);
        assert!(path.contains(Pos::new(1, 0)));
        assert!(!path.contains(Pos::new(1, 1)));
        assert!(!path.contains(Pos::new(0, 1)));
        assert_eq!(path.last(), Some(Pos::new(1, 0)));
    }

    #[test]
    fn position_of_cells() {
        let cells: Vec<Pos> = vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)];
        let path: Path = Path::from_cells(&cells);

        assert_eq!(path.position_of(Pos::new(0, 1)), Some(1));
        assert_eq!(path.position_of(Pos::new(1, 0)), None);
    }

    #[test]
    fn clear_empties_both_views() {
        let mut path: Path = Path::from_cells(&[Pos::new(0, 0), Pos::new(1, 0)]);

        path.clear();

        assert!(path.is_empty());
        assert!(!path.contains(Pos::new(0, 0)));
    }
}
