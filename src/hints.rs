/*
hints.rs

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

//! Hint helpers for host interfaces.
//!
//! Pure functions over the puzzle and the drawn path. How the hints are
//! displayed is the host's business.

use crate::generator::checkpoints::{self, Checkpoint};
use crate::generator::path::Path;
use crate::generator::puzzles::Puzzle;

/// The next checkpoint the player has to reach, or `None` once every
/// checkpoint is satisfied in order.
pub fn next_expected_checkpoint(puzzle: &Puzzle, current_path: &Path) -> Option<Checkpoint> {
    let satisfied: usize = checkpoints::satisfied_prefix(&puzzle.checkpoints, current_path);
    puzzle.checkpoints.get(satisfied).copied()
}

/// Share of the grid covered by the drawn path, from 0 to 100.
pub fn completion_percentage(puzzle: &Puzzle, current_path: &Path) -> u8 {
    let total: usize = puzzle.grid_size * puzzle.grid_size;
    if total == 0 {
        return 0;
    }
    ((current_path.len() * 100) / total).min(100) as u8
}
