/*
checkpoints.rs

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

//! Checkpoint placement along a solved path.
//!
//! A checkpoint is a numbered cell that the player must reach in ascending
//! order. The first and last path cells always carry the first and last
//! checkpoints; the intermediate checkpoints are spread along the path and
//! nudged by a small random offset, so that two puzzles built over the same
//! path do not dot the same cells.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Pos;
use super::path::Path;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum CheckpointError {
    /// The requested number of checkpoints does not fit the path.
    InvalidDotCount,
}

/// A numbered waypoint on the solution path.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Cell holding the checkpoint.
    pub position: Pos,

    /// Checkpoint number, starting from 1.
    pub number: usize,
}

/// Place `dot_count` numbered checkpoints along the path.
///
/// Checkpoint 1 is pinned to the first path cell and checkpoint `dot_count`
/// to the last one. The intermediate checkpoints start evenly spaced and are
/// then jittered forward, never crossing the next checkpoint.
///
/// The returned checkpoints sit at strictly increasing path indices, on
/// unique cells, numbered contiguously from 1.
///
/// # Errors
///
/// `dot_count` must be between 2 and the number of path cells.
pub fn select_checkpoints<R: Rng>(
    rng: &mut R,
    path: &Path,
    dot_count: usize,
) -> Result<Vec<Checkpoint>, CheckpointError> {
    let len: usize = path.len();
    if dot_count < 2 || dot_count > len {
        return Err(CheckpointError::InvalidDotCount);
    }

    let spacing: usize = (len - 1) / (dot_count - 1);
    let mut indices: Vec<usize> = Vec::with_capacity(dot_count);

    indices.push(0);
    for number in 2..dot_count {
        let spaced: usize = (number * spacing).min(len - 2);
        // The clamp above can collide with the previous checkpoint; keep the
        // indices strictly increasing.
        let floor: usize = indices[indices.len() - 1] + 1;
        indices.push(spaced.max(floor));
    }
    indices.push(len - 1);

    // The forward repair can run past the tail when dot_count is close to
    // the path length; walk back and keep every index below its successor.
    for i in (1..dot_count - 1).rev() {
        let cap: usize = indices[i + 1] - 1;
        if indices[i] > cap {
            indices[i] = cap;
        }
    }

    // Jitter the intermediate checkpoints forward inside the open interval
    // between their neighbors.
    for i in 1..dot_count - 1 {
        let width: usize = indices[i + 1] - indices[i - 1] - 1;
        let max_offset: usize = (width / 3).min(3);
        if max_offset == 0 {
            continue;
        }
        let offset: usize = rng.random_range(0..=max_offset);
        indices[i] = (indices[i] + offset).min(indices[i + 1] - 1);
    }

    debug!("Checkpoint indices = {indices:?}");

    let cells: &[Pos] = path.get();
    Ok(indices
        .iter()
        .enumerate()
        .map(|(i, index)| Checkpoint {
            position: cells[*index],
            number: i + 1,
        })
        .collect())
}

/// Number of checkpoints already satisfied in ascending order by the path.
///
/// The scan stops at the first checkpoint whose position is missing from the
/// path: a higher-numbered checkpoint reached before its predecessor counts
/// as an ordinary path cell, not as satisfied.
pub fn satisfied_prefix(checkpoints: &[Checkpoint], path: &Path) -> usize {
    let mut satisfied: usize = 0;
    for checkpoint in checkpoints {
        if !path.contains(checkpoint.position) {
            break;
        }
        satisfied += 1;
    }
    satisfied
}
