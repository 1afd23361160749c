/*
puzzles.rs

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

//! Puzzle representation and generation.
//!
//! A puzzle is a grid size, a solution path covering every grid cell, and
//! numbered checkpoints along that path. [`generate_puzzle`] produces one by
//! running up to [`GenerationConfig::max_attempts`] independent attempts;
//! each attempt searches a random path within a wall-clock budget, dots it
//! with [`super::checkpoints::select_checkpoints`], and audits the candidate
//! with [`super::validator::validate_generated`]. A failed attempt is retried
//! silently; only full exhaustion surfaces to the caller, who can fall back
//! to the always-valid [`fallback_puzzle`].

use chrono::Utc;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

use super::checkpoints::{self, Checkpoint, CheckpointError};
use super::grid::{Grid, Pos};
use super::path::Path;
use super::random_path::PathSearch;
use super::strategy::Strategy;
use super::validator;

/// Default search budget per attempt.
const DEFAULT_ATTEMPT_TIMEOUT_MS: u64 = 5000;

/// Capped search budget for the fast preset.
const FAST_ATTEMPT_TIMEOUT_MS: u64 = 3000;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The requested checkpoint count can never fit the grid.
    InvalidDotCount,

    /// Every attempt failed.
    Exhausted,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::InvalidDotCount => {
                write!(f, "the checkpoint count does not fit the grid")
            }
            GenerateError::Exhausted => write!(f, "every generation attempt failed"),
        }
    }
}

/// A ready-to-play puzzle.
///
/// Built only by [`generate_puzzle`] or [`fallback_puzzle`], and never
/// modified afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Puzzle {
    /// Unique puzzle identifier.
    pub id: String,

    /// Width and height of the square grid.
    pub grid_size: usize,

    /// Numbered checkpoints in ascending order.
    pub checkpoints: Vec<Checkpoint>,

    /// Full solution path.
    pub solution_path: Path,
}

/// Parameters for puzzle generation.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Width and height of the square grid.
    pub grid_size: usize,

    /// Number of checkpoints. `None` selects the per-size default from
    /// [`default_dot_count`].
    pub dot_count: Option<usize>,

    /// Neighbor-ordering strategy for the path search.
    pub strategy: Strategy,

    /// Number of independent attempts before giving up.
    pub max_attempts: usize,

    /// Search budget per attempt.
    pub attempt_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            dot_count: None,
            strategy: Strategy::default(),
            max_attempts: 8,
            attempt_timeout: Duration::from_millis(DEFAULT_ATTEMPT_TIMEOUT_MS),
        }
    }
}

impl GenerationConfig {
    /// Preset with the search budget capped for interactive callers.
    pub fn fast(grid_size: usize) -> Self {
        Self {
            grid_size,
            strategy: Strategy::SmartFallback,
            max_attempts: 5,
            attempt_timeout: Duration::from_millis(FAST_ATTEMPT_TIMEOUT_MS),
            ..Self::default()
        }
    }

    /// Effective checkpoint count for the configuration.
    pub fn effective_dot_count(&self) -> usize {
        match self.dot_count {
            Some(count) => count,
            None => default_dot_count(self.grid_size),
        }
    }
}

/// Default checkpoint count for a grid size.
pub fn default_dot_count(grid_size: usize) -> usize {
    match grid_size {
        3 => 4,
        4 => 6,
        5 => 8,
        6 => 10,
        7 => 12,
        8 => 15,
        n => (3 * n).div_ceil(2),
    }
}

/// Generate a puzzle.
///
/// Each attempt starts from a random grid corner; corner starts maximize the
/// odds that a full-cover path exists within the budget. No state is shared
/// between attempts.
///
/// # Errors
///
/// The method returns [`GenerateError::Exhausted`] when every attempt failed
/// (the caller can then use [`fallback_puzzle`]), and
/// [`GenerateError::InvalidDotCount`] when the requested checkpoint count can
/// never fit, which no amount of retrying would fix.
pub fn generate_puzzle<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<Puzzle, GenerateError> {
    let grid: Grid = Grid::new(config.grid_size);
    let dot_count: usize = config.effective_dot_count();

    if dot_count < 2 || dot_count > grid.num_cells() {
        return Err(GenerateError::InvalidDotCount);
    }

    for attempt in 0..config.max_attempts {
        let corners: [Pos; 4] = grid.corners();
        let start: Pos = corners[rng.random_range(0..corners.len())];
        debug!("Attempt {attempt}: starting from {start}");

        let deadline: Instant = Instant::now() + config.attempt_timeout;
        let mut search: PathSearch = PathSearch::new(grid, config.strategy, deadline);

        let path: Path = match search.generate(rng, start) {
            Ok(path) => path,
            Err(e) => {
                // A timed-out or exhausted attempt is retried, not surfaced.
                debug!("Attempt {attempt}: search failed: {e:?}");
                continue;
            }
        };

        let selected: Result<Vec<Checkpoint>, CheckpointError> =
            checkpoints::select_checkpoints(rng, &path, dot_count);
        let selected: Vec<Checkpoint> = match selected {
            Ok(selected) => selected,
            Err(e) => {
                debug!("Attempt {attempt}: checkpoint selection failed: {e:?}");
                continue;
            }
        };

        if !validator::validate_generated(&grid, &path, &selected) {
            debug!("Attempt {attempt}: candidate rejected by the structural audit");
            continue;
        }

        return Ok(Puzzle {
            id: new_puzzle_id(rng),
            grid_size: config.grid_size,
            checkpoints: selected,
            solution_path: path,
        });
    }
    Err(GenerateError::Exhausted)
}

/// Build the fallback puzzle used when generation is exhausted.
///
/// The solution sweeps the rows serpentine style, which covers any grid, so
/// the construction cannot fail. Only the checkpoint jitter consumes
/// randomness.
///
/// # Errors
///
/// `dot_count` must be between 2 and the number of grid cells.
pub fn fallback_puzzle<R: Rng>(
    rng: &mut R,
    grid_size: usize,
    dot_count: usize,
) -> Result<Puzzle, GenerateError> {
    let grid: Grid = Grid::new(grid_size);
    if dot_count < 2 || dot_count > grid.num_cells() {
        return Err(GenerateError::InvalidDotCount);
    }

    let path: Path = serpentine_path(grid_size);
    let selected: Vec<Checkpoint> = checkpoints::select_checkpoints(rng, &path, dot_count)
        .map_err(|_| GenerateError::InvalidDotCount)?;

    debug!("Using the serpentine fallback for a {grid_size}x{grid_size} grid");
    Ok(Puzzle {
        id: new_puzzle_id(rng),
        grid_size,
        checkpoints: selected,
        solution_path: path,
    })
}

/// Path sweeping the grid row by row, alternating the direction.
fn serpentine_path(grid_size: usize) -> Path {
    let mut path: Path = Path::new(grid_size * grid_size);
    for y in 0..grid_size {
        if y % 2 == 0 {
            for x in 0..grid_size {
                path.push(Pos::new(x, y));
            }
        } else {
            for x in (0..grid_size).rev() {
                path.push(Pos::new(x, y));
            }
        }
    }
    path
}

/// Puzzle identifier: millisecond timestamp plus a random suffix.
fn new_puzzle_id<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}-{:04x}",
        Utc::now().timestamp_millis(),
        rng.random_range(0..0x1_0000u32)
    )
}
