/*
lib.rs

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

//! Gridline: path puzzles on square grids.
//!
//! A Gridline puzzle is a square grid dotted with numbered checkpoints. The
//! player draws a single path that starts on checkpoint 1, visits the
//! checkpoints in ascending order, ends on the last one, and covers every
//! cell of the grid exactly once.
//!
//! The [`generator`] module builds such puzzles: a bounded backtracking
//! search finds a full-cover path, checkpoints are dotted along it, and the
//! result is audited before it is handed out, so every generated puzzle is
//! solvable by construction. The [`game`] module drives an interactive
//! solving session, including the checkpoint-scoped undo; the [`hints`]
//! module derives display-ready hints from the session state.
//!
//! ```
//! use gridline::{GenerationConfig, fallback_puzzle, generate_puzzle};
//!
//! let config = GenerationConfig::default();
//! let mut rng = rand::rng();
//! let puzzle = match generate_puzzle(&mut rng, &config) {
//!     Ok(puzzle) => puzzle,
//!     // Exhaustion is rare; the serpentine fallback always works.
//!     Err(_) => fallback_puzzle(&mut rng, config.grid_size, config.effective_dot_count())
//!         .expect("the default checkpoint count fits the grid"),
//! };
//! assert_eq!(puzzle.solution_path.len(), config.grid_size * config.grid_size);
//! ```

pub mod game;
pub mod generator;
pub mod hints;

pub use game::{Game, GameState, MoveError};
pub use generator::checkpoints::{Checkpoint, CheckpointError, select_checkpoints};
pub use generator::grid::{Grid, Pos};
pub use generator::path::Path;
pub use generator::puzzles::{
    GenerateError, GenerationConfig, Puzzle, default_dot_count, fallback_puzzle, generate_puzzle,
};
pub use generator::random_path::{PathSearch, PathSearchError};
pub use generator::strategy::Strategy;
pub use generator::validator::{SolutionCheck, SolutionError, validate_solution};
pub use hints::{completion_percentage, next_expected_checkpoint};
