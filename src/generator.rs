/*
generator.rs

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

//! Generate random Gridline puzzles.
//!
//! A puzzle is built in three stages:
//!
//! * A random path covering every cell of the grid, represented by a
//!   [`path::Path`] object. You create it with a [`random_path::PathSearch`]
//!   object and its [`random_path::PathSearch::generate`] method, which
//!   backtracks under a wall-clock deadline and orders its moves with one of
//!   the [`strategy::Strategy`] heuristics.
//!
//! * Numbered checkpoints along that path, placed by
//!   [`checkpoints::select_checkpoints`]. Connecting the checkpoints in
//!   ascending order while filling the grid is the puzzle.
//!
//! * A structural audit by [`validator::validate_generated`].
//!
//! [`puzzles::generate_puzzle`] drives the three stages with bounded retries
//! and returns a [`puzzles::Puzzle`]. If every attempt fails, callers use
//! [`puzzles::fallback_puzzle`], which cannot fail.

pub mod checkpoints;
pub mod grid;
pub mod path;
pub mod puzzles;
pub mod random_path;
pub mod strategy;
pub mod validator;
