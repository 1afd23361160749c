/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The session moves through three states: `Empty` until the player draws the
//! first cell, `Drawing` while the path grows and shrinks, and the terminal
//! `Won` once the drawn path passes the solution audit. Every move is checked
//! before it is applied; a rejected move leaves the session untouched.
//!
//! Undoing is scoped by checkpoints: the player can only truncate the path
//! back to cells at or after the last checkpoint satisfied in order, so a
//! stray tap on a distant cell cannot erase the whole drawing. Standing
//! exactly on checkpoint C widens the span back to checkpoint C - 1.
//!
//! A checkpoint cell reached before its lower-numbered predecessors is an
//! ordinary path cell: it does not count as satisfied and does not move the
//! undo span.

use log::debug;
use std::fmt;

use crate::generator::checkpoints::{self, Checkpoint};
use crate::generator::grid::{Grid, Pos};
use crate::generator::path::Path;
use crate::generator::puzzles::Puzzle;
use crate::generator::validator::{self, SolutionCheck};

/// Session states. `Won` is terminal; only [`Game::reset`] leaves it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// No cell drawn yet.
    Empty,

    /// The player is drawing the path.
    Drawing,

    /// The drawn path solved the puzzle.
    Won,
}

/// A rejected move. The session state is unchanged after any of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Start is only legal before any cell is drawn.
    AlreadyStarted,

    /// The first cell must be checkpoint 1.
    NotFirstCheckpoint,

    /// Extend and backtrack are only legal while drawing.
    NotDrawing,

    /// The cell is outside the grid.
    OutOfBounds,

    /// The cell is not orthogonally adjacent to the head of the path.
    NotAdjacent,

    /// The cell is already on the path.
    AlreadyVisited,

    /// The backtrack target is not on the path.
    NotOnPath,

    /// The backtrack target is before the undo span.
    OutOfScope,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::AlreadyStarted => write!(f, "the path is already started"),
            MoveError::NotFirstCheckpoint => write!(f, "the path must start on checkpoint 1"),
            MoveError::NotDrawing => write!(f, "no path is being drawn"),
            MoveError::OutOfBounds => write!(f, "the cell is outside the grid"),
            MoveError::NotAdjacent => write!(f, "the cell is not next to the path head"),
            MoveError::AlreadyVisited => write!(f, "the cell is already on the path"),
            MoveError::NotOnPath => write!(f, "the cell is not on the path"),
            MoveError::OutOfScope => write!(f, "the cell is before the undo span"),
        }
    }
}

/// Interactive solving session for one puzzle.
#[derive(Debug, Clone)]
pub struct Game {
    /// Puzzle being played. Read-only for the whole session.
    puzzle: Puzzle,

    /// Path drawn so far.
    current_path: Path,

    /// Session state.
    state: GameState,

    /// Number of rejected moves so far.
    illegal_moves: usize,
}

impl Game {
    /// Create a [`Game`] object for the provided puzzle.
    pub fn new(puzzle: Puzzle) -> Self {
        let capacity: usize = puzzle.grid_size * puzzle.grid_size;
        Self {
            puzzle,
            current_path: Path::new(capacity),
            state: GameState::Empty,
            illegal_moves: 0,
        }
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the session state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return the path drawn so far.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Return the number of rejected moves so far.
    pub fn illegal_moves(&self) -> usize {
        self.illegal_moves
    }

    /// Forget the drawn path and return to the `Empty` state.
    pub fn reset(&mut self) {
        self.current_path.clear();
        self.state = GameState::Empty;
        self.illegal_moves = 0;
    }

    /// Start drawing on checkpoint 1.
    pub fn start(&mut self, pos: Pos) -> Result<(), MoveError> {
        if let Err(e) = self.check_start(pos) {
            self.illegal_moves += 1;
            debug!("Rejected start at {pos}: {e}");
            return Err(e);
        }
        self.current_path.push(pos);
        self.state = GameState::Drawing;
        Ok(())
    }

    fn check_start(&self, pos: Pos) -> Result<(), MoveError> {
        if self.state != GameState::Empty {
            return Err(MoveError::AlreadyStarted);
        }
        match self.puzzle.checkpoints.first() {
            Some(first) if first.position == pos => Ok(()),
            _ => Err(MoveError::NotFirstCheckpoint),
        }
    }

    /// Extend the path by one cell.
    pub fn extend(&mut self, pos: Pos) -> Result<(), MoveError> {
        if let Err(e) = self.check_extend(pos) {
            self.illegal_moves += 1;
            debug!("Rejected extend to {pos}: {e}");
            return Err(e);
        }
        self.current_path.push(pos);
        Ok(())
    }

    fn check_extend(&self, pos: Pos) -> Result<(), MoveError> {
        if self.state != GameState::Drawing {
            return Err(MoveError::NotDrawing);
        }
        if !Grid::new(self.puzzle.grid_size).is_in_bounds(pos) {
            return Err(MoveError::OutOfBounds);
        }
        match self.current_path.last() {
            Some(head) if head.is_adjacent(pos) => {
                if self.current_path.contains(pos) {
                    Err(MoveError::AlreadyVisited)
                } else {
                    Ok(())
                }
            }
            _ => Err(MoveError::NotAdjacent),
        }
    }

    /// Whether the path may be truncated back to `target`.
    pub fn can_backtrack(&self, target: Pos) -> bool {
        self.check_backtrack(target).is_ok()
    }

    /// Truncate the path so that it ends on `target`.
    ///
    /// The discarded tail is gone: there is no redo.
    pub fn backtrack(&mut self, target: Pos) -> Result<(), MoveError> {
        let index: usize = match self.check_backtrack(target) {
            Ok(index) => index,
            Err(e) => {
                self.illegal_moves += 1;
                debug!("Rejected backtrack to {target}: {e}");
                return Err(e);
            }
        };
        self.current_path.truncate(index + 1);
        Ok(())
    }

    fn check_backtrack(&self, target: Pos) -> Result<usize, MoveError> {
        if self.state != GameState::Drawing {
            return Err(MoveError::NotDrawing);
        }
        let index: usize = match self.current_path.position_of(target) {
            Some(index) => index,
            None => return Err(MoveError::NotOnPath),
        };
        if index < self.backtrack_scope() {
            return Err(MoveError::OutOfScope);
        }
        Ok(index)
    }

    /// First path index that backtracking may target.
    fn backtrack_scope(&self) -> usize {
        let cps: &[Checkpoint] = &self.puzzle.checkpoints;
        let satisfied: usize = checkpoints::satisfied_prefix(cps, &self.current_path);

        // The head sits exactly on the frontier checkpoint: widen the span
        // back to the one before it.
        if let Some(head) = self.current_path.last()
            && let Some(i) = cps.iter().position(|c| c.position == head)
            && satisfied > i
        {
            if i == 0 {
                return 0;
            }
            return self
                .current_path
                .position_of(cps[i - 1].position)
                .unwrap_or(0);
        }

        if satisfied == 0 {
            return 0;
        }
        self.current_path
            .position_of(cps[satisfied - 1].position)
            .unwrap_or(0)
    }

    /// Audit the drawn path as a solution; move to `Won` when it passes.
    pub fn complete(&mut self) -> SolutionCheck {
        let check: SolutionCheck =
            validator::validate_solution(&self.current_path, &self.puzzle);
        if self.state == GameState::Drawing && check.is_valid && check.is_complete {
            debug!("Puzzle {} solved", self.puzzle.id);
            self.state = GameState::Won;
        }
        check
    }
}
