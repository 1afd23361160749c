/*
validator.rs

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

//! Structural audits for generated puzzles and candidate solutions.

use log::debug;
use std::fmt;

use super::checkpoints::Checkpoint;
use super::grid::{Grid, Pos};
use super::path::Path;
use super::puzzles::Puzzle;

/// A rule broken by a candidate solution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolutionError {
    /// Two consecutive cells are not orthogonally adjacent.
    NotContinuous,

    /// A cell lies outside the grid.
    OutOfBounds,

    /// A cell appears more than once.
    DuplicateCell,

    /// The checkpoints are not reached in ascending order.
    CheckpointOrder,

    /// The path does not end on the highest-numbered checkpoint.
    WrongFinalCell,
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolutionError::NotContinuous => write!(f, "the path breaks between two cells"),
            SolutionError::OutOfBounds => write!(f, "the path leaves the grid"),
            SolutionError::DuplicateCell => write!(f, "the path crosses itself"),
            SolutionError::CheckpointOrder => {
                write!(f, "the checkpoints are reached out of order")
            }
            SolutionError::WrongFinalCell => {
                write!(f, "the path does not end on the last checkpoint")
            }
        }
    }
}

/// Result of auditing a candidate solution path.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCheck {
    /// Whether the candidate breaks no rule.
    pub is_valid: bool,

    /// Whether the candidate covers the whole grid.
    pub is_complete: bool,

    /// Broken rules, at most one of each kind.
    pub errors: Vec<SolutionError>,
}

/// Audit a freshly generated candidate puzzle.
///
/// A rejected candidate is silently regenerated by the caller, so the audit
/// only reports pass or fail; the reasons go to the debug log.
pub fn validate_generated(grid: &Grid, path: &Path, checkpoints: &[Checkpoint]) -> bool {
    if path.len() != grid.num_cells() {
        debug!(
            "Rejected: the path covers {} of {} cells",
            path.len(),
            grid.num_cells()
        );
        return false;
    }

    let cells: &[Pos] = path.get();

    if cells.iter().any(|cell| !grid.is_in_bounds(*cell)) {
        debug!("Rejected: the path leaves the grid");
        return false;
    }

    let mut sorted: Vec<Pos> = cells.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != cells.len() {
        debug!("Rejected: duplicated cells in the path");
        return false;
    }

    if cells.windows(2).any(|pair| !pair[0].is_adjacent(pair[1])) {
        debug!("Rejected: the path breaks between two cells");
        return false;
    }

    let mut last_index: Option<usize> = None;
    for (i, checkpoint) in checkpoints.iter().enumerate() {
        if checkpoint.number != i + 1 {
            debug!("Rejected: checkpoint numbers are not contiguous");
            return false;
        }
        match path.position_of(checkpoint.position) {
            Some(index) => {
                if let Some(previous) = last_index
                    && index <= previous
                {
                    debug!(
                        "Rejected: checkpoint {} does not advance along the path",
                        checkpoint.number
                    );
                    return false;
                }
                last_index = Some(index);
            }
            None => {
                debug!("Rejected: checkpoint {} is off the path", checkpoint.number);
                return false;
            }
        }
    }
    true
}

/// Audit a candidate solution against the puzzle.
///
/// The candidate may be a partial path; completeness is reported separately
/// from validity. The path must *end* on the highest-numbered checkpoint:
/// passing through its cell earlier does not count.
pub fn validate_solution(candidate: &Path, puzzle: &Puzzle) -> SolutionCheck {
    let grid: Grid = Grid::new(puzzle.grid_size);
    let cells: &[Pos] = candidate.get();
    let mut errors: Vec<SolutionError> = Vec::new();

    let is_complete: bool = candidate.len() == grid.num_cells();

    if cells.iter().any(|cell| !grid.is_in_bounds(*cell)) {
        errors.push(SolutionError::OutOfBounds);
    }

    if cells.windows(2).any(|pair| !pair[0].is_adjacent(pair[1])) {
        errors.push(SolutionError::NotContinuous);
    }

    let mut sorted: Vec<Pos> = cells.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != cells.len() {
        errors.push(SolutionError::DuplicateCell);
    }

    // The checkpoints present on the path must appear at strictly increasing
    // path indices by number.
    let mut last_index: Option<usize> = None;
    for checkpoint in &puzzle.checkpoints {
        if let Some(index) = candidate.position_of(checkpoint.position) {
            if let Some(previous) = last_index
                && index <= previous
            {
                errors.push(SolutionError::CheckpointOrder);
                break;
            }
            last_index = Some(index);
        }
    }

    if let Some(last_checkpoint) = puzzle.checkpoints.last()
        && candidate.last() != Some(last_checkpoint.position)
    {
        errors.push(SolutionError::WrongFinalCell);
    }

    SolutionCheck {
        is_valid: errors.is_empty(),
        is_complete,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 puzzle with a known solution, built by hand.
    fn square_puzzle() -> Puzzle {
        let solution: Path = Path::from_cells(&[
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(0, 1),
        ]);
        Puzzle {
            id: String::from("test-2x2"),
            grid_size: 2,
            checkpoints: vec![
                Checkpoint {
                    position: Pos::new(0, 0),
                    number: 1,
                },
                Checkpoint {
                    position: Pos::new(1, 1),
                    number: 2,
                },
                Checkpoint {
                    position: Pos::new(0, 1),
                    number: 3,
                },
            ],
            solution_path: solution,
        }
    }

    #[test]
    fn accepts_a_well_formed_candidate() {
        let puzzle: Puzzle = square_puzzle();
        let grid: Grid = Grid::new(2);

        assert!(validate_generated(
            &grid,
            &puzzle.solution_path,
            &puzzle.checkpoints
        ));
    }

    #[test]
    fn rejects_a_short_path() {
        let grid: Grid = Grid::new(2);
        let path: Path = Path::from_cells(&[Pos::new(0, 0), Pos::new(1, 0)]);

        assert!(!validate_generated(&grid, &path, &[]));
    }

    #[test]
    fn rejects_out_of_order_checkpoints() {
        let puzzle: Puzzle = square_puzzle();
        let grid: Grid = Grid::new(2);
        let swapped: Vec<Checkpoint> = vec![
            Checkpoint {
                position: Pos::new(1, 1),
                number: 1,
            },
            Checkpoint {
                position: Pos::new(0, 0),
                number: 2,
            },
        ];

        assert!(!validate_generated(&grid, &puzzle.solution_path, &swapped));
    }

    #[test]
    fn rejects_gapped_numbering() {
        let puzzle: Puzzle = square_puzzle();
        let grid: Grid = Grid::new(2);
        let gapped: Vec<Checkpoint> = vec![
            Checkpoint {
                position: Pos::new(0, 0),
                number: 1,
            },
            Checkpoint {
                position: Pos::new(0, 1),
                number: 3,
            },
        ];

        assert!(!validate_generated(&grid, &puzzle.solution_path, &gapped));
    }

    #[test]
    fn solution_path_passes_its_own_audit() {
        let puzzle: Puzzle = square_puzzle();

        let check: SolutionCheck = validate_solution(&puzzle.solution_path, &puzzle);

        assert!(check.is_valid);
        assert!(check.is_complete);
        assert!(check.errors.is_empty());
    }

    #[test]
    fn partial_path_is_incomplete() {
        let puzzle: Puzzle = square_puzzle();
        let partial: Path = Path::from_cells(&[Pos::new(0, 0), Pos::new(1, 0)]);

        let check: SolutionCheck = validate_solution(&partial, &puzzle);

        assert!(!check.is_complete);
        // Only the final-cell rule fails on a prefix of the solution.
        assert_eq!(check.errors, vec![SolutionError::WrongFinalCell]);
    }

    #[test]
    fn detects_a_discontinuity() {
        let puzzle: Puzzle = square_puzzle();
        let jump: Path = Path::from_cells(&[Pos::new(0, 0), Pos::new(1, 1)]);

        let check: SolutionCheck = validate_solution(&jump, &puzzle);

        assert!(!check.is_valid);
        assert!(check.errors.contains(&SolutionError::NotContinuous));
    }

    #[test]
    fn detects_an_out_of_bounds_cell() {
        let puzzle: Puzzle = square_puzzle();
        let outside: Path = Path::from_cells(&[Pos::new(0, 0), Pos::new(0, 2)]);

        let check: SolutionCheck = validate_solution(&outside, &puzzle);

        assert!(check.errors.contains(&SolutionError::OutOfBounds));
    }

    #[test]
    fn detects_a_repeated_cell() {
        let puzzle: Puzzle = square_puzzle();
        let cells: Vec<Pos> = vec![
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(0, 0),
            Pos::new(0, 1),
        ];
        let repeated: Path = Path::from_cells(&cells);

        let check: SolutionCheck = validate_solution(&repeated, &puzzle);

        assert!(check.errors.contains(&SolutionError::DuplicateCell));
    }

    #[test]
    fn final_cell_must_be_the_last_checkpoint() {
        let puzzle: Puzzle = square_puzzle();
        // Full cover, but running the solution backwards: ends on checkpoint
        // 1 and reaches the checkpoints in descending order.
        let reversed: Path = Path::from_cells(&[
            Pos::new(0, 1),
            Pos::new(1, 1),
            Pos::new(1, 0),
            Pos::new(0, 0),
        ]);

        let check: SolutionCheck = validate_solution(&reversed, &puzzle);

        assert!(check.is_complete);
        assert!(!check.is_valid);
        assert!(check.errors.contains(&SolutionError::WrongFinalCell));
        assert!(check.errors.contains(&SolutionError::CheckpointOrder));
    }
}
