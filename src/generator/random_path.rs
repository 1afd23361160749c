/*
random_path.rs

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

//! Generate a random path that covers the whole grid.

use log::debug;
use rand::Rng;
use std::time::Instant;

use super::grid::{Grid, Pos};
use super::path::Path;
use super::strategy::{Candidate, Strategy};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PathSearchError {
    /// No full-cover path from this start.
    NoPath,

    /// No path found before the deadline.
    DeadlineExceeded,
}

/// One pending cell of the depth-first search: the ordered candidates for
/// that cell, and the next candidate to try.
#[derive(Debug)]
struct Frame {
    candidates: Vec<Pos>,
    next: usize,
}

/// Backtracking search for a path visiting every grid cell exactly once.
///
/// The search runs over an explicit frame stack, never native recursion, so
/// its depth stays bounded by the number of grid cells. The deadline is
/// re-checked at every step, not only at the top: the search space grows
/// exponentially between checks otherwise.
pub struct PathSearch {
    /// Playing grid.
    grid: Grid,

    /// Neighbor-ordering strategy.
    strategy: Strategy,

    /// Wall-clock instant after which the search must give up.
    deadline: Instant,

    /// Number of steps taken by the last search.
    pub iterations: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,
}

impl PathSearch {
    /// Create the object.
    pub fn new(grid: Grid, strategy: Strategy, deadline: Instant) -> Self {
        Self {
            grid,
            strategy,
            deadline,
            iterations: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a path that starts on `start` and visits every
    /// grid cell exactly once.
    ///
    /// # Errors
    ///
    /// The method returns an error if no such path exists from that start, or
    /// if the deadline expires first. Callers treat both cases as a failed
    /// attempt and can retry with a fresh deadline.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, start: Pos) -> Result<Path, PathSearchError> {
        let began: Instant = Instant::now();
        self.iterations = 0;
        self.duration = 0.0;

        if !self.grid.is_in_bounds(start) {
            return Err(PathSearchError::NoPath);
        }

        let total: usize = self.grid.num_cells();
        let mut path: Path = Path::new(total);
        let mut frames: Vec<Frame> = Vec::with_capacity(total);

        debug!("Start cell = {start}  Number of cells = {total}");
        path.push(start);
        frames.push(self.expand(rng, start, &path));

        // The frame stack mirrors the path: frames[i] holds the pending
        // candidates of path cell i.
        loop {
            if path.len() == total {
                self.duration = began.elapsed().as_secs_f32();
                debug!(
                    "Iterations = {}  Duration = {}",
                    self.iterations, self.duration
                );
                return Ok(path);
            }

            self.iterations += 1;
            if Instant::now() >= self.deadline {
                self.duration = began.elapsed().as_secs_f32();
                debug!("Deadline exceeded after {} iterations", self.iterations);
                return Err(PathSearchError::DeadlineExceeded);
            }

            let chosen: Option<Pos> = match frames.last_mut() {
                Some(frame) => {
                    if frame.next < frame.candidates.len() {
                        let cell: Pos = frame.candidates[frame.next];
                        frame.next += 1;
                        Some(cell)
                    } else {
                        None
                    }
                }
                None => return Err(PathSearchError::NoPath),
            };

            match chosen {
                Some(cell) => {
                    debug!("== Going to cell {cell} (iteration {})", self.iterations);
                    path.push(cell);
                    let frame: Frame = self.expand(rng, cell, &path);
                    frames.push(frame);
                }
                None => {
                    // Dead end: undo this cell and resume with the previous
                    // frame.
                    debug!("    Back: no eligible cell");
                    path.pop();
                    frames.pop();
                    if frames.is_empty() {
                        self.duration = began.elapsed().as_secs_f32();
                        debug!("No path from {start}");
                        return Err(PathSearchError::NoPath);
                    }
                }
            }
        }
    }

    /// Compute and order the unvisited orthogonal neighbors of `cell`.
    fn expand<R: Rng>(&self, rng: &mut R, cell: Pos, path: &Path) -> Frame {
        let candidates: Vec<Candidate> = self
            .grid
            .neighbors4(cell)
            .into_iter()
            .filter(|neighbor| !path.contains(*neighbor))
            .map(|neighbor| Candidate {
                pos: neighbor,
                accessibility: self.unvisited_neighbors(neighbor, path),
            })
            .collect();
        let progress: f64 = path.len() as f64 / self.grid.num_cells() as f64;

        Frame {
            candidates: self.strategy.order_candidates(rng, &candidates, progress),
            next: 0,
        }
    }

    /// Number of still-unvisited orthogonal neighbors of the given cell.
    fn unvisited_neighbors(&self, cell: Pos, path: &Path) -> usize {
        self.grid
            .neighbors4(cell)
            .into_iter()
            .filter(|neighbor| !path.contains(*neighbor))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    fn assert_full_cover(path: &Path, grid: &Grid) {
        assert_eq!(path.len(), grid.num_cells());

        let mut cells: Vec<Pos> = path.get().to_vec();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), grid.num_cells());

        for pair in path.get().windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn single_cell_grid_terminates() {
        let grid: Grid = Grid::new(1);
        let mut search: PathSearch =
            PathSearch::new(grid, Strategy::Random, far_deadline());
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        let path: Path = search.generate(&mut rng, Pos::new(0, 0)).unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn two_by_two_grid_terminates() {
        let grid: Grid = Grid::new(2);
        let mut search: PathSearch =
            PathSearch::new(grid, Strategy::Warnsdorff, far_deadline());
        let mut rng: StdRng = StdRng::seed_from_u64(2);

        let path: Path = search.generate(&mut rng, Pos::new(0, 0)).unwrap();
        assert_full_cover(&path, &grid);
    }

    #[test]
    fn every_strategy_covers_a_small_grid() {
        let grid: Grid = Grid::new(4);

        for (i, strategy) in [
            Strategy::Random,
            Strategy::Warnsdorff,
            Strategy::ProbabilisticWarnsdorff,
            Strategy::TemperatureAnnealed,
            Strategy::SmartFallback,
        ]
        .iter()
        .enumerate()
        {
            let mut search: PathSearch = PathSearch::new(grid, *strategy, far_deadline());
            let mut rng: StdRng = StdRng::seed_from_u64(100 + i as u64);

            let path: Path = search.generate(&mut rng, Pos::new(0, 0)).unwrap();
            assert_full_cover(&path, &grid);
            assert_eq!(path.first(), Some(Pos::new(0, 0)));
        }
    }

    #[test]
    fn expired_deadline_fails_immediately() {
        let grid: Grid = Grid::new(5);
        let mut search: PathSearch =
            PathSearch::new(grid, Strategy::Random, Instant::now());
        let mut rng: StdRng = StdRng::seed_from_u64(3);

        let result: Result<Path, PathSearchError> = search.generate(&mut rng, Pos::new(0, 0));
        assert_eq!(result.unwrap_err(), PathSearchError::DeadlineExceeded);
        // Nothing beyond the start cell was expanded.
        assert_eq!(search.iterations, 1);
    }

    #[test]
    fn out_of_bounds_start_fails() {
        let grid: Grid = Grid::new(3);
        let mut search: PathSearch =
            PathSearch::new(grid, Strategy::Random, far_deadline());
        let mut rng: StdRng = StdRng::seed_from_u64(4);

        let result: Result<Path, PathSearchError> = search.generate(&mut rng, Pos::new(3, 0));
        assert_eq!(result.unwrap_err(), PathSearchError::NoPath);
    }
}
