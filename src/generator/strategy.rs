/*
strategy.rs

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

//! Neighbor-ordering strategies for the path search.
//!
//! The search tries candidate cells in the order the strategy produces.
//! Ordering by increasing accessibility (Warnsdorff's rule) completes large
//! grids faster; random orderings produce more varied paths. The blended
//! strategies trade between the two.

use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::grid::Pos;

/// A candidate next cell for the search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Cell under consideration.
    pub pos: Pos,

    /// Number of still-unvisited orthogonal neighbors of the cell.
    pub accessibility: usize,
}

/// Neighbor-ordering strategy.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    ValueEnum,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Uniformly random ordering.
    Random,

    /// Most-constrained cell first; moving into the cell with the fewest
    /// onward options avoids stranding low-degree cells.
    Warnsdorff,

    /// Warnsdorff bias kept, but sampled, so that one start does not always
    /// produce the same path.
    ProbabilisticWarnsdorff,

    /// Random ordering early in the fill, Warnsdorff-biased sampling late.
    #[default]
    TemperatureAnnealed,

    /// Random ordering while the neighborhood is unconstrained, sampling
    /// otherwise.
    SmartFallback,
}

impl Strategy {
    /// Order the candidate cells in the order the search must try them.
    ///
    /// `progress` is the fraction of grid cells already on the path, between
    /// 0 and 1.
    pub fn order_candidates<R: Rng>(
        &self,
        rng: &mut R,
        candidates: &[Candidate],
        progress: f64,
    ) -> Vec<Pos> {
        match self {
            Strategy::Random => order_random(rng, candidates),
            Strategy::Warnsdorff => order_warnsdorff(rng, candidates),
            Strategy::ProbabilisticWarnsdorff => order_weighted(rng, candidates),
            Strategy::TemperatureAnnealed => {
                // The probability of a fully random ordering decays linearly
                // from 0.9 on an empty grid to 0.2 on a full one.
                let p_random: f64 = 0.9 - 0.7 * progress;
                if rng.random_bool(p_random.clamp(0.0, 1.0)) {
                    order_random(rng, candidates)
                } else {
                    order_weighted(rng, candidates)
                }
            }
            Strategy::SmartFallback => {
                if candidates.len() >= 3 {
                    order_random(rng, candidates)
                } else {
                    order_weighted(rng, candidates)
                }
            }
        }
    }
}

/// Fisher-Yates shuffle of the candidates.
fn order_random<R: Rng>(rng: &mut R, candidates: &[Candidate]) -> Vec<Pos> {
    let mut cells: Vec<Pos> = candidates.iter().map(|c| c.pos).collect();
    cells.shuffle(rng);
    cells
}

/// Ascending accessibility. Ties are broken randomly: the stable sort keeps
/// the shuffled order within equal keys.
fn order_warnsdorff<R: Rng>(rng: &mut R, candidates: &[Candidate]) -> Vec<Pos> {
    let mut cells: Vec<Candidate> = candidates.to_vec();
    cells.shuffle(rng);
    cells.sort_by_key(|c| c.accessibility);
    cells.iter().map(|c| c.pos).collect()
}

/// Weighted draw without replacement.
///
/// The weight `0.4^accessibility + 0.2` favors constrained cells the way
/// Warnsdorff's rule does; the 0.2 floor and the per-candidate 20% wobble
/// keep every ordering reachable.
fn order_weighted<R: Rng>(rng: &mut R, candidates: &[Candidate]) -> Vec<Pos> {
    let mut pool: Vec<(Pos, f64)> = candidates
        .iter()
        .map(|c| {
            let weight: f64 = 0.4f64.powi(c.accessibility as i32) + 0.2;
            (c.pos, weight * rng.random_range(0.8..1.2))
        })
        .collect();

    let mut ordered: Vec<Pos> = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let total: f64 = pool.iter().map(|c| c.1).sum();
        let mut ticket: f64 = rng.random_range(0.0..total);
        let mut drawn: usize = pool.len() - 1;
        for (i, c) in pool.iter().enumerate() {
            if ticket < c.1 {
                drawn = i;
                break;
            }
            ticket -= c.1;
        }
        ordered.push(pool.swap_remove(drawn).0);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_candidates() -> Vec<Candidate> {
        vec![
            Candidate {
                pos: Pos::new(1, 0),
                accessibility: 3,
            },
            Candidate {
                pos: Pos::new(0, 1),
                accessibility: 1,
            },
            Candidate {
                pos: Pos::new(2, 1),
                accessibility: 2,
            },
            Candidate {
                pos: Pos::new(1, 2),
                accessibility: 1,
            },
        ]
    }

    fn is_permutation(ordered: &[Pos], candidates: &[Candidate]) -> bool {
        let mut left: Vec<Pos> = ordered.to_vec();
        let mut right: Vec<Pos> = candidates.iter().map(|c| c.pos).collect();
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }

    #[test]
    fn every_strategy_permutes_the_candidates() {
        let candidates: Vec<Candidate> = sample_candidates();
        let strategies: [Strategy; 5] = [
            Strategy::Random,
            Strategy::Warnsdorff,
            Strategy::ProbabilisticWarnsdorff,
            Strategy::TemperatureAnnealed,
            Strategy::SmartFallback,
        ];

        for (i, strategy) in strategies.iter().enumerate() {
            let mut rng: StdRng = StdRng::seed_from_u64(i as u64);
            for progress in [0.0, 0.5, 1.0] {
                let ordered: Vec<Pos> = strategy.order_candidates(&mut rng, &candidates, progress);
                assert!(
                    is_permutation(&ordered, &candidates),
                    "{strategy} did not permute the candidates"
                );
            }
        }
    }

    #[test]
    fn warnsdorff_visits_constrained_cells_first() {
        let candidates: Vec<Candidate> = sample_candidates();

        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let ordered: Vec<Pos> =
                Strategy::Warnsdorff.order_candidates(&mut rng, &candidates, 0.0);

            // Accessibility 1 cells first, then 2, then 3.
            let accessibility_of = |pos: Pos| -> usize {
                candidates
                    .iter()
                    .find(|c| c.pos == pos)
                    .map(|c| c.accessibility)
                    .unwrap_or(0)
            };
            let keys: Vec<usize> = ordered.iter().map(|p| accessibility_of(*p)).collect();
            assert_eq!(keys, vec![1, 1, 2, 3]);
        }
    }

    #[test]
    fn warnsdorff_breaks_ties_randomly() {
        let candidates: Vec<Candidate> = sample_candidates();
        let mut firsts: Vec<Pos> = Vec::new();

        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let ordered: Vec<Pos> =
                Strategy::Warnsdorff.order_candidates(&mut rng, &candidates, 0.0);
            firsts.push(ordered[0]);
        }

        // Two cells tie at accessibility 1; over 20 seeds both must show up.
        assert!(firsts.contains(&Pos::new(0, 1)));
        assert!(firsts.contains(&Pos::new(1, 2)));
    }

    #[test]
    fn ordering_handles_empty_and_single_candidate_lists() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let single: Vec<Candidate> = vec![Candidate {
            pos: Pos::new(0, 0),
            accessibility: 0,
        }];

        for strategy in [
            Strategy::Random,
            Strategy::Warnsdorff,
            Strategy::ProbabilisticWarnsdorff,
            Strategy::TemperatureAnnealed,
            Strategy::SmartFallback,
        ] {
            assert!(strategy.order_candidates(&mut rng, &[], 0.5).is_empty());
            assert_eq!(
                strategy.order_candidates(&mut rng, &single, 0.5),
                vec![Pos::new(0, 0)]
            );
        }
    }
}
