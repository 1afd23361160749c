/*
cli_options.rs

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

//! Process command-line options.
//!
//! The `gridline` binary is a developer and demo tool: it generates puzzles
//! and prints them as a small text grid or as JSON, with optional statistics
//! about the search.
//!
//! # Examples
//!
//! Generate a 6x6 puzzle and print the checkpoint grid:
//!
//! ```text
//! $ gridline --grid-size 6
//! # 1762905219473-00f3
//!   1   .   .   .   2   .
//!   .   .   .   .   .   .
//!   .   4   3   .   .   .
//!   .   5   .   .   .   .
//!   .   .   6   .   9   10
//!   .   7   .   8   .   .
//! ```
//!
//! Generate three puzzles with the Warnsdorff ordering and print statistics:
//!
//! ```text
//! $ gridline -g 8 -c 3 -s warnsdorff --summary
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::time::{Duration, Instant};

use gridline::generator::grid::Pos;
use gridline::generator::puzzles::{self, GenerateError, GenerationConfig, Puzzle};
use gridline::generator::strategy::Strategy;

/// Generate Gridline puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Width and height of the square grid
    #[arg(short, long, default_value_t = 5)]
    grid_size: usize,

    /// Number of checkpoints (defaults to the per-size table)
    #[arg(short, long)]
    dots: Option<usize>,

    /// Neighbor-ordering strategy for the path search
    #[arg(value_enum, short, long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Attempts per puzzle before giving up
    #[arg(long, default_value_t = 8)]
    max_attempts: usize,

    /// Search budget per attempt, in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Use the serpentine fallback puzzle when generation is exhausted
    #[arg(long, default_value_t = false)]
    fallback: bool,

    /// Print puzzles as JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Parse the command line and generate the requested puzzles.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: GenerationConfig = GenerationConfig {
        grid_size: args.grid_size,
        dot_count: args.dots,
        strategy: args.strategy,
        max_attempts: args.max_attempts,
        attempt_timeout: Duration::from_millis(args.timeout_ms),
    };

    let mut rng = rand::rng();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut fallbacks: usize = 0;
    let mut generated: usize = 0;

    while generated < args.count {
        debug!("Puzzle {generated}");
        let begin: Instant = Instant::now();

        match puzzles::generate_puzzle(&mut rng, &config) {
            Ok(puzzle) => {
                let duration: f32 = begin.elapsed().as_secs_f32();
                total += duration;
                if duration > max {
                    max = duration;
                }
                print_puzzle(&puzzle, args.json);
                generated += 1;
            }
            Err(GenerateError::InvalidDotCount) => {
                eprintln!(
                    "The checkpoint count does not fit a {0}x{0} grid",
                    args.grid_size
                );
                return 1;
            }
            Err(GenerateError::Exhausted) => {
                if !args.fallback {
                    eprintln!("Gave up after {} attempts", args.max_attempts);
                    return 1;
                }
                match puzzles::fallback_puzzle(
                    &mut rng,
                    args.grid_size,
                    config.effective_dot_count(),
                ) {
                    Ok(puzzle) => {
                        fallbacks += 1;
                        print_puzzle(&puzzle, args.json);
                        generated += 1;
                    }
                    Err(e) => {
                        eprintln!("Cannot build the fallback puzzle: {e}");
                        return 1;
                    }
                }
            }
        }
    }

    if args.summary {
        println!(
            "
    total time = {}s
  average time = {}s
      max time = {}s
     fallbacks = {}",
            total,
            total / args.count as f32,
            max,
            fallbacks
        );
    }
    0
}

/// Print a puzzle in the requested format.
fn print_puzzle(puzzle: &Puzzle, json: bool) {
    if json {
        match serde_json::to_string_pretty(puzzle) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Cannot serialize the puzzle: {e}"),
        }
        return;
    }

    println!("# {}", puzzle.id);
    for y in 0..puzzle.grid_size {
        let mut row: String = String::new();
        for x in 0..puzzle.grid_size {
            let pos: Pos = Pos::new(x, y);
            match puzzle.checkpoints.iter().find(|c| c.position == pos) {
                Some(checkpoint) => row.push_str(&format!("{:>3} ", checkpoint.number)),
                None => row.push_str("  . "),
            }
        }
        println!("{}", row.trim_end());
    }

    let solution: Vec<String> = puzzle
        .solution_path
        .get()
        .iter()
        .map(|pos| pos.to_string())
        .collect();
    println!("solution: {}", solution.join(" "));
    println!();
}
