//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a custom attempt budget
//! - Generate a puzzle from a random or fixed seed
//! - Display the grid, the seed, and where each word was placed
//! - Estimate how often placement fails for a word list and grid size
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- lion tiger bear cub elephant
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <HEX> lion tiger
//! ```
//!
//! Measure the placement failure rate over many seeds (default budget: 10000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 8 --sample 10000 lion tiger elephant
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::WordSet;
use wordsearch_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size (rows and columns).
    #[arg(long, default_value_t = 10)]
    size: u8,

    /// Placement attempts per word.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_attempts: u32,

    /// Seed to generate from (64 hex digits). Random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Generate this many puzzles from random seeds and report the failure rate.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,

    /// Words to place.
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let words = match WordSet::parse(&args.words) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::with_config(GeneratorConfig {
        max_attempts: args.max_attempts,
    });

    if let Some(count) = args.sample {
        if count == 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        let failures = (0..count)
            .into_par_iter()
            .filter(|_| generator.generate(args.size, &words).is_err())
            .count();
        println!("Sampled: {count}");
        println!("Failures: {failures}");
        #[expect(clippy::cast_precision_loss)]
        let rate = failures as f64 / count as f64 * 100.0;
        println!("Failure rate: {rate:.2}%");
        return;
    }

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    match generator.generate_with_seed(args.size, &words, seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for row in puzzle.grid.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", line.join(" "));
    }
    println!();

    println!("Placements:");
    for placement in &puzzle.placements {
        let direction = placement
            .line
            .direction()
            .map_or_else(|| "-".to_owned(), |d| d.to_string());
        println!(
            "  {}: {} -> {} ({direction})",
            placement.word,
            placement.line.start(),
            placement.line.end()
        );
    }
}
