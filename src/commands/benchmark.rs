//! Benchmark command
//!
//! Generates many puzzles in parallel and checks each one's true distance.

use crate::core::Dictionary;
use crate::ladder::{GeneratorConfig, PathFinder, PuzzleGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub in_range: usize,
    pub out_of_range: usize,
    pub unreachable: usize,
    /// Shortest ladder length → number of puzzles
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles, puzzle `i` seeded with `base_seed + i`
///
/// Seeding each puzzle independently keeps results identical regardless of
/// how rayon schedules the work.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    count: usize,
    base_seed: u64,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("generating puzzles");

    let generator = PuzzleGenerator::new(dictionary);
    let finder = PathFinder::new(dictionary);

    let distances: Vec<Option<usize>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let puzzle = generator.generate_with(&mut rng, config);
            let distance = finder.distance(&puzzle.start, &puzzle.target);
            pb.inc(1);
            distance
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut in_range = 0;
    let mut unreachable = 0;

    for distance in &distances {
        match distance {
            Some(steps) => {
                *distribution.entry(*steps).or_insert(0) += 1;
                if (config.min_distance..=config.max_distance).contains(steps) {
                    in_range += 1;
                }
            }
            None => unreachable += 1,
        }
    }

    let duration = start.elapsed();

    BenchmarkResult {
        total_puzzles: count,
        in_range,
        out_of_range: count - in_range,
        unreachable,
        distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let dictionary = crate::wordlists::embedded_dictionary().unwrap();
        let config = GeneratorConfig::default();

        let result = run_benchmark(&dictionary, &config, 8, 100);

        assert_eq!(result.total_puzzles, 8);
        assert_eq!(result.in_range, 8);
        assert_eq!(result.out_of_range, 0);
        assert_eq!(result.unreachable, 0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = crate::wordlists::embedded_dictionary().unwrap();
        let config = GeneratorConfig::default();

        let result = run_benchmark(&dictionary, &config, 6, 7);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum + result.unreachable, result.total_puzzles);
        for steps in result.distribution.keys() {
            assert!((3..=5).contains(steps));
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let dictionary = crate::wordlists::embedded_dictionary().unwrap();
        let config = GeneratorConfig::default();

        let first = run_benchmark(&dictionary, &config, 4, 42);
        let second = run_benchmark(&dictionary, &config, 4, 42);

        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_counts_fallbacks() {
        let dictionary = Dictionary::from_slices(&["cold", "bump", "fizz"], &[]).unwrap();
        let config = GeneratorConfig {
            max_attempts: 3,
            ..GeneratorConfig::default()
        };

        let result = run_benchmark(&dictionary, &config, 3, 0);

        assert_eq!(result.in_range, 0);
        assert_eq!(result.out_of_range, 3);
        assert_eq!(result.unreachable, 3);
    }

    #[test]
    fn benchmark_empty() {
        let dictionary = crate::wordlists::embedded_dictionary().unwrap();
        let result = run_benchmark(&dictionary, &GeneratorConfig::default(), 0, 0);

        assert_eq!(result.total_puzzles, 0);
        assert!(result.distribution.is_empty());
    }
}
