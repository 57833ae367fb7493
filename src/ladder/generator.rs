//! Puzzle generation
//!
//! Picks a start word from the seed pool, explores the ladder graph level by
//! level, and chooses a target among seed-pool words whose distance falls in
//! the requested range. Seed-pool neighbours are queued ahead of rare words
//! at each expansion, which nudges the discovered routes towards common words
//! without changing any distance.

use crate::core::{Dictionary, Word, is_one_off};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;

/// Attempts made before falling back to a fixed pair
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Default lower bound on the shortest ladder length of a puzzle
pub const DEFAULT_MIN_DISTANCE: usize = 3;

/// Default upper bound on the shortest ladder length of a puzzle
pub const DEFAULT_MAX_DISTANCE: usize = 5;

/// A start/target pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Word,
    pub target: Word,
}

impl Puzzle {
    #[must_use]
    pub const fn new(start: Word, target: Word) -> Self {
        Self { start, target }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.target)
    }
}

/// Distance bounds and retry budget for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_distance: usize,
    pub max_distance: usize,
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Builds puzzles from a dictionary with an injected random source
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    dictionary: &'a Dictionary,
    max_attempts: usize,
}

impl<'a> PuzzleGenerator<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the number of start words tried before falling back
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate a puzzle using all settings from `config`
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, config: &GeneratorConfig) -> Puzzle {
        self.with_max_attempts(config.max_attempts)
            .generate(rng, config.min_distance, config.max_distance)
    }

    /// Generate a puzzle whose shortest ladder has `min_dist..=max_dist` steps
    ///
    /// Never fails: when no start word in the attempt budget has a suitable
    /// target, the first two seed-pool words are returned instead, whatever
    /// their distance.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_ladder::ladder::{PathFinder, PuzzleGenerator};
    /// use word_ladder::wordlists::embedded_dictionary;
    ///
    /// let dictionary = embedded_dictionary().unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let puzzle = PuzzleGenerator::new(&dictionary).generate(&mut rng, 3, 5);
    /// let steps = PathFinder::new(&dictionary)
    ///     .distance(&puzzle.start, &puzzle.target)
    ///     .unwrap();
    /// assert!((3..=5).contains(&steps));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, min_dist: usize, max_dist: usize) -> Puzzle {
        let pool = self.dictionary.seed_pool();

        for attempt in 1..=self.max_attempts {
            let Some(start) = pool.choose(rng) else {
                break;
            };

            let candidates = self.candidates_from(start, min_dist, max_dist);

            if let Some(&target) = candidates.choose(rng) {
                debug!(
                    "Puzzle {start} → {target} on attempt {attempt} ({} candidates)",
                    candidates.len()
                );
                return Puzzle::new(start.clone(), target.clone());
            }

            debug!("No target {min_dist}..={max_dist} steps from {start} (attempt {attempt})");
        }

        let fallback = self.fallback();
        warn!(
            "No puzzle within {min_dist}..={max_dist} steps after {} attempts, using {fallback}",
            self.max_attempts
        );
        fallback
    }

    /// Seed-pool words whose BFS depth from `start` is within bounds
    ///
    /// Explores the full guess set, stopping expansion at `max_dist`.
    fn candidates_from(&self, start: &'a Word, min_dist: usize, max_dist: usize) -> Vec<&'a Word> {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        visited.insert(start.text());

        let mut queue: VecDeque<(&Word, usize)> = VecDeque::new();
        queue.push_back((start, 0));

        let mut candidates = Vec::new();

        while let Some((word, dist)) = queue.pop_front() {
            if (min_dist..=max_dist).contains(&dist) && self.dictionary.in_seed_pool(word.text()) {
                candidates.push(word);
            }

            if dist >= max_dist {
                continue;
            }

            let mut neighbours: Vec<&Word> = self
                .dictionary
                .guesses()
                .iter()
                .filter(|w| !visited.contains(w.text()) && is_one_off(word, w))
                .collect();

            // Common words first; stable so dictionary order breaks ties
            neighbours.sort_by_key(|w| !self.dictionary.in_seed_pool(w.text()));

            for neighbour in neighbours {
                visited.insert(neighbour.text());
                queue.push_back((neighbour, dist + 1));
            }
        }

        candidates
    }

    /// The first two seed-pool words
    fn fallback(&self) -> Puzzle {
        let pool = self.dictionary.seed_pool();
        // Dictionary construction guarantees at least two pool words
        Puzzle::new(pool[0].clone(), pool[1].clone())
    }
}
