//! Puzzle generation command
//!
//! Generates puzzles and pairs each with a shortest ladder for reference.

use crate::core::Dictionary;
use crate::ladder::{GeneratorConfig, Path, PathFinder, Puzzle, PuzzleGenerator};
use rand::Rng;

/// A generated puzzle with one of its shortest ladders
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub solution: Option<Path>,
}

impl GeneratedPuzzle {
    /// Whether the shortest ladder length falls inside the configured bounds
    #[must_use]
    pub fn in_range(&self, config: &GeneratorConfig) -> bool {
        self.solution
            .as_ref()
            .is_some_and(|path| (config.min_distance..=config.max_distance).contains(&path.steps()))
    }
}

/// Generate `count` puzzles from one random source
pub fn generate_puzzles<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    count: usize,
    rng: &mut R,
) -> Vec<GeneratedPuzzle> {
    let generator = PuzzleGenerator::new(dictionary);
    let finder = PathFinder::new(dictionary);

    (0..count)
        .map(|_| {
            let puzzle = generator.generate_with(rng, config);
            let solution = finder.find_shortest_path(&puzzle.start, &puzzle.target);
            GeneratedPuzzle { puzzle, solution }
        })
        .collect()
}
