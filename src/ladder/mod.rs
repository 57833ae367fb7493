//! Ladder search and puzzle construction
//!
//! Shortest-path search over the one-letter-change graph, and the biased
//! generator that turns it into playable puzzles.

pub mod generator;
mod path;

pub use generator::{GeneratorConfig, Puzzle, PuzzleGenerator};
pub use path::{Path, PathFinder};
