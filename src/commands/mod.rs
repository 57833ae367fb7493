//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod path;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GeneratedPuzzle, generate_puzzles};
pub use path::{PathResult, find_ladder};
pub use simple::run_simple;
