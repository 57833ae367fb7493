//! Word lists for ladder puzzles
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SEEDS, SEEDS_COUNT};

use crate::core::{Dictionary, DictionaryError};

/// Build the dictionary shipped with the game
///
/// # Errors
///
/// Returns `DictionaryError` only if the embedded lists are malformed.
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_slices(GUESSES, SEEDS)
}
