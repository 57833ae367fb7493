//! Core domain types for word ladders
//!
//! Words, the dictionary they come from, and the one-letter-change relation
//! that links them. Everything here is pure and read-only after construction.

mod dictionary;
mod graph;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use graph::{is_one_off, is_one_off_str, letter_diff};
pub use word::{WORD_LENGTH, Word, WordError};
