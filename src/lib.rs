//! Word Ladder
//!
//! A word ladder game: climb from a start word to a target word by changing
//! one letter at a time, with every step a real word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Dictionary, Word};
//! use word_ladder::ladder::PathFinder;
//!
//! let dictionary = Dictionary::from_slices(
//!     &["cold", "cord", "card", "ward", "warm"],
//!     &["cold", "warm"],
//! )
//! .unwrap();
//!
//! let start = Word::new("cold").unwrap();
//! let target = Word::new("warm").unwrap();
//!
//! let path = PathFinder::new(&dictionary)
//!     .find_shortest_path(&start, &target)
//!     .unwrap();
//! assert_eq!(path.to_string(), "cold → cord → card → ward → warm");
//! ```

// Core domain types
pub mod core;

// Path search and puzzle generation
pub mod ladder;

// Game session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
