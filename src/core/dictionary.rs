//! Read-only word sets for ladder search
//!
//! A dictionary holds two lists:
//! - the guess set: every word accepted as a ladder step
//! - the seed set: common words used to pick puzzles and bias path discovery
//!
//! The seed set does not have to be a subset of the guess set. When it is
//! empty, the guess set doubles as the seed pool.

use super::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for dictionaries that cannot support ladder puzzles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Guess set is empty")]
    Empty,
    #[error("Word '{word}' has {found} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("Seed pool needs at least 2 words to build a puzzle, got {0}")]
    TooFewSeeds(usize),
}

/// Guess set and seed set, built once and shared by reference
#[derive(Debug, Clone)]
pub struct Dictionary {
    guesses: Vec<Word>,
    guess_lookup: FxHashSet<Word>,
    seeds: Vec<Word>,
    seed_lookup: FxHashSet<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from a guess set and a seed set
    ///
    /// Duplicates are dropped, keeping first-seen order, so search order
    /// stays deterministic.
    ///
    /// # Errors
    /// Returns `DictionaryError` if:
    /// - The guess set is empty
    /// - Words do not all share one length
    /// - The seed pool (seed set, or guess set when no seeds are given) has
    ///   fewer than 2 words
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    ///
    /// let words: Vec<Word> = ["cold", "cord", "card"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let dictionary = Dictionary::new(words, Vec::new()).unwrap();
    /// assert!(dictionary.contains("CORD"));
    /// assert_eq!(dictionary.seed_pool().len(), 3);
    /// ```
    pub fn new(guesses: Vec<Word>, seeds: Vec<Word>) -> Result<Self, DictionaryError> {
        let (guesses, guess_lookup) = dedup(guesses);
        let (seeds, seed_lookup) = dedup(seeds);

        let word_length = guesses.first().ok_or(DictionaryError::Empty)?.len();

        if let Some(word) = guesses
            .iter()
            .chain(&seeds)
            .find(|w| w.len() != word_length)
        {
            return Err(DictionaryError::MixedLengths {
                word: word.text().to_string(),
                expected: word_length,
                found: word.len(),
            });
        }

        let dictionary = Self {
            guesses,
            guess_lookup,
            seeds,
            seed_lookup,
            word_length,
        };

        let pool = dictionary.seed_pool().len();
        if pool < 2 {
            return Err(DictionaryError::TooFewSeeds(pool));
        }

        Ok(dictionary)
    }

    /// Build a dictionary from raw string slices, skipping invalid entries
    ///
    /// # Errors
    /// Same conditions as [`Dictionary::new`].
    pub fn from_slices(guesses: &[&str], seeds: &[&str]) -> Result<Self, DictionaryError> {
        use crate::wordlists::loader::words_from_slice;

        Self::new(words_from_slice(guesses), words_from_slice(seeds))
    }

    /// All words accepted as ladder steps, in search order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The curated seed set (may be empty)
    #[inline]
    #[must_use]
    pub fn seeds(&self) -> &[Word] {
        &self.seeds
    }

    /// Words used to choose puzzle endpoints
    ///
    /// The seed set, or the guess set when no seeds were supplied.
    #[must_use]
    pub fn seed_pool(&self) -> &[Word] {
        if self.seeds.is_empty() {
            &self.guesses
        } else {
            &self.seeds
        }
    }

    /// Check whether a word belongs to the seed pool
    #[must_use]
    pub fn in_seed_pool(&self, word: &str) -> bool {
        if self.seeds.is_empty() {
            self.guess_lookup.contains(word)
        } else {
            self.seed_lookup.contains(word)
        }
    }

    /// Case-insensitive guess set membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.guess_lookup.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.guess_lookup.contains(word)
        }
    }

    /// Look up the stored copy of a word in the guess set
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.guess_lookup.get(word.to_ascii_lowercase().as_str())
    }

    /// Length shared by every word in this dictionary
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words in the guess set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Always false: construction rejects an empty guess set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

fn dedup(words: Vec<Word>) -> (Vec<Word>, FxHashSet<Word>) {
    let mut lookup = FxHashSet::default();
    let mut ordered = Vec::with_capacity(words.len());

    for word in words {
        if lookup.insert(word.clone()) {
            ordered.push(word);
        }
    }

    (ordered, lookup)
}
