//! Shortest ladder command
//!
//! Finds a shortest ladder between two words.

use crate::core::{Dictionary, Word};
use crate::ladder::{Path, PathFinder};
use std::time::{Duration, Instant};

/// Result of a ladder search
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub path: Option<Path>,
    pub duration: Duration,
}

impl PathResult {
    /// Letter changes on the ladder, if one was found
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(Path::steps)
    }
}

/// Search for a shortest ladder from `from` to `to`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not made of ASCII letters
/// - Either word has the wrong length for the dictionary
/// - The target word is not in the dictionary
pub fn find_ladder(dictionary: &Dictionary, from: &str, to: &str) -> Result<PathResult, String> {
    let start = Word::new(from).map_err(|e| format!("Invalid start word: {e}"))?;
    let end = Word::new(to).map_err(|e| format!("Invalid target word: {e}"))?;

    for word in [&start, &end] {
        if word.len() != dictionary.word_length() {
            return Err(format!(
                "Word '{word}' must have {} letters",
                dictionary.word_length()
            ));
        }
    }

    if start != end && !dictionary.contains(end.text()) {
        return Err(format!("Word '{end}' not in word list"));
    }

    let search_start = Instant::now();
    let path = PathFinder::new(dictionary).find_shortest_path(&start, &end);

    Ok(PathResult {
        from: start.text().to_string(),
        to: end.text().to_string(),
        path,
        duration: search_start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_slices(&["cold", "cord", "card", "ward", "warm", "corn", "bump"], &[])
            .unwrap()
    }

    #[test]
    fn finds_ladder() {
        let result = find_ladder(&dictionary(), "COLD", "warm").unwrap();

        assert_eq!(result.from, "cold");
        assert_eq!(result.to, "warm");
        assert_eq!(result.steps(), Some(4));
    }

    #[test]
    fn reports_missing_ladder() {
        let result = find_ladder(&dictionary(), "cold", "bump").unwrap();
        assert!(result.path.is_none());
        assert_eq!(result.steps(), None);
    }

    #[test]
    fn rejects_bad_input() {
        let dictionary = dictionary();

        assert!(find_ladder(&dictionary, "c0ld", "warm").is_err());
        assert!(find_ladder(&dictionary, "cold", "warms").is_err());
        assert!(find_ladder(&dictionary, "cold", "colt").is_err());
    }

    #[test]
    fn same_word_is_zero_steps() {
        let result = find_ladder(&dictionary(), "cold", "cold").unwrap();
        assert_eq!(result.steps(), Some(0));
    }
}
