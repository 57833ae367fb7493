//! Shortest ladder search
//!
//! Unweighted breadth-first search over the implicit one-letter-change graph.
//! Adjacency is tested against the whole guess set for every expanded node,
//! so a search costs O(dictionary size × nodes visited).

use crate::core::{Dictionary, Word, is_one_off};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::fmt;

/// An ordered ladder of words, each one letter away from the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    words: Vec<Word>,
}

impl Path {
    /// Build a path from already-linked words
    ///
    /// Returns `None` if the list is empty or two neighbours are not one
    /// letter apart.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() || !words.windows(2).all(|pair| is_one_off(&pair[0], &pair[1])) {
            return None;
        }
        Some(Self { words })
    }

    fn single(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// The words of the ladder, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume the path, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Number of words, endpoints included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a path holds at least its start word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of letter changes (edges) along the ladder
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// First word of the ladder
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the ladder
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// The word after the start, if the ladder has any steps
    #[must_use]
    pub fn next_step(&self) -> Option<&Word> {
        self.words.get(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Breadth-first ladder search over a dictionary's guess set
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> PathFinder<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// `start` does not need to be in the dictionary; every later word does.
    /// When several shortest ladders exist, the first one discovered in
    /// dictionary order is returned.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    /// use word_ladder::ladder::PathFinder;
    ///
    /// let dictionary = Dictionary::from_slices(
    ///     &["cold", "cord", "card", "ward", "warm", "corn"],
    ///     &[],
    /// )
    /// .unwrap();
    ///
    /// let finder = PathFinder::new(&dictionary);
    /// let path = finder
    ///     .find_shortest_path(&Word::new("cold").unwrap(), &Word::new("warm").unwrap())
    ///     .unwrap();
    /// assert_eq!(path.steps(), 4);
    /// ```
    #[must_use]
    pub fn find_shortest_path(&self, start: &Word, end: &Word) -> Option<Path> {
        if start == end {
            return Some(Path::single(start.clone()));
        }

        let mut visited: FxHashSet<&str> = FxHashSet::default();
        visited.insert(start.text());

        let mut parents: FxHashMap<&str, &Word> = FxHashMap::default();
        let mut frontier: VecDeque<&Word> = VecDeque::new();
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            if current == end {
                let path = reconstruct(&parents, current);
                debug!(
                    "Found {}-step ladder {start} → {end} after visiting {} words",
                    path.steps(),
                    visited.len()
                );
                return Some(path);
            }

            for word in self.dictionary.guesses() {
                if !visited.contains(word.text()) && is_one_off(current, word) {
                    visited.insert(word.text());
                    parents.insert(word.text(), current);
                    frontier.push_back(word);
                }
            }
        }

        debug!(
            "No ladder {start} → {end} ({} words reachable)",
            visited.len()
        );
        None
    }

    /// Number of letter changes on a shortest ladder, if one exists
    #[must_use]
    pub fn distance(&self, start: &Word, end: &Word) -> Option<usize> {
        self.find_shortest_path(start, end).map(|path| path.steps())
    }
}

/// Walk the predecessor map back from `end` to the search root
fn reconstruct(parents: &FxHashMap<&str, &Word>, end: &Word) -> Path {
    let mut words = vec![end.clone()];
    let mut cursor = end;

    while let Some(&parent) = parents.get(cursor.text()) {
        words.push(parent.clone());
        cursor = parent;
    }

    words.reverse();
    Path { words }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &[&str] = &["cold", "cord", "card", "ward", "warm", "corn"];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &Path) -> Vec<&str> {
        path.words().iter().map(Word::text).collect()
    }

    /// Plain BFS distance table from `start`, used as an independent oracle
    fn oracle_distances(dictionary: &Dictionary, start: &Word) -> FxHashMap<String, usize> {
        let mut distances = FxHashMap::default();
        distances.insert(start.text().to_string(), 0);
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(current) = queue.pop_front() {
            let next = distances[current.text()] + 1;
            for candidate in dictionary.guesses() {
                if !distances.contains_key(candidate.text()) && is_one_off(&current, candidate) {
                    distances.insert(candidate.text().to_string(), next);
                    queue.push_back(candidate.clone());
                }
            }
        }

        distances
    }

    #[test]
    fn finds_scenario_ladder() {
        let dictionary = Dictionary::from_slices(SCENARIO, SCENARIO).unwrap();
        let finder = PathFinder::new(&dictionary);

        let path = finder
            .find_shortest_path(&word("cold"), &word("warm"))
            .unwrap();

        assert_eq!(texts(&path), vec!["cold", "cord", "card", "ward", "warm"]);
        assert_eq!(path.len(), 5);
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn same_word_is_single_element_path() {
        let dictionary = Dictionary::from_slices(SCENARIO, &[]).unwrap();
        let finder = PathFinder::new(&dictionary);

        let path = finder
            .find_shortest_path(&word("cold"), &word("cold"))
            .unwrap();

        assert_eq!(texts(&path), vec!["cold"]);
        assert_eq!(path.steps(), 0);
        assert_eq!(path.next_step(), None);
    }

    #[test]
    fn unreachable_target_returns_none() {
        let dictionary = Dictionary::from_slices(&["cold", "cord", "bump", "bums"], &[]).unwrap();
        let finder = PathFinder::new(&dictionary);

        assert!(finder.find_shortest_path(&word("cold"), &word("bump")).is_none());
        assert_eq!(finder.distance(&word("cold"), &word("bump")), None);
    }

    #[test]
    fn target_outside_dictionary_returns_none() {
        let dictionary = Dictionary::from_slices(SCENARIO, &[]).unwrap();
        let finder = PathFinder::new(&dictionary);

        assert!(finder.find_shortest_path(&word("cold"), &word("colt")).is_none());
    }

    #[test]
    fn start_outside_dictionary_is_allowed() {
        let dictionary = Dictionary::from_slices(SCENARIO, &[]).unwrap();
        let finder = PathFinder::new(&dictionary);

        let path = finder
            .find_shortest_path(&word("bold"), &word("cord"))
            .unwrap();
        assert_eq!(texts(&path), vec!["bold", "cold", "cord"]);
    }

    #[test]
    fn prefers_shortcut_over_long_way_round() {
        let dictionary = Dictionary::from_slices(
            &["cold", "cord", "card", "ward", "warm", "word", "worm"],
            &[],
        )
        .unwrap();
        let finder = PathFinder::new(&dictionary);

        let path = finder
            .find_shortest_path(&word("cold"), &word("warm"))
            .unwrap();
        assert_eq!(path.steps(), 4);

        let path = finder
            .find_shortest_path(&word("cold"), &word("worm"))
            .unwrap();
        assert_eq!(texts(&path), vec!["cold", "cord", "word", "worm"]);
    }

    #[test]
    fn every_path_is_valid_and_minimal() {
        let words = &[
            "cold", "cord", "card", "ward", "warm", "corn", "word", "worm", "worn", "born", "barn",
            "bard", "bump",
        ];
        let dictionary = Dictionary::from_slices(words, &[]).unwrap();
        let finder = PathFinder::new(&dictionary);

        for start in dictionary.guesses() {
            let distances = oracle_distances(&dictionary, start);

            for end in dictionary.guesses() {
                match finder.find_shortest_path(start, end) {
                    Some(path) => {
                        assert_eq!(path.start(), start);
                        assert_eq!(path.end(), end);
                        assert!(
                            path.words().windows(2).all(|p| is_one_off(&p[0], &p[1])),
                            "broken ladder {path}"
                        );
                        assert_eq!(Some(&path.steps()), distances.get(end.text()));
                    }
                    None => assert!(!distances.contains_key(end.text())),
                }
            }
        }
    }

    #[test]
    fn embedded_dictionary_ladder() {
        let dictionary = crate::wordlists::embedded_dictionary().unwrap();
        let finder = PathFinder::new(&dictionary);

        let path = finder
            .find_shortest_path(&word("cared"), &word("hints"))
            .unwrap();

        assert_eq!(path.start().text(), "cared");
        assert_eq!(path.end().text(), "hints");
        assert!(path.words().iter().all(|w| dictionary.contains(w.text())));
        assert!(path.words().windows(2).all(|p| is_one_off(&p[0], &p[1])));
    }

    #[test]
    fn path_new_validates_links() {
        assert!(Path::new(vec![word("cold"), word("cord"), word("card")]).is_some());
        assert!(Path::new(vec![word("cold"), word("card")]).is_none());
        assert!(Path::new(Vec::new()).is_none());
    }

    #[test]
    fn path_display() {
        let path = Path::new(vec![word("cold"), word("cord")]).unwrap();
        assert_eq!(path.to_string(), "cold → cord");
    }
}
