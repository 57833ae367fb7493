//! One-letter-change adjacency
//!
//! The ladder graph is implicit: two words are connected when they have the
//! same length and differ in exactly one position.

use super::Word;

/// Check whether two words are one letter change apart
///
/// Equal words are not adjacent, which is what forces a ladder forward.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, is_one_off};
///
/// let cold = Word::new("cold").unwrap();
/// let cord = Word::new("cord").unwrap();
/// let card = Word::new("card").unwrap();
///
/// assert!(is_one_off(&cold, &cord));
/// assert!(!is_one_off(&cold, &card));
/// assert!(!is_one_off(&cold, &cold));
/// ```
#[must_use]
pub fn is_one_off(a: &Word, b: &Word) -> bool {
    is_one_off_str(a.text(), b.text())
}

/// String form of [`is_one_off`], used on raw row input
#[must_use]
pub fn is_one_off_str(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x != y {
            diff += 1;
            if diff > 1 {
                return false;
            }
        }
    }

    diff == 1
}

/// Count the positions at which two words differ
///
/// Letters past the end of the shorter word count as differences.
#[must_use]
pub fn letter_diff(a: &str, b: &str) -> usize {
    let positional = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count();
    positional + a.len().abs_diff(b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn one_off_single_change() {
        assert!(is_one_off(&word("cold"), &word("cord")));
        assert!(is_one_off(&word("crane"), &word("crate")));
        assert!(is_one_off(&word("bones"), &word("cones")));
    }

    #[test]
    fn one_off_rejects_identical_words() {
        assert!(!is_one_off(&word("cold"), &word("cold")));
    }

    #[test]
    fn one_off_rejects_multiple_changes() {
        assert!(!is_one_off(&word("cold"), &word("card")));
        assert!(!is_one_off(&word("crane"), &word("slate")));
    }

    #[test]
    fn one_off_rejects_length_mismatch() {
        assert!(!is_one_off(&word("cold"), &word("colds")));
        assert!(!is_one_off_str("", "a"));
    }

    #[test]
    fn one_off_is_symmetric_and_irreflexive() {
        let words: Vec<Word> = ["cold", "cord", "card", "ward", "warm", "corn", "worm"]
            .iter()
            .map(|w| word(w))
            .collect();

        for a in &words {
            assert!(!is_one_off(a, a), "{a} must not be adjacent to itself");
            for b in &words {
                assert_eq!(is_one_off(a, b), is_one_off(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn letter_diff_counts_positions() {
        assert_eq!(letter_diff("cold", "cold"), 0);
        assert_eq!(letter_diff("cold", "cord"), 1);
        assert_eq!(letter_diff("cold", "ward"), 3);
        assert_eq!(letter_diff("cold", "colds"), 1);
        assert_eq!(letter_diff("", "cold"), 4);
    }
}
