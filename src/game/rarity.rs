//! Target word rarity badge

use crate::core::Word;
use std::fmt;

/// Letters that make a word feel unusual
const RARE_LETTERS: &[u8] = b"jqxzvk";

/// How unusual a word looks, judged by its rare letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// Classify a word: no rare letters is common, one is rare, more is legendary
    #[must_use]
    pub fn of(word: &Word) -> Self {
        let count = word
            .chars()
            .iter()
            .filter(|c| RARE_LETTERS.contains(c))
            .count();

        match count {
            0 => Self::Common,
            1 => Self::Rare,
            _ => Self::Legendary,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Common => "📄",
            Self::Rare => "💎",
            Self::Legendary => "🦄",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Legendary => "Legendary",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rarity(text: &str) -> Rarity {
        Rarity::of(&Word::new(text).unwrap())
    }

    #[test]
    fn classifies_by_rare_letter_count() {
        assert_eq!(rarity("bones"), Rarity::Common);
        assert_eq!(rarity("knife"), Rarity::Rare);
        assert_eq!(rarity("jokes"), Rarity::Legendary);
        assert_eq!(rarity("vivid"), Rarity::Legendary);
    }

    #[test]
    fn display_names() {
        assert_eq!(Rarity::Rare.to_string(), "Rare");
        assert_eq!(Rarity::Legendary.emoji(), "🦄");
    }
}
