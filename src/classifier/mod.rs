//! English plausibility classifier
//!
//! Scores a candidate plaintext by the share of its distinct space-separated
//! tokens that appear in a reference word list. Used by the brute-force search
//! to decide when a guessed shift has produced readable text.
//!
//! Tokenization is deliberately crude:
//! - split on single `' '` characters only, so newlines stay inside tokens
//! - drop repeated tokens (exact, case-sensitive) keeping the first
//! - strip ASCII punctuation and `\n` from both ends, then lowercase
//! - a token counts only if it is longer than one character

mod wordlist;

pub use wordlist::WordList;

use crate::error::{CipherError, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// Score at or above which text is considered English
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Characters trimmed from both ends of each token
const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '\n',
];

/// Decides whether a candidate plaintext looks like English
#[derive(Debug, Clone)]
pub struct EnglishClassifier {
    words: Arc<WordList>,
    threshold: f64,
}

impl EnglishClassifier {
    pub fn new(words: Arc<WordList>) -> Self {
        Self {
            words,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Replace the acceptance threshold (must be within `[0, 1]`)
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CipherError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Fraction of distinct tokens found in the word list, in `[0, 1]`.
    ///
    /// Returns 0 when there are no tokens at all.
    pub fn score(&self, text: &str) -> f64 {
        let tokens = distinct_tokens(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let english = tokens
            .iter()
            .map(|token| normalize(token))
            .filter(|word| word.chars().count() > 1 && self.words.contains(word))
            .count();

        english as f64 / tokens.len() as f64
    }

    /// Whether the score reaches the threshold
    pub fn looks_english(&self, text: &str) -> bool {
        self.score(text) >= self.threshold
    }
}

impl Default for EnglishClassifier {
    fn default() -> Self {
        Self::new(WordList::shared_builtin())
    }
}

/// Space-separated tokens with exact duplicates removed, first occurrence kept
fn distinct_tokens(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    text.split(' ').filter(|token| seen.insert(*token)).collect()
}

fn normalize(token: &str) -> String {
    token.trim_matches(PUNCTUATION).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(words: &str) -> EnglishClassifier {
        EnglishClassifier::new(Arc::new(WordList::from_lines(words)))
    }

    #[test]
    fn test_distinct_tokens() {
        assert_eq!(
            distinct_tokens("to be or not to Be"),
            vec!["to", "be", "or", "not", "Be"]
        );
        assert_eq!(distinct_tokens(""), vec![""]);
        assert_eq!(distinct_tokens("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("\"Hello,\n"), "hello");
        assert_eq!(normalize("(No"), "no");
        assert_eq!(normalize("don't!"), "don't");
        assert_eq!(normalize("cried,\n\"My"), "cried,\n\"my");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_probably_english_true() {
        let text = "This is a test of the probably english function.
It needs to be a certain length for an good guess to be made.";
        assert!(EnglishClassifier::default().looks_english(text));
    }

    #[test]
    fn test_probably_english_false() {
        let text = "Dies ist ein Test der wahrscheinlich englischen Funktion.
Es muss eine bestimmte Länge haben, damit eine gute Vermutung angestellt werden kann.";
        assert!(!EnglishClassifier::default().looks_english(text));
    }

    #[test]
    fn test_threshold_boundary() {
        let c = classifier("cat\ndog\nfish");
        // 3 of 5 distinct tokens match: exactly 0.6
        assert_eq!(c.score("cat dog fish qqq zzz"), 0.6);
        assert!(c.looks_english("cat dog fish qqq zzz"));
        // 2 of 4: below
        assert!(!c.looks_english("cat dog qqq zzz"));
    }

    #[test]
    fn test_single_letters_never_count() {
        let c = classifier("a\ni\nok");
        assert_eq!(c.score("a i ok"), 1.0 / 3.0);
    }

    #[test]
    fn test_duplicates_shrink_denominator() {
        let c = classifier("cat");
        assert_eq!(c.score("cat xyz xyz xyz"), 0.5);
        // case-sensitive dedup: both spellings count separately
        assert_eq!(c.score("cat Cat xyz"), 2.0 / 3.0);
    }

    #[test]
    fn test_empty_and_blank_text() {
        let c = EnglishClassifier::default();
        assert_eq!(c.score(""), 0.0);
        assert!(!c.looks_english(""));
        assert!(!c.looks_english("   "));
    }

    #[test]
    fn test_with_threshold() {
        let c = classifier("cat").with_threshold(0.5).unwrap();
        assert!(c.looks_english("cat dog"));
        assert!(classifier("cat").with_threshold(1.5).is_err());
        assert!(classifier("cat").with_threshold(-0.1).is_err());
    }
}
