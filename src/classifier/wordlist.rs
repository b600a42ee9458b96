//! Reference English word list
//!
//! One word per line. A default list ships inside the binary; a custom file can
//! be loaded instead. Entries are lowercased on load and never change afterwards.

use crate::error::{CipherError, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Default list, compiled in from `data/words`
const BUILTIN_WORDS: &str = include_str!("../../data/words");

static BUILTIN: OnceLock<Arc<WordList>> = OnceLock::new();

/// An immutable set of lowercase dictionary words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build from line-oriented text. Blank lines are ignored.
    pub fn from_lines(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// The list bundled with the crate, parsed into a fresh set
    pub fn builtin() -> Self {
        Self::from_lines(BUILTIN_WORDS)
    }

    /// The bundled list, parsed on first use and shared afterwards
    pub fn shared_builtin() -> Arc<WordList> {
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Self::builtin())))
    }

    /// Read a word list file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CipherError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_lines(&content);
        debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Whether `word` (already lowercased) is in the list
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_lowercases_and_dedups() {
        let list = WordList::from_lines("The\nthe\n\n  Cat \r\ndog\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("the"));
        assert!(list.contains("cat"));
        assert!(list.contains("dog"));
        assert!(!list.contains("The"));
    }

    #[test]
    fn test_builtin_has_common_words() {
        let list = WordList::builtin();
        assert!(!list.is_empty());
        for word in ["the", "there", "computer", "english", "probably", "wonder"] {
            assert!(list.contains(word), "builtin list is missing {}", word);
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        std::fs::write(&path, "alpha\nBeta\n").unwrap();

        let list = WordList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("beta"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CipherError::WordList { .. }));
    }
}
