//! User-level configuration for caesar
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/caesar/config.toml

use crate::brute_force::BruteForcer;
use crate::classifier::{EnglishClassifier, WordList, DEFAULT_THRESHOLD};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Environment variable naming a word list file
pub const WORDLIST_ENV: &str = "CAESAR_WORDLIST";

/// Environment variable overriding the classifier threshold
pub const THRESHOLD_ENV: &str = "CAESAR_THRESHOLD";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Word list file, one word per line (default: built-in list)
    pub wordlist: Option<PathBuf>,

    /// Minimum share of dictionary words for text to count as English
    pub threshold: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Evaluate brute-force candidates in parallel
    pub parallel: Option<bool>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/caesar/config.toml)
    pub fn load() -> Self {
        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            match Self::load_file(&path) {
                Ok(user_config) => {
                    debug!("Loaded user config from {}", path.display());
                    config.merge(user_config);
                }
                Err(e) => warn!("Failed to load {}: {}", path.display(), e),
            }
        }

        config.apply_env();
        config
    }

    /// Parse a single TOML config file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("caesar").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: UserConfig) {
        if other.classifier.wordlist.is_some() {
            self.classifier.wordlist = other.classifier.wordlist;
        }
        if other.classifier.threshold.is_some() {
            self.classifier.threshold = other.classifier.threshold;
        }
        if other.search.parallel.is_some() {
            self.search.parallel = other.search.parallel;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(WORDLIST_ENV) {
            if !path.is_empty() {
                self.classifier.wordlist = Some(PathBuf::from(path));
            }
        }
        if let Ok(raw) = std::env::var(THRESHOLD_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(threshold) => self.classifier.threshold = Some(threshold),
                Err(_) => warn!("Ignoring {}={:?}: not a number", THRESHOLD_ENV, raw),
            }
        }
    }

    pub fn threshold(&self) -> f64 {
        self.classifier.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn parallel(&self) -> bool {
        self.search.parallel.unwrap_or(false)
    }

    /// Where the word list comes from, for display
    pub fn wordlist_source(&self) -> String {
        match &self.classifier.wordlist {
            Some(path) => path.display().to_string(),
            None => "(built-in)".to_string(),
        }
    }

    /// Load the configured word list, falling back to the shared built-in one
    pub fn word_list(&self) -> Result<Arc<WordList>> {
        match &self.classifier.wordlist {
            Some(path) => WordList::load(path).map(Arc::new),
            None => Ok(WordList::shared_builtin()),
        }
    }

    /// Build a brute-forcer from the effective settings
    pub fn brute_forcer(&self) -> Result<BruteForcer> {
        let classifier =
            EnglishClassifier::new(self.word_list()?).with_threshold(self.threshold())?;
        debug!(
            "Classifier ready: {} words, threshold {}",
            classifier.words().len(),
            classifier.threshold()
        );
        Ok(BruteForcer::new(classifier).with_parallel(self.parallel()))
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_example(&config_path)?;
        Ok(config_path)
    }

    /// Write the commented example config unless a file already exists
    pub fn write_example(config_path: &Path) -> anyhow::Result<bool> {
        if config_path.exists() {
            return Ok(false);
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example = r#"# Caesar User Configuration

[classifier]
# Word list used to recognise English, one word per line (default: built-in)
# wordlist = "/usr/share/dict/words"

# Share of distinct words that must be in the word list (0.0 - 1.0)
# threshold = 0.6

[search]
# Try brute-force candidates on all cores; results are identical
# parallel = false
"#;
        std::fs::write(config_path, example)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert_eq!(config.threshold(), 0.6);
        assert!(!config.parallel());
        assert_eq!(config.wordlist_source(), "(built-in)");
        assert!(config.word_list().unwrap().contains("the"));
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[classifier]
wordlist = "/tmp/words"
threshold = 0.75

[search]
parallel = true
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.classifier.wordlist.as_deref(),
            Some(Path::new("/tmp/words"))
        );
        assert_eq!(config.threshold(), 0.75);
        assert!(config.parallel());
    }

    #[test]
    fn test_toml_partial() {
        let config: UserConfig = toml::from_str("[search]\nparallel = true\n").unwrap();
        assert!(config.parallel());
        assert_eq!(config.threshold(), 0.6);
        assert!(config.classifier.wordlist.is_none());
    }

    #[test]
    fn test_merge_other_takes_priority() {
        let mut base: UserConfig = toml::from_str("[classifier]\nthreshold = 0.5\n").unwrap();
        let other: UserConfig = toml::from_str("[search]\nparallel = true\n").unwrap();
        base.merge(other);
        assert_eq!(base.threshold(), 0.5);
        assert!(base.parallel());

        let override_threshold: UserConfig =
            toml::from_str("[classifier]\nthreshold = 0.9\n").unwrap();
        base.merge(override_threshold);
        assert_eq!(base.threshold(), 0.9);
    }

    #[test]
    fn test_brute_forcer_rejects_bad_threshold() {
        let config: UserConfig = toml::from_str("[classifier]\nthreshold = 2.0\n").unwrap();
        assert!(matches!(
            config.brute_forcer(),
            Err(CipherError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_default_brute_forcer_reuses_builtin_list() {
        let config = UserConfig::default();
        let a = config.word_list().unwrap();
        let b = config.word_list().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let forcer = config.brute_forcer().unwrap();
        assert!(std::ptr::eq(forcer.classifier().words(), &*a));
    }

    #[test]
    fn test_brute_forcer_with_custom_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words");
        std::fs::write(&words, "hello\nworld\n").unwrap();

        let mut config = UserConfig::default();
        config.classifier.wordlist = Some(words);
        let forcer = config.brute_forcer().unwrap();
        assert_eq!(forcer.classifier().words().len(), 2);

        let cipher = crate::cipher::encrypt("hello world", 5).unwrap();
        let recovered = forcer.crack(&cipher).unwrap();
        assert_eq!(recovered.plaintext, "hello world");
    }

    #[test]
    fn test_write_example_is_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caesar").join("config.toml");
        assert!(UserConfig::write_example(&path).unwrap());
        assert!(!UserConfig::write_example(&path).unwrap());

        let config = UserConfig::load_file(&path).unwrap();
        assert!(config.classifier.threshold.is_none());
        assert!(config.search.parallel.is_none());
    }
}
