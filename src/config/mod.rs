//! Configuration module for caesar
//!
//! This module handles:
//! - User-level configuration (~/.config/caesar/config.toml)
//! - Environment overrides for the word list and threshold

mod user_config;

pub use user_config::{
    ClassifierConfig, SearchConfig, UserConfig, THRESHOLD_ENV, WORDLIST_ENV,
};
