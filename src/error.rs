//! Error types for the cipher core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the cipher core
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Shift must be between -94 and +94, got {0}")]
    InvalidShift(i64),

    #[error("Failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, CipherError>;
