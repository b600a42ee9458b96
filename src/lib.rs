//! Caesar - printable-ASCII Caesar cipher with a brute-force decoder
//!
//! Shifts text within the 95-character printable ASCII alphabet and recovers
//! plaintext from ciphertext without the key, using character frequencies to
//! order shift guesses and a dictionary check to recognise English.
//!
//! ```
//! use caesar::{brute_force, decrypt, encrypt};
//!
//! let cipher = encrypt("meet me at the old bridge when the sun goes down", 13)?;
//! assert_eq!(decrypt(&cipher, 13)?, "meet me at the old bridge when the sun goes down");
//! assert_eq!(
//!     brute_force(&cipher).as_deref(),
//!     Some("meet me at the old bridge when the sun goes down")
//! );
//! # Ok::<(), caesar::CipherError>(())
//! ```

pub mod brute_force;
pub mod cipher;
pub mod classifier;
pub mod config;
pub mod error;
pub mod frequency;

pub use brute_force::{brute_force, BruteForcer, Recovered, COMMON_CHARACTERS};
pub use cipher::{caesar_shift, check_shift, decrypt, encrypt, is_shiftable, shift_char, Shift};
pub use classifier::{EnglishClassifier, WordList, DEFAULT_THRESHOLD};
pub use error::{CipherError, Result};
pub use frequency::{character_counts, rank_by_frequency};
