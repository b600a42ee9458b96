//! Brute-force Caesar decoder
//!
//! Guesses the shift by pairing the most frequent ciphertext characters with
//! the most frequent characters of English text, shifting the whole ciphertext
//! for each guess and keeping the first result the [`EnglishClassifier`]
//! accepts. Ordinary English usually resolves on the first few guesses; the
//! worst case is 27 guesses per distinct shiftable character.
//!
//! The search order is fixed: ciphertext characters by descending frequency
//! (first-seen on ties), and for each of them the common characters in
//! [`COMMON_CHARACTERS`] order. When more than one shift would pass the
//! classifier, the earliest in that order wins, in both sequential and
//! parallel mode.

use crate::cipher::{caesar_shift, check_shift, Shift};
use crate::classifier::EnglishClassifier;
use crate::frequency::rank_by_frequency;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, info, trace};

/// Characters of English text, most frequent first
pub const COMMON_CHARACTERS: [char; 27] = [
    ' ', 'e', 't', 'a', 'o', 'i', 'n', 's', 'r', 'h', 'l', 'd', 'c', 'u', 'm', 'f', 'p', 'g', 'w',
    'y', 'b', 'v', 'k', 'x', 'j', 'q', 'z',
];

/// A successful brute-force result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// Shift that was applied to the ciphertext to produce `plaintext`
    pub shift: Shift,
    pub plaintext: String,
}

impl Recovered {
    /// The encryption shift, i.e. what `decrypt` would need
    pub fn key(&self) -> Shift {
        self.shift.inverse()
    }
}

/// Serialized as `{"shift": key, "plaintext": ...}`, reporting the
/// encryption shift so the value can be passed straight to `decrypt -s`.
impl Serialize for Recovered {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Recovered", 2)?;
        state.serialize_field("shift", &self.key().value())?;
        state.serialize_field("plaintext", &self.plaintext)?;
        state.end()
    }
}

/// Frequency-guided brute-force search
#[derive(Debug, Clone, Default)]
pub struct BruteForcer {
    classifier: EnglishClassifier,
    parallel: bool,
}

impl BruteForcer {
    pub fn new(classifier: EnglishClassifier) -> Self {
        Self {
            classifier,
            parallel: false,
        }
    }

    /// Evaluate candidates on the rayon pool. The result is identical to the
    /// sequential search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn classifier(&self) -> &EnglishClassifier {
        &self.classifier
    }

    /// Candidate shifts in the order they are tried
    pub fn candidate_shifts(cipher_text: &str) -> Vec<Shift> {
        let ranked = rank_by_frequency(cipher_text);
        let mut shifts = Vec::with_capacity(ranked.len() * COMMON_CHARACTERS.len());
        for cipher_char in ranked {
            for common in COMMON_CHARACTERS {
                let probable = common as i64 - cipher_char as i64;
                // Both code points are printable, so this never fails in practice
                match check_shift(probable) {
                    Ok(shift) => shifts.push(shift),
                    Err(e) => debug!("Skipping candidate {:?} -> {:?}: {}", cipher_char, common, e),
                }
            }
        }
        shifts
    }

    /// Recover the most likely plaintext, or `None` if no candidate looks like English
    pub fn crack(&self, cipher_text: &str) -> Option<Recovered> {
        let candidates = Self::candidate_shifts(cipher_text);
        debug!(
            "Trying up to {} candidate shifts ({} mode)",
            candidates.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        let found = if self.parallel {
            candidates
                .par_iter()
                .map(|&shift| (shift, caesar_shift(cipher_text, shift)))
                .find_first(|(_, plain)| self.classifier.looks_english(plain))
        } else {
            candidates.iter().find_map(|&shift| {
                let plain = caesar_shift(cipher_text, shift);
                trace!("shift {:>3}: score {:.2}", shift, self.classifier.score(&plain));
                self.classifier
                    .looks_english(&plain)
                    .then_some((shift, plain))
            })
        };

        match found {
            Some((shift, plaintext)) => {
                info!("Recovered plaintext with shift {}", shift);
                Some(Recovered { shift, plaintext })
            }
            None => {
                info!("No candidate shift produced English text");
                None
            }
        }
    }
}

/// Brute-force with the built-in word list and default threshold
pub fn brute_force(cipher_text: &str) -> Option<String> {
    BruteForcer::default()
        .crack(cipher_text)
        .map(|recovered| recovered.plaintext)
}
