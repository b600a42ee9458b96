//! Caesar shift over the printable ASCII range
//!
//! The alphabet is every code point in `[32, 126]` (space through tilde), 95
//! characters in total. Anything outside that range is passed through
//! untouched, so newlines, tabs and non-ASCII text survive a round trip.

use crate::error::{CipherError, Result};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// First shiftable code point (space)
pub const FIRST_PRINTABLE: u32 = 32;

/// Last shiftable code point (tilde)
pub const LAST_PRINTABLE: u32 = 126;

/// Number of characters in the shiftable alphabet
pub const ALPHABET_SIZE: u32 = LAST_PRINTABLE - FIRST_PRINTABLE + 1;

/// Largest accepted shift magnitude
pub const MAX_SHIFT: i64 = ALPHABET_SIZE as i64 - 1;

/// A validated shift in `[-94, 94]`.
///
/// Construct with [`check_shift`] or `Shift::try_from`; the transform functions
/// only take this type, so an out-of-range value is rejected before any text is
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shift(i32);

impl Shift {
    /// The identity shift
    pub const ZERO: Shift = Shift(0);

    pub fn value(self) -> i32 {
        self.0
    }

    /// The shift that undoes this one
    pub fn inverse(self) -> Shift {
        Shift(-self.0)
    }
}

impl TryFrom<i64> for Shift {
    type Error = CipherError;

    fn try_from(value: i64) -> Result<Self> {
        check_shift(value)
    }
}

impl Neg for Shift {
    type Output = Shift;

    fn neg(self) -> Shift {
        self.inverse()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid number", s))?;
        check_shift(n).map_err(|e| e.to_string())
    }
}

/// Validate a raw shift value
pub fn check_shift(shift: i64) -> Result<Shift> {
    if !(-MAX_SHIFT..=MAX_SHIFT).contains(&shift) {
        return Err(CipherError::InvalidShift(shift));
    }
    Ok(Shift(shift as i32))
}

/// Whether the character takes part in shifting and frequency analysis
pub fn is_shiftable(c: char) -> bool {
    (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&(c as u32))
}

/// Shift a single character, wrapping within the printable range
pub fn shift_char(c: char, shift: Shift) -> char {
    if !is_shiftable(c) {
        return c;
    }

    let mut value = c as i32 + shift.0;
    if value > LAST_PRINTABLE as i32 {
        value -= ALPHABET_SIZE as i32;
    } else if value < FIRST_PRINTABLE as i32 {
        value += ALPHABET_SIZE as i32;
    }

    // |shift| <= 94 keeps one wrap enough to land back in [32, 126]
    char::from_u32(value as u32).unwrap_or(c)
}

/// Shift every character of `text`, preserving order and length
pub fn caesar_shift(text: &str, shift: Shift) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Encrypt with a raw shift value, validating it first
pub fn encrypt(plain_text: &str, shift: i64) -> Result<String> {
    let shift = check_shift(shift)?;
    Ok(caesar_shift(plain_text, shift))
}

/// Decrypt text that was encrypted with `shift`
pub fn decrypt(cipher_text: &str, shift: i64) -> Result<String> {
    let shift = check_shift(shift)?;
    Ok(caesar_shift(cipher_text, shift.inverse()))
}
