//! Character frequency analysis
//!
//! Counts shiftable characters and ranks them by descending count. Ties keep
//! the order in which characters were first seen, which fixes the order the
//! brute-force search tries candidate shifts in.

use crate::cipher::is_shiftable;
use indexmap::IndexMap;

/// Occurrence counts of each shiftable character, most frequent first.
///
/// Characters with equal counts appear in first-seen order.
pub fn character_counts(text: &str) -> Vec<(char, usize)> {
    let mut counts: IndexMap<char, usize> = IndexMap::new();
    for c in text.chars().filter(|&c| is_shiftable(c)) {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
    // sort_by is stable, so insertion order survives for equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Distinct shiftable characters of `text`, most frequent first
pub fn rank_by_frequency(text: &str) -> Vec<char> {
    character_counts(text).into_iter().map(|(c, _)| c).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_frequency() {
        assert_eq!(
            rank_by_frequency("ffffffeeeeeddddcccbba "),
            vec!['f', 'e', 'd', 'c', 'b', 'a', ' ']
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        assert_eq!(rank_by_frequency("zyx"), vec!['z', 'y', 'x']);
        assert_eq!(rank_by_frequency(" a a"), vec![' ', 'a']);
        assert_eq!(rank_by_frequency("baab"), vec!['b', 'a']);
    }

    #[test]
    fn test_skips_unshiftable() {
        let ranked = rank_by_frequency("\n\n\n\tåå a");
        assert_eq!(ranked, vec![' ', 'a']);
    }

    #[test]
    fn test_empty_text() {
        assert!(rank_by_frequency("").is_empty());
        assert!(character_counts("\n\n").is_empty());
    }

    #[test]
    fn test_character_counts() {
        assert_eq!(
            character_counts("hello world"),
            vec![
                ('l', 3),
                ('o', 2),
                ('h', 1),
                ('e', 1),
                (' ', 1),
                ('w', 1),
                ('r', 1),
                ('d', 1)
            ]
        );
    }
}
