//! Word-stream exercises over a text: split, filter, sort, dedup, reduce.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[- .:,]+").expect("word pattern is a valid regex"));

/// Words of a single line. Delimiters at either end produce no empty word.
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.split(line).filter(|w| !w.is_empty())
}

/// Every word of `text`, line by line.
pub fn words(text: &str) -> Vec<&str> {
    text.lines().flat_map(split_words).collect()
}

pub fn characters<S: AsRef<str>>(words: &[S]) -> Vec<char> {
    words.iter().flat_map(|w| w.as_ref().chars()).collect()
}

fn long_lower(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .flat_map(split_words)
        .filter(|w| w.chars().count() >= 8)
        .map(str::to_lowercase)
}

/// Words of eight or more characters, lower-cased, sorted.
pub fn long_lower_sorted(text: &str) -> Vec<String> {
    long_lower(text).sorted().collect()
}

pub fn long_lower_reverse_sorted(text: &str) -> Vec<String> {
    long_lower(text).sorted_by(|a, b| b.cmp(a)).collect()
}

/// Distinct lower-cased words, shortest first, ties alphabetical.
pub fn distinct_by_length(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .map(str::to_lowercase)
        .unique()
        .sorted_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        })
        .collect()
}

/// `n!`, or `None` once it no longer fits in a `u128` (`n > 34`).
pub fn factorial(n: u32) -> Option<u128> {
    (1..=u128::from(n)).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// The last word of `text`, or `""` when it has none.
pub fn last_word(text: &str) -> &str {
    text.lines()
        .flat_map(split_words)
        .reduce(|_, b| b)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONNET: &str = include_str!("../../data/SonnetI.txt");

    #[test]
    fn test_characters() {
        let result = characters(&["alfa", "bravo", "charlie"]);
        assert_eq!(result.iter().collect::<String>(), "alfabravocharlie");
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn test_split_words_drops_empty() {
        assert_eq!(split_words("  a-b, c. ").collect_vec(), vec!["a", "b", "c"]);
        assert_eq!(split_words("").count(), 0);
        assert_eq!(split_words(",.:").count(), 0);
    }

    #[test]
    fn test_words() {
        assert_eq!(
            words(SONNET),
            vec![
                "From", "fairest", "creatures", "we", "desire", "increase",
                "That", "thereby", "beauty's", "rose", "might", "never", "die",
                "But", "as", "the", "riper", "should", "by", "time", "decease",
                "His", "tender", "heir", "might", "bear", "his", "memory",
                "But", "thou", "contracted", "to", "thine", "own", "bright", "eyes",
                "Feed'st", "thy", "light's", "flame", "with", "self", "substantial", "fuel",
                "Making", "a", "famine", "where", "abundance", "lies",
                "Thy", "self", "thy", "foe", "to", "thy", "sweet", "self", "too", "cruel",
                "Thou", "that", "art", "now", "the", "world's", "fresh", "ornament",
                "And", "only", "herald", "to", "the", "gaudy", "spring",
                "Within", "thine", "own", "bud", "buriest", "thy", "content",
                "And", "tender", "churl", "mak'st", "waste", "in", "niggarding",
                "Pity", "the", "world", "or", "else", "this", "glutton", "be",
                "To", "eat", "the", "world's", "due", "by", "the", "grave", "and", "thee",
            ]
        );
    }

    #[test]
    fn test_long_lower_sorted() {
        assert_eq!(
            long_lower_sorted(SONNET),
            vec![
                "abundance", "beauty's", "contracted", "creatures",
                "increase", "niggarding", "ornament", "substantial",
            ]
        );
    }

    #[test]
    fn test_long_lower_reverse_sorted() {
        assert_eq!(
            long_lower_reverse_sorted(SONNET),
            vec![
                "substantial", "ornament", "niggarding", "increase",
                "creatures", "contracted", "beauty's", "abundance",
            ]
        );
    }

    #[test]
    fn test_distinct_by_length() {
        assert_eq!(
            distinct_by_length(SONNET),
            vec![
                "a", "as", "be", "by", "in", "or", "to", "we",
                "and", "art", "bud", "but", "die", "due", "eat", "foe",
                "his", "now", "own", "the", "thy", "too", "bear", "else",
                "eyes", "from", "fuel", "heir", "lies", "only",
                "pity", "rose", "self", "that", "thee", "this", "thou",
                "time", "with", "churl", "cruel", "flame", "fresh", "gaudy",
                "grave", "might", "never", "riper", "sweet", "thine",
                "waste", "where", "world", "bright", "desire", "famine",
                "herald", "mak'st", "making", "memory", "should", "spring",
                "tender", "within", "buriest", "content", "decease",
                "fairest", "feed'st", "glutton", "light's", "thereby", "world's", "beauty's",
                "increase", "ornament", "abundance", "creatures", "contracted", "niggarding",
                "substantial",
            ]
        );
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(21), Some(51_090_942_171_709_440_000));
        assert_eq!(factorial(0), Some(1));
    }

    #[test]
    fn test_factorial_overflow() {
        assert_eq!(
            factorial(34),
            Some(295_232_799_039_604_140_847_618_609_643_520_000_000)
        );
        assert_eq!(factorial(35), None);
        assert_eq!(factorial(u32::MAX), None);
    }

    #[test]
    fn test_last_word() {
        assert_eq!(last_word(SONNET), "thee");
        assert_eq!(last_word(""), "");
        assert_eq!(last_word(" ,\n.\n"), "");
    }
}
