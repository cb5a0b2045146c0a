//! Word tokenization and sentence counting.
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    /// A sentence starts with an uppercase letter (or a bullet)
    /// and ends with `.`, `:`, `!` or `?` followed by whitespace.
    static ref SENTENCE: Regex = Regex::new(r"[•A-ZÄÖÜ].*?[.:!?]\s").unwrap();

    /// Tokens counted in vocabularies start with one of these.
    static ref VOCABULARY_WORD: Regex = Regex::new(r"^[a-zA-ZÄÜÖäüößéí\d]").unwrap();
}

/// Split `text` into word tokens.
///
/// Tokens follow Unicode word boundaries. Punctuation marks are kept as tokens,
/// whitespace is dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|token| !token.trim().is_empty())
        .collect()
}

pub fn count_sentences(text: &str) -> usize {
    SENTENCE.find_iter(text).count()
}

/// Number of characters in non-punctuation tokens.
pub fn count_letters(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .map(|token| token.chars().count())
        .sum()
}

/// `true` if `token` counts towards vocabulary size.
pub fn is_vocabulary_word(token: &str) -> bool {
    VOCABULARY_WORD.is_match(token)
}

/// Number of distinct vocabulary tokens.
pub fn vocabulary_size(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| is_vocabulary_word(token))
        .collect::<HashSet<_>>()
        .len()
}
