//! Word frequency tables.
//!
//! Counts occurrences of vocabulary words and ranks them by frequency.
use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

/// Word counter. Holds word counts (`HashMap<String, u64>`) and the total number of counted words.
///
/// Words are counted as-is (case-sensitive).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frequencies {
    counts: HashMap<String, u64>,
    nb_words: u64,
}

/// A serializable table entry.
#[derive(Debug, Serialize, PartialEq)]
pub struct FrequencyEntry {
    pub rank: usize,
    pub word: String,
    pub frequency: u64,
}

impl Frequencies {
    /// Add 1 to a word count.
    /// Creates the entry if the word is not counted yet.
    #[inline]
    pub fn add(&mut self, word: &str) {
        self.counts
            .entry(word.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);

        self.nb_words += 1;
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of counted occurrences.
    pub fn nb_words(&self) -> u64 {
        self.nb_words
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Words by descending count. Ties are ordered alphabetically.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(word, count)| (word.as_str(), *count))
            .collect()
    }

    /// Entries at positions `start..end` of the ranking (0-based, clamped).
    /// Ranks in the returned entries are 0-based positions.
    pub fn entries(&self, start: usize, end: usize) -> Vec<FrequencyEntry> {
        self.ranked()
            .into_iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(rank, (word, frequency))| FrequencyEntry {
                rank,
                word: word.to_string(),
                frequency,
            })
            .collect()
    }
}
