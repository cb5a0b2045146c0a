/*! Corpus statistics

Collects the surviving (non blacklisted) articles of a directory and computes
per-document and aggregate counts over them.

An empty corpus (every article blacklisted) has no [Summary]:
averages and medians are undefined in that case and are never reported as `0`.
!*/
use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::corpus::{list_documents, DocumentId, FrozenBlacklist};
use crate::error::Error;
use crate::processing::Frequencies;
use crate::text::{
    count_letters, count_sentences, is_content_word, is_vocabulary_word, tokenize,
    vocabulary_size,
};

/// The three document sets statistics are computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Regular,
    Easy,
    All,
}

impl Dataset {
    /// Label used in report filenames. The combined dataset has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Dataset::Regular => Some("regular"),
            Dataset::Easy => Some("easy-to-read"),
            Dataset::All => None,
        }
    }

    /// Human readable name used in frequency artifacts.
    pub fn identifier(&self) -> &'static str {
        match self {
            Dataset::Regular => "Regular German",
            Dataset::Easy => "Leichte Sprache",
            Dataset::All => "all",
        }
    }

    /// Filename-safe version of [Dataset::identifier].
    pub fn file_stem(&self) -> &'static str {
        match self {
            Dataset::Regular => "regular_german",
            Dataset::Easy => "leichte_sprache",
            Dataset::All => "all",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// Counts for a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStats {
    pub tokens: usize,
    pub sentences: usize,
    pub letters: usize,
    pub vocabulary: usize,
}

impl DocumentStats {
    pub fn from_tokens(text: &str, tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.len(),
            sentences: count_sentences(text),
            letters: count_letters(tokens),
            vocabulary: vocabulary_size(tokens),
        }
    }
}

/// An article that passed filtering.
#[derive(Debug, Clone)]
pub struct SurvivingDocument {
    pub id: DocumentId,
    pub text: String,
    pub stats: DocumentStats,
}

/// Surviving articles of a directory, in intake (listing) order, with their word frequencies.
#[derive(Debug, Clone)]
pub struct Corpus {
    dataset: Dataset,
    documents: Vec<SurvivingDocument>,
    removed: usize,
    vocabulary: Frequencies,
    cleaned: Frequencies,
}

impl Corpus {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            documents: Vec::new(),
            removed: 0,
            vocabulary: Frequencies::default(),
            cleaned: Frequencies::default(),
        }
    }

    /// Read every article of `dir` that is not blacklisted.
    pub fn collect(dir: &Path, blacklist: &FrozenBlacklist, dataset: Dataset) -> Result<Self, Error> {
        info!("[{}] computing statistics on {:?}", dataset, dir);
        let mut corpus = Self::new(dataset);

        for doc in list_documents(dir)? {
            if blacklist.contains(&doc.name()) {
                debug!("[{}] skipping blacklisted {}", dataset, doc.id);
                corpus.removed += 1;
                continue;
            }
            let text = doc.read()?;
            corpus.push(doc.id, text);
        }

        info!(
            "[{}] {} documents kept, {} removed",
            dataset,
            corpus.len(),
            corpus.removed
        );
        Ok(corpus)
    }

    /// Tokenize and count a surviving article.
    pub fn push(&mut self, id: DocumentId, text: String) {
        let tokens = tokenize(&text);
        let stats = DocumentStats::from_tokens(&text, &tokens);

        for token in tokens.iter().filter(|t| is_vocabulary_word(t)) {
            self.vocabulary.add(token);
            if is_content_word(token) {
                self.cleaned.add(token);
            }
        }

        self.documents.push(SurvivingDocument {
            id,
            text,
            stats,
        });
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn documents(&self) -> &[SurvivingDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of blacklisted files skipped while collecting.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Frequencies of all vocabulary words.
    pub fn vocabulary(&self) -> &Frequencies {
        &self.vocabulary
    }

    /// Frequencies without stop-words and site credits.
    pub fn cleaned_vocabulary(&self) -> &Frequencies {
        &self.cleaned
    }

    /// Aggregate statistics. `None` if no document survived.
    pub fn summary(&self) -> Option<Summary> {
        let stats: Vec<&DocumentStats> = self.documents.iter().map(|d| &d.stats).collect();
        Summary::new(&stats, self.vocabulary.len())
    }
}

/// Aggregate statistics of a non-empty corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub files: usize,
    pub letters: usize,
    pub words: usize,
    pub sentences: usize,
    pub vocabulary: usize,
    /// `None` when there are no words.
    pub letters_per_word: Option<usize>,
    /// `None` when no sentence was detected.
    pub words_per_sentence: Option<usize>,
    pub average_letters: usize,
    pub average_words: usize,
    pub average_sentences: usize,
    pub average_vocabulary: usize,
    pub median_letters: f64,
    pub median_words: f64,
    pub median_sentences: f64,
    pub median_vocabulary: f64,
    pub max_tokens: usize,
}

impl Summary {
    /// Aggregate per-document counts. `vocabulary` is the corpus-wide vocabulary size.
    ///
    /// Returns `None` for an empty corpus.
    pub fn new(docs: &[&DocumentStats], vocabulary: usize) -> Option<Self> {
        if docs.is_empty() {
            return None;
        }

        let letters: Vec<usize> = docs.iter().map(|d| d.letters).collect();
        let words: Vec<usize> = docs.iter().map(|d| d.tokens).collect();
        let sentences: Vec<usize> = docs.iter().map(|d| d.sentences).collect();
        let vocab: Vec<usize> = docs.iter().map(|d| d.vocabulary).collect();

        let total_letters: usize = letters.iter().sum();
        let total_words: usize = words.iter().sum();
        let total_sentences: usize = sentences.iter().sum();

        Some(Self {
            files: docs.len(),
            letters: total_letters,
            words: total_words,
            sentences: total_sentences,
            vocabulary,
            letters_per_word: ceil_div(total_letters, total_words),
            words_per_sentence: ceil_div(total_words, total_sentences),
            average_letters: mean_ceil(&letters)?,
            average_words: mean_ceil(&words)?,
            average_sentences: mean_ceil(&sentences)?,
            average_vocabulary: mean_ceil(&vocab)?,
            median_letters: median(&letters)?,
            median_words: median(&words)?,
            median_sentences: median(&sentences)?,
            median_vocabulary: median(&vocab)?,
            max_tokens: words.iter().copied().max()?,
        })
    }
}

/// Ceiling of `a / b`. `None` if `b` is zero.
pub fn ceil_div(a: usize, b: usize) -> Option<usize> {
    if b == 0 {
        None
    } else {
        Some((a + b - 1) / b)
    }
}

/// Average rounded up. `None` for an empty slice.
pub fn mean_ceil(values: &[usize]) -> Option<usize> {
    ceil_div(values.iter().sum(), values.len())
}

/// Median, averaging the two middle values for even lengths. `None` for an empty slice.
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    } else {
        Some(sorted[mid] as f64)
    }
}
