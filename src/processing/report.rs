//! Statistics reports and frequency artifacts.
//!
//! For each dataset, three files are written in the statistics directory:
//! - `statistics_easyGerman_<budget>[_<label>].txt`, the statistics report,
//! - `<dataset>_hist_word_freq.txt`, a bar chart of the most frequent cleaned words,
//! - `<dataset>_words_by_freq.csv`, the frequency table of the cleaned words.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::processing::{Corpus, Dataset, Summary};

/// Ranking positions shown in the bar chart. Position 0 is left out.
pub const CHART_RANKS: (usize, usize) = (1, 25);
/// Ranking positions written to the frequency table. Position 0 is left out.
pub const TABLE_RANKS: (usize, usize) = (1, 50);

const BAR_WIDTH: u64 = 50;

/// Report filename for a token budget and dataset.
pub fn report_filename(max_tokens: usize, dataset: Dataset) -> String {
    match dataset.label() {
        Some(label) => format!("statistics_easyGerman_{}_{}.txt", max_tokens, label),
        None => format!("statistics_easyGerman_{}.txt", max_tokens),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ratio(value: Option<usize>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Report body lines, in their fixed order.
pub fn report_lines(summary: &Summary) -> Vec<String> {
    vec![
        format!("total number of files: {}", summary.files),
        format!("total number of letters: {}", summary.letters),
        format!("total number of words: {}", summary.words),
        format!("total number of sentences: {}", summary.sentences),
        format!("total vocabulary size: {}", summary.vocabulary),
        format!("average number of letters per word: {}", ratio(summary.letters_per_word)),
        format!("average number of words per sentence: {}", ratio(summary.words_per_sentence)),
        String::new(),
        format!("average number of letters per file: {}", summary.average_letters),
        format!("average number of words per file: {}", summary.average_words),
        format!("average number of sentences per file: {}", summary.average_sentences),
        format!("average vocabulary size per file: {}", summary.average_vocabulary),
        String::new(),
        format!("median of the number of letters per file: {:.1}", summary.median_letters),
        format!("median of the number of words per file: {:.1}", summary.median_words),
        format!("median of the number of sentences per file: {:.1}", summary.median_sentences),
        format!("median of the vocabulary size per file: {:.1}", summary.median_vocabulary),
        String::new(),
        format!("maximum number of words per file: {}", summary.max_tokens),
    ]
}

/// Write the statistics report of `corpus`, returning its path.
///
/// An empty corpus gets a "no data" report.
pub fn write_report(corpus: &Corpus, max_tokens: usize, dst: &Path) -> Result<PathBuf, Error> {
    let dataset = corpus.dataset();
    let path = dst.join(report_filename(max_tokens, dataset));
    let mut out = BufWriter::new(File::create(&path)?);

    let title = format!(
        "Dataset EasyGerman {}",
        capitalize(dataset.label().unwrap_or_default())
    );
    writeln!(out, "{}", title.trim_end())?;
    writeln!(out)?;

    match corpus.summary() {
        Some(summary) => {
            for line in report_lines(&summary) {
                info!("[{}] {}", dataset, line);
                writeln!(out, "{}", line)?;
            }
        }
        None => {
            info!("[{}] no data: every document was removed", dataset);
            writeln!(
                out,
                "no data: all {} files were removed by filtering",
                corpus.removed()
            )?;
        }
    }

    out.flush()?;
    Ok(path)
}

/// Write the frequency table of the cleaned vocabulary as csv.
pub fn write_frequency_table(corpus: &Corpus, dst: &Path) -> Result<PathBuf, Error> {
    let path = dst.join(format!("{}_words_by_freq.csv", corpus.dataset().file_stem()));
    let mut out = csv::WriterBuilder::new().from_path(&path)?;

    let (start, end) = TABLE_RANKS;
    for entry in corpus.cleaned_vocabulary().entries(start, end) {
        out.serialize(entry)?;
    }
    out.flush()?;

    Ok(path)
}

/// Write a text bar chart of the most frequent cleaned words.
pub fn write_frequency_chart(corpus: &Corpus, dst: &Path) -> Result<PathBuf, Error> {
    let dataset = corpus.dataset();
    let path = dst.join(format!("{}_hist_word_freq.txt", dataset.file_stem()));
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(
        out,
        "Word frequency of most common cleaned words in {} documents",
        dataset.identifier()
    )?;
    writeln!(out)?;

    let (start, end) = CHART_RANKS;
    let entries = corpus.cleaned_vocabulary().entries(start, end);
    let max = entries.iter().map(|e| e.frequency).max().unwrap_or(0);
    let word_width = entries.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);

    for entry in &entries {
        // rounded up so that every listed word gets at least one mark
        let bar = (entry.frequency * BAR_WIDTH + max - 1) / max;
        writeln!(
            out,
            "{:<width$} | {} {}",
            entry.word,
            "#".repeat(bar as usize),
            entry.frequency,
            width = word_width
        )?;
    }

    out.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn corpus() -> Corpus {
        let mut c = Corpus::new(Dataset::Easy);
        c.push(
            "e0_a.txt".parse().unwrap(),
            "Bus Bus Bus Bahn Bahn Rad und und und und. ".to_string(),
        );
        c
    }

    #[test]
    fn filenames() {
        assert_eq!(
            report_filename(1024, Dataset::Easy),
            "statistics_easyGerman_1024_easy-to-read.txt"
        );
        assert_eq!(report_filename(512, Dataset::All), "statistics_easyGerman_512.txt");
    }

    #[test]
    fn report_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&corpus(), 1024, dir.path()).unwrap();
        let report = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Dataset EasyGerman Easy-to-read");
        assert_eq!(lines[2], "total number of files: 1");
        assert_eq!(lines[4], "total number of words: 11");
        assert_eq!(lines[15], "median of the number of letters per file: 32.0");
        assert_eq!(lines[20], "maximum number of words per file: 11");
    }

    #[test]
    fn empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&Corpus::new(Dataset::All), 1024, dir.path()).unwrap();
        let report = fs::read_to_string(path).unwrap();

        assert!(report.starts_with("Dataset EasyGerman\n"));
        assert!(report.contains("no data"));
        assert!(!report.contains("average"));
    }

    #[test]
    fn table_skips_first_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_frequency_table(&corpus(), dir.path()).unwrap();
        let table = fs::read_to_string(path).unwrap();
        assert_eq!(table, "rank,word,frequency\n1,Bahn,2\n2,Rad,1\n");
    }

    #[test]
    fn chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_frequency_chart(&corpus(), dir.path()).unwrap();
        let chart = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = chart.lines().collect();

        assert!(lines[0].ends_with("in Leichte Sprache documents"));
        assert_eq!(lines[2], format!("Bahn | {} 2", "#".repeat(50)));
        assert_eq!(lines[3], format!("Rad  | {} 1", "#".repeat(25)));
    }
}
