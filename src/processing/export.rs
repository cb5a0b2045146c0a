/*! Parallel corpus export

Surviving regular and easy articles are joined on their document id into a two-column table
(`Regular German`, `Leichte Sprache`). Rows follow the intake order of the regular articles.

Joining on the id rather than on position keeps rows aligned even when
one directory lacks an article the other one has. Such orphans are logged and left out.
!*/
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::corpus::DocumentId;
use crate::error::Error;
use crate::processing::Corpus;

pub const HEADERS: [&str; 2] = ["Regular German", "Leichte Sprache"];

/// Number of rows of the sample corpus.
pub const SAMPLE_SIZE: usize = 100;

/// Aligned article pairs.
#[derive(Debug)]
pub struct ParallelCorpus<'a> {
    rows: Vec<(&'a str, &'a str)>,
    orphans: usize,
}

impl<'a> ParallelCorpus<'a> {
    /// Join `regular` and `easy` survivors on their document id.
    ///
    /// Pair indices restart at 0 in every scrape batch, so the filename suffix is part of the key.
    pub fn pair(regular: &'a Corpus, easy: &'a Corpus) -> Self {
        let easy_by_id: HashMap<&DocumentId, &str> = easy
            .documents()
            .iter()
            .map(|doc| (&doc.id, doc.text.as_str()))
            .collect();

        let mut orphans = 0;
        let mut rows = Vec::with_capacity(regular.len());
        for doc in regular.documents() {
            match easy_by_id.get(&doc.id.counterpart()) {
                Some(easy_text) => rows.push((doc.text.as_str(), *easy_text)),
                None => {
                    warn!("{} has no easy counterpart, left out of the export", doc.id);
                    orphans += 1;
                }
            }
        }

        let paired: HashSet<DocumentId> = regular
            .documents()
            .iter()
            .map(|d| d.id.counterpart())
            .collect();
        for doc in easy.documents() {
            if !paired.contains(&doc.id) {
                warn!("{} has no regular counterpart, left out of the export", doc.id);
                orphans += 1;
            }
        }

        Self { rows, orphans }
    }

    pub fn rows(&self) -> &[(&'a str, &'a str)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Survivors without a counterpart.
    pub fn orphans(&self) -> usize {
        self.orphans
    }

    /// Write at most `limit` rows as csv.
    pub fn write(&self, dst: &Path, limit: Option<usize>) -> Result<(), Error> {
        let mut out = csv::WriterBuilder::new().from_path(dst)?;
        out.write_record(HEADERS)?;

        let limit = limit.unwrap_or(self.rows.len());
        for (regular, easy) in self.rows.iter().take(limit) {
            out.write_record([regular, easy])?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Files written by [export].
#[derive(Debug)]
pub struct Export {
    pub rows: usize,
    pub orphans: usize,
    pub full: PathBuf,
    pub sample: PathBuf,
}

/// Write `EasyGerman_<budget>.csv` and its first [SAMPLE_SIZE] rows as `EasyGerman_<budget>_small.csv`.
pub fn export(regular: &Corpus, easy: &Corpus, max_tokens: usize, dst: &Path) -> Result<Export, Error> {
    let corpus = ParallelCorpus::pair(regular, easy);

    let full = dst.join(format!("EasyGerman_{}.csv", max_tokens));
    let sample = dst.join(format!("EasyGerman_{}_small.csv", max_tokens));

    info!("writing {} pairs to {:?}", corpus.len(), full);
    corpus.write(&full, None)?;
    corpus.write(&sample, Some(SAMPLE_SIZE))?;

    Ok(Export {
        rows: corpus.len(),
        orphans: corpus.orphans(),
        full,
        sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Dataset;

    fn corpus(dataset: Dataset, names: &[&str]) -> Corpus {
        let mut c = Corpus::new(dataset);
        for name in names {
            c.push(name.parse().unwrap(), format!("Text von {}.", name));
        }
        c
    }

    #[test]
    fn rows_follow_intake_order() {
        let regular = corpus(Dataset::Regular, &["r10_a.txt", "r2_a.txt"]);
        let easy = corpus(Dataset::Easy, &["e2_a.txt", "e10_a.txt"]);

        let pc = ParallelCorpus::pair(&regular, &easy);
        assert_eq!(
            pc.rows(),
            &[
                ("Text von r10_a.txt.", "Text von e10_a.txt."),
                ("Text von r2_a.txt.", "Text von e2_a.txt."),
            ]
        );
        assert_eq!(pc.orphans(), 0);
    }

    #[test]
    fn orphans_are_left_out() {
        let regular = corpus(Dataset::Regular, &["r0_a.txt", "r1_a.txt"]);
        let easy = corpus(Dataset::Easy, &["e1_a.txt", "e3_a.txt"]);

        let pc = ParallelCorpus::pair(&regular, &easy);
        assert_eq!(pc.rows(), &[("Text von r1_a.txt.", "Text von e1_a.txt.")]);
        assert_eq!(pc.orphans(), 2);
    }

    #[test]
    fn batches_sharing_an_index_are_not_mixed() {
        let regular = corpus(Dataset::Regular, &["r0_politik.txt", "r0_sport.txt"]);
        let easy = corpus(Dataset::Easy, &["e0_politik.txt", "e0_kultur.txt"]);

        let pc = ParallelCorpus::pair(&regular, &easy);
        assert_eq!(
            pc.rows(),
            &[("Text von r0_politik.txt.", "Text von e0_politik.txt.")]
        );
        // r0_sport.txt and e0_kultur.txt
        assert_eq!(pc.orphans(), 2);
    }

    #[test]
    fn sample_is_truncated() {
        let names_r: Vec<String> = (0..120).map(|i| format!("r{}_a.txt", i)).collect();
        let names_e: Vec<String> = (0..120).map(|i| format!("e{}_a.txt", i)).collect();
        let regular = corpus(
            Dataset::Regular,
            &names_r.iter().map(String::as_str).collect::<Vec<_>>(),
        );
        let easy = corpus(
            Dataset::Easy,
            &names_e.iter().map(String::as_str).collect::<Vec<_>>(),
        );

        let dir = tempfile::tempdir().unwrap();
        let written = export(&regular, &easy, 512, dir.path()).unwrap();
        assert_eq!(written.rows, 120);
        assert!(written.full.ends_with("EasyGerman_512.csv"));

        let mut reader = csv::Reader::from_path(&written.sample).unwrap();
        assert_eq!(reader.headers().unwrap(), vec!["Regular German", "Leichte Sprache"]);
        assert_eq!(reader.records().count(), SAMPLE_SIZE);

        let mut reader = csv::Reader::from_path(&written.full).unwrap();
        assert_eq!(reader.records().count(), 120);
    }

    #[test]
    fn multiline_texts_survive_csv() {
        let mut regular = Corpus::new(Dataset::Regular);
        regular.push("r0_a.txt".parse().unwrap(), "Titel\n\n\"Zitat\", Text.".to_string());
        let mut easy = Corpus::new(Dataset::Easy);
        easy.push("e0_a.txt".parse().unwrap(), "Titel\n\nLeicht.".to_string());

        let dir = tempfile::tempdir().unwrap();
        let written = export(&regular, &easy, 1024, dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(&written.full).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Titel\n\n\"Zitat\", Text.");
        assert_eq!(&record[1], "Titel\n\nLeicht.");
    }
}
