//! EasyGerman dataset building pipeline
//!
//! Builds the parallel corpus from scraped article directories.
//!
//! # Processing
//! 1. Articles over the token budget are blacklisted with their pair (regular, then easy directory).
//! 1. Duplicate, empty and dead-page articles are blacklisted with their pair (regular, then easy directory).
//! 1. The blacklist is frozen.
//! 1. Statistics are computed on the surviving regular, easy and combined articles, and reports are written.
//! 1. Surviving pairs are exported as csv.
use std::path::PathBuf;

use log::info;

use crate::corpus::{ensure_dir, Blacklist, FrozenBlacklist, Role};
use crate::error::Error;
use crate::filtering::{check_token_budget, remove_duplicates, TokenBudget};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{export, report, Corpus, Dataset, Export, Summary};

/// Results of a [BuildDataset] run.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of blacklisted files.
    pub removed: usize,
    pub regular: Option<Summary>,
    pub easy: Option<Summary>,
    pub all: Option<Summary>,
    pub export: Export,
}

pub struct BuildDataset {
    budget: TokenBudget,
    dir_all: PathBuf,
    dir_regular: PathBuf,
    dir_easy: PathBuf,
    statistics_dir: PathBuf,
    dst: PathBuf,
    blacklist_dump: bool,
}

impl BuildDataset {
    pub fn new(
        budget: TokenBudget,
        dir_all: PathBuf,
        dir_regular: PathBuf,
        dir_easy: PathBuf,
        statistics_dir: PathBuf,
        dst: PathBuf,
    ) -> Self {
        Self {
            budget,
            dir_all,
            dir_regular,
            dir_easy,
            statistics_dir,
            dst,
            blacklist_dump: false,
        }
    }

    /// Also write the blacklist as `blacklist_<budget>.json` in the destination folder.
    pub fn with_blacklist_dump(mut self, dump: bool) -> Self {
        self.blacklist_dump = dump;
        self
    }

    /// Run both filters on both directories.
    fn filter(&self) -> Result<FrozenBlacklist, Error> {
        let mut blacklist = Blacklist::new();

        check_token_budget(&self.dir_regular, Role::Regular, &self.budget, &mut blacklist)?;
        check_token_budget(&self.dir_easy, Role::Easy, &self.budget, &mut blacklist)?;
        remove_duplicates(&self.dir_regular, Role::Regular, &mut blacklist)?;
        remove_duplicates(&self.dir_easy, Role::Easy, &mut blacklist)?;

        info!("- {} samples were removed -", blacklist.len());
        Ok(blacklist.freeze())
    }

    /// Write report, frequency table and chart of a corpus.
    fn write_reports(&self, corpus: &Corpus) -> Result<(), Error> {
        let max_tokens = self.budget.max_tokens();
        report::write_report(corpus, max_tokens, &self.statistics_dir)?;
        report::write_frequency_chart(corpus, &self.statistics_dir)?;
        report::write_frequency_table(corpus, &self.statistics_dir)?;
        Ok(())
    }
}

impl Pipeline<BuildReport> for BuildDataset {
    fn run(&self) -> Result<BuildReport, Error> {
        // fail early, before any filtering
        for dir in [&self.dir_all, &self.dir_regular, &self.dir_easy] {
            ensure_dir(dir)?;
        }
        std::fs::create_dir_all(&self.statistics_dir)?;
        std::fs::create_dir_all(&self.dst)?;

        let blacklist = self.filter()?;
        if self.blacklist_dump {
            let path = self
                .dst
                .join(format!("blacklist_{}.json", self.budget.max_tokens()));
            info!("writing blacklist to {:?}", path);
            blacklist.write_json(&path)?;
        }

        let regular = Corpus::collect(&self.dir_regular, &blacklist, Dataset::Regular)?;
        let easy = Corpus::collect(&self.dir_easy, &blacklist, Dataset::Easy)?;
        let all = Corpus::collect(&self.dir_all, &blacklist, Dataset::All)?;

        for corpus in [&regular, &easy, &all] {
            self.write_reports(corpus)?;
        }

        let exported = export(&regular, &easy, self.budget.max_tokens(), &self.dst)?;
        if exported.orphans > 0 {
            info!("{} articles without counterpart were not exported", exported.orphans);
        }

        Ok(BuildReport {
            removed: blacklist.len(),
            regular: regular.summary(),
            easy: easy.summary(),
            all: all.summary(),
            export: exported,
        })
    }
}
