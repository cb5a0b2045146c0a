//! Article scraping pipeline.
//!
//! The input is either a url file, or a (possibly nested) directory of url files.
//! Metadata of a url file `<input>/<dir>/<batch>.txt` is written to
//! `<metadata dir>/<input>/<dir>/<batch>_Metadata_EasyGerman.csv`.
//! Url files whose articles could not all be fetched, or that hold no article url,
//! are listed in `<metadata dir>/errorlog.txt`.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use log::{error, info};

use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::scrape::{
    batch_name, write_metadata, ArticleLayout, ArticleParser, BatchScraper, Fetch, Fetcher,
    RetryPolicy,
};

const ERRORLOG_HEADER: &str = "Error log of Metadata Download for EasyGerman Dataset\n\nthe following files could not be fully downloaded:\n";

/// Scraper settings.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub articles_dir: PathBuf,
    pub metadata_dir: PathBuf,
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("mdr_articles"),
            metadata_dir: PathBuf::from("metadata"),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Results of a [Scraper] run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Url files fully downloaded.
    pub batches: usize,
    pub articles: usize,
    /// Url files that failed.
    pub failures: Vec<PathBuf>,
}

pub struct Scraper {
    input: PathBuf,
    config: ScrapeConfig,
}

impl Scraper {
    pub fn new(input: PathBuf, config: ScrapeConfig) -> Self {
        Self { input, config }
    }

    /// Url files under `path`, in sorted order, recursing into subdirectories.
    fn url_files(path: &Path) -> Result<Vec<PathBuf>, Error> {
        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        entries.sort();

        let mut files = Vec::new();
        for entry in entries {
            files.extend(Self::url_files(&entry)?);
        }
        Ok(files)
    }

    /// `path` without root or `..` components, so that it can be nested in another folder.
    fn relative(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect()
    }

    /// Scrape every url file of the input with `fetcher`.
    pub fn run_with<F: Fetch>(&self, fetcher: &F) -> Result<ScrapeReport, Error> {
        if !self.input.exists() {
            return Err(Error::MissingPath(self.input.clone()));
        }

        std::fs::create_dir_all(&self.config.metadata_dir)?;
        let errorlog_path = self.config.metadata_dir.join("errorlog.txt");
        let mut errorlog = BufWriter::new(File::create(&errorlog_path)?);
        errorlog.write_all(ERRORLOG_HEADER.as_bytes())?;

        let parser = ArticleParser::new()?;
        let layout = ArticleLayout::new(&self.config.articles_dir);
        let batch_scraper = BatchScraper::new(fetcher, &parser, &layout);

        let mut report = ScrapeReport::default();
        for url_file in Self::url_files(&self.input)? {
            let parent = url_file.parent().unwrap_or_else(|| Path::new(""));
            let dir_name = parent
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let batch = batch_name(&url_file);

            match batch_scraper.scrape(&url_file) {
                Ok(articles) if articles.is_empty() => {
                    error!("[{}] no article urls in {:?}", batch, url_file);
                    writeln!(errorlog, "{}:  {}  (no urls)", dir_name, batch)?;
                    report.failures.push(url_file.clone());
                }
                Ok(articles) => {
                    let dst_dir = self.config.metadata_dir.join(Self::relative(parent));
                    std::fs::create_dir_all(&dst_dir)?;
                    let dst = dst_dir.join(format!("{}_Metadata_EasyGerman.csv", batch));
                    write_metadata(&articles, &dst)?;

                    report.batches += 1;
                    report.articles += articles.len();
                }
                Err(Error::Fetch(e)) => {
                    error!("[{}] metadata could not be retrieved: {}", batch, e);
                    writeln!(errorlog, "{}:  {}  ({})", dir_name, batch, e.url)?;
                    report.failures.push(url_file.clone());
                }
                Err(e) => return Err(e),
            }
        }

        errorlog.flush()?;
        info!(
            "{} url files downloaded ({} articles), {} failed",
            report.batches,
            report.articles,
            report.failures.len()
        );
        Ok(report)
    }
}

impl Pipeline<ScrapeReport> for Scraper {
    fn run(&self) -> Result<ScrapeReport, Error> {
        let fetcher = Fetcher::new(self.config.timeout, self.config.retry)?;
        self.run_with(&fetcher)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use url::Url;

    use super::{ScrapeConfig, Scraper};
    use crate::scrape::{Fetch, FetchError, Page};

    /// Fails the test on any request.
    struct NoNetwork;

    impl Fetch for NoNetwork {
        fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
            panic!("unexpected request to {}", url)
        }
    }

    #[test]
    fn url_file_without_urls_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("urls").join("2021");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("leer.txt"), "# nothing yet\n\n").unwrap();

        let config = ScrapeConfig {
            articles_dir: dir.path().join("mdr_articles"),
            metadata_dir: dir.path().join("metadata"),
            ..ScrapeConfig::default()
        };
        let report = Scraper::new(input.clone(), config.clone())
            .run_with(&NoNetwork)
            .unwrap();

        assert_eq!(report.batches, 0);
        assert_eq!(report.articles, 0);
        assert_eq!(report.failures, vec![input.join("leer.txt")]);

        let errorlog = std::fs::read_to_string(config.metadata_dir.join("errorlog.txt")).unwrap();
        assert!(errorlog.ends_with("2021:  leer  (no urls)\n"));

        let metadata = config
            .metadata_dir
            .join(Scraper::relative(&input))
            .join("leer_Metadata_EasyGerman.csv");
        assert!(!metadata.exists());
    }

    #[test]
    fn relative_paths() {
        assert_eq!(
            Scraper::relative(Path::new("/data/../urls/2021")),
            PathBuf::from("data/urls/2021")
        );
        assert_eq!(Scraper::relative(Path::new("./urls")), PathBuf::from("urls"));
    }

    #[test]
    fn nested_url_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2021");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(nested.join("a.txt"), "").unwrap();

        let files = Scraper::url_files(dir.path()).unwrap();
        assert_eq!(files, vec![nested.join("a.txt"), dir.path().join("b.txt")]);
    }
}
