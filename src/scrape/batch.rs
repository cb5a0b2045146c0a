//! Scraping of a single url file (a batch).
//!
//! A batch file lists article urls, one per line, alternating regular and easy articles:
//! the `n`-th url is the regular (even `n`) or easy (odd `n`) member of pair `n / 2`.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use url::Url;

use crate::corpus::{DocumentId, Role};
use crate::error::Error;
use crate::scrape::{ArticleParser, FetchError, FetchedArticle, Fetcher, Page};

/// Source of article pages.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Page, FetchError>;
}

impl Fetch for Fetcher {
    fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        Fetcher::fetch(self, url)
    }
}

/// Article directories written by the scraper.
///
/// Every article is written in its batch folder, in `all_files`,
/// and in `all_regular` or `all_easy` depending on its role.
#[derive(Debug, Clone)]
pub struct ArticleLayout {
    root: PathBuf,
}

impl ArticleLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn all_files(&self) -> PathBuf {
        self.root.join("all_files")
    }

    pub fn all_regular(&self) -> PathBuf {
        self.root.join("all_regular")
    }

    pub fn all_easy(&self) -> PathBuf {
        self.root.join("all_easy")
    }

    pub fn batch(&self, batch: &str) -> PathBuf {
        self.root.join(batch)
    }

    fn role_dir(&self, role: Role) -> PathBuf {
        match role {
            Role::Regular => self.all_regular(),
            Role::Easy => self.all_easy(),
        }
    }

    /// Create every directory used by `batch`.
    pub fn create(&self, batch: &str) -> Result<(), Error> {
        for dir in [
            self.batch(batch),
            self.all_files(),
            self.all_regular(),
            self.all_easy(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn write(&self, batch: &str, id: &DocumentId, content: &str) -> Result<(), Error> {
        let name = id.name();
        for dir in [self.batch(batch), self.all_files(), self.role_dir(id.role())] {
            std::fs::write(dir.join(&name), content)?;
        }
        Ok(())
    }
}

/// Batch name of a url file: its filename without the `.txt` extension.
pub fn batch_name(url_file: &Path) -> String {
    let name = url_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once(".txt") {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// Read article urls from a batch file. Lines that are not http(s) urls are skipped.
pub fn read_urls(url_file: &Path) -> Result<Vec<Url>, Error> {
    let reader = BufReader::new(File::open(url_file)?);
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.starts_with("http") {
            continue;
        }
        match Url::parse(line) {
            Ok(url) => urls.push(url),
            Err(e) => warn!("skipping invalid url {:?} in {:?}: {}", line, url_file, e),
        }
    }
    Ok(urls)
}

/// Fetches, cleans and writes the articles of url files.
pub struct BatchScraper<'a, F: Fetch> {
    fetcher: &'a F,
    parser: &'a ArticleParser,
    layout: &'a ArticleLayout,
}

impl<'a, F: Fetch> BatchScraper<'a, F> {
    pub fn new(fetcher: &'a F, parser: &'a ArticleParser, layout: &'a ArticleLayout) -> Self {
        Self {
            fetcher,
            parser,
            layout,
        }
    }

    /// Scrape every article of `url_file`.
    ///
    /// The first failed fetch aborts the batch with [Error::Fetch]:
    /// articles written before the failure are kept, but no metadata is returned.
    pub fn scrape(&self, url_file: &Path) -> Result<Vec<FetchedArticle>, Error> {
        let batch = batch_name(url_file);
        info!("downloading urls from {:?}", url_file);

        let urls = read_urls(url_file)?;
        self.layout.create(&batch)?;

        let mut articles = Vec::with_capacity(urls.len());
        for (count, url) in urls.into_iter().enumerate() {
            let role = if count % 2 == 1 {
                Role::Easy
            } else {
                Role::Regular
            };
            let id = DocumentId::new(role, count / 2, &format!("{}.txt", batch));

            let page = self.fetcher.fetch(&url)?;
            let article = self.parser.parse(&page.body);

            self.layout.write(&batch, &id, &article.content())?;
            debug!("{}:  {}", id, url);

            articles.push(FetchedArticle {
                document_name: id.name(),
                url: url.to_string(),
                article,
                raw_html: page.body,
            });
        }

        info!("[{}] {} articles downloaded", batch, articles.len());
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;

    use reqwest::StatusCode;
    use url::Url;

    use super::*;
    use crate::scrape::FetchErrorKind;

    /// Serves a small page per url, failing from the `fail_at`-th request on.
    struct FakeSite {
        calls: Cell<usize>,
        fail_at: Option<usize>,
    }

    impl FakeSite {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                calls: Cell::new(0),
                fail_at,
            }
        }
    }

    impl Fetch for FakeSite {
        fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if self.fail_at.map_or(false, |n| call >= n) {
                return Err(FetchError {
                    url: url.clone(),
                    attempts: 9,
                    kind: FetchErrorKind::Status(StatusCode::SERVICE_UNAVAILABLE),
                });
            }
            Ok(Page {
                url: url.clone(),
                status: StatusCode::OK,
                body: format!(
                    r#"<html><head><title>Seite {}</title></head><body><p class="text">Inhalt {}.</p></body></html>"#,
                    call, call
                ),
            })
        }
    }

    fn url_file(dir: &Path) -> PathBuf {
        let path = dir.join("politik.txt");
        fs::write(
            &path,
            "https://www.mdr.de/a.html\n# comment\n\nhttps://www.mdr.de/a-leicht.html\nhttps://www.mdr.de/b.html\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn names() {
        assert_eq!(batch_name(Path::new("urls/politik.txt")), "politik");
        assert_eq!(batch_name(Path::new("urls/politik")), "politik");
    }

    #[test]
    fn read_batch_urls() {
        let dir = tempfile::tempdir().unwrap();
        let urls = read_urls(&url_file(dir.path())).unwrap();
        assert_eq!(urls.len(), 3);
    }

    #[test]
    fn scrape_batch() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ArticleLayout::new(&dir.path().join("mdr_articles"));
        let parser = ArticleParser::new().unwrap();
        let site = FakeSite::new(None);

        let articles = BatchScraper::new(&site, &parser, &layout)
            .scrape(&url_file(dir.path()))
            .unwrap();

        let names: Vec<&str> = articles.iter().map(|a| a.document_name.as_str()).collect();
        assert_eq!(names, vec!["r0_politik.txt", "e0_politik.txt", "r1_politik.txt"]);

        let content = fs::read_to_string(layout.all_easy().join("e0_politik.txt")).unwrap();
        assert_eq!(content, "Seite 1\n\nInhalt 1.\n");
        assert!(layout.batch("politik").join("r1_politik.txt").is_file());
        assert!(layout.all_files().join("e0_politik.txt").is_file());
        assert!(!layout.all_regular().join("e0_politik.txt").exists());
    }

    #[test]
    fn failure_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ArticleLayout::new(&dir.path().join("mdr_articles"));
        let parser = ArticleParser::new().unwrap();
        let site = FakeSite::new(Some(1));

        let result = BatchScraper::new(&site, &parser, &layout).scrape(&url_file(dir.path()));
        assert!(matches!(result, Err(Error::Fetch(_))));

        // the first article was written before the failure
        assert!(layout.all_regular().join("r0_politik.txt").is_file());
        assert_eq!(site.calls.get(), 2);
    }
}
