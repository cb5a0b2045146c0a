//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use easygerman::filtering::TokenBudget;
use easygerman::pipelines::{BuildDataset, ScrapeConfig};
use easygerman::scrape::RetryPolicy;

#[derive(Debug, StructOpt)]
#[structopt(name = "easygerman", about = "EasyGerman parallel corpus tool.")]
/// Holds every command that is callable by the `easygerman` command.
pub enum EasyGerman {
    #[structopt(about = "Download articles listed in url files")]
    Scrape(Scrape),
    #[structopt(about = "Filter articles, compute statistics and export the dataset")]
    Build(Build),
}

#[derive(Debug, StructOpt)]
/// Scrape command and parameters.
///
/// ```sh
/// easygerman-scrape 1.0.0
/// Download articles listed in url files
///
/// USAGE:
///     easygerman scrape [OPTIONS] <input>
///
/// ARGS:
///     <input>    url file, or (nested) directory of url files
/// ```
pub struct Scrape {
    #[structopt(parse(from_os_str), help = "url file, or (nested) directory of url files")]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "articles-dir",
        help = "article destination",
        default_value = "mdr_articles"
    )]
    pub articles_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "metadata-dir",
        help = "metadata and error log destination",
        default_value = "metadata"
    )]
    pub metadata_dir: PathBuf,
    #[structopt(long = "retries", help = "retries per url", default_value = "8")]
    pub retries: u32,
    #[structopt(
        long = "backoff",
        help = "backoff factor in seconds, doubled at each retry",
        default_value = "2.0"
    )]
    pub backoff: f64,
    #[structopt(long = "timeout", help = "request timeout in seconds", default_value = "10")]
    pub timeout: u64,
}

impl From<&Scrape> for ScrapeConfig {
    fn from(s: &Scrape) -> Self {
        ScrapeConfig {
            articles_dir: s.articles_dir.clone(),
            metadata_dir: s.metadata_dir.clone(),
            retry: RetryPolicy {
                max_retries: s.retries,
                backoff_factor: s.backoff,
            },
            timeout: Duration::from_secs(s.timeout),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// easygerman-build 1.0.0
/// Filter articles, compute statistics and export the dataset
///
/// USAGE:
///     easygerman build [FLAGS] [OPTIONS] [ARGS]
///
/// ARGS:
///     <max-tokens>     max number of word tokens per article [default: 1024]
///     <dir-all>        directory of both easy and regular articles [default: mdr_articles/all_files]
///     <dir-regular>    directory of regular articles [default: mdr_articles/all_regular]
///     <dir-easy>       directory of easy articles [default: mdr_articles/all_easy]
/// ```
pub struct Build {
    #[structopt(help = "max number of word tokens per article", default_value = "1024")]
    pub max_tokens: usize,
    #[structopt(
        parse(from_os_str),
        help = "directory of both easy and regular articles",
        default_value = "mdr_articles/all_files"
    )]
    pub dir_all: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "directory of regular articles",
        default_value = "mdr_articles/all_regular"
    )]
    pub dir_regular: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "directory of easy articles",
        default_value = "mdr_articles/all_easy"
    )]
    pub dir_easy: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "statistics-dir",
        help = "statistics destination",
        default_value = "statistics"
    )]
    pub statistics_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "dataset destination",
        default_value = "."
    )]
    pub dst: PathBuf,
    #[structopt(long = "blacklist", help = "also write the blacklist as json")]
    pub blacklist: bool,
}

impl From<Build> for BuildDataset {
    fn from(b: Build) -> Self {
        BuildDataset::new(
            TokenBudget::new(b.max_tokens),
            b.dir_all,
            b.dir_regular,
            b.dir_easy,
            b.statistics_dir,
            b.dst,
        )
        .with_blacklist_dump(b.blacklist)
    }
}
