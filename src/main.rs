//! # EasyGerman
//!
//! Builds a parallel corpus of news articles in standard German and Leichte Sprache.
//!
//! ## Getting started
//!
//! ```sh
//! easygerman 1.0.0
//! EasyGerman parallel corpus tool.
//!
//! USAGE:
//!     easygerman <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build     Filter articles, compute statistics and export the dataset
//!     help      Prints this message or the help of the given subcommand(s)
//!     scrape    Download articles listed in url files
//! ```
//!
//! Set `RUST_LOG=info` to follow the progress.
use easygerman::error::Error;
use easygerman::pipelines::{BuildDataset, Pipeline, ScrapeConfig, Scraper};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::EasyGerman::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::EasyGerman::Scrape(s) => {
            let config = ScrapeConfig::from(&s);
            let report = Scraper::new(s.input, config).run()?;
            if !report.failures.is_empty() {
                warn!(
                    "{} url files could not be fully downloaded, see the error log",
                    report.failures.len()
                );
            }
        }

        cli::EasyGerman::Build(b) => {
            let report = BuildDataset::from(b).run()?;
            info!(
                "{} samples removed, {} pairs exported to {:?}",
                report.removed, report.export.rows, report.export.full
            );
        }
    };
    Ok(())
}
