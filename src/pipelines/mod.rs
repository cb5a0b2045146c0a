//! Pipelines.
//!
//! Both stages of the dataset creation are implemented here,
//! behind the light [pipeline::Pipeline] trait.
pub mod build;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod scrape;

pub use build::{BuildDataset, BuildReport};
pub use pipeline::Pipeline;
pub use scrape::{ScrapeConfig, ScrapeReport, Scraper};
