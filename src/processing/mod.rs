/*! Content processing

Turns the filtered article directories into the published artifacts:
statistics over the surviving articles, reports, and the parallel corpus.
!*/
pub mod export;
mod frequencies;
pub mod report;
mod stats;

pub use export::{export, Export, ParallelCorpus};
pub use frequencies::{Frequencies, FrequencyEntry};
pub use stats::{ceil_div, mean_ceil, median, Corpus, Dataset, DocumentStats, Summary, SurvivingDocument};
