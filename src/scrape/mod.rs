/*! News article scraping

Downloads paired articles listed in url files, extracts their text and metadata,
and writes them in the article directories read by the dataset builder.
!*/
mod article;
mod batch;
mod fetch;
mod metadata;

pub use article::{Article, ArticleParser, MISSING};
pub use batch::{batch_name, read_urls, ArticleLayout, BatchScraper, Fetch};
pub use fetch::{FetchError, FetchErrorKind, Fetcher, Page, RetryPolicy};
pub use metadata::{metadata_records, write_metadata, FetchedArticle, MetadataRecord};
