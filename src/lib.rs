pub mod corpus;
pub mod error;
pub mod filtering;
pub mod pipelines;
pub mod processing;
pub mod scrape;
pub mod text;
