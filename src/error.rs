//! Error enum
use std::fmt;
use std::path::PathBuf;

use crate::scrape::FetchError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Reqwest(reqwest::Error),
    Url(url::ParseError),
    /// A required input directory does not exist.
    MissingPath(PathBuf),
    /// Filename does not follow the `{r|e}{index}_{rest}` convention.
    InvalidDocumentName(String),
    Fetch(FetchError),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Reqwest(e) => write!(f, "http error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::MissingPath(p) => write!(f, "path does not exist: {}", p.display()),
            Error::InvalidDocumentName(name) => write!(
                f,
                "invalid document name {:?} (expected {{r|e}}<index>_<name>.txt)",
                name
            ),
            Error::Fetch(e) => write!(f, "{}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Error {
        Error::Fetch(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Error;

    #[test]
    fn missing_path_names_the_path() {
        let e = Error::MissingPath(PathBuf::from("mdr_articles/all_easy"));
        assert!(e.to_string().contains("mdr_articles/all_easy"));
    }
}
