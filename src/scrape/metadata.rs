//! Per-batch article metadata.
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::scrape::article::{Article, MISSING};

/// A fetched article and the name of the file it was written to.
#[derive(Debug, Clone)]
pub struct FetchedArticle {
    pub document_name: String,
    pub url: String,
    pub article: Article,
    pub raw_html: String,
}

/// One row of a metadata file.
#[derive(Debug, Serialize, PartialEq)]
pub struct MetadataRecord {
    #[serde(rename = "Document_Name")]
    pub document_name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Cleaned_text")]
    pub cleaned_text: String,
    #[serde(rename = "Raw_html")]
    pub raw_html: String,
    /// `"<name>; <title>"` of the paired article.
    #[serde(rename = "Relation")]
    pub relation: String,
}

/// Build metadata records for the articles of a batch, in fetch order.
///
/// Articles alternate regular/easy, so the pair of an even position is the next article
/// and the pair of an odd position the previous one.
pub fn metadata_records(articles: &[FetchedArticle]) -> Vec<MetadataRecord> {
    articles
        .iter()
        .enumerate()
        .map(|(idx, fetched)| {
            let pair = if idx % 2 == 1 {
                articles.get(idx - 1)
            } else {
                articles.get(idx + 1)
            };
            let relation = pair.map_or_else(
                || MISSING.to_string(),
                |p| format!("{}; {}", p.document_name, p.article.title),
            );

            MetadataRecord {
                document_name: fetched.document_name.clone(),
                title: fetched.article.title.clone(),
                keywords: fetched.article.keywords.clone(),
                url: fetched.url.clone(),
                date: fetched.article.date.clone(),
                description: fetched.article.description.clone(),
                cleaned_text: fetched.article.content(),
                raw_html: fetched.raw_html.clone(),
                relation,
            }
        })
        .collect()
}

/// Write the metadata of a batch as csv.
pub fn write_metadata(articles: &[FetchedArticle], dst: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for record in metadata_records(articles) {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(name: &str, title: &str) -> FetchedArticle {
        FetchedArticle {
            document_name: name.to_string(),
            url: format!("https://www.mdr.de/{}", name),
            article: Article {
                title: title.to_string(),
                text: "Text.\n".to_string(),
                date: "2021-01-01".to_string(),
                description: MISSING.to_string(),
                keywords: MISSING.to_string(),
            },
            raw_html: "<html></html>".to_string(),
        }
    }

    #[test]
    fn relations() {
        let articles = vec![
            fetched("r0_b.txt", "Regulär"),
            fetched("e0_b.txt", "Leicht"),
            fetched("r1_b.txt", "Allein"),
        ];
        let records = metadata_records(&articles);

        assert_eq!(records[0].relation, "e0_b.txt; Leicht");
        assert_eq!(records[1].relation, "r0_b.txt; Regulär");
        assert_eq!(records[2].relation, MISSING);
        assert_eq!(records[0].cleaned_text, "Regulär\n\nText.\n");
    }

    #[test]
    fn csv_columns() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("b_Metadata_EasyGerman.csv");
        write_metadata(&[fetched("r0_b.txt", "A"), fetched("e0_b.txt", "B")], &dst).unwrap();

        let mut reader = csv::Reader::from_path(&dst).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            vec![
                "Document_Name",
                "Title",
                "Keywords",
                "Url",
                "Date",
                "Description",
                "Cleaned_text",
                "Raw_html",
                "Relation"
            ]
        );
        assert_eq!(reader.records().count(), 2);
    }
}
