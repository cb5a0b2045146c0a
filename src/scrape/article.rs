//! Article extraction from news pages.
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::Error;
use crate::text::clean_text;

/// Value of a metadata field missing from the page.
pub const MISSING: &str = "None";

lazy_static! {
    /// Credit lines closing an article.
    static ref CREDITS: Regex = Regex::new("MDR|dpa").unwrap();
}

/// Title, cleaned body and metadata of a news page.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub text: String,
    pub date: String,
    pub description: String,
    pub keywords: String,
}

impl Article {
    /// Content of the article file: title, blank line, body.
    pub fn content(&self) -> String {
        format!("{}\n\n{}", self.title, self.text)
    }
}

/// Compiled selectors for article pages.
pub struct ArticleParser {
    title: Selector,
    body: Selector,
    date: Selector,
    description: Selector,
    keywords: Selector,
}

fn selector(s: &str) -> Result<Selector, Error> {
    Selector::parse(s).map_err(|e| Error::Custom(format!("invalid selector {:?}: {:?}", s, e)))
}

impl ArticleParser {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            title: selector("title")?,
            body: selector(
                "p.text, p.einleitung, p.subtitle, h3.text, h3.einleitung, h3.subtitle",
            )?,
            date: selector(r#"meta[name="date"]"#)?,
            description: selector(r#"meta[name="description"]"#)?,
            keywords: selector(r#"meta[name="keywords"]"#)?,
        })
    }

    fn meta(document: &Html, selector: &Selector) -> String {
        document
            .select(selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map_or_else(|| MISSING.to_string(), str::to_string)
    }

    /// Extract the article from a page.
    ///
    /// Only paragraphs and subheadings classed as body text, intro or subtitle are kept,
    /// in document order. A closing credit line is dropped.
    pub fn parse(&self, html: &str) -> Article {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(|t| t.text().collect::<String>())
            .unwrap_or_default();

        let paragraphs: Vec<String> = document
            .select(&self.body)
            .map(|p| p.text().collect::<String>())
            .collect();

        let mut text = String::new();
        let last = paragraphs.len().saturating_sub(1);
        for (idx, paragraph) in paragraphs.iter().enumerate() {
            if idx == last && CREDITS.is_match(paragraph) {
                continue;
            }
            text.push_str(paragraph);
            text.push('\n');
        }

        Article {
            title,
            text: clean_text(&text),
            date: Self::meta(&document, &self.date),
            description: Self::meta(&document, &self.description),
            keywords: Self::meta(&document, &self.keywords),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleParser, MISSING};

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Neue Brücke in Halle</title>
  <meta name="date" content="2021-03-04">
  <meta name="keywords" content="Halle, Brücke">
</head>
<body>
  <p class="einleitung">Die Brücke ist fertig.</p>
  <p class="teaser">Werbung</p>
  <h3 class="subtitle">Eröffnung</h3>
  <p class="text">Am Montag kommen alle.Der Bürgermeister spricht (kurz).</p>
  <p class="text">Quelle: MDR/dpa</p>
</body>
</html>"#;

    #[test]
    fn extract_article() {
        let parser = ArticleParser::new().unwrap();
        let article = parser.parse(PAGE);

        assert_eq!(article.title, "Neue Brücke in Halle");
        assert_eq!(
            article.text,
            "Die Brücke ist fertig.\nEröffnung\nAm Montag kommen alle. Der Bürgermeister spricht  kurz .\n"
        );
        assert_eq!(article.date, "2021-03-04");
        assert_eq!(article.keywords, "Halle, Brücke");
        assert_eq!(article.description, MISSING);
        assert!(article.content().starts_with("Neue Brücke in Halle\n\nDie Brücke"));
    }

    #[test]
    fn credits_only_dropped_at_the_end() {
        let parser = ArticleParser::new().unwrap();
        let article = parser.parse(
            r#"<html><body><p class="text">MDR berichtet.</p><p class="text">Schluss.</p></body></html>"#,
        );
        assert_eq!(article.text, "MDR berichtet.\nSchluss.\n");
        assert_eq!(article.title, "");
    }

    #[test]
    fn empty_page() {
        let parser = ArticleParser::new().unwrap();
        let article = parser.parse("<html></html>");
        assert_eq!(article.content(), "\n\n");
        assert_eq!(article.date, MISSING);
    }
}
