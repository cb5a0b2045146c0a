//! Article body cleaning.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r#"[^a-zA-ZÄÜÖäüößéí\d:!?.,\- "'\n•]"#).unwrap();
    static ref GLUED_SENTENCE: Regex = Regex::new(r"([.!?:])([A-Z])").unwrap();
}

/// Normalize scraped article text.
///
/// - runs of three or more newlines become a single blank line,
/// - characters outside letters, digits, basic punctuation and German diacritics become spaces,
/// - a space is inserted when sentence punctuation is directly followed by an uppercase letter.
pub fn clean_text(text: &str) -> String {
    let text = NEWLINES.replace_all(text, "\n\n");
    let text = DISALLOWED.replace_all(&text, " ");
    GLUED_SENTENCE.replace_all(&text, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn collapse_newlines() {
        assert_eq!(clean_text("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn strip_characters() {
        assert_eq!(clean_text("Preis: 5€ (ca.)"), "Preis: 5   ca. ");
        assert_eq!(clean_text("Straße „Über“ • éí"), "Straße  Über  • éí");
    }

    #[test]
    fn split_glued_sentences() {
        assert_eq!(clean_text("Ende.Neuer Satz!Und:Da"), "Ende. Neuer Satz! Und: Da");
        // lowercase and umlauts are left alone
        assert_eq!(clean_text("z.b. ja.Über"), "z.b. ja.Über");
    }
}
