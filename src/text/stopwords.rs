//! German stop-words.
use std::collections::HashSet;

use lazy_static::lazy_static;

/// Token crediting the news site, excluded from cleaned frequency tables.
pub const SITE_CREDIT: &str = "mdr.de";

lazy_static! {
    /// Common German function words.
    pub static ref GERMAN_STOPWORDS: HashSet<&'static str> = [
        "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
        "andere", "anderem", "anderen", "anderer", "anderes", "anderm", "andern", "anderr",
        "anders", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "der",
        "den", "des", "dem", "die", "das", "dass", "daß", "derselbe", "derselben", "denselben",
        "desselben", "demselben", "dieselbe", "dieselben", "dasselbe", "dazu", "dein", "deine",
        "deinem", "deinen", "deiner", "deines", "denn", "derer", "dessen", "dich", "dir", "du",
        "dies", "diese", "diesem", "diesen", "dieser", "dieses", "doch", "dort", "durch", "ein",
        "eine", "einem", "einen", "einer", "eines", "einig", "einige", "einigem", "einigen",
        "einiger", "einiges", "einmal", "er", "ihn", "ihm", "es", "etwas", "euer", "eure",
        "eurem", "euren", "eurer", "eures", "für", "gegen", "gewesen", "hab", "habe", "haben",
        "hat", "hatte", "hatten", "hier", "hin", "hinter", "ich", "mich", "mir", "ihr", "ihre",
        "ihrem", "ihren", "ihrer", "ihres", "euch", "im", "in", "indem", "ins", "ist", "jede",
        "jedem", "jeden", "jeder", "jedes", "jene", "jenem", "jenen", "jener", "jenes", "jetzt",
        "kann", "kein", "keine", "keinem", "keinen", "keiner", "keines", "können", "könnte",
        "machen", "man", "manche", "manchem", "manchen", "mancher", "manches", "mein", "meine",
        "meinem", "meinen", "meiner", "meines", "mit", "muss", "musste", "nach", "nicht",
        "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein", "seine", "seinem",
        "seinen", "seiner", "seines", "selbst", "sich", "sie", "ihnen", "sind", "so", "solche",
        "solchem", "solchen", "solcher", "solches", "soll", "sollte", "sondern", "sonst", "über",
        "um", "und", "uns", "unsere", "unserem", "unseren", "unser", "unseres", "unter", "viel",
        "vom", "von", "vor", "während", "war", "waren", "warst", "was", "weg", "weil", "weiter",
        "welche", "welchem", "welchen", "welcher", "welches", "wenn", "werde", "werden", "wie",
        "wieder", "will", "wir", "wird", "wirst", "wo", "wollen", "wollte", "würde", "würden",
        "zu", "zum", "zur", "zwar", "zwischen",
    ]
    .into_iter()
    .collect();
}

/// `true` if `word` belongs in the cleaned vocabulary.
/// Comparison is case-insensitive.
pub fn is_content_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    !GERMAN_STOPWORDS.contains(lower.as_str()) && !lower.starts_with(SITE_CREDIT)
}

#[cfg(test)]
mod tests {
    use super::is_content_word;

    #[test]
    fn stopwords_are_case_insensitive() {
        assert!(!is_content_word("Und"));
        assert!(!is_content_word("über"));
        assert!(is_content_word("Bundestag"));
    }

    #[test]
    fn site_credit() {
        assert!(!is_content_word("MDR.DE"));
        assert!(!is_content_word("mdr.de"));
        assert!(is_content_word("MDR"));
    }
}
