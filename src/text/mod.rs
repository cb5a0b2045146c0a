/*! Text utilities

Tokenization, sentence counting, vocabulary rules and scraped text cleaning.
!*/
mod clean;
mod stopwords;
mod tokenize;

pub use clean::clean_text;
pub use stopwords::{is_content_word, GERMAN_STOPWORDS, SITE_CREDIT};
pub use tokenize::{count_letters, count_sentences, is_vocabulary_word, tokenize, vocabulary_size};
