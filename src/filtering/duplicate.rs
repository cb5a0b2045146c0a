/*! Duplicate and dead-page filtering

Exact duplicates are detected with a [runiq](https://github.com/whitfin/runiq) digest filter,
so that only hashes of the already seen articles are kept in memory.
!*/
use std::path::Path;

use log::{debug, info, warn};
use runiq::filters::{DigestFilter, Filter as RuniqFilter};

use super::FilterMut;
use crate::corpus::{list_documents, Blacklist, Role};
use crate::error::Error;

/// Marker of a page that could not be scraped.
pub const PAGE_NOT_FOUND: &str = "Seite nicht gefunden";

/// Rejects empty articles, dead pages and exact repeats of previously kept articles.
#[derive(Default)]
pub struct Duplicates {
    seen: DigestFilter,
}

impl Duplicates {
    /// `true` if the article body is missing.
    /// A scraped article with no title and no text is just the `"\n\n"` separator.
    fn is_empty(text: &str) -> bool {
        text.trim().is_empty()
    }
}

impl FilterMut<&str> for Duplicates {
    fn detect_mut(&mut self, text: &str) -> bool {
        if Self::is_empty(text) || text.contains(PAGE_NOT_FOUND) {
            return false;
        }

        // records the text when it is new
        self.seen.detect(text.as_bytes())
    }
}

/// Blacklist duplicate, dead and empty documents of `dir`, along with their pairs.
///
/// Documents are visited in listing order: the first occurrence of a text is kept,
/// later repeats are blacklisted. Repeats are only searched within `dir`.
pub fn remove_duplicates(dir: &Path, role: Role, blacklist: &mut Blacklist) -> Result<(), Error> {
    info!("[{}] removing duplicates in {:?}", role, dir);
    let mut filter = Duplicates::default();

    for doc in list_documents(dir)? {
        if doc.id.role() != role {
            warn!("{} found in {} directory {:?}", doc.id, role, dir);
        }

        let text = doc.read()?;
        if !filter.detect_mut(text.as_str()) {
            debug!("{} is a duplicate, empty or missing page", doc.id);
            blacklist.exclude_pair(&doc.id);
        }
    }

    Ok(())
}
