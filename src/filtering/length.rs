//! Token budget filtering.
use std::path::Path;

use log::{debug, info, warn};

use super::Filter;
use crate::corpus::{list_documents, Blacklist, Role};
use crate::error::Error;
use crate::text::tokenize;

/// Default maximum number of word tokens per document.
pub const DEFAULT_TOKEN_BUDGET: usize = 1024;

/// Keeps documents that have at most [TokenBudget::max_tokens] word tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenBudget {
    max_tokens: usize,
}

impl TokenBudget {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BUDGET)
    }
}

impl Filter<&str> for TokenBudget {
    fn detect(&self, text: &str) -> bool {
        tokenize(text).len() <= self.max_tokens
    }
}

/// Blacklist every document of `dir` that exceeds `budget`, along with its pair.
///
/// `role` is the role expected for the documents of `dir`.
pub fn check_token_budget(
    dir: &Path,
    role: Role,
    budget: &TokenBudget,
    blacklist: &mut Blacklist,
) -> Result<(), Error> {
    info!(
        "[{}] checking token budget ({} tokens) in {:?}",
        role,
        budget.max_tokens(),
        dir
    );

    for doc in list_documents(dir)? {
        if doc.id.role() != role {
            warn!("{} found in {} directory {:?}", doc.id, role, dir);
        }

        let text = doc.read()?;
        if !budget.detect(text.as_str()) {
            debug!("{} exceeds {} tokens", doc.id, budget.max_tokens());
            blacklist.exclude_pair(&doc.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{check_token_budget, TokenBudget};
    use crate::corpus::{Blacklist, Role};
    use crate::filtering::Filter;

    #[test]
    fn budget_is_inclusive() {
        let f = TokenBudget::new(5);
        assert!(f.detect("Eins zwei drei vier fünf"));
        assert!(!f.detect("Eins zwei drei vier fünf sechs"));
        // punctuation counts
        assert!(!f.detect("Eins zwei drei vier fünf."));
    }

    #[test]
    fn default_budget() {
        assert_eq!(TokenBudget::default().max_tokens(), 1024);
    }

    #[test]
    fn oversized_document_and_pair_are_blacklisted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("r0_a.txt"), "Eins zwei drei vier fünf sechs").unwrap();
        fs::write(dir.path().join("r1_a.txt"), "Eins zwei drei vier fünf").unwrap();

        let mut bl = Blacklist::new();
        check_token_budget(dir.path(), Role::Regular, &TokenBudget::new(5), &mut bl).unwrap();

        assert!(bl.contains("r0_a.txt"));
        assert!(bl.contains("e0_a.txt"));
        assert!(!bl.contains("r1_a.txt"));
        assert!(!bl.contains("e1_a.txt"));
        assert_eq!(bl.len(), 2);
    }
}
