//! Exclusion set shared by every curation stage.
//!
//! The blacklist only grows while filters run.
//! Once filtering is done it is frozen into a [FrozenBlacklist] that downstream stages can only read.
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::corpus::DocumentId;
use crate::error::Error;

/// Insertion-ordered set of excluded filenames.
#[derive(Debug, Default)]
pub struct Blacklist {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl Blacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filename if not already present.
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Excludes a document and its counterpart.
    pub fn exclude_pair(&mut self, id: &DocumentId) {
        let pair = id.counterpart();
        if self.insert(&id.name()) {
            debug!("blacklisted {}", id);
        }
        if self.insert(&pair.name()) {
            debug!("blacklisted {} (pair of {})", pair, id);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// End the filtering phase.
    pub fn freeze(self) -> FrozenBlacklist {
        FrozenBlacklist(self)
    }
}

/// Read-only view of a finished [Blacklist].
#[derive(Debug, Default)]
pub struct FrozenBlacklist(Blacklist);

#[derive(Serialize)]
struct BlacklistDump<'a> {
    removed: usize,
    files: &'a [String],
}

impl FrozenBlacklist {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Filenames in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.names.iter().map(String::as_str)
    }

    /// Write the blacklist as a JSON document.
    pub fn write_json(&self, dst: &Path) -> Result<(), Error> {
        let writer = BufWriter::new(File::create(dst)?);
        let dump = BlacklistDump {
            removed: self.len(),
            files: &self.0.names,
        };
        serde_json::to_writer_pretty(writer, &dump)?;
        Ok(())
    }
}
