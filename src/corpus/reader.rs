//! Article directory listing.
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::corpus::DocumentId;
use crate::error::Error;

/// A document file found in an article directory.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub id: DocumentId,
    pub path: PathBuf,
}

impl DocumentFile {
    /// Filename, as stored in the blacklist.
    pub fn name(&self) -> String {
        self.id.name()
    }

    pub fn read(&self) -> Result<String, Error> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Fail with [Error::MissingPath] if `dir` is not an existing directory.
pub fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingPath(dir.to_path_buf()))
    }
}

/// List documents of `dir` in filesystem listing order.
///
/// Unreadable entries, subdirectories and files that do not follow
/// the naming convention are logged and skipped.
pub fn list_documents(dir: &Path) -> Result<Vec<DocumentFile>, Error> {
    ensure_dir(dir)?;

    let files = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading directory {:?}: {}", dir, e);
                    None
                },
                Some,
            )
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            match name.parse::<DocumentId>() {
                Ok(id) => Some(DocumentFile { id, path }),
                Err(e) => {
                    warn!("skipping {:?}: {}", path, e);
                    None
                }
            }
        })
        .collect();

    Ok(files)
}
