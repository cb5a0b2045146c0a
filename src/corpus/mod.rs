/*! Article corpus on disk.

Article directories hold one text file per article, named after its role and pair index
(see [DocumentId]). This module lists them and tracks which ones are excluded from the dataset.
!*/
mod blacklist;
mod document;
mod reader;

pub use blacklist::{Blacklist, FrozenBlacklist};
pub use document::{DocumentId, Role};
pub use reader::{ensure_dir, list_documents, DocumentFile};
