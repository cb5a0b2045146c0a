//! Document identifiers and pairing.
//!
//! Every article file is named `{role}{pair_index}_{rest}`, where `role` is `r` (regular German)
//! or `e` (Leichte Sprache). `r12_foo.txt` and `e12_foo.txt` form a pair.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which side of a pair a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Regular,
    Easy,
}

impl Role {
    /// Filename prefix of the role.
    pub fn prefix(&self) -> char {
        match self {
            Role::Regular => 'r',
            Role::Easy => 'e',
        }
    }

    /// The role of the paired document.
    pub fn other(&self) -> Role {
        match self {
            Role::Regular => Role::Easy,
            Role::Easy => Role::Regular,
        }
    }

    fn from_prefix(c: char) -> Option<Role> {
        match c {
            'r' => Some(Role::Regular),
            'e' => Some(Role::Easy),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Regular => write!(f, "regular"),
            Role::Easy => write!(f, "easy"),
        }
    }
}

/// Parsed document filename.
///
/// The counterpart of a document is derived from this structure
/// (same index and suffix, other role) rather than by editing the filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId {
    role: Role,
    index: usize,
    rest: String,
}

impl DocumentId {
    pub fn new(role: Role, index: usize, rest: &str) -> Self {
        Self {
            role,
            index,
            rest: rest.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Index shared by both members of a pair.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identifier of the paired document.
    pub fn counterpart(&self) -> DocumentId {
        DocumentId {
            role: self.role.other(),
            index: self.index,
            rest: self.rest.clone(),
        }
    }

    /// Filename of the document.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", self.role.prefix(), self.index, self.rest)
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDocumentName(name.to_string());

        let mut chars = name.chars();
        let role = chars.next().and_then(Role::from_prefix).ok_or_else(invalid)?;
        let tail = chars.as_str();

        let (index, rest) = tail.split_once('_').ok_or_else(invalid)?;
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        // the name must survive a parse/display round trip
        if index.len() > 1 && index.starts_with('0') {
            return Err(invalid());
        }
        let index = index.parse::<usize>().map_err(|_| invalid())?;

        Ok(Self::new(role, index, rest))
    }
}
