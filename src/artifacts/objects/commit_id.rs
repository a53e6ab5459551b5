//! Commit identifier (SHA-1 hash)
//!
//! Commit ids are 40-character hexadecimal strings naming a commit in the store.
//! They address a specific historical version of a file.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc123d")

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{Error, Result};

/// Commit identifier
///
/// A full 40-character hex id, as printed by `git log --format=%H`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit id from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidCommitId(id));
        }

        Ok(Self(id))
    }

    /// First 7 characters of the hash (standard git abbreviation)
    pub fn to_short_oid(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CommitId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s.trim())
    }
}
