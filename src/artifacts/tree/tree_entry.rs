use crate::areas::workspace::to_git_path;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// One file or folder of the working tree
///
/// `uid` is the path relative to the repository root with `/` separators; it is what
/// callers pass back to the store to act on the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
    pub parent_uid: Option<String>,
    pub depth: usize,
}

impl TreeEntry {
    pub fn from_relative_path(path: &Path, kind: EntryKind, size: u64) -> Self {
        let uid = to_git_path(path);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent_uid = path
            .parent()
            .map(to_git_path)
            .filter(|parent| !parent.is_empty());
        let depth = path.components().count().saturating_sub(1);

        TreeEntry {
            uid,
            name,
            kind,
            size,
            parent_uid,
            depth,
        }
    }
}
