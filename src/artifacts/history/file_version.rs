use crate::areas::repository::Repository;
use crate::artifacts::history::log_entry::LogEntry;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

/// One historical state of a file
///
/// Holds the commit metadata only. The bytes are fetched from the repository on
/// every call to [`FileVersion::content`], never cached. Versions older than a
/// rename fetch their content under the name the file had at the time.
#[derive(Clone)]
pub struct FileVersion<'r> {
    repository: &'r Repository,
    path: PathBuf,
    recorded_path: PathBuf,
    id: CommitId,
    date: DateTime<FixedOffset>,
    author_name: String,
    author_email: String,
    message: String,
}

impl<'r> FileVersion<'r> {
    pub fn from_log_entry(repository: &'r Repository, path: PathBuf, entry: LogEntry) -> Self {
        let recorded_path = entry.recorded_path.unwrap_or_else(|| path.clone());

        FileVersion {
            repository,
            path,
            recorded_path,
            id: entry.id,
            date: entry.date,
            author_name: entry.author_name,
            author_email: entry.author_email,
            message: entry.message,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the file in this commit; differs from [`FileVersion::path`] before a rename.
    pub fn recorded_path(&self) -> &Path {
        &self.recorded_path
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// "Name <email>", as passed to `commit`
    pub fn author(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }

    /// The exact bytes recorded for this path at this commit.
    pub fn content(&self) -> Result<Vec<u8>> {
        self.repository
            .file_content(&self.recorded_path, Some(self.id.as_ref()))
    }
}

impl std::fmt::Display for FileVersion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.id, self.path.display())
    }
}

impl std::fmt::Debug for FileVersion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileVersion")
            .field("path", &self.path)
            .field("id", &self.id.to_short_oid())
            .finish()
    }
}
