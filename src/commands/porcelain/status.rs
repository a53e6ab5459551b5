use crate::areas::repository::Repository;
use crate::artifacts::status::file_status::{FileStatus, parse_porcelain};
use std::path::PathBuf;

// Terminology:
// - staged files: the index column holds a change code
// - unstaged files: the index column is untouched (`?`)
// - untracked files: the working column is untouched (`?`), git does not know the path
impl Repository {
    /// Current status of every changed or untracked path, recomputed on each call.
    pub fn status(&self) -> crate::Result<Vec<FileStatus>> {
        let output = self.git().run(["status", "--porcelain"])?;

        parse_porcelain(&String::from_utf8_lossy(&output))
    }

    pub fn staged_files(&self) -> crate::Result<Vec<PathBuf>> {
        self.status_paths(FileStatus::is_staged)
    }

    pub fn unstaged_files(&self) -> crate::Result<Vec<PathBuf>> {
        self.status_paths(FileStatus::is_unstaged)
    }

    pub fn untracked_files(&self) -> crate::Result<Vec<PathBuf>> {
        self.status_paths(FileStatus::is_untracked)
    }

    fn status_paths(&self, predicate: fn(&FileStatus) -> bool) -> crate::Result<Vec<PathBuf>> {
        Ok(self
            .status()?
            .into_iter()
            .filter(|status| predicate(status))
            .map(|status| status.path)
            .collect())
    }
}
