use crate::areas::repository::Repository;
use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::commit_id::CommitId;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Delete `path` from the working tree and record the deletion in the pending
    /// change set.
    pub fn remove(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = self.workspace().resolve(path)?;

        self.git()
            .run([OsStr::new("rm"), OsStr::new("--"), path.as_os_str()])?;
        debug!(path = %path.display(), "removed");

        Ok(())
    }

    /// Remove `path` and commit the deletion.
    pub fn delete_file(
        &self,
        path: impl AsRef<Path>,
        author: &Author,
        message: &str,
    ) -> crate::Result<Option<CommitId>> {
        self.remove(path)?;
        self.commit(author, message)
    }
}
