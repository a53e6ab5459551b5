use crate::areas::repository::Repository;
use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::commit_id::CommitId;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

impl Repository {
    /// Rename `old_path` to `new_path` and record the rename in the pending change set.
    ///
    /// Both paths must resolve inside the repository; missing parent directories of
    /// `new_path` are created, and removed again if git refuses the move.
    pub fn move_path(
        &self,
        old_path: impl AsRef<Path>,
        new_path: impl AsRef<Path>,
    ) -> crate::Result<()> {
        let old_path = self.workspace().absolute(old_path)?;
        let new_relative = self.workspace().resolve(new_path)?;
        self.workspace().reject_symlinks(&new_relative)?;
        let new_path = self.path().join(&new_relative);

        // topmost missing ancestor, removed again if git refuses the move
        let created_dir = new_path
            .parent()
            .and_then(|parent| parent.ancestors().take_while(|dir| !dir.exists()).last())
            .map(Path::to_path_buf);
        if let Some(parent) = new_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let moved = self
            .git()
            .run([OsStr::new("mv"), old_path.as_os_str(), new_path.as_os_str()]);
        if let Err(err) = moved {
            if let Some(dir) = created_dir {
                if let Err(cleanup) = fs::remove_dir_all(&dir) {
                    warn!(dir = %dir.display(), error = %cleanup, "failed to remove directory");
                }
            }
            return Err(err);
        }
        debug!(
            from = %old_path.display(),
            to = %new_path.display(),
            "moved"
        );

        Ok(())
    }

    /// Rename `old_path` to `new_path` and commit the rename.
    pub fn move_file(
        &self,
        old_path: impl AsRef<Path>,
        new_path: impl AsRef<Path>,
        author: &Author,
        message: &str,
    ) -> crate::Result<Option<CommitId>> {
        self.move_path(old_path, new_path)?;
        self.commit(author, message)
    }
}
