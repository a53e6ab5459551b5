use crate::areas::repository::Repository;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

impl Repository {
    /// Add `path` to the pending change set without committing.
    pub fn stage(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = self.workspace().resolve(path)?;

        self.git()
            .run([OsStr::new("add"), OsStr::new("--"), path.as_os_str()])?;
        debug!(path = %path.display(), "staged");

        Ok(())
    }

    /// Drop `path` from the pending change set. The working tree file is kept.
    pub fn unstage(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = self.workspace().resolve(path)?;

        self.git().run([
            OsStr::new("rm"),
            OsStr::new("--cached"),
            OsStr::new("--"),
            path.as_os_str(),
        ])?;
        debug!(path = %path.display(), "unstaged");

        Ok(())
    }
}
