use crate::areas::repository::Repository;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Populate this repository as a full copy (history included) of `source`.
    ///
    /// The destination directory is created if absent; it must be empty. Fails with
    /// `Error::Subprocess` when `source` is not a repository or the destination is not
    /// writable.
    pub fn clone_from(&self, source: impl AsRef<Path>) -> crate::Result<()> {
        let source = std::path::absolute(source.as_ref())?;
        fs::create_dir_all(self.path())?;

        self.git().run([
            OsStr::new("clone"),
            source.as_os_str(),
            self.path().as_os_str(),
        ])?;
        info!(
            source = %source.display(),
            destination = %self.path().display(),
            "cloned repository"
        );

        Ok(())
    }
}
