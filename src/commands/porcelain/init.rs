use crate::areas::repository::Repository;
use std::fs;
use tracing::info;

impl Repository {
    /// Create the directory if needed and turn it into a git repository.
    ///
    /// Safe to repeat: `git init` on an existing repository only reinitializes it.
    pub fn init(&self) -> crate::Result<()> {
        fs::create_dir_all(self.path())?;

        self.git().run(["init"])?;
        info!(path = %self.path().display(), "initialized repository");

        Ok(())
    }
}
