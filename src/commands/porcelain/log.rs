use crate::areas::repository::Repository;
use crate::areas::workspace::to_git_path;
use crate::artifacts::history::file::File;
use crate::artifacts::history::log_entry::{LOG_FORMAT, LogEntry, parse_log};
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Commits touching `path`, newest first, following renames.
    ///
    /// With a `revision`, at most one entry is returned: the most recent commit at or
    /// before that revision that touched the path. An unknown revision is reported as
    /// `Error::NotFound`; a path without history yields an empty list.
    pub fn path_history(
        &self,
        path: impl AsRef<Path>,
        revision: Option<&str>,
    ) -> crate::Result<Vec<LogEntry>> {
        let path = self.workspace().resolve(path)?;
        let git_path = to_git_path(&path);

        let mut args = vec!["log", "--follow", "--name-only", LOG_FORMAT];
        if let Some(revision) = revision {
            if revision.is_empty() || revision.starts_with('-') {
                return Err(Error::not_found(path, Some(revision)));
            }
            args.extend(["-n", "1", revision]);
        }
        args.extend(["--", git_path.as_str()]);

        match self.git().run(&args) {
            Ok(stdout) => parse_log(&String::from_utf8_lossy(&stdout)),
            // an unborn branch has no history for any path
            Err(err) if err.is_missing_object() && revision.is_none() => Ok(Vec::new()),
            Err(err) if err.is_missing_object() => Err(Error::not_found(path, revision)),
            Err(err) => Err(err),
        }
    }

    /// Load `path` with its full version history.
    pub fn get_file(&self, path: impl AsRef<Path>) -> crate::Result<File<'_>> {
        File::load(self, path)
    }
}
