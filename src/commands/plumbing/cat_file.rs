use crate::areas::repository::Repository;
use crate::areas::workspace::to_git_path;
use crate::commands::plumbing::rev_parse::HEAD;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Exact bytes of `path` as recorded at `version` (HEAD when `None`).
    ///
    /// # Returns
    ///
    /// The blob content, or `Error::NotFound` if the path did not exist at that
    /// version or the version is unknown
    pub fn file_content(
        &self,
        path: impl AsRef<Path>,
        version: Option<&str>,
    ) -> crate::Result<Vec<u8>> {
        let path = self.workspace().resolve(path)?;
        let revision = version.unwrap_or(HEAD);

        if revision.is_empty() || revision.starts_with('-') {
            return Err(Error::not_found(path, Some(revision)));
        }

        let object = format!("{}:{}", revision, to_git_path(&path));
        self.git().run(["show", object.as_str()]).map_err(|err| {
            if err.is_missing_object() {
                Error::not_found(&path, Some(revision))
            } else {
                err
            }
        })
    }
}
