use crate::areas::repository::Repository;
use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Error;
use std::path::Path;
use tracing::{info, warn};

impl Repository {
    /// Commit the pending change set, attributed to `author`.
    ///
    /// An empty change set is not an error: nothing is recorded and `None` is
    /// returned.
    ///
    /// # Returns
    ///
    /// The id of the new commit, if one was created
    pub fn commit(&self, author: &Author, message: &str) -> crate::Result<Option<CommitId>> {
        if !self.has_staged_changes()? {
            info!("nothing staged, no commit created");
            return Ok(None);
        }

        let author_arg = format!("--author={}", author.display_name());
        let envs = if self.has_committer_identity()? {
            vec![]
        } else {
            warn!("no committer identity configured, committing as the author");
            vec![
                ("GIT_COMMITTER_NAME", author.name()),
                ("GIT_COMMITTER_EMAIL", author.email()),
            ]
        };

        self.git().run_with_env(
            [
                "commit",
                "--allow-empty-message",
                author_arg.as_str(),
                "-m",
                message,
            ],
            &envs,
        )?;

        let commit_id = self
            .head()?
            .ok_or_else(|| Error::MalformedOutput("HEAD missing after commit".to_string()))?;
        info!(
            commit = commit_id.to_short_oid(),
            author = %author,
            "created commit"
        );

        Ok(Some(commit_id))
    }

    /// Stage `path` and commit it.
    pub fn add_file(
        &self,
        path: impl AsRef<Path>,
        author: &Author,
        message: &str,
    ) -> crate::Result<Option<CommitId>> {
        self.stage(path)?;
        self.commit(author, message)
    }

    fn has_committer_identity(&self) -> crate::Result<bool> {
        Ok(self.git().output(["var", "GIT_COMMITTER_IDENT"])?.status.success())
    }
}
