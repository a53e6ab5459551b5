use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;

/// Symbolic name of the current commit
pub const HEAD: &str = "HEAD";

impl Repository {
    /// Id of the commit HEAD points at, or `None` on an unborn branch.
    pub fn head(&self) -> crate::Result<Option<CommitId>> {
        let output = self.git().output(["rev-parse", "--verify", "--quiet", HEAD])?;

        if !output.status.success() {
            return Ok(None);
        }

        String::from_utf8_lossy(&output.stdout).parse().map(Some)
    }
}
