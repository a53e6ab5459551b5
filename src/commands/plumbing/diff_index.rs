use crate::areas::repository::Repository;
use crate::errors::Error;

impl Repository {
    /// Whether the index differs from HEAD (or holds anything, before the first commit).
    pub fn has_staged_changes(&self) -> crate::Result<bool> {
        let output = self.git().output(["diff", "--cached", "--quiet"])?;

        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(Error::Subprocess {
                command: "diff".to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
        }
    }
}
