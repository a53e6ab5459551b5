use crate::areas::git::{DEFAULT_GIT_PROGRAM, Git};
use crate::areas::workspace::Workspace;
use crate::errors::Result;
use std::ffi::OsString;
use std::path::Path;

/// A working directory bound to a git repository
///
/// The root path is made absolute once, at construction, and never changes. The
/// directory itself does not have to exist until [`Repository::init`] or
/// [`Repository::clone_from`] creates it.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    git: Git,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_git_program(path, DEFAULT_GIT_PROGRAM)
    }

    /// Bind a repository that shells out to `program` instead of the `git` on PATH.
    pub fn with_git_program(path: impl AsRef<Path>, program: impl Into<OsString>) -> Result<Self> {
        let path = std::path::absolute(path.as_ref())?.into_boxed_path();

        let git = Git::new(program, path.clone());
        let workspace = Workspace::new(path.clone());

        Ok(Repository {
            path,
            git,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
