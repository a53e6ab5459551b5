//! Error types for the versioned file store
//!
//! Three kinds of failure matter to callers:
//!
//! - `NotFound`: a path (or a path at a given revision) is absent from history
//! - `InvalidPath`: a path escapes the repository root and was rejected before git ran
//! - `Subprocess`: the git executable exited non-zero on an operation expected to succeed
//!
//! Everything else (I/O, malformed git output) is reported through the remaining variants.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "'{}' not found in commit history{}",
        .path.display(),
        .revision.as_ref().map(|rev| format!(" at {rev}")).unwrap_or_default()
    )]
    NotFound {
        path: PathBuf,
        revision: Option<String>,
    },

    #[error("path '{}' escapes repository root {}", .path.display(), .root.display())]
    InvalidPath { path: PathBuf, root: PathBuf },

    #[error("git {command} failed ({status}): {}", .stderr.trim())]
    Subprocess {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed git output: {0}")]
    MalformedOutput(String),

    #[error("invalid author '{0}', expected \"Display Name <email>\"")]
    InvalidAuthor(String),

    #[error("no commit author configured: pass --author, set GITFILES_AUTHOR or GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL")]
    MissingAuthor,

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("failed to walk working tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>, revision: Option<&str>) -> Self {
        Error::NotFound {
            path: path.into(),
            revision: revision.map(str::to_string),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::InvalidPath { .. })
    }

    /// Whether a failed git invocation means "the revision or path does not exist"
    /// rather than a broken repository.
    pub fn is_missing_object(&self) -> bool {
        const MISSING_OBJECT_MARKERS: [&str; 8] = [
            "does not have any commits",
            "bad revision",
            "unknown revision",
            "invalid object name",
            "does not exist in",
            "exists on disk, but not in",
            "bad object",
            "ambiguous argument",
        ];

        match self {
            Error::Subprocess { stderr, .. } => MISSING_OBJECT_MARKERS
                .iter()
                .any(|marker| stderr.contains(marker)),
            _ => false,
        }
    }
}
