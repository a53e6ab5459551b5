use crate::areas::repository::Repository;
use crate::artifacts::history::file_version::FileVersion;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// A tracked path together with its version history
///
/// The versions are read once, when the file is loaded, and ordered oldest first.
/// A loaded file always has at least one version.
pub struct File<'r> {
    repository: &'r Repository,
    path: PathBuf,
    versions: Vec<FileVersion<'r>>,
}

impl<'r> File<'r> {
    /// Load the full history of `path`, following renames
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository the path belongs to
    /// * `path` - Path relative to the repository root (or absolute, inside it)
    ///
    /// # Returns
    ///
    /// The file, or `Error::NotFound` if no commit ever touched the path
    pub fn load(repository: &'r Repository, path: impl AsRef<Path>) -> Result<Self> {
        let path = repository.workspace().resolve(path)?;

        let versions = repository
            .path_history(&path, None)?
            .into_iter()
            .rev()
            .map(|entry| FileVersion::from_log_entry(repository, path.clone(), entry))
            .collect::<Vec<_>>();

        if versions.is_empty() {
            return Err(Error::not_found(path, None));
        }

        Ok(File {
            repository,
            path,
            versions,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn versions(&self) -> &[FileVersion<'r>] {
        &self.versions
    }

    pub fn latest(&self) -> &FileVersion<'r> {
        &self.versions[self.versions.len() - 1]
    }

    /// Look up the version of this file recorded at `id`.
    ///
    /// Queries the repository directly, so `id` may be any revision git understands
    /// and need not be part of [`File::versions`]. When several commits match, the most
    /// recent one wins.
    pub fn version_by_id(&self, id: &str) -> Result<FileVersion<'r>> {
        let entry = self
            .repository
            .path_history(&self.path, Some(id))?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(&self.path, Some(id)))?;

        Ok(FileVersion::from_log_entry(
            self.repository,
            self.path.clone(),
            entry,
        ))
    }
}

impl std::fmt::Display for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl std::fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File")
            .field("path", &self.path)
            .field("versions", &self.versions.len())
            .finish()
    }
}
