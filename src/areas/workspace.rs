use crate::artifacts::tree::tree_entry::{EntryKind, TreeEntry};
use crate::errors::{Error, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const GIT_DIR: &str = ".git";

/// Working tree of a repository
///
/// Resolves caller-supplied paths against the repository root and does the few
/// direct filesystem operations the store needs (uploads and tree listing).
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Normalize `path` into a path relative to the workspace root.
    ///
    /// Relative paths are taken from the root, absolute paths must live under it.
    /// `.` and `..` are folded lexically so the target does not need to exist yet.
    ///
    /// # Returns
    ///
    /// The relative path, or `Error::InvalidPath` if it escapes the root, names the
    /// root itself or points into the `.git` directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let invalid = || Error::InvalidPath {
            path: path.to_path_buf(),
            root: self.path.to_path_buf(),
        };

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| invalid())?
        } else {
            path
        };

        let mut resolved = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => resolved.push(name),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        return Err(invalid());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(invalid()),
            }
        }

        let inside_git_dir = resolved
            .components()
            .next()
            .is_some_and(|first| first.as_os_str() == GIT_DIR);
        if resolved.as_os_str().is_empty() || inside_git_dir {
            return Err(invalid());
        }

        Ok(resolved)
    }

    pub fn absolute(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        Ok(self.path.join(self.resolve(path)?))
    }

    /// Fail with `Error::InvalidPath` if an existing component of `relative` is a
    /// symlink, since writing through it could land outside the root.
    pub fn reject_symlinks(&self, relative: &Path) -> Result<()> {
        let mut current = self.path.to_path_buf();

        for component in relative.components() {
            current.push(component);
            match fs::symlink_metadata(&current) {
                Ok(metadata) if metadata.file_type().is_symlink() => {
                    return Err(Error::InvalidPath {
                        path: relative.to_path_buf(),
                        root: self.path.to_path_buf(),
                    });
                }
                Ok(_) => {}
                // nothing below a missing component can exist yet
                Err(err) if err.kind() == io::ErrorKind::NotFound => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Write `data` to `path` inside the working tree, creating parent directories.
    pub fn write_file(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<PathBuf> {
        let relative = self.resolve(path)?;
        self.reject_symlinks(&relative)?;
        let absolute = self.path.join(&relative);

        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&absolute, data)?;

        Ok(relative)
    }

    /// List every visible file and folder below the root, parents before children.
    pub fn list_entries(&self) -> Result<Vec<TreeEntry>> {
        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .map(|relative| !is_hidden(relative))
                    .unwrap_or(false)
            });

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(&self.path)
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let metadata = entry.metadata()?;

            let kind = if metadata.is_dir() {
                EntryKind::Folder
            } else {
                EntryKind::File
            };
            let size = if metadata.is_dir() { 0 } else { metadata.len() };

            entries.push(TreeEntry::from_relative_path(&relative, kind, size));
        }

        Ok(entries)
    }
}

/// A path is hidden when any of its components is a dotfile.
pub fn is_hidden(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Render a relative path the way git spells it in revisions (`HEAD:dir/file`).
pub fn to_git_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
