//! Runtime configuration
//!
//! Settings come from command-line flags with environment fallbacks, resolved once at
//! startup. The resulting [`Repository`] is built here and handed to each command.

use crate::areas::git::DEFAULT_GIT_PROGRAM;
use crate::areas::repository::Repository;
use crate::artifacts::objects::author::Author;
use crate::errors::{Error, Result};
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

pub const REPOSITORY_ENV: &str = "GITFILES_REPO";
pub const GIT_PROGRAM_ENV: &str = "GITFILES_GIT";
pub const AUTHOR_ENV: &str = "GITFILES_AUTHOR";

#[derive(Debug, Clone, Args)]
pub struct Settings {
    #[arg(
        long = "repo",
        env = REPOSITORY_ENV,
        default_value = ".",
        global = true,
        help = "Root directory of the file store"
    )]
    pub repository_path: PathBuf,

    #[arg(
        long = "git",
        env = GIT_PROGRAM_ENV,
        default_value = DEFAULT_GIT_PROGRAM,
        global = true,
        help = "git executable to run"
    )]
    pub git_program: OsString,

    #[arg(
        long,
        env = AUTHOR_ENV,
        global = true,
        help = "Commit author, as \"Display Name <email>\""
    )]
    pub author: Option<Author>,
}

impl Settings {
    pub fn repository(&self) -> Result<Repository> {
        Repository::with_git_program(&self.repository_path, self.git_program.clone())
    }

    /// The configured author, falling back to GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL.
    pub fn author(&self) -> Result<Author> {
        self.author
            .clone()
            .or_else(Author::load_from_env)
            .ok_or(Error::MissingAuthor)
    }
}
