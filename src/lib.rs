//! A versioned file store on top of git
//!
//! Every mutation of the working tree (add, delete, move) is recorded as a commit, and
//! the history of any path can be read back version by version:
//!
//! ```no_run
//! use gitfiles::{Author, Repository};
//!
//! # fn main() -> gitfiles::Result<()> {
//! let repository = Repository::new("/srv/files")?;
//! repository.init()?;
//!
//! let author: Author = "Test User <test@user.com>".parse()?;
//! repository.workspace().write_file("foo.txt", b"hello")?;
//! repository.add_file("foo.txt", &author, "Add foo")?;
//!
//! let file = repository.get_file("foo.txt")?;
//! assert_eq!(file.latest().content()?, b"hello");
//! # Ok(())
//! # }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

pub use areas::repository::Repository;
pub use artifacts::history::file::File;
pub use artifacts::history::file_version::FileVersion;
pub use artifacts::objects::author::Author;
pub use artifacts::objects::commit_id::CommitId;
pub use errors::{Error, Result};
