//! Porcelain operations (the file store's public surface)
//!
//! Each file adds one group of operations to [`Repository`](crate::areas::repository::Repository):
//!
//! - `init`: Create a repository
//! - `clone`: Copy an existing repository, history included
//! - `add`: Stage and unstage paths
//! - `rm`: Remove paths, alone or with a commit
//! - `mv`: Rename paths, alone or with a commit
//! - `commit`: Record the pending change set
//! - `status`: Staged, unstaged and untracked views
//! - `log`: Per-path history and file loading

pub mod add;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod mv;
pub mod rm;
pub mod status;
