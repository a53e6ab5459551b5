//! Plumbing queries
//!
//! Low-level reads against the object store that the porcelain operations and the
//! history model build on:
//!
//! - `cat_file`: Blob content of a path at a revision
//! - `diff_index`: Whether the index holds uncommitted changes
//! - `rev_parse`: Resolution of HEAD to a commit id

pub mod cat_file;
pub mod diff_index;
pub mod rev_parse;
