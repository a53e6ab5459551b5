//! Repository operations
//!
//! Operations are grouped the way git groups its commands:
//!
//! - `plumbing`: Low-level queries (blob content, HEAD resolution, index state)
//! - `porcelain`: The file store operations callers use (add, commit, log, etc.)
//!
//! Every operation is an inherent method on `Repository` and runs one or more
//! blocking `git` subprocesses.

pub mod plumbing;
pub mod porcelain;
