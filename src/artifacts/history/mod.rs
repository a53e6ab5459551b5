//! Per-file version history
//!
//! - `log_entry`: the `git log` line format and its parser
//! - `file`: a path's full history, oldest version first
//! - `file_version`: one historical state of a path, with lazily fetched content
//!
//! History is read with rename-following, so a file moved from `a` to `b` reports the
//! commits recorded under `a` when queried as `b`.

pub mod file;
pub mod file_version;
pub mod log_entry;
