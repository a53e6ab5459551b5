//! Working tree status
//!
//! Parsing of `git status --porcelain` into per-path index/working state codes,
//! from which the staged, unstaged and untracked views are derived.

pub mod file_status;
