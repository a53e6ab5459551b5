//! Core repository components
//!
//! - `git`: Subprocess bridge to the git executable
//! - `repository`: The repository handle every operation hangs off
//! - `workspace`: Working directory path resolution and file system operations

pub mod git;
pub mod repository;
pub mod workspace;
