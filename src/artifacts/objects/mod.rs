//! Value types naming commits and the people who make them
//!
//! - **CommitId**: 40-character SHA-1 naming a commit; addresses a file version
//! - **Author**: `Display Name <email>` attribution of a commit

pub mod author;
pub mod commit_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
