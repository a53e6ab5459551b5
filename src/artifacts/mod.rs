//! Data model of the versioned file store
//!
//! - `history`: Per-file version history and log parsing
//! - `objects`: Commit ids and commit authors
//! - `status`: Working tree status entries
//! - `tree`: Serializable listing of the working tree

pub mod history;
pub mod objects;
pub mod status;
pub mod tree;
