//! Presentation model of the working tree
//!
//! A flat, serializable listing of the files and folders under the repository root,
//! as consumed by front ends that render the tree.

pub mod tree_entry;
