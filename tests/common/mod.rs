#![allow(dead_code)]

pub mod repository;

pub const AUTHOR_STRING: &str = "Test User <test@user.com>";
pub const COMMIT_MESSAGE: &str = "Sample Commit Message";
pub const FILE_NAME: &str = "foo.txt";
pub const FILE_NAME_2: &str = "bar.txt";
pub const TEST_REPO: &str = "test_repository";
pub const CLONED_REPO: &str = "cloned_repository";
