use crate::common::{AUTHOR_STRING, TEST_REPO};
use assert_cmd::Command;
use assert_fs::TempDir;
use gitfiles::{Author, Repository};
use rstest::fixture;
use std::path::{Path, PathBuf};

/// A freshly initialized repository living in its own temporary directory
pub struct TestRepository {
    pub base_dir: TempDir,
    pub repository: Repository,
}

impl TestRepository {
    pub fn path(&self) -> &Path {
        self.repository.path()
    }

    pub fn sibling(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
        }

        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
    }

    /// Commit ids touching `path`, oldest first, straight from git
    pub fn shas(&self, path: &str) -> Vec<String> {
        let output = run_git_command(self.path(), &["log", "--format=%H", "--", path])
            .output()
            .expect("Failed to run git log");

        let mut shas = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>();
        shas.reverse();
        shas
    }

    /// `git status -s` output, as a user would read it
    pub fn short_status(&self) -> String {
        let output = run_git_command(self.path(), &["status", "-s"])
            .output()
            .expect("Failed to run git status");

        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

#[fixture]
pub fn author() -> Author {
    AUTHOR_STRING.parse().expect("Failed to parse test author")
}

#[fixture]
pub fn base_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn test_repository(base_dir: TempDir) -> TestRepository {
    let repository =
        Repository::new(base_dir.path().join(TEST_REPO)).expect("Failed to bind repository");
    repository.init().expect("Failed to initialize repository");

    TestRepository {
        base_dir,
        repository,
    }
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_gitfiles_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitfiles").expect("Failed to find gitfiles binary");
    cmd.env("GITFILES_REPO", dir);
    cmd.env("GITFILES_AUTHOR", AUTHOR_STRING);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
