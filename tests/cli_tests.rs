use assert_fs::prelude::*;
use common::repository::{TestRepository, run_gitfiles_command, test_repository};
use common::{COMMIT_MESSAGE, FILE_NAME, FILE_NAME_2, TEST_REPO};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

fn put(test_repository: &TestRepository, path: &str, content: &str) {
    run_gitfiles_command(test_repository.path(), &["put", path, "-m", COMMIT_MESSAGE])
        .write_stdin(content)
        .assert()
        .success();
}

#[rstest]
fn init_creates_a_repository() {
    let base_dir = assert_fs::TempDir::new().expect("Failed to create temp dir");
    let repository_dir = base_dir.child(TEST_REPO);

    run_gitfiles_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized file store in"));

    repository_dir.child(".git").assert(predicate::path::is_dir());
}

#[rstest]
fn put_from_stdin_commits_the_file(test_repository: TestRepository) {
    run_gitfiles_command(test_repository.path(), &["put", FILE_NAME, "-m", COMMIT_MESSAGE])
        .write_stdin("from stdin")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[[0-9a-f]{7}\] Sample Commit Message\n$").unwrap());

    assert_eq!(
        std::fs::read_to_string(test_repository.path().join(FILE_NAME)).unwrap(),
        "from stdin"
    );
    assert_eq!(test_repository.shas(FILE_NAME).len(), 1);
    assert_eq!(test_repository.short_status(), "");
}

#[rstest]
fn put_from_file_creates_parent_folders(test_repository: TestRepository) {
    let upload = test_repository.base_dir.child("upload.bin");
    upload.write_str("uploaded").unwrap();

    run_gitfiles_command(
        test_repository.path(),
        &["put", "docs/nested/foo.txt", "--from", upload.path().to_str().unwrap()],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Add docs/nested/foo.txt"));

    assert_eq!(
        std::fs::read_to_string(test_repository.path().join("docs/nested/foo.txt")).unwrap(),
        "uploaded"
    );
}

#[rstest]
fn put_same_content_twice_creates_no_commit(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "same");

    run_gitfiles_command(test_repository.path(), &["put", FILE_NAME])
        .write_stdin("same")
        .assert()
        .success()
        .stdout("nothing to commit\n");

    assert_eq!(test_repository.shas(FILE_NAME).len(), 1);
}

#[rstest]
fn put_outside_the_repository_fails(test_repository: TestRepository) {
    run_gitfiles_command(test_repository.path(), &["put", "../escape.txt"])
        .write_stdin("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes repository root"));

    test_repository
        .base_dir
        .child("escape.txt")
        .assert(predicate::path::missing());
}

#[rstest]
fn put_without_author_fails(test_repository: TestRepository) {
    run_gitfiles_command(test_repository.path(), &["put", FILE_NAME])
        .env_remove("GITFILES_AUTHOR")
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .write_stdin("anonymous")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commit author configured"));

    assert_eq!(test_repository.shas(FILE_NAME).len(), 0);
}

#[rstest]
fn author_flag_overrides_the_environment(test_repository: TestRepository) {
    run_gitfiles_command(
        test_repository.path(),
        &["--author", "Other Person <other@person.org>", "put", FILE_NAME],
    )
    .write_stdin("by someone else")
    .assert()
    .success();

    run_gitfiles_command(test_repository.path(), &["log", FILE_NAME])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author: Other Person <other@person.org>"));
}

#[rstest]
fn malformed_author_is_rejected(test_repository: TestRepository) {
    run_gitfiles_command(test_repository.path(), &["put", FILE_NAME])
        .env("GITFILES_AUTHOR", "no email here")
        .write_stdin("content")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid author"));
}

#[rstest]
fn add_commits_an_existing_file(test_repository: TestRepository) {
    test_repository.write(FILE_NAME, "already here");

    run_gitfiles_command(test_repository.path(), &["add", FILE_NAME, "-m", COMMIT_MESSAGE])
        .assert()
        .success()
        .stdout(predicate::str::contains(COMMIT_MESSAGE));

    assert_eq!(test_repository.shas(FILE_NAME).len(), 1);
}

#[rstest]
fn log_lists_versions_newest_first(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "first");
    run_gitfiles_command(test_repository.path(), &["put", FILE_NAME, "-m", "Second edit"])
        .write_stdin("second")
        .assert()
        .success();
    let shas = test_repository.shas(FILE_NAME);

    let expected = format!(
        "{} Second edit\n{} {}\n",
        &shas[1][..7],
        &shas[0][..7],
        COMMIT_MESSAGE
    );
    run_gitfiles_command(test_repository.path(), &["log", "--oneline", FILE_NAME])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(expected);

    run_gitfiles_command(test_repository.path(), &["log", FILE_NAME])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {}", shas[1])))
        .stdout(predicate::str::contains("Author: Test User <test@user.com>"))
        .stdout(predicate::str::contains("    Second edit"));
}

#[rstest]
fn log_of_unknown_file_fails(test_repository: TestRepository) {
    run_gitfiles_command(test_repository.path(), &["log", "not_a_real_file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in commit history"));
}

#[rstest]
fn show_prints_content_at_a_version(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "old");
    put(&test_repository, FILE_NAME, "new");
    let shas = test_repository.shas(FILE_NAME);

    run_gitfiles_command(test_repository.path(), &["show", FILE_NAME])
        .assert()
        .success()
        .stdout("new");

    run_gitfiles_command(
        test_repository.path(),
        &["show", FILE_NAME, "--version", shas[0].as_str()],
    )
    .assert()
    .success()
    .stdout("old");

    run_gitfiles_command(
        test_repository.path(),
        &["show", FILE_NAME, "--version", "0123456789abcdef0123456789abcdef01234567"],
    )
    .assert()
    .failure();
}

#[rstest]
fn rm_deletes_and_commits(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "one");
    put(&test_repository, FILE_NAME_2, "two");

    run_gitfiles_command(test_repository.path(), &["rm", FILE_NAME, FILE_NAME_2])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete foo.txt, bar.txt"));

    assert!(!test_repository.path().join(FILE_NAME).exists());
    assert!(!test_repository.path().join(FILE_NAME_2).exists());
    assert_eq!(test_repository.short_status(), "");
}

#[rstest]
fn rm_of_missing_file_fails(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "one");

    run_gitfiles_command(test_repository.path(), &["rm", FILE_NAME_2])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to remove bar.txt"));

    assert!(test_repository.path().join(FILE_NAME).exists());
}

#[rstest]
fn mv_renames_and_keeps_history(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "moving");

    run_gitfiles_command(test_repository.path(), &["mv", FILE_NAME, "archive/bar.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Move foo.txt to archive/bar.txt"));

    run_gitfiles_command(test_repository.path(), &["show", "archive/bar.txt"])
        .assert()
        .success()
        .stdout("moving");

    run_gitfiles_command(test_repository.path(), &["log", "--oneline", "archive/bar.txt"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(COMMIT_MESSAGE))
        .stdout(predicate::str::contains("Move foo.txt to archive/bar.txt"));
}

#[rstest]
fn status_reports_uncommitted_changes(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "tracked");
    test_repository.write(FILE_NAME, "edited");
    test_repository.write(FILE_NAME_2, "untracked");

    run_gitfiles_command(test_repository.path(), &["status"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(" M foo.txt"))
        .stdout(predicate::str::contains("?? bar.txt"));
}

#[rstest]
fn ls_json_lists_visible_entries(test_repository: TestRepository) {
    put(&test_repository, "docs/readme.md", "hello");
    test_repository.write(".hidden/secret.txt", "hidden");

    let output = run_gitfiles_command(test_repository.path(), &["ls", "--json"])
        .output()
        .expect("Failed to run gitfiles ls");
    assert!(output.status.success());

    let listing: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("ls --json should print JSON");
    let files = listing["files"].as_array().expect("files should be an array");

    let names = files
        .iter()
        .map(|entry| entry["name"].as_str().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["docs", "readme.md"]);

    assert_eq!(files[0]["type"], "folder");
    assert_eq!(files[0]["parent_uid"], serde_json::Value::Null);
    assert_eq!(files[1]["type"], "file");
    assert_eq!(files[1]["size"], 5);
    assert_eq!(files[1]["parent_uid"], files[0]["uid"]);
}

#[rstest]
fn ls_prints_an_indented_tree(test_repository: TestRepository) {
    put(&test_repository, "docs/readme.md", "hello");

    run_gitfiles_command(test_repository.path(), &["ls"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("docs/\n  readme.md (5 bytes)\n");
}

#[rstest]
fn clone_copies_history(test_repository: TestRepository) {
    put(&test_repository, FILE_NAME, "original");
    let destination = test_repository.sibling(common::CLONED_REPO);

    run_gitfiles_command(
        &destination,
        &["clone", test_repository.path().to_str().unwrap()],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Cloned"));

    run_gitfiles_command(&destination, &["show", FILE_NAME])
        .assert()
        .success()
        .stdout("original");
}
