//! Dry-run and check mode tests

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_dry_run_does_not_create_files() {
    let workspace = TestWorkspace::with_locales(&["fr", "de"]);

    workspace
        .sync_cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("would be created"))
        .stdout(predicate::str::contains("No files were written"));

    assert!(!workspace.file_exists(&format!("{}/~locale", common::POLYFILL_DIR)));
}

#[test]
fn test_dry_run_reports_pending_update() {
    let workspace = TestWorkspace::with_locales(&["fr"]);
    workspace.sync_cmd().assert().success();

    let detect = TestWorkspace::artifact("fr", "detect.js");
    workspace.write_file(&detect, "true");

    workspace
        .sync_cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would be updated"))
        .stdout(predicate::str::contains("(0 created, 1 updated, 2 unchanged)"));

    assert_eq!(workspace.read_file(&detect), "true");
}

#[test]
fn test_dry_run_with_output_root_blocked_by_file() {
    let workspace = TestWorkspace::with_locales(&["fr"]);
    let output_root = format!("{}/~locale", common::POLYFILL_DIR);
    workspace.write_file(&output_root, "not a directory");

    workspace
        .sync_cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 created, 0 updated, 0 unchanged)"));

    assert_eq!(workspace.read_file(&output_root), "not a directory");
}

#[test]
fn test_check_fails_on_missing_output() {
    let workspace = TestWorkspace::with_locales(&["fr"]);

    workspace
        .sync_cmd()
        .arg("--check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("3 locale artifact(s) are out of date"));

    assert!(!workspace.file_exists(&TestWorkspace::artifact("fr", "polyfill.js")));
}

#[test]
fn test_check_succeeds_after_sync() {
    let workspace = TestWorkspace::with_locales(&["fr", "de"]);
    workspace.sync_cmd().assert().success();

    workspace
        .sync_cmd()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 created, 0 updated, 6 unchanged)"));
}

#[test]
fn test_check_and_dry_run_conflict() {
    let workspace = TestWorkspace::with_locales(&["fr"]);

    workspace
        .sync_cmd()
        .args(["--check", "--dry-run"])
        .assert()
        .failure();
}
