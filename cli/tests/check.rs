//! # Healthbot CLI Check Integration Tests
//!
//! File: cli/tests/check.rs
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_check_builtin() {
    let sandbox = tempfile::tempdir().unwrap();

    healthbot_cmd(sandbox.path())
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Knowledge base: built-in dataset")
                .and(predicate::str::contains("Knowledge base OK.")),
        );
}

#[test]
fn test_check_lists_entries() {
    let (sandbox, dataset) = sandbox_with_dataset(HEADACHE_DATASET);

    healthbot_cmd(sandbox.path())
        .arg("--dataset")
        .arg(&dataset)
        .args(["check", "--list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Entries:   2")
                .and(predicate::str::contains("Keywords:  2"))
                .and(predicate::str::contains("Responses: 4"))
                .and(predicate::str::contains("headache (3 responses)")),
        );
}

#[test]
fn test_check_rejects_blank_keyword() {
    let (sandbox, dataset) =
        sandbox_with_dataset(r#"{"questions": [{"keywords": [""], "responses": ["Rest"]}]}"#);

    healthbot_cmd(sandbox.path())
        .arg("--dataset")
        .arg(&dataset)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry #0 is invalid: blank keyword"));
}
