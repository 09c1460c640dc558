//! End-to-end tests for the `tree` command.

mod common;
use common::prelude::*;

#[test]
fn test_tree_shows_modules_and_inputs() {
    let fixture = TestFixture::new().with_two_module_project();

    fixture
        .command()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("core [io.example.core]"))
        .stdout(predicate::str::contains("ext"))
        .stdout(predicate::str::contains("doc-files"))
        .stdout(predicate::str::contains("libs/b.jar"));
}

#[test]
fn test_tree_depth_limits_output() {
    let fixture = TestFixture::new().with_two_module_project();

    fixture
        .command()
        .args(["tree", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("core [io.example.core]"))
        .stdout(predicate::str::contains("classpath").not());
}

#[test]
fn test_tree_missing_config() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
