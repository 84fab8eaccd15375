//! Tests for the skip-on-existing-output behavior
//!
//! Presence of the output tree is the sole signal that the build phase must
//! not run again; a rebuild requires deleting the tree first.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn ipahostr_cmd() -> Command {
    Command::cargo_bin("ipahostr").expect("binary builds")
}

#[test]
fn test_second_run_does_not_mutate_output() {
    let workspace = common::TestWorkspace::new();
    workspace.create_app_bundle("Foo", Some(("com.x.foo", "1.0")));

    ipahostr_cmd()
        .current_dir(&workspace.path)
        .args(["http://example.test", "--build-only"])
        .assert()
        .success();

    // A bundle added after the first build must not be picked up.
    workspace.create_app_bundle("Late", Some(("com.x.late", "9.9")));
    let catalog_before = workspace.read_file("ipahostr/ipa/contents.json");

    ipahostr_cmd()
        .current_dir(&workspace.path)
        .args(["http://example.test", "--build-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping build"));

    assert!(!workspace.file_exists("ipahostr/ipa/Late"));
    assert_eq!(
        workspace.read_file("ipahostr/ipa/contents.json"),
        catalog_before
    );
}

#[test]
fn test_existing_tree_without_bundles_still_skips() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("ipahostr/ipa/contents.json", "[]");

    ipahostr_cmd()
        .current_dir(&workspace.path)
        .arg("--build-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping build"));

    assert_eq!(workspace.read_file("ipahostr/ipa/contents.json"), "[]");
}

#[test]
fn test_deleting_tree_forces_rebuild() {
    let workspace = common::TestWorkspace::new();
    workspace.create_app_bundle("Foo", Some(("com.x.foo", "1.0")));

    ipahostr_cmd()
        .current_dir(&workspace.path)
        .args(["http://example.test", "--build-only"])
        .assert()
        .success();

    std::fs::remove_dir_all(workspace.path.join("ipahostr")).unwrap();
    workspace.create_app_bundle("Bar", Some(("com.x.bar", "2.0")));

    ipahostr_cmd()
        .current_dir(&workspace.path)
        .args(["http://example.test", "--build-only"])
        .assert()
        .success();

    assert!(workspace.file_exists("ipahostr/ipa/Foo/Foo.ipa"));
    assert!(workspace.file_exists("ipahostr/ipa/Bar/Bar.ipa"));
}
