//! Integration tests for config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::revtag_cmd;

fn init_vault(temp: &TempDir) {
    revtag_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_config_get_default_tag_prefix() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_prefix")
        .assert()
        .success()
        .stdout(predicate::str::contains("review"));
}

#[test]
fn test_config_set_and_get_tag_prefix() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_prefix")
        .arg("study")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set tag_prefix = study"));

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_prefix")
        .assert()
        .success()
        .stdout(predicate::str::contains("study"));
}

#[test]
fn test_config_set_include_subdirectories() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("include_subdirectories")
        .arg("false")
        .assert()
        .success();

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("include_subdirectories")
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_config_include_subdirectories_rejects_non_boolean() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("include_subdirectories")
        .arg("maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected true or false"));
}

#[test]
fn test_config_rejects_empty_tag_prefix() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_prefix")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2026-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("prefix")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("tag_prefix"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_vault(&temp);

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_prefix = review"))
        .stdout(predicate::str::contains("include_subdirectories = true"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_outside_vault_fails() {
    let temp = TempDir::new().unwrap();

    revtag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("tag_prefix")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a revtag vault"));
}
