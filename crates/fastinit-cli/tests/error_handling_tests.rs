//! Tests for error messages, suggestions and exit codes.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fastinit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fastinit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("FASTINIT_CONFIG")
        .env_remove("FASTINIT_DEFAULTS__ORM");
    cmd
}

#[test]
fn test_unknown_database_lists_allowed_values() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args(["new", "demo", "--database", "oracle", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid database 'oracle'"))
        .stderr(predicate::str::contains("expected one of"))
        .stderr(predicate::str::contains("postgresql"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_unknown_orm_is_user_error() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args(["new", "demo", "--orm", "django", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sqlalchemy"))
        .stderr(predicate::str::contains("sqlmodel"));
}

#[test]
fn test_invalid_project_name() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args(["new", "1api", "--non-interactive", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("start with a letter"));
}

#[test]
fn test_non_empty_destination_is_refused() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("taken");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("keep.txt"), "mine").unwrap();

    fastinit(temp.path())
        .args(["new", "taken", "--yes", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not empty"));

    let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
}

#[test]
fn test_empty_destination_is_accepted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("fresh")).unwrap();

    fastinit(temp.path())
        .args(["new", "fresh", "--yes", "--non-interactive"])
        .assert()
        .success();

    assert!(temp.path().join("fresh/app/main.py").is_file());
}

#[test]
fn test_invalid_env_default_is_config_error() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .env("FASTINIT_DEFAULTS__ORM", "peewee")
        .args(["new", "demo", "--yes", "--non-interactive"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("peewee"));
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args(["--config", "nowhere.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args(["config", "get", "defaults.framework"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_docker_flags_conflict_resolution() {
    let temp = TempDir::new().unwrap();

    fastinit(temp.path())
        .args([
            "new",
            "flip",
            "--docker",
            "--no-docker",
            "--yes",
            "--non-interactive",
        ])
        .assert()
        .success();

    assert!(!temp.path().join("flip/Dockerfile").exists());
}
