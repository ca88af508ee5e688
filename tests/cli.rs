//! Runs the `verbump` binary against scratch project directories.
#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GO_TEMPLATE: &str = "package tool\n\n// Version of the tool\nconst Version = `v{}`\n";

fn project(version: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("codemeta.json"),
        format!(
            r#"{{"name":"tool","version":"{v}","downloadUrl":"https://example.org/tool/{v}/tool.zip"}}"#,
            v = version
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("datatools.go"),
        GO_TEMPLATE.replace("{}", version),
    )
    .unwrap();
    dir
}

fn verbump(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verbump").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn snapshot(dir: &Path) -> (String, String) {
    (
        fs::read_to_string(dir.join("codemeta.json")).unwrap(),
        fs::read_to_string(dir.join("datatools.go")).unwrap(),
    )
}

#[test]
fn dry_run_proposes_patch_bump() {
    let dir = project("0.0.5");
    let before = snapshot(dir.path());

    verbump(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("current version: 0.0.5"))
        .stdout(predicate::str::contains("proposed version: 0.0.6"));

    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn set_overrides_and_strips_v() {
    let dir = project("1.4.2");

    verbump(dir.path())
        .args(["--set", "v2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proposed version: 2.0.0"))
        .stdout(predicate::str::contains("v2.0.0").not());
}

#[test]
fn set_without_value_exits_one() {
    let dir = project("1.0.0");
    let before = snapshot(dir.path());

    verbump(dir.path())
        .arg("--set")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--set"));

    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn help_exits_zero_without_files() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-h", "-help", "--help"] {
        verbump(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("--set"))
            .stdout(predicate::str::contains("SYNOPSIS"));
    }
}

#[test]
fn yes_applies_to_both_files() {
    for flag in ["-y", "--yes", "-yes"] {
        let dir = project("1.2.3");

        verbump(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("from 1.2.3 to 1.2.4"))
            .stdout(predicate::str::contains("from v1.2.3 to v1.2.4"));

        let (meta, src) = snapshot(dir.path());
        assert_eq!(
            meta,
            "{\n    \"name\": \"tool\",\n    \"version\": \"1.2.4\",\n    \"downloadUrl\": \"https://example.org/tool/1.2.4/tool.zip\"\n}"
        );
        assert_eq!(src, GO_TEMPLATE.replace("{}", "1.2.4"));
    }
}

#[test]
fn set_and_yes_write_explicit_version() {
    let dir = project("0.9.9");

    verbump(dir.path())
        .args(["--set", "v1.0.0", "--yes"])
        .assert()
        .success();

    let (meta, src) = snapshot(dir.path());
    assert!(meta.contains("\"version\": \"1.0.0\""));
    assert!(meta.contains("/tool/1.0.0/tool.zip"));
    assert!(src.contains("Version = `v1.0.0`"));
}

#[test]
fn missing_metadata_fails() {
    let dir = tempfile::tempdir().unwrap();

    verbump(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("codemeta.json"));
}

#[test]
fn malformed_metadata_fails() {
    let dir = project("1.0.0");
    fs::write(dir.path().join("codemeta.json"), "{ \"version\": ").unwrap();

    verbump(dir.path())
        .arg("-y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));

    assert_eq!(
        fs::read_to_string(dir.path().join("datatools.go")).unwrap(),
        GO_TEMPLATE.replace("{}", "1.0.0")
    );
}

#[test]
fn missing_literal_is_ignored_unless_strict() {
    let dir = project("1.0.0");
    let body = "package tool\n";
    fs::write(dir.path().join("datatools.go"), body).unwrap();

    verbump(dir.path()).arg("-y").assert().success();
    assert_eq!(fs::read_to_string(dir.path().join("datatools.go")).unwrap(), body);

    verbump(dir.path())
        .args(["-y", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_shape_version_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("codemeta.json"),
        r#"{"version":"2024.1","downloadUrl":"u"}"#,
    )
    .unwrap();

    verbump(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("proposed version: 2024.1"));
}

#[test]
fn unknown_arguments_still_dry_run() {
    let dir = project("0.0.5");
    let before = snapshot(dir.path());

    for args in [vec!["extra"], vec!["-v"], vec!["extra", "--verbose", "-x"]] {
        verbump(dir.path())
            .args(&args)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("current version: 0.0.5"))
            .stdout(predicate::str::contains("proposed version: 0.0.6"));
    }

    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn repeated_set_uses_first_value() {
    let dir = project("0.0.5");

    verbump(dir.path())
        .args(["--set", "1.0.0", "--set", "2.0.0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("proposed version: 1.0.0"));
}

#[test]
fn unknown_arguments_do_not_block_apply() {
    let dir = project("1.2.3");

    verbump(dir.path()).args(["extra", "-y"]).assert().success();

    let (meta, src) = snapshot(dir.path());
    assert!(meta.contains("\"version\": \"1.2.4\""));
    assert!(src.contains("Version = `v1.2.4`"));
}

#[test]
fn non_string_version_is_reported_as_missing_field() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("codemeta.json"),
        r#"{"version":1,"downloadUrl":"u/1"}"#,
    )
    .unwrap();

    verbump(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("has no string field \"version\""))
        .stderr(predicate::str::contains("invalid JSON").not());
}
