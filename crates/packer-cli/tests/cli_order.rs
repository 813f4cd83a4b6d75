use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[package]
name = "demo"

[[module]]
src = "app.js"
entry = true
imports = ["./b.js", "./c.js"]
excludes = ["./c.js"]

[[module]]
src = "b.js"
imports = ["./a.js"]

[[module]]
src = "a.js"
imports = ["./b.js"]

[[module]]
src = "c.js"
"#;

#[allow(deprecated)]
fn packer_cmd() -> Command {
    Command::cargo_bin("packer").unwrap()
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Packer.toml"), MANIFEST).unwrap();
    tmp
}

#[test]
fn test_order_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    packer_cmd()
        .current_dir(tmp.path())
        .args(["order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Packer.toml"));
}

#[test]
fn test_order_prints_dependencies_first() {
    let tmp = project();

    packer_cmd()
        .current_dir(tmp.path())
        .args(["order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. a.js"))
        .stdout(predicate::str::contains("2. b.js"))
        .stdout(predicate::str::contains("3. app.js"))
        .stdout(predicate::str::contains("c.js").not());
}

#[test]
fn test_order_from_subdirectory() {
    let tmp = project();
    let nested = tmp.path().join("nested");
    fs::create_dir(&nested).unwrap();

    packer_cmd()
        .current_dir(&nested)
        .args(["order", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"entry\": \"app.js\""));
}

#[test]
fn test_order_unknown_entry_fails() {
    let tmp = project();

    packer_cmd()
        .current_dir(tmp.path())
        .args(["order", "--entry", "ghost.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not declared in Packer.toml"));
}

#[test]
fn test_tree_shows_relations() {
    let tmp = project();

    packer_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--entry", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[import] b.js"))
        .stdout(predicate::str::contains("[exclude] c.js"));
}

#[test]
fn test_tree_files_lists_dependencies() {
    let tmp = project();

    packer_cmd()
        .current_dir(tmp.path())
        .args(["tree", "--files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.js -> b.js (import)"));
}
