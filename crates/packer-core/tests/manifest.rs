use std::path::PathBuf;

use packer_core::identity::ModuleId;
use packer_core::manifest::Manifest;
use tempfile::TempDir;

const SITE: &str = r#"
[package]
name = "site"
description = "Marketing site bundle"

[[module]]
src = "src/app.js"
dest = "dist/app.js"
entry = true
imports = ["./lib/util.js", "vendor/jquery.js"]
excludes = ["vendor/jquery.js"]

[[module]]
src = "src/lib/util.js"

[[module]]
src = "src/site.css"
includes = ["./reset.css"]
mime = "text/x-site"

[mime]
tpl = "text/html"
"#;

#[test]
fn test_parse_manifest() {
    let manifest = Manifest::from_str(SITE).unwrap();
    assert_eq!(manifest.package.name, "site");
    assert_eq!(
        manifest.package.description.as_deref(),
        Some("Marketing site bundle")
    );
    assert_eq!(manifest.modules.len(), 3);
    assert_eq!(manifest.mime["tpl"], "text/html");

    let app = &manifest.modules[0];
    assert!(app.entry);
    assert_eq!(app.dest.as_deref(), Some("dist/app.js"));
    assert_eq!(app.options.imports.len(), 2);
    assert_eq!(app.options.excludes, vec!["vendor/jquery.js"]);

    let css = &manifest.modules[2];
    assert!(!css.entry);
    assert_eq!(css.options.includes, vec!["./reset.css"]);
    assert_eq!(css.options.mime.as_deref(), Some("text/x-site"));
}

#[test]
fn test_lookup_module_by_normalized_id() {
    let manifest = Manifest::from_str(SITE).unwrap();
    let util = manifest.module(&ModuleId::new("src/./lib/util.js")).unwrap();
    assert_eq!(util.src, "src/lib/util.js");
    assert!(manifest.module(&ModuleId::new("missing.js")).is_none());
}

#[test]
fn test_entries_in_manifest_order() {
    let manifest = Manifest::from_str(SITE).unwrap();
    let entries: Vec<_> = manifest.entries().map(|m| m.src.as_str()).collect();
    assert_eq!(entries, vec!["src/app.js"]);
}

#[test]
fn test_parse_error_reported_as_manifest_error() {
    let err = Manifest::from_str("[package]\n").unwrap_err();
    assert!(err.to_string().contains("Failed to parse Packer.toml"), "got: {err}");
}

#[test]
fn test_duplicate_module_rejected() {
    let content = r#"
[package]
name = "dup"

[[module]]
src = "a.js"

[[module]]
src = "./a.js"
"#;
    let err = Manifest::from_str(content).unwrap_err();
    assert!(err.to_string().contains("declared more than once"), "got: {err}");
}

#[test]
fn test_from_path_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path: PathBuf = tmp.path().join("Packer.toml");
    let err = Manifest::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}

#[test]
fn test_from_path_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Packer.toml");
    std::fs::write(&path, SITE).unwrap();
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.modules.len(), 3);
}
