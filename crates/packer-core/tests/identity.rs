use std::path::Path;

use packer_core::identity::{resolve_path_in_config, ModuleId};

#[test]
fn test_module_id_normalizes() {
    assert_eq!(ModuleId::new("src/./lib/../app.js"), ModuleId::new("src/app.js"));
}

#[test]
fn test_module_id_display() {
    assert_eq!(ModuleId::new("src/app.js").to_string(), "src/app.js");
}

#[test]
fn test_module_id_extension_lowercased() {
    assert_eq!(ModuleId::new("a/LOGO.PNG").extension().as_deref(), Some("png"));
    assert_eq!(ModuleId::new("Makefile").extension(), None);
}

#[test]
fn test_module_id_dir() {
    assert_eq!(ModuleId::new("src/css/site.css").dir(), Path::new("src/css"));
    assert_eq!(ModuleId::new("site.css").dir(), Path::new(""));
}

#[test]
fn test_resolve_dot_relative_against_base_dir() {
    let base = ModuleId::new("src/css/site.css");
    assert_eq!(
        resolve_path_in_config(Some(&base), "./reset.css"),
        ModuleId::new("src/css/reset.css")
    );
}

#[test]
fn test_resolve_parent_relative_against_base_dir() {
    let base = ModuleId::new("src/css/site.css");
    assert_eq!(
        resolve_path_in_config(Some(&base), "../vendor/normalize.css"),
        ModuleId::new("src/vendor/normalize.css")
    );
}

#[test]
fn test_resolve_standalone_ignores_base() {
    let base = ModuleId::new("src/css/site.css");
    assert_eq!(
        resolve_path_in_config(Some(&base), "lib/jquery.js"),
        ModuleId::new("lib/jquery.js")
    );
}

#[test]
fn test_resolve_relative_without_base_uses_root() {
    assert_eq!(
        resolve_path_in_config(None, "./lib/a.js"),
        ModuleId::new("lib/a.js")
    );
}
