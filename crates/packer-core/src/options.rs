//! Per-module configuration.

use serde::{Deserialize, Serialize};

/// Raw relation configuration a module is constructed from.
///
/// Paths are config paths, resolved with
/// [`resolve_path_in_config`](crate::identity::resolve_path_in_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    /// MIME type override for this module's output.
    #[serde(default)]
    pub mime: Option<String>,
}

/// Shared options value for modules constructed without configuration.
pub static EMPTY_OPTIONS: ModuleOptions = ModuleOptions {
    includes: Vec::new(),
    imports: Vec::new(),
    excludes: Vec::new(),
    mime: None,
};

impl ModuleOptions {
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
            && self.imports.is_empty()
            && self.excludes.is_empty()
            && self.mime.is_none()
    }
}
