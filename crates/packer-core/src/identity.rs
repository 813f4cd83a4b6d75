//! Canonical module identities and config path resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use packer_util::fs::normalize_path;
use serde::{Deserialize, Serialize};

/// Canonical identity of a source-backed module.
///
/// Always stored in lexically normalized form, so two spellings of the same
/// path (`src/./a.js`, `src/lib/../a.js`) compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(normalize_path(path.as_ref()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Directory that `./`-style config paths are resolved against.
    pub fn dir(&self) -> &Path {
        self.0.parent().unwrap_or(Path::new(""))
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.0
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for ModuleId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Turn a path written in module configuration into a canonical identity.
///
/// Paths starting with the current-directory marker (`./x`, `../x`) are
/// resolved against the directory of `base`; synthetic modules (no `base`)
/// resolve them against the project root. Every other path is standalone.
pub fn resolve_path_in_config(base: Option<&ModuleId>, path: &str) -> ModuleId {
    if path.starts_with('.') {
        match base {
            Some(base) => ModuleId::new(base.dir().join(path)),
            None => ModuleId::new(path),
        }
    } else {
        ModuleId::new(path)
    }
}
