use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::identity::ModuleId;
use crate::options::ModuleOptions;

/// The parsed representation of a `Packer.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleEntry>,

    /// Extension to MIME type overrides from `[mime]`.
    #[serde(default)]
    pub mime: BTreeMap<String, String>,
}

/// Bundle identity and metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One `[[module]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub src: String,
    #[serde(default)]
    pub dest: Option<String>,
    /// Entry modules are resolved and reported by default.
    #[serde(default)]
    pub entry: bool,
    #[serde(flatten)]
    pub options: ModuleOptions,
}

impl ModuleEntry {
    pub fn id(&self) -> ModuleId {
        ModuleId::new(&self.src)
    }
}

impl Manifest {
    /// Load and parse a `Packer.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            packer_util::errors::PackerError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Packer.toml` from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| {
            packer_util::errors::PackerError::Manifest {
                message: format!("Failed to parse Packer.toml: {e}"),
            }
        })?;
        manifest.check_duplicates()?;
        Ok(manifest)
    }

    /// Look up the module entry whose `src` normalizes to `id`.
    pub fn module(&self, id: &ModuleId) -> Option<&ModuleEntry> {
        self.modules.iter().find(|m| &m.id() == id)
    }

    /// Modules flagged with `entry = true`, in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.modules.iter().filter(|m| m.entry)
    }

    fn check_duplicates(&self) -> miette::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for module in &self.modules {
            let id = module.id();
            if !seen.insert(id.clone()) {
                return Err(packer_util::errors::PackerError::Manifest {
                    message: format!("Module '{id}' is declared more than once"),
                }
                .into());
            }
        }
        Ok(())
    }
}
