//! Operation: build and resolve the module graph of a manifest.

use std::path::Path;

use packer_core::identity::ModuleId;
use packer_core::manifest::Manifest;
use packer_core::mime::MimeTable;
use packer_resolver::{ModuleGraph, ModuleHandle};
use packer_util::errors::{PackerError, PackerResult};
use tracing::debug;

use crate::loader::ManifestLoader;

/// A resolved module graph plus the entry modules it was resolved from.
pub struct BuildSession {
    pub graph: ModuleGraph,
    pub entries: Vec<ModuleHandle>,
    pub mime: MimeTable,
}

/// Instantiate the entry modules, ensure everything they reach, then
/// resolve the entries.
///
/// With `entry` set only that module is used; otherwise every module flagged
/// `entry = true` in the manifest.
pub fn build(
    manifest: &Manifest,
    project_root: &Path,
    entry: Option<&str>,
) -> PackerResult<BuildSession> {
    let entry_ids: Vec<ModuleId> = match entry {
        Some(path) => vec![ModuleId::new(path)],
        None => manifest.entries().map(|m| m.id()).collect(),
    };
    if entry_ids.is_empty() {
        return Err(PackerError::Resolution {
            message: "No entry modules: mark a module with `entry = true` or pass --entry"
                .to_string(),
        }
        .into());
    }

    let loader = ManifestLoader::new(manifest, project_root);
    let load = |id: &ModuleId| loader.describe(id);
    let mut graph = ModuleGraph::new();

    let mut entries = Vec::with_capacity(entry_ids.len());
    for id in &entry_ids {
        let handle = graph.ensure_file(id, &load).ok_or_else(|| PackerError::Resolution {
            message: format!("Entry module '{id}' is not declared in Packer.toml"),
        })?;
        entries.push(handle);
    }

    let created = graph.ensure_all(&load);
    debug!(created, "ensured reachable modules");

    for &handle in &entries {
        graph.resolve(handle);
    }

    Ok(BuildSession {
        graph,
        entries,
        mime: MimeTable::with_overrides(&manifest.mime),
    })
}
