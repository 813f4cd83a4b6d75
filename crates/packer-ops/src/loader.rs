//! Manifest-backed module loader for the ensure pass.

use std::path::{Path, PathBuf};

use packer_core::identity::ModuleId;
use packer_core::manifest::Manifest;
use packer_core::source::{SourceDescriptor, SourceFile};

/// Describes modules declared in a manifest. Identities not declared there
/// cannot be located.
pub struct ManifestLoader<'a> {
    manifest: &'a Manifest,
    project_root: PathBuf,
}

impl<'a> ManifestLoader<'a> {
    pub fn new(manifest: &'a Manifest, project_root: &Path) -> Self {
        Self {
            manifest,
            project_root: project_root.to_path_buf(),
        }
    }

    pub fn describe(&self, id: &ModuleId) -> Option<SourceDescriptor> {
        let entry = self.manifest.module(id)?;
        let mut descriptor = SourceDescriptor::new(id.clone())
            .with_file(SourceFile::new(self.project_root.join(id.as_path())))
            .with_options(entry.options.clone());
        if let Some(dest) = &entry.dest {
            descriptor = descriptor.with_dest(dest);
        }
        Some(descriptor)
    }
}
