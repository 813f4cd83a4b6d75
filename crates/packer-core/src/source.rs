//! Source descriptors handed to the module graph by its loader.

use std::path::PathBuf;

use crate::identity::ModuleId;
use crate::options::ModuleOptions;

/// The originating source-file object of a module.
///
/// Held by an unresolved module only; dropped once the module resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Everything needed to instantiate a source-backed module.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub id: ModuleId,
    pub dest: Option<PathBuf>,
    pub file: Option<SourceFile>,
    pub options: ModuleOptions,
}

impl SourceDescriptor {
    pub fn new(id: ModuleId) -> Self {
        Self {
            id,
            dest: None,
            file: None,
            options: ModuleOptions::default(),
        }
    }

    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn with_file(mut self, file: SourceFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_options(mut self, options: ModuleOptions) -> Self {
        self.options = options;
        self
    }
}
