//! File-level dependency records for build-cache invalidation.

use std::fmt;

use packer_core::identity::ModuleId;

/// Which relation produced a file dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyTag {
    Include,
    Import,
    Exclude,
}

impl DependencyTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyTag::Include => "include",
            DependencyTag::Import => "import",
            DependencyTag::Exclude => "exclude",
        }
    }
}

impl fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `from -> to` dependency between source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDependency {
    pub from: ModuleId,
    pub to: ModuleId,
    pub tag: DependencyTag,
}

impl fmt::Display for FileDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.tag)
    }
}

/// Insertion-ordered log of file dependencies.
#[derive(Debug, Default)]
pub struct FileDependencies {
    records: Vec<FileDependency>,
}

impl FileDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, from: &ModuleId, to: &ModuleId, tag: DependencyTag) {
        self.records.push(FileDependency {
            from: from.clone(),
            to: to.clone(),
            tag,
        });
    }

    /// Dependencies recorded for the file `from`.
    pub fn of<'a>(&'a self, from: &'a ModuleId) -> impl Iterator<Item = &'a FileDependency> + 'a {
        self.records.iter().filter(move |r| &r.from == from)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileDependency> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
