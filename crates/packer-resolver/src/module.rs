//! The module entity and its lifecycle state.

use std::fmt;
use std::path::{Path, PathBuf};

use packer_core::identity::ModuleId;
use packer_core::source::SourceFile;
use petgraph::graph::NodeIndex;

use crate::registry::Declaration;

/// Stable handle of a module inside a [`ModuleGraph`](crate::ModuleGraph).
pub type ModuleHandle = NodeIndex;

/// Lifecycle state. The transition is one-way.
pub(crate) enum ModuleState {
    Unresolved {
        declarations: Vec<Declaration>,
        file: Option<SourceFile>,
    },
    Resolved,
}

/// A single bundlable unit.
///
/// Relation edges live in the owning graph, not here; a module only carries
/// its identity and whatever it needs until it is resolved.
pub struct Module {
    src: Option<ModuleId>,
    dest: Option<PathBuf>,
    mime: Option<String>,
    pub(crate) state: ModuleState,
}

impl Module {
    pub(crate) fn new(
        src: Option<ModuleId>,
        dest: Option<PathBuf>,
        mime: Option<String>,
        file: Option<SourceFile>,
    ) -> Self {
        Self {
            src,
            dest,
            mime,
            state: ModuleState::Unresolved {
                declarations: Vec::new(),
                file,
            },
        }
    }

    /// Source identity; `None` for synthetic modules.
    pub fn src(&self) -> Option<&ModuleId> {
        self.src.as_ref()
    }

    pub fn dest(&self) -> Option<&Path> {
        self.dest.as_deref()
    }

    /// MIME type override from the module's options.
    pub fn mime_override(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ModuleState::Resolved)
    }

    /// The originating source file, only available before resolution.
    pub fn source_file(&self) -> Option<&SourceFile> {
        match &self.state {
            ModuleState::Unresolved { file, .. } => file.as_ref(),
            ModuleState::Resolved => None,
        }
    }

    /// Number of declarations still waiting for resolution.
    pub fn pending_declarations(&self) -> usize {
        match &self.state {
            ModuleState::Unresolved { declarations, .. } => declarations.len(),
            ModuleState::Resolved => 0,
        }
    }

    /// Identities of every declared target, in declaration order.
    pub(crate) fn declared_targets(&self) -> Vec<ModuleId> {
        match &self.state {
            ModuleState::Unresolved { declarations, .. } => declarations
                .iter()
                .filter_map(|d| d.target.clone())
                .collect(),
            ModuleState::Resolved => Vec::new(),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.src, &self.dest) {
            (Some(src), _) => write!(f, "{src}"),
            (None, Some(dest)) => write!(f, "{} (virtual)", dest.display()),
            (None, None) => write!(f, "<virtual>"),
        }
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("src", &self.src)
            .field("dest", &self.dest)
            .field("resolved", &self.is_resolved())
            .field("pending", &self.pending_declarations())
            .finish()
    }
}
