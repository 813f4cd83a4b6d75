//! Include/import/exclude edges between modules.

use std::fmt;

use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::trace;

use crate::graph::ModuleGraph;
use crate::module::ModuleHandle;
use crate::tracker::DependencyTag;

/// Edge label in the module graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The owner's output embeds the target's output. Never cyclic.
    Include,
    /// The owner's output loads after the target's output. May be cyclic.
    Import,
    /// The target and its import closure are left out of the owner's bundle.
    Exclude,
}

impl Relation {
    pub fn tag(self) -> DependencyTag {
        match self {
            Relation::Include => DependencyTag::Include,
            Relation::Import => DependencyTag::Import,
            Relation::Exclude => DependencyTag::Exclude,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().as_str())
    }
}

impl ModuleGraph {
    /// Add an include edge unless `module` already (transitively) includes
    /// `owner`. Returns whether the edge was added.
    pub fn try_include(&mut self, owner: ModuleHandle, module: ModuleHandle) -> bool {
        if self.has_include(module, owner) {
            return false;
        }
        self.push_edge(owner, module, Relation::Include);
        true
    }

    /// Whether `needle` is `module` itself or reachable from it through
    /// include edges.
    pub fn has_include(&self, module: ModuleHandle, needle: ModuleHandle) -> bool {
        module == needle
            || self
                .includes(module)
                .into_iter()
                .any(|child| self.has_include(child, needle))
    }

    /// Add an import edge. Self-imports are dropped; cycles are allowed.
    pub fn add_import(&mut self, owner: ModuleHandle, module: ModuleHandle) {
        if owner != module {
            self.push_edge(owner, module, Relation::Import);
        }
    }

    /// Add an exclude edge. Self-excludes are dropped; cycles are allowed.
    pub fn add_exclude(&mut self, owner: ModuleHandle, module: ModuleHandle) {
        if owner != module {
            self.push_edge(owner, module, Relation::Exclude);
        }
    }

    pub fn includes(&self, handle: ModuleHandle) -> Vec<ModuleHandle> {
        self.related(handle, Relation::Include)
    }

    pub fn imports(&self, handle: ModuleHandle) -> Vec<ModuleHandle> {
        self.related(handle, Relation::Import)
    }

    pub fn excludes(&self, handle: ModuleHandle) -> Vec<ModuleHandle> {
        self.related(handle, Relation::Exclude)
    }

    /// Targets of `handle`'s edges of one kind, in insertion order.
    pub fn related(&self, handle: ModuleHandle, relation: Relation) -> Vec<ModuleHandle> {
        // petgraph yields outgoing edges newest first; edge indices grow
        // monotonically since edges are never removed.
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(handle, Direction::Outgoing)
            .filter(|e| *e.weight() == relation)
            .map(|e| (e.id(), e.target()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    fn push_edge(&mut self, owner: ModuleHandle, module: ModuleHandle, relation: Relation) {
        trace!(
            from = %self.graph[owner],
            to = %self.graph[module],
            %relation,
            "adding edge"
        );
        self.graph.add_edge(owner, module, relation);
        if let (Some(from), Some(to)) = (self.graph[owner].src(), self.graph[module].src()) {
            self.file_deps.record(from, to, relation.tag());
        }
    }
}
