//! The module arena: every module of a build, indexed by source identity.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use packer_core::identity::{resolve_path_in_config, ModuleId};
use packer_core::mime::{MimeTable, DEFAULT_MIME};
use packer_core::options::ModuleOptions;
use packer_core::source::SourceDescriptor;
use petgraph::graph::DiGraph;
use tracing::{debug, trace, warn};

use crate::module::{Module, ModuleHandle};
use crate::relation::Relation;
use crate::tracker::FileDependencies;

/// Owns all modules and the relation edges between them.
///
/// Modules are addressed by [`ModuleHandle`]; edges are non-owning and never
/// keep a module alive on their own. Modules are never removed, so handles
/// stay valid for the lifetime of the graph.
pub struct ModuleGraph {
    pub(crate) graph: DiGraph<Module, Relation>,
    index: HashMap<ModuleId, ModuleHandle>,
    pub(crate) file_deps: FileDependencies,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            file_deps: FileDependencies::new(),
        }
    }

    /// Instantiate a source-backed module and queue its configured relations.
    ///
    /// If a module already exists for the descriptor's identity, that module's
    /// handle is returned and the descriptor is ignored.
    pub fn add_module(&mut self, descriptor: SourceDescriptor) -> ModuleHandle {
        if let Some(&existing) = self.index.get(&descriptor.id) {
            trace!(module = %descriptor.id, "module already instantiated");
            return existing;
        }
        let SourceDescriptor {
            id,
            dest,
            file,
            options,
        } = descriptor;
        let module = Module::new(Some(id.clone()), dest, options.mime.clone(), file);
        let handle = self.graph.add_node(module);
        self.index.insert(id.clone(), handle);
        debug!(module = %id, "created module");
        self.queue_relations(handle, &options);
        handle
    }

    /// Instantiate a synthetic module with no source identity.
    ///
    /// Its `./`-relative config paths resolve against the project root.
    pub fn add_virtual_module(
        &mut self,
        dest: Option<PathBuf>,
        options: &ModuleOptions,
    ) -> ModuleHandle {
        let module = Module::new(None, dest, options.mime.clone(), None);
        let handle = self.graph.add_node(module);
        debug!(module = %self.graph[handle], "created virtual module");
        self.queue_relations(handle, options);
        handle
    }

    /// Turn configured paths into pending declarations whose callbacks build
    /// the relation edges. Includes are queued first, then imports, then
    /// excludes.
    fn queue_relations(&mut self, handle: ModuleHandle, options: &ModuleOptions) {
        let base = self.graph[handle].src().cloned();

        for path in &options.includes {
            let target = resolve_path_in_config(base.as_ref(), path);
            self.declare_dependency(handle, Some(target), |graph, owner, target| {
                let Some(target) = target else { return };
                if !graph.try_include(owner, target) {
                    warn!(
                        module = %graph.graph[owner],
                        target = %graph.graph[target],
                        "skipping include that would form a cycle"
                    );
                }
            });
        }
        for path in &options.imports {
            let target = resolve_path_in_config(base.as_ref(), path);
            self.declare_dependency(handle, Some(target), |graph, owner, target| {
                if let Some(target) = target {
                    graph.add_import(owner, target);
                }
            });
        }
        for path in &options.excludes {
            let target = resolve_path_in_config(base.as_ref(), path);
            self.declare_dependency(handle, Some(target), |graph, owner, target| {
                if let Some(target) = target {
                    graph.add_exclude(owner, target);
                }
            });
        }
    }

    /// Look up a module by source identity.
    pub fn find(&self, id: &ModuleId) -> Option<ModuleHandle> {
        self.index.get(id).copied()
    }

    pub fn module(&self, handle: ModuleHandle) -> &Module {
        &self.graph[handle]
    }

    /// All module handles in creation order.
    pub fn modules(&self) -> impl Iterator<Item = ModuleHandle> + '_ {
        self.graph.node_indices()
    }

    /// File dependencies recorded while building relation edges.
    pub fn file_dependencies(&self) -> &FileDependencies {
        &self.file_deps
    }

    /// MIME type of a module's output.
    ///
    /// The module's own override wins; otherwise the destination extension
    /// (falling back to the source extension) is looked up in `table`.
    pub fn mime_type(&self, handle: ModuleHandle, table: &MimeTable) -> String {
        let module = &self.graph[handle];
        if let Some(mime) = module.mime_override() {
            return mime.to_string();
        }
        let extension = module
            .dest()
            .and_then(|d| d.extension())
            .and_then(|e| e.to_str())
            .map(str::to_string)
            .or_else(|| module.src().and_then(|s| s.extension()));
        match extension {
            Some(ext) => table.lookup(&ext).to_string(),
            None => DEFAULT_MIME.to_string(),
        }
    }

    /// Print a module's relation edges as a tree.
    ///
    /// Each child is tagged with the relation that reaches it. A module that
    /// is already on the current path is printed but not expanded again.
    pub fn print_tree(&self, root: ModuleHandle, max_depth: Option<usize>) -> String {
        let mut output = format!("{}\n", self.graph[root]);
        let mut visited = HashSet::new();
        visited.insert(root);

        let children = self.children(root);
        let count = children.len();
        for (i, (relation, child)) in children.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                &mut output,
                child,
                relation,
                "",
                is_last,
                1,
                max_depth,
                &mut visited,
            );
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: ModuleHandle,
        relation: Relation,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<ModuleHandle>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}[{relation}] {node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = self.children(idx);
        let count = children.len();
        for (i, (relation, child)) in children.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                child,
                relation,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    fn children(&self, idx: ModuleHandle) -> Vec<(Relation, ModuleHandle)> {
        [Relation::Include, Relation::Import, Relation::Exclude]
            .into_iter()
            .flat_map(|relation| {
                self.related(idx, relation)
                    .into_iter()
                    .map(move |child| (relation, child))
            })
            .collect()
    }

    /// Number of modules, synthetic ones included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}
