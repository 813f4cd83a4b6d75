//! Pending dependency declarations and the ensure pass.

use std::fmt;

use packer_core::identity::ModuleId;
use packer_core::source::SourceDescriptor;
use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::graph::ModuleGraph;
use crate::module::{ModuleHandle, ModuleState};

/// Callback fired once a declaration's target is resolved.
///
/// Arguments are the graph, the declaring module and the resolved target
/// (`None` when the declaration had no target or it could not be located).
pub type OnResolved = Box<dyn FnOnce(&mut ModuleGraph, ModuleHandle, Option<ModuleHandle>)>;

/// A target identity waiting for resolution plus what to do with it.
pub struct Declaration {
    pub(crate) target: Option<ModuleId>,
    pub(crate) on_resolved: OnResolved,
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Instantiates modules on demand for the ensure pass.
pub trait SourceLoader {
    /// Describe the module for `id`, or `None` if it cannot be located.
    fn load(&self, id: &ModuleId) -> Option<SourceDescriptor>;
}

impl<F> SourceLoader for F
where
    F: Fn(&ModuleId) -> Option<SourceDescriptor>,
{
    fn load(&self, id: &ModuleId) -> Option<SourceDescriptor> {
        self(id)
    }
}

impl ModuleGraph {
    /// Queue a dependency of `handle` on `target`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is already resolved: declaring after resolution is a
    /// lifecycle bug in the caller.
    pub fn declare_dependency<F>(
        &mut self,
        handle: ModuleHandle,
        target: Option<ModuleId>,
        on_resolved: F,
    ) where
        F: FnOnce(&mut ModuleGraph, ModuleHandle, Option<ModuleHandle>) + 'static,
    {
        let module = &mut self.graph[handle];
        let label = module.to_string();
        match &mut module.state {
            ModuleState::Unresolved { declarations, .. } => {
                trace!(module = %label, ?target, "declared dependency");
                declarations.push(Declaration {
                    target,
                    on_resolved: Box::new(on_resolved),
                });
            }
            ModuleState::Resolved => {
                panic!("cannot declare a dependency of {label} after it has been resolved")
            }
        }
    }

    /// Make sure a module exists for `id`, loading it if needed.
    ///
    /// Returns `None` if the loader cannot locate `id`. Never resolves
    /// anything and never fires callbacks.
    pub fn ensure_file(
        &mut self,
        id: &ModuleId,
        loader: &dyn SourceLoader,
    ) -> Option<ModuleHandle> {
        if let Some(handle) = self.find(id) {
            return Some(handle);
        }
        match loader.load(id) {
            Some(descriptor) => Some(self.add_module(descriptor)),
            None => {
                debug!(module = %id, "cannot locate module");
                None
            }
        }
    }

    /// Ensure every target declared by `handle` is instantiated.
    ///
    /// Returns the number of modules created. A no-op once `handle` is
    /// resolved, and safe to repeat before that.
    pub fn ensure(&mut self, handle: ModuleHandle, loader: &dyn SourceLoader) -> usize {
        let before = self.len();
        for target in self.graph[handle].declared_targets() {
            self.ensure_file(&target, loader);
        }
        self.len() - before
    }

    /// Run [`ensure`](Self::ensure) over every module, including the ones it
    /// creates, until no new module appears.
    pub fn ensure_all(&mut self, loader: &dyn SourceLoader) -> usize {
        let before = self.len();
        let mut next = 0;
        while next < self.len() {
            self.ensure(NodeIndex::new(next), loader);
            next += 1;
        }
        let created = self.len() - before;
        debug!(created, total = self.len(), "ensure pass complete");
        created
    }
}
