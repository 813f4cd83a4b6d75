//! One-shot resolution of a module's pending declarations.

use std::mem;

use tracing::{debug, warn};

use crate::graph::ModuleGraph;
use crate::module::{ModuleHandle, ModuleState};

impl ModuleGraph {
    /// Resolve `handle`: resolve every declared target first, then fire each
    /// declaration's callback in declaration order.
    ///
    /// The module is marked resolved before recursing, so a dependency cycle
    /// reaching back here is a no-op. Callbacks on such a back-edge observe
    /// whatever edges the peer has accumulated so far. Targets without a
    /// module (never ensured, or not loadable) reach their callback as `None`.
    ///
    /// Calling this on an already-resolved module does nothing.
    pub fn resolve(&mut self, handle: ModuleHandle) {
        let declarations = match mem::replace(&mut self.graph[handle].state, ModuleState::Resolved)
        {
            ModuleState::Resolved => return,
            ModuleState::Unresolved { declarations, .. } => declarations,
        };
        debug!(
            module = %self.graph[handle],
            declarations = declarations.len(),
            "resolving module"
        );

        for declaration in declarations {
            let target = match &declaration.target {
                Some(id) => match self.find(id) {
                    Some(target) => {
                        self.resolve(target);
                        Some(target)
                    }
                    None => {
                        warn!(
                            module = %self.graph[handle],
                            target = %id,
                            "dependency not found"
                        );
                        None
                    }
                },
                None => None,
            };
            (declaration.on_resolved)(self, handle, target);
        }
    }

    /// Resolve every module that is not resolved yet, in creation order.
    pub fn resolve_all(&mut self) {
        let handles: Vec<ModuleHandle> = self.modules().collect();
        for handle in handles {
            self.resolve(handle);
        }
    }

    pub fn is_resolved(&self, handle: ModuleHandle) -> bool {
        self.graph[handle].is_resolved()
    }
}
