//! Bundle order: dependency-first, deduplicated, exclusion-filtered.

use std::collections::HashSet;

use crate::graph::ModuleGraph;
use crate::module::ModuleHandle;

impl ModuleGraph {
    /// Post-order walk over import edges starting at `handle`.
    ///
    /// Each module is appended after everything it imports; modules already
    /// in `visited` are skipped, which also terminates import cycles.
    pub fn collect_imports(
        &self,
        handle: ModuleHandle,
        result: &mut Vec<ModuleHandle>,
        visited: &mut HashSet<ModuleHandle>,
    ) {
        if !visited.insert(handle) {
            return;
        }
        for import in self.imports(handle) {
            self.collect_imports(import, result, visited);
        }
        result.push(handle);
    }

    /// Everything `handle` excludes, transitively.
    ///
    /// Every module reached through an exclude edge contributes its whole
    /// import closure, and its own exclude edges are followed in turn.
    /// `visited` tracks exclude-reached modules; seed it with the root so the
    /// root never excludes itself, whether through an exclude cycle or an
    /// excluded module importing it back.
    pub fn collect_excluded(
        &self,
        handle: ModuleHandle,
        result: &mut Vec<ModuleHandle>,
        visited: &mut HashSet<ModuleHandle>,
    ) {
        let mut imported = visited.clone();
        self.walk_excluded(handle, result, visited, &mut imported);
    }

    fn walk_excluded(
        &self,
        handle: ModuleHandle,
        result: &mut Vec<ModuleHandle>,
        visited: &mut HashSet<ModuleHandle>,
        imported: &mut HashSet<ModuleHandle>,
    ) {
        for excluded in self.excludes(handle) {
            if !visited.insert(excluded) {
                continue;
            }
            self.collect_imports(excluded, result, imported);
            self.walk_excluded(excluded, result, visited, imported);
        }
    }

    /// Ordered module list for bundling `root`.
    ///
    /// Dependencies come before dependents, each module appears once, and
    /// anything pulled in by an exclusion is dropped. Recomputed on every
    /// call; only meaningful once `root` has been resolved.
    pub fn bundle_order(&self, root: ModuleHandle) -> Vec<ModuleHandle> {
        debug_assert!(
            self.is_resolved(root),
            "bundle order requested for unresolved module {}",
            self.module(root)
        );

        let mut imports = Vec::new();
        self.collect_imports(root, &mut imports, &mut HashSet::new());

        let mut excluded = Vec::new();
        let mut visited = HashSet::from([root]);
        self.collect_excluded(root, &mut excluded, &mut visited);

        if excluded.is_empty() {
            return imports;
        }
        let excluded: HashSet<ModuleHandle> = excluded.into_iter().collect();
        imports.retain(|m| !excluded.contains(m));
        imports
    }
}

#[cfg(test)]
mod tests {
    use packer_core::identity::ModuleId;
    use packer_core::options::ModuleOptions;
    use packer_core::source::SourceDescriptor;

    use super::*;

    /// Build and resolve a graph from `(src, imports, excludes)` triples.
    fn build(modules: Vec<(&str, Vec<&str>, Vec<&str>)>) -> (ModuleGraph, Vec<ModuleHandle>) {
        let mut g = ModuleGraph::new();
        let handles: Vec<_> = modules
            .into_iter()
            .map(|(src, imports, excludes)| {
                g.add_module(SourceDescriptor::new(ModuleId::new(src)).with_options(
                    ModuleOptions {
                        imports: imports.iter().map(|s| s.to_string()).collect(),
                        excludes: excludes.iter().map(|s| s.to_string()).collect(),
                        ..ModuleOptions::default()
                    },
                ))
            })
            .collect();
        g.resolve_all();
        (g, handles)
    }

    fn names(g: &ModuleGraph, order: &[ModuleHandle]) -> Vec<String> {
        order.iter().map(|&m| g.module(m).to_string()).collect()
    }

    #[test]
    fn dependencies_precede_dependents_without_duplicates() {
        let (g, m) = build(vec![
            ("a.js", vec!["x.js", "y.js"], vec![]),
            ("x.js", vec!["y.js"], vec![]),
            ("y.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["y.js", "x.js", "a.js"]);
    }

    #[test]
    fn import_cycle_terminates() {
        let (g, m) = build(vec![("a.js", vec!["b.js"], vec![]), ("b.js", vec!["a.js"], vec![])]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["b.js", "a.js"]);
        assert_eq!(names(&g, &g.bundle_order(m[1])), vec!["a.js", "b.js"]);
    }

    #[test]
    fn independent_branches_follow_declaration_order() {
        let (g, m) = build(vec![
            ("a.js", vec!["c.js", "b.js"], vec![]),
            ("b.js", vec![], vec![]),
            ("c.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["c.js", "b.js", "a.js"]);
    }

    #[test]
    fn exclusion_removes_import_closure() {
        let (g, m) = build(vec![
            ("a.js", vec!["b.js", "d.js"], vec!["b.js"]),
            ("b.js", vec!["c.js"], vec![]),
            ("c.js", vec![], vec![]),
            ("d.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["d.js", "a.js"]);
    }

    #[test]
    fn exclusion_follows_excludes_of_excluded() {
        let (g, m) = build(vec![
            ("a.js", vec!["b.js", "c.js", "d.js"], vec!["vendor.js"]),
            ("vendor.js", vec!["b.js"], vec!["polyfill.js"]),
            ("polyfill.js", vec!["c.js"], vec![]),
            ("b.js", vec![], vec![]),
            ("c.js", vec![], vec![]),
            ("d.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["d.js", "a.js"]);
    }

    #[test]
    fn exclude_cycle_back_to_root_terminates() {
        let (g, m) = build(vec![
            ("a.js", vec!["c.js"], vec!["b.js"]),
            ("b.js", vec![], vec!["a.js"]),
            ("c.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["c.js", "a.js"]);
    }

    #[test]
    fn excluded_module_importing_root_keeps_root() {
        let (g, m) = build(vec![
            ("a.js", vec!["c.js"], vec!["b.js"]),
            ("b.js", vec!["a.js"], vec![]),
            ("c.js", vec![], vec![]),
        ]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["c.js", "a.js"]);

        let mut excluded = Vec::new();
        g.collect_excluded(m[0], &mut excluded, &mut HashSet::from([m[0]]));
        assert_eq!(names(&g, &excluded), vec!["b.js"]);
    }

    #[test]
    fn collect_excluded_reports_closure() {
        let (g, m) = build(vec![
            ("a.js", vec![], vec!["b.js"]),
            ("b.js", vec!["c.js"], vec![]),
            ("c.js", vec![], vec![]),
        ]);
        let mut excluded = Vec::new();
        g.collect_excluded(m[0], &mut excluded, &mut HashSet::from([m[0]]));
        assert_eq!(names(&g, &excluded), vec!["c.js", "b.js"]);
    }

    #[test]
    fn order_is_recomputed_per_call() {
        let (mut g, m) = build(vec![("a.js", vec![], vec![]), ("b.js", vec![], vec![])]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["a.js"]);
        g.add_import(m[0], m[1]);
        assert_eq!(names(&g, &g.bundle_order(m[0])), vec!["b.js", "a.js"]);
    }
}
