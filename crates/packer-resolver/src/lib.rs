//! Module graph engine for the Packer bundler.
//!
//! Modules queue dependency declarations when constructed, get their targets
//! instantiated by an ensure pass, resolve exactly once (populating their
//! include/import/exclude edges), and finally yield a deduplicated,
//! dependency-first bundle order.

pub mod graph;
pub mod module;
pub mod order;
pub mod registry;
pub mod relation;
pub mod resolver;
pub mod tracker;

pub use graph::ModuleGraph;
pub use module::{Module, ModuleHandle};
pub use registry::SourceLoader;
pub use relation::Relation;
pub use tracker::{DependencyTag, FileDependencies, FileDependency};
