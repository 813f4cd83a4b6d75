//! Operation: display the relation tree of entry modules.

use std::path::Path;

use packer_util::errors::PackerResult;

use crate::ops_build::{self, BuildSession};

/// Options for `packer tree`.
#[derive(Default)]
pub struct TreeOptions {
    /// Only show this module's tree.
    pub entry: Option<String>,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// List recorded file dependencies instead of the tree.
    pub files: bool,
}

/// Display relation trees for the project.
pub fn tree(project_root: &Path, opts: &TreeOptions) -> PackerResult<()> {
    let manifest = crate::load_manifest(project_root)?;
    let session = ops_build::build(&manifest, project_root, opts.entry.as_deref())?;
    if opts.files {
        print!("{}", render_file_dependencies(&session));
    } else {
        print!("{}", render(&session, opts.depth));
    }
    Ok(())
}

pub fn render(session: &BuildSession, depth: Option<usize>) -> String {
    session
        .entries
        .iter()
        .map(|&entry| session.graph.print_tree(entry, depth))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_file_dependencies(session: &BuildSession) -> String {
    let deps = session.graph.file_dependencies();
    if deps.is_empty() {
        return "No file dependencies.\n".to_string();
    }
    let mut out = String::new();
    for dep in deps.iter() {
        out.push_str(&format!("{dep}\n"));
    }
    out
}
