//! Command dispatch and handler modules.

mod order;
mod tree;

use std::path::PathBuf;

use miette::Result;
use tracing::debug;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Order { entry, json } => order::exec(entry, json),
        Command::Tree {
            entry,
            depth,
            files,
        } => tree::exec(entry, depth, files),
    }
}

/// Directory holding `Packer.toml`: the current directory or its nearest
/// ancestor with one.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(packer_util::errors::PackerError::Io)?;
    let root = packer_util::fs::find_ancestor_with(&cwd, packer_core::MANIFEST_FILE).unwrap_or(cwd);
    debug!(root = %root.display(), "project root");
    Ok(root)
}
