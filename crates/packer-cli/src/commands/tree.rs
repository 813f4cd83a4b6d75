//! Handler for `packer tree`.

use miette::Result;

use packer_ops::ops_tree::{self, TreeOptions};

pub fn exec(entry: Option<String>, depth: Option<u32>, files: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let opts = TreeOptions {
        entry,
        depth: depth.map(|d| d as usize),
        files,
    };
    ops_tree::tree(&project_root, &opts)
}
