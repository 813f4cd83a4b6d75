//! Handler for `packer order`.

use miette::Result;

use packer_ops::ops_order::{self, OrderOptions};

pub fn exec(entry: Option<String>, json: bool) -> Result<()> {
    let project_root = super::project_root()?;
    let opts = OrderOptions { entry, json };
    ops_order::order(&project_root, &opts)
}
