pub mod loader;
pub mod ops_build;
pub mod ops_order;
pub mod ops_tree;

use std::path::Path;

use packer_core::manifest::Manifest;
use packer_core::MANIFEST_FILE;
use packer_util::errors::PackerResult;

/// Load `Packer.toml` from a project root.
pub fn load_manifest(project_root: &Path) -> PackerResult<Manifest> {
    let path = project_root.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(packer_util::errors::PackerError::Manifest {
            message: format!("Could not find {MANIFEST_FILE} in {}", project_root.display()),
        }
        .into());
    }
    Manifest::from_path(&path)
}
