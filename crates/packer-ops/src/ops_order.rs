//! Operation: print the bundle order of entry modules.

use std::path::Path;

use packer_util::errors::PackerResult;
use serde::Serialize;

use crate::ops_build::{self, BuildSession};

/// Options for `packer order`.
#[derive(Default)]
pub struct OrderOptions {
    /// Only report this module (a path as written in Packer.toml).
    pub entry: Option<String>,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Bundle order of one entry module.
#[derive(Debug, Serialize)]
pub struct BundleReport {
    pub entry: String,
    pub modules: Vec<BundledModule>,
}

/// One module of a bundle, in load order.
#[derive(Debug, Serialize)]
pub struct BundledModule {
    pub src: Option<String>,
    pub dest: Option<String>,
    pub mime: String,
}

/// Resolve the project and print each entry's bundle order.
pub fn order(project_root: &Path, opts: &OrderOptions) -> PackerResult<()> {
    let manifest = crate::load_manifest(project_root)?;
    let session = ops_build::build(&manifest, project_root, opts.entry.as_deref())?;
    packer_util::progress::status(
        "Resolved",
        &format!("{} modules for {}", session.graph.len(), manifest.package.name),
    );
    print!("{}", render(&session, opts.json)?);
    Ok(())
}

/// Compute the bundle order of every entry of a session.
pub fn reports(session: &BuildSession) -> Vec<BundleReport> {
    let graph = &session.graph;
    session
        .entries
        .iter()
        .map(|&entry| BundleReport {
            entry: graph.module(entry).to_string(),
            modules: graph
                .bundle_order(entry)
                .into_iter()
                .map(|handle| {
                    let module = graph.module(handle);
                    BundledModule {
                        src: module.src().map(|s| s.to_string()),
                        dest: module.dest().map(|d| d.display().to_string()),
                        mime: graph.mime_type(handle, &session.mime),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Render bundle orders as text (one indented line per module) or JSON.
pub fn render(session: &BuildSession, json: bool) -> PackerResult<String> {
    let reports = reports(session);
    if json {
        let mut out = serde_json::to_string_pretty(&reports).map_err(|e| {
            packer_util::errors::PackerError::Generic {
                message: format!("Failed to serialize bundle order: {e}"),
            }
        })?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for report in &reports {
        out.push_str(&format!("{}\n", report.entry));
        for (i, module) in report.modules.iter().enumerate() {
            let name = module
                .src
                .as_deref()
                .or(module.dest.as_deref())
                .unwrap_or("<virtual>");
            out.push_str(&format!("  {:>3}. {name} ({})\n", i + 1, module.mime));
        }
    }
    Ok(out)
}
