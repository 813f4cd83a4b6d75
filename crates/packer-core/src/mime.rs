//! MIME type lookup by file extension.

use std::collections::BTreeMap;

/// Fallback for unknown extensions.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Built-in MIME type for a file extension (case-insensitive, no leading dot).
pub fn mime_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "js" | "mjs" | "cjs" => "application/javascript",
        "json" | "map" => "application/json",
        "css" => "text/css",
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",
        "wasm" => "application/wasm",
        _ => DEFAULT_MIME,
    }
}

/// Built-in table with manifest-level overrides layered on top.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    overrides: BTreeMap<String, String>,
}

impl MimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut table = Self::new();
        for (ext, mime) in overrides {
            table.set(ext, mime);
        }
        table
    }

    /// Override the MIME type of one extension.
    pub fn set(&mut self, extension: &str, mime: &str) {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.overrides.insert(ext, mime.to_string());
    }

    pub fn lookup(&self, extension: &str) -> &str {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match self.overrides.get(&ext) {
            Some(mime) => mime.as_str(),
            None => mime_type(&ext),
        }
    }
}
