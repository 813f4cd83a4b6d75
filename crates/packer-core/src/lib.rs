//! Core data types for the Packer bundler.
//!
//! This crate defines the plain types the module graph is built from:
//! canonical module identities, per-module options, source descriptors,
//! MIME lookup, and the `Packer.toml` manifest.
//!
//! This crate is intentionally free of graph logic and of file contents I/O.

/// Name of the manifest file looked up by the CLI.
pub const MANIFEST_FILE: &str = "Packer.toml";

pub mod identity;
pub mod manifest;
pub mod mime;
pub mod options;
pub mod source;
