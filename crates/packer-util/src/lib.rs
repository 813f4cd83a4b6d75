//! Shared utilities for the Packer bundler.
//!
//! This crate provides cross-cutting concerns used by all other Packer crates:
//! error types, path helpers, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
