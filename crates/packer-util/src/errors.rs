use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Packer operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PackerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Packer.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Packer.toml for syntax errors"))]
    Manifest { message: String },

    /// Module resolution failed (unknown entry module, etc.).
    #[error("Module resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PackerResult<T> = miette::Result<T>;
