//! Error types for project analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, extracting, or composing a project.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// A source file could not be parsed into a syntax tree.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// No package manifest with a usable package was found under the root.
    #[error("no packages found in {}", root.display())]
    NoPackages { root: PathBuf },

    /// The requested file path is absent from the supplied project info.
    #[error("file info not found for path: {}", path.display())]
    FileInfoNotFound { path: PathBuf },

    /// IO error during project traversal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias used throughout the crate.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
