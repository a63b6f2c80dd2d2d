//! Error types for the site engine

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Dataset error in {file}: {message}")]
    Dataset { file: String, message: String },

    /// A blog post failed frontmatter validation; every problem is listed
    #[error("Invalid content in {}: {}", path.display(), problems.join("; "))]
    Content { path: PathBuf, problems: Vec<String> },

    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
