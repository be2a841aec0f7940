//! Error types for chip table and spec generation operations.

use std::path::PathBuf;

/// Errors that can occur while loading chip tables or writing spec files.
#[derive(Debug, thiserror::Error)]
pub enum ChipDataError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading a table or writing a generated file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Table file not found.
    #[error("chip table not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

impl ChipDataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for chip data operations.
pub type Result<T> = std::result::Result<T, ChipDataError>;
